//! Static marketing sections of the landing page.

use crawlic::content::{
    COPYRIGHT, FEATURES, FOOTER_COLUMNS, HERO_BADGE, HERO_BLURB, HERO_TITLE, NAV_LINKS, PLANS,
    PRODUCT_NAME, TAGLINE,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub docs_url: AttrValue,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="nav">
            <div class="container nav-inner">
                <div class="brand">
                    <span class="brand-mark">{ "</>" }</span>
                    <span class="brand-name">{ PRODUCT_NAME }</span>
                </div>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href}>{ link.label }</a>
                    })}
                    <a href={props.docs_url.clone()} class="button primary small">{ "API Docs" }</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="section hero">
            <div class="hero-badge">{ HERO_BADGE }</div>
            <h1 class="hero-title">
                { HERO_TITLE[0] }
                <br />
                { HERO_TITLE[1] }
            </h1>
            <p class="hero-blurb">{ HERO_BLURB }</p>
            <div class="hero-actions">
                <a href="#playground" class="button primary large">{ "Try Live Demo \u{2192}" }</a>
                <a href="#get-key" class="button secondary large">{ "Get API Key" }</a>
            </div>
        </section>
    }
}

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    html! {
        <section id="features" class="section">
            <h2 class="section-title">{ format!("Why {}?", PRODUCT_NAME) }</h2>
            <div class="grid three">
                { for FEATURES.iter().map(|feature| html! {
                    <div class={classes!("card", "feature", feature.accent.class())}>
                        <div class="icon icon-large">{ feature.icon }</div>
                        <h3>{ feature.title }</h3>
                        <p class="muted">{ feature.blurb }</p>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component(PricingGrid)]
pub fn pricing_grid() -> Html {
    html! {
        <section id="pricing" class="section">
            <h2 class="section-title">{ "Simple Pricing" }</h2>
            <div class="grid three">
                { for PLANS.iter().map(|plan| html! {
                    <div class={classes!("card", "plan", plan.popular.then_some("popular"))}>
                        if plan.popular {
                            <div class="plan-ribbon">{ "Most Popular" }</div>
                        }
                        <h3>{ plan.name }</h3>
                        <div class="plan-price">{ plan.price }</div>
                        <div class="plan-allowance">{ plan.allowance() }</div>
                        <ul class="plan-features">
                            { for plan.features.iter().map(|f| html! {
                                <li><span class="check">{ "\u{2713}" }</span>{ *f }</li>
                            })}
                        </ul>
                        <button class={classes!("button", "wide", if plan.popular { "primary" } else { "secondary" })}>
                            { "Get Started" }
                        </button>
                    </div>
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub build: AttrValue,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <div class="grid four">
                    <div>
                        <div class="brand">
                            <span class="brand-mark">{ "</>" }</span>
                            <span class="brand-name">{ PRODUCT_NAME }</span>
                        </div>
                        <p class="muted small">{ TAGLINE }</p>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div>
                            <h4>{ column.heading }</h4>
                            <ul class="footer-links">
                                { for column.links.iter().map(|link| html! {
                                    <li><a href={link.href}>{ link.label }</a></li>
                                })}
                            </ul>
                        </div>
                    })}
                </div>
                <div class="footer-bottom">
                    <p class="muted small">{ COPYRIGHT }</p>
                    <span class="footer-build">{ props.build.clone() }</span>
                </div>
            </div>
        </footer>
    }
}

//! Main application component.
//!
//! The [`Session`] lives in a `RefCell` for the lifetime of the page. Handlers
//! mutate it synchronously, so a second click on a request button is refused
//! by the session even before the disabled state has been re-rendered. Async
//! completions write back through the same cell and then force a redraw.

use std::cell::RefCell;
use std::rc::Rc;

use crawlic::content::FREE_TIER_NOTE;
use crawlic::{ClientConfig, Endpoint, Session, SessionError, send};
use gloo::dialogs::alert;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{EndpointPicker, RegistrationCard, ResponsePanel, TextField, button_label};
use crate::sections::{FeatureGrid, Hero, NavBar, PricingGrid, SiteFooter};
use crate::transport::FetchTransport;

/// API configuration baked in at compile time.
pub fn api_config() -> ClientConfig {
    match option_env!("CRAWLIC_API_BASE") {
        Some(base) if !base.is_empty() => ClientConfig::new(base),
        _ => ClientConfig::default(),
    }
}

fn build_stamp() -> String {
    format!(
        "Build: {}@{} {}",
        env!("BUILD_HOST"),
        env!("BUILD_COMMIT"),
        env!("BUILD_TIMESTAMP")
    )
}

/// Surface a rejected start. `Busy` is silent: the button is already disabled.
fn report_refusal(err: SessionError) {
    match err {
        SessionError::Busy => log::debug!("ignored trigger while a request is in flight"),
        other => alert(&other.to_string()),
    }
}

/// Callback that writes an input's text into one session field.
fn field_setter(
    session: &Rc<RefCell<Session>>,
    redraw: &UseForceUpdateHandle,
    apply: fn(&mut Session, String),
) -> Callback<String> {
    let session = session.clone();
    let redraw = redraw.clone();
    Callback::from(move |value: String| {
        apply(&mut session.borrow_mut(), value);
        redraw.force_update();
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_mut_ref(Session::new);
    let redraw = use_force_update();
    let config = use_memo((), |_| api_config());

    let on_api_key = field_setter(&session, &redraw, |s, v| s.api_key = v);
    let on_target_url = field_setter(&session, &redraw, |s, v| s.target_url = v);
    let on_name = field_setter(&session, &redraw, |s, v| s.name = v);
    let on_email = field_setter(&session, &redraw, |s, v| s.email = v);

    let on_select = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |endpoint: Endpoint| {
            session.borrow_mut().select_endpoint(endpoint);
            redraw.force_update();
        })
    };

    let on_test = {
        let session = session.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        Callback::from(move |_: MouseEvent| {
            let begun = session.borrow_mut().begin_test(&config);
            let pending = match begun {
                Ok(pending) => pending,
                Err(e) => return report_refusal(e),
            };
            redraw.force_update();

            let session = session.clone();
            let redraw = redraw.clone();
            let transport = FetchTransport::new(&config);
            spawn_local(async move {
                let outcome = send(&transport, &pending.request).await;
                session.borrow_mut().finish_test(pending.ticket, outcome);
                redraw.force_update();
            });
        })
    };

    let on_register = {
        let session = session.clone();
        let redraw = redraw.clone();
        let config = config.clone();
        Callback::from(move |_: ()| {
            let begun = session.borrow_mut().begin_registration(&config);
            let pending = match begun {
                Ok(pending) => pending,
                Err(e) => return report_refusal(e),
            };
            redraw.force_update();

            let session = session.clone();
            let redraw = redraw.clone();
            let transport = FetchTransport::new(&config);
            spawn_local(async move {
                let outcome = send(&transport, &pending.request).await;
                let notice = session.borrow_mut().finish_registration(pending.ticket, outcome);
                redraw.force_update();
                if let Some(message) = notice.message() {
                    alert(&message);
                }
            });
        })
    };

    let view = session.borrow().clone();
    let loading = view.loading();

    html! {
        <div class="app">
            <NavBar docs_url={config.docs_url()} />
            <Hero />
            <FeatureGrid />

            <RegistrationCard
                name={view.name.clone()}
                email={view.email.clone()}
                loading={loading}
                free_tier_note={FREE_TIER_NOTE}
                on_name={on_name}
                on_email={on_email}
                on_submit={on_register}
            />

            <section id="playground" class="section">
                <h2 class="section-title">{ "Interactive Playground" }</h2>
                <p class="section-subtitle">{ "Test all endpoints right here in your browser" }</p>

                <div class="grid two">
                    <div class="stack">
                        <div class="card">
                            <label class="field-label">{ "API Key" }</label>
                            <TextField
                                value={view.api_key.clone()}
                                placeholder="Bearer your_api_key_here"
                                mono={true}
                                on_change={on_api_key}
                            />
                        </div>

                        <EndpointPicker selected={view.endpoint} on_select={on_select} />

                        <div class="card">
                            <label class="field-label">{ "Target URL" }</label>
                            <TextField
                                value={view.target_url.clone()}
                                input_type="url"
                                placeholder="https://example.com"
                                on_change={on_target_url}
                            />
                        </div>

                        <button class="button gradient wide large" onclick={on_test} disabled={loading}>
                            <span class="icon">{ "\u{25B6}" }</span>
                            { button_label(loading, "Test Endpoint", "Testing...") }
                        </button>
                    </div>

                    <ResponsePanel result={view.result().cloned()} />
                </div>
            </section>

            <PricingGrid />
            <SiteFooter build={build_stamp()} />
        </div>
    }
}

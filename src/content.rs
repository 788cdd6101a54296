//! Static copy for the landing page.

pub const PRODUCT_NAME: &str = "Crawlic";
pub const TAGLINE: &str = "Intelligent web scraping made simple";
pub const HERO_BADGE: &str = "\u{2728} Intelligent Web Scraping API";
pub const HERO_TITLE: [&str; 2] = ["Extract Web Data", "with AI Power"];
pub const HERO_BLURB: &str = "Simple REST API for web scraping, content extraction, and \
    AI-powered analysis. No complex setup, just clean JSON responses.";
pub const FREE_TIER_NOTE: &str = "Free tier includes 1,000 requests per month";
pub const COPYRIGHT: &str = "\u{00A9} 2025 Crawlic. All rights reserved.";

/// Accent colour family used for a card's icon and hover border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Pink,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
            Accent::Pink => "accent-pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub accent: Accent,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "\u{26A1}",
        title: "Lightning Fast",
        blurb: "Built on SeleniumBase for reliable, JavaScript-rendered content extraction",
        accent: Accent::Blue,
    },
    Feature {
        icon: "\u{1F441}",
        title: "AI-Powered",
        blurb: "Get intelligent summaries and page classification using advanced AI",
        accent: Accent::Purple,
    },
    Feature {
        icon: "\u{1F6E1}",
        title: "Secure & Reliable",
        blurb: "API key authentication, rate limiting, and 99.9% uptime guarantee",
        accent: Accent::Pink,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    /// Monthly request allowance as displayed.
    pub requests: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    pub fn allowance(&self) -> String {
        format!("{} requests/month", self.requests)
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Free",
        price: "$0",
        requests: "1,000",
        features: &["Basic endpoints", "API documentation", "Community support"],
        popular: false,
    },
    Plan {
        name: "Pro",
        price: "$29",
        requests: "50,000",
        features: &[
            "All endpoints",
            "Priority support",
            "Custom domains",
            "Advanced analytics",
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        requests: "Unlimited",
        features: &[
            "Dedicated instance",
            "24/7 support",
            "SLA guarantee",
            "Custom integrations",
        ],
        popular: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// In-page anchors in the navigation bar. The docs link is appended from config.
pub const NAV_LINKS: [Link; 3] = [
    Link { label: "Features", href: "#features" },
    Link { label: "Playground", href: "#playground" },
    Link { label: "Pricing", href: "#pricing" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [Link],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Product",
        links: &[
            Link { label: "Features", href: "#features" },
            Link { label: "Pricing", href: "#pricing" },
            Link { label: "API Docs", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            Link { label: "About", href: "#" },
            Link { label: "Blog", href: "#" },
            Link { label: "Contact", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[
            Link { label: "Privacy", href: "#" },
            Link { label: "Terms", href: "#" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
        assert_eq!(popular, ["Pro"]);
    }

    #[test]
    fn test_free_plan_matches_registration_note() {
        assert_eq!(PLANS[0].allowance(), "1,000 requests/month");
        assert!(FREE_TIER_NOTE.contains(PLANS[0].requests));
    }

    #[test]
    fn test_nav_anchors_are_local() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
    }
}

//! The fixed set of scraping endpoints the playground can call.

use std::fmt;
use std::str::FromStr;

use crate::error::EndpointError;

/// Remote scraping operation selectable in the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endpoint {
    /// Raw HTML of the target page.
    #[default]
    PageContent,
    /// AI summary and classification of the target page.
    DescribePage,
    /// Contact email addresses found on the target page.
    FindContactEmail,
}

impl Endpoint {
    /// Every endpoint, in display order.
    pub const ALL: [Endpoint; 3] = [
        Endpoint::PageContent,
        Endpoint::DescribePage,
        Endpoint::FindContactEmail,
    ];

    /// Identifier used in the URL path (`/api/<id>`).
    pub fn id(self) -> &'static str {
        match self {
            Endpoint::PageContent => "page-content",
            Endpoint::DescribePage => "describe-page",
            Endpoint::FindContactEmail => "find-contact-email",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::PageContent => "Page Content",
            Endpoint::DescribePage => "AI Analysis",
            Endpoint::FindContactEmail => "Find Emails",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Endpoint::PageContent => "Extract raw HTML",
            Endpoint::DescribePage => "Get AI summary",
            Endpoint::FindContactEmail => "Extract emails",
        }
    }

    /// Path relative to the API base, e.g. `/api/page-content`.
    pub fn path(self) -> String {
        format!("/api/{}", self.id())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.id() == s.trim())
            .ok_or_else(|| EndpointError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.id().parse::<Endpoint>().unwrap(), endpoint);
        }
    }

    #[test]
    fn test_unknown_id_rejected() {
        let err = "custom-page-content".parse::<Endpoint>().unwrap_err();
        assert!(err.to_string().contains("custom-page-content"));
    }

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::PageContent.path(), "/api/page-content");
        assert_eq!(Endpoint::DescribePage.path(), "/api/describe-page");
        assert_eq!(Endpoint::FindContactEmail.path(), "/api/find-contact-email");
    }

    #[test]
    fn test_default_is_page_content() {
        assert_eq!(Endpoint::default(), Endpoint::PageContent);
        assert_eq!(Endpoint::ALL[0], Endpoint::default());
    }

    #[test]
    fn test_display_names() {
        let names: Vec<_> = Endpoint::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Page Content", "AI Analysis", "Find Emails"]);
    }
}

use serde::{Deserialize, Serialize};

/// Scheme marker a landing page must start with to be opened externally.
pub const EXTERNAL_URL_PREFIX: &str = "http";

/// One carousel entry as supplied by the host.
///
/// The engine owns the list it is given but never mutates an item; it only
/// reads the landing page when a click is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideItem {
    pub image: String,
    pub title: String,
    #[serde(default, alias = "landingPage")]
    pub landing_page: Option<String>,
}

impl SlideItem {
    #[must_use]
    pub fn new(image: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            landing_page: None,
        }
    }

    #[must_use]
    pub fn with_landing_page(mut self, url: impl Into<String>) -> Self {
        self.landing_page = Some(url.into());
        self
    }

    /// Returns the landing page only when it is an absolute `http(s)` URL.
    #[must_use]
    pub fn external_landing_page(&self) -> Option<&str> {
        self.landing_page
            .as_deref()
            .filter(|url| url.starts_with(EXTERNAL_URL_PREFIX))
    }
}

//! Page types - fetched pages, the parsed staff page and link candidates.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::urls;

/// What a fetcher hands to the extraction core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,

    /// Response body
    pub html: String,

    /// URL after redirects
    pub final_url: String,
}

impl FetchedPage {
    /// Create a fetched page that was not redirected.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            url,
            html: html.into(),
        }
    }

    /// Set the post-redirect URL.
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = final_url.into();
        self
    }
}

/// A parsed page: URL, raw markup and DOM.
///
/// This is the document abstraction every classifier works against. It is
/// built once per page and only read afterwards.
#[derive(Debug, Clone)]
pub struct StaffPage {
    url: String,
    markup: String,
    document: Html,
}

impl StaffPage {
    /// Parse `html` as the document found at `url`.
    pub fn parse(url: impl Into<String>, html: impl Into<String>) -> Self {
        let markup = html.into();
        let document = Html::parse_document(&markup);
        Self {
            url: url.into(),
            markup,
            document,
        }
    }

    /// Parse a fetched page, keyed by its post-redirect URL.
    pub fn from_fetched(page: &FetchedPage) -> Self {
        Self::parse(page.final_url.clone(), page.html.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw markup as delivered by the fetcher.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> scraper::html::Select<'a, 'a> {
        self.document.select(selector)
    }

    /// The `<body>` element, if the parser produced one.
    pub fn body(&self) -> Option<ElementRef<'_>> {
        self.document
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "body")
    }

    /// Serialized `<body>` markup, or an empty string.
    pub fn body_markup(&self) -> String {
        self.body().map(|body| body.html()).unwrap_or_default()
    }

    /// Resolve an href found on this page to an absolute URL.
    pub fn resolve(&self, href: &str) -> String {
        urls::resolve(&self.url, href)
    }

    /// Lower-cased path of the page URL.
    pub fn path(&self) -> String {
        urls::path_of(&self.url).to_lowercase()
    }
}

/// A link on a homepage scored for leading to a staff directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryLinkCandidate {
    /// Absolute URL
    pub url: String,

    /// Score in 0.0..=1.0
    pub score: f32,
}

impl DirectoryLinkCandidate {
    pub fn new(url: impl Into<String>, score: f32) -> Self {
        Self {
            url: url.into(),
            score,
        }
    }
}

//! Testing utilities: a mock fetcher and staff-page fixtures.
//!
//! Useful for exercising navigation and extraction without network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ExtractionError, Result};
use crate::traits::fetcher::PageFetcher;
use crate::types::FetchedPage;

/// A mock fetcher serving predefined pages.
///
/// Unknown URLs answer with HTTP 404; URLs marked with [`fail_url`]
/// answer with a connection error.
///
/// [`fail_url`]: MockFetcher::fail_url
#[derive(Default, Clone)]
pub struct MockFetcher {
    /// Predefined pages by URL
    pages: Arc<RwLock<HashMap<String, FetchedPage>>>,

    /// URLs that should fail
    fail_urls: Arc<RwLock<Vec<String>>>,

    /// Requested URLs, in order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` at `url`.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        let page = FetchedPage::new(url, html);
        self.pages.write().unwrap().insert(page.url.clone(), page);
        self
    }

    /// Serve a page that redirected to another URL.
    pub fn with_fetched(self, page: FetchedPage) -> Self {
        self.pages.write().unwrap().insert(page.url.clone(), page);
        self
    }

    /// Mark a URL as failing.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.fail_urls.write().unwrap().push(url.into());
        self
    }

    /// All URLs requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self.calls.write().unwrap().push(url.to_string());

        if self.fail_urls.read().unwrap().iter().any(|u| u == url) {
            return Err(ExtractionError::fetch(
                url,
                std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "Mock connection refused",
                ),
            ));
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| ExtractionError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Staff-page fixtures shared by unit and integration tests.
pub mod fixtures {
    /// One coach in a plain `div` card.
    pub const SIMPLE_STAFF_CARD: &str = r#"<html><body>
<div class="staff">
  <div>
    <h3>John Doe</h3>
    <span class="title">Head Baseball Coach</span>
    <a href="mailto:coach@abccollege.edu">Email</a>
  </div>
</div>
</body></html>"#;

    /// A college staff directory table with mixed contact styles.
    pub const COLLEGE_DIRECTORY: &str = r#"<html><head><title>Staff Directory</title></head><body>
<h1>Athletics Staff Directory</h1>
<table class="staff-directory">
  <tr class="staff-row">
    <td><strong>Pat Riley</strong></td>
    <td class="staff-title">Director of Athletics</td>
    <td><a href="mailto:priley@northstate.edu">priley@northstate.edu</a></td>
  </tr>
  <tr class="staff-row">
    <td><strong>Dr. Jane A. Smith Jr.</strong></td>
    <td class="staff-title">Head Women's Soccer Coach</td>
    <td><a href="mailto:JSmith@NorthState.edu?subject=Recruiting">Email</a></td>
  </tr>
  <tr class="staff-row">
    <td><strong>Luis Gomez</strong></td>
    <td class="staff-title">Assistant Coach - Track &amp; Field</td>
    <td><a href="mailto:lgomez@northstate.edu">Email</a></td>
  </tr>
  <tr class="staff-row">
    <td><strong>Front Office</strong></td>
    <td class="staff-title">General Inquiries</td>
    <td><a href="mailto:info@northstate.edu">Email</a></td>
  </tr>
</table>
<p>Media requests: sid@northstate.edu. Equipment: gear [at] northstate [dot] edu</p>
</body></html>"#;

    /// A high school homepage that lists its coaches directly.
    pub const HIGH_SCHOOL_HOMEPAGE: &str = r#"<html><body>
<h1>Allen Eagles Athletics</h1>
<div class="coach-card"><h4>Terry Brown</h4><p class="position">Head Coach - Football</p>
  <a href="mailto:tbrown@allenisd.org">Email</a></div>
<div class="coach-card"><h4>Dana White</h4><p class="position">Assistant Coach - Football</p>
  <a href="mailto:dwhite@allenisd.org">Email</a></div>
<div class="coach-card"><h4>Chris Green</h4><p class="position">Athletic Director</p>
  <a href="mailto:cgreen@allenisd.org">Email</a></div>
<div class="coach-card"><h4>Robin Gray</h4><p class="position">Head Coach - Volleyball</p>
  <a href="mailto:rgray@allenisd.org">Email</a></div>
<div class="coach-card"><h4>Jamie Black</h4><p class="position">Pitching Coach</p>
  <a href="mailto:jblack@allenisd.org">Email</a></div>
</body></html>"#;

    /// A league homepage linking to its board page.
    pub const LEAGUE_HOMEPAGE: &str = r#"<html><body>
<nav>
  <a href="/register">Register</a>
  <a href="/board-of-directors">Board of Directors</a>
  <a href="/schedule">Schedule</a>
  <a href="https://www.facebook.com/league">Facebook</a>
</nav>
</body></html>"#;
}

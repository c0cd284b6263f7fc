// SPDX-License-Identifier: MIT OR Apache-2.0

//! The current request, as far as the logger cares about it.
//!
//! Some responses must never have log output mixed into them: cached assets, action
//! endpoints, and raw file downloads. Once boot is complete the logger checks the
//! current request path against [`is_infrastructure_path`] and drops the display
//! channel for those requests.

use regex::Regex;
use std::fmt::Debug;
use std::sync::{Mutex, OnceLock, PoisonError};

static INFRASTRUCTURE_PATH: OnceLock<Regex> = OnceLock::new();

fn infrastructure_path() -> &'static Regex {
    INFRASTRUCTURE_PATH.get_or_init(|| {
        Regex::new(r"^(cache|action|serve-file)/").expect("infrastructure path pattern is valid")
    })
}

/// Resolves the full URL of the request being served.
pub trait RequestPath: Debug + Send + Sync {
    fn current_url(&self) -> String;
}

/// A request whose URL is set by the host as it starts serving.
#[derive(Debug, Default)]
pub struct CurrentRequest {
    url: Mutex<String>,
}

impl CurrentRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Mutex::new(url.into()),
        }
    }

    pub fn set_url(&self, url: impl Into<String>) {
        *self.url.lock().unwrap_or_else(PoisonError::into_inner) = url.into();
    }
}

impl RequestPath for CurrentRequest {
    fn current_url(&self) -> String {
        self.url
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// The part of `url` after `site_url`.
///
/// A URL outside the site is returned unchanged.
pub fn relative_path<'u>(url: &'u str, site_url: &str) -> &'u str {
    url.strip_prefix(site_url).unwrap_or(url)
}

/// Whether a site-relative path is served by cache, action, or file-serving handlers.
pub fn is_infrastructure_path(path: &str) -> bool {
    infrastructure_path().is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_paths() {
        assert!(is_infrastructure_path("cache/1234/default/site.css"));
        assert!(is_infrastructure_path("action/login"));
        assert!(is_infrastructure_path("serve-file/e0/abc"));

        assert!(!is_infrastructure_path("cache"));
        assert!(!is_infrastructure_path("blog/cache/1"));
        assert!(!is_infrastructure_path("actions/login"));
        assert!(!is_infrastructure_path(""));
    }

    #[test]
    fn relative_to_site() {
        let site = "https://example.org/";
        assert_eq!(
            relative_path("https://example.org/action/logout", site),
            "action/logout"
        );
        assert_eq!(relative_path("https://example.org/", site), "");
        assert_eq!(
            relative_path("https://elsewhere.net/cache/x", site),
            "https://elsewhere.net/cache/x"
        );
    }

    #[test]
    fn current_request_is_mutable() {
        let request = CurrentRequest::new("https://example.org/");
        request.set_url("https://example.org/blog");
        assert_eq!(request.current_url(), "https://example.org/blog");
    }
}

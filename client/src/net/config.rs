//! Backend base-URL configuration.
//!
//! The build may inject `DUGOUT_API_URL`; otherwise the page location is
//! passed through the compatibility resolver in `stats::endpoint`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use stats::endpoint::{PageLocation, ResolvedBackend, resolve_backend_url};

/// Base URL injected at build time, if any.
pub const INJECTED_API_URL: Option<&str> = option_env!("DUGOUT_API_URL");

/// Current page location; a localhost stand-in outside the browser.
fn page_location() -> PageLocation {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            return PageLocation {
                protocol: location.protocol().unwrap_or_default(),
                hostname: location.hostname().unwrap_or_default(),
            };
        }
    }
    PageLocation::new("http:", "localhost")
}

fn resolve_for(location: &PageLocation, injected: Option<&str>) -> ResolvedBackend {
    resolve_backend_url(location, injected)
}

/// Resolve the backend base URL for the current page.
pub fn backend_base_url() -> String {
    let resolved = resolve_for(&page_location(), INJECTED_API_URL);
    #[cfg(feature = "hydrate")]
    log::debug!("backend api: {} ({:?})", resolved.base_url, resolved.target);
    resolved.base_url
}

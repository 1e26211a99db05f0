//! Client-side routing
//!
//! A tiny url router for the TUI: a route table with `:param` segments, a
//! history stack, and the two collaborator traits the view components see.
//!
//! ```text
//!   RouterLink::click ──► Navigator::navigate(url) ──┐
//!                                                    ▼
//!                                          Router history stack
//!                                                    ▲
//!   HeroDetailComponent ──► Location::back() ────────┘
//! ```
//!
//! The App polls `Router::current_url()` after every event and swaps the
//! active view when it changes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Url shown when nothing else matches
pub const DEFAULT_URL: &str = "/heroes";

/// Views reachable by url
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/heroes` - the hero list
    Heroes,
    /// `/detail/:id` - one hero
    Detail,
}

/// Route table: pattern → view
const ROUTES: &[(&str, Route)] = &[("/heroes", Route::Heroes), ("/detail/:id", Route::Detail)];

/// Something that can move the app to a url
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Something that can go back to the previous url
pub trait Location: Send + Sync {
    fn back(&self);
}

/// Parsed view of a url at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSnapshot {
    pub url: String,
    pub route: Route,
    params: HashMap<String, String>,
}

impl RouteSnapshot {
    /// Match `url` against the route table
    ///
    /// Returns `None` for urls no route accepts.
    pub fn parse(url: &str) -> Option<Self> {
        let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();

        ROUTES.iter().find_map(|(pattern, route)| {
            let pattern_segments: Vec<&str> =
                pattern.split('/').filter(|s| !s.is_empty()).collect();
            if pattern_segments.len() != segments.len() {
                return None;
            }

            let mut params = HashMap::new();
            for (expected, actual) in pattern_segments.iter().zip(&segments) {
                match expected.strip_prefix(':') {
                    Some(name) => {
                        params.insert(name.to_string(), actual.to_string());
                    }
                    None if expected == actual => {}
                    None => return None,
                }
            }

            Some(Self {
                url: url.to_string(),
                route: *route,
                params,
            })
        })
    }

    /// Snapshot with explicit params, for wiring components by hand
    pub fn with_params(url: &str, route: Route, params: &[(&str, &str)]) -> Self {
        Self {
            url: url.to_string(),
            route,
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Value of a `:name` segment
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// History-backed router, cheap to clone (clones share history)
#[derive(Clone)]
pub struct Router {
    history: Arc<Mutex<Vec<String>>>,
}

impl Router {
    /// Start at `initial_url` (redirected if it doesn't route)
    pub fn new(initial_url: &str) -> Self {
        Self {
            history: Arc::new(Mutex::new(vec![resolve(initial_url)])),
        }
    }

    pub fn current_url(&self) -> String {
        self.history
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_else(|| DEFAULT_URL.to_string())
    }

    /// Snapshot of the current url
    pub fn snapshot(&self) -> RouteSnapshot {
        let url = self.current_url();
        RouteSnapshot::parse(&url)
            .or_else(|| RouteSnapshot::parse(DEFAULT_URL))
            .unwrap_or_else(|| RouteSnapshot::with_params(DEFAULT_URL, Route::Heroes, &[]))
    }
}

impl Navigator for Router {
    fn navigate(&self, url: &str) {
        let url = resolve(url);
        tracing::debug!("Navigating to {}", url);
        self.history.lock().unwrap().push(url);
    }
}

impl Location for Router {
    fn back(&self) {
        let mut history = self.history.lock().unwrap();
        if history.len() > 1 {
            history.pop();
            tracing::debug!("Back to {}", history.last().map_or("", String::as_str));
        }
    }
}

/// Redirect unroutable urls to the default view
fn resolve(url: &str) -> String {
    if RouteSnapshot::parse(url).is_some() {
        return url.to_string();
    }
    if !url.trim_matches('/').is_empty() {
        tracing::warn!("No route for {}, redirecting to {}", url, DEFAULT_URL);
    }
    DEFAULT_URL.to_string()
}

/// A link whose activation navigates to a fixed url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterLink {
    target: String,
}

impl RouterLink {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Follow the link
    pub fn click(&self, navigator: &dyn Navigator) {
        navigator.navigate(&self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_route_extracts_id() {
        let snapshot = RouteSnapshot::parse("/detail/3").unwrap();
        assert_eq!(snapshot.route, Route::Detail);
        assert_eq!(snapshot.param("id"), Some("3"));
        assert_eq!(snapshot.param("name"), None);
    }

    #[test]
    fn test_unknown_urls_do_not_route() {
        assert!(RouteSnapshot::parse("/detail").is_none());
        assert!(RouteSnapshot::parse("/detail/3/edit").is_none());
        assert!(RouteSnapshot::parse("/villains").is_none());
    }

    #[test]
    fn test_root_and_unknown_redirect_to_heroes() {
        assert_eq!(Router::new("/").current_url(), "/heroes");

        let router = Router::new("/heroes");
        router.navigate("/villains");
        assert_eq!(router.current_url(), "/heroes");
        assert_eq!(router.snapshot().route, Route::Heroes);
    }

    #[test]
    fn test_navigate_then_back() {
        let router = Router::new("/heroes");
        router.navigate("/detail/12");
        assert_eq!(router.snapshot().param("id"), Some("12"));

        router.back();
        assert_eq!(router.current_url(), "/heroes");
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let router = Router::new("/heroes");
        router.back();
        router.back();
        assert_eq!(router.current_url(), "/heroes");
        assert_eq!(router.snapshot().route, Route::Heroes);
    }

    #[test]
    fn test_router_link_click_navigates() {
        let router = Router::new("/heroes");
        let link = RouterLink::to("/detail/1");
        link.click(&router);
        assert_eq!(router.current_url(), "/detail/1");
    }

    #[test]
    fn test_clones_share_history() {
        let router = Router::new("/heroes");
        let handle = router.clone();
        handle.navigate("/detail/5");
        assert_eq!(router.current_url(), "/detail/5");
    }
}

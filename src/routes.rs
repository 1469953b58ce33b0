//! Navigation gate: which view a path resolves to for a session status.
//!
//! DESIGN
//! ======
//! The route table is evaluated on every render from the current status. A
//! loading session resolves exactly like an anonymous one so protected views
//! never flash before the probe answers. Anything not listed falls through to
//! `NotFound`, checked last.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionStatus;

/// Every view the gate can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Home,
    Profile,
    Events,
    Messages,
    Search,
    GlobalSearch,
    Resources,
    Ai,
    Professionals,
    Community,
    Wellness,
    Courses,
    Mentorship,
    Marketplace,
    Certifications,
    Subscription,
    Badges,
    Notifications,
    NotFound,
}

/// Authenticated route table, in navigation order.
pub const AUTHENTICATED_ROUTES: &[(&str, AppRoute)] = &[
    ("/", AppRoute::Home),
    ("/profile", AppRoute::Profile),
    ("/events", AppRoute::Events),
    ("/messages", AppRoute::Messages),
    ("/search", AppRoute::Search),
    ("/global-search", AppRoute::GlobalSearch),
    ("/resources", AppRoute::Resources),
    ("/ai", AppRoute::Ai),
    ("/professionals", AppRoute::Professionals),
    ("/community", AppRoute::Community),
    ("/wellness", AppRoute::Wellness),
    ("/courses", AppRoute::Courses),
    ("/mentorship", AppRoute::Mentorship),
    ("/marketplace", AppRoute::Marketplace),
    ("/certifications", AppRoute::Certifications),
    ("/subscription", AppRoute::Subscription),
    ("/badges", AppRoute::Badges),
    ("/notifications", AppRoute::Notifications),
];

impl AppRoute {
    /// Human-readable page title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Welcome",
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Events => "Events",
            Self::Messages => "Messages",
            Self::Search => "Search",
            Self::GlobalSearch => "Global search",
            Self::Resources => "Resources",
            Self::Ai => "AI assistant",
            Self::Professionals => "Professionals",
            Self::Community => "Community",
            Self::Wellness => "Wellness",
            Self::Courses => "Courses",
            Self::Mentorship => "Mentorship",
            Self::Marketplace => "Marketplace",
            Self::Certifications => "Certifications",
            Self::Subscription => "Subscription",
            Self::Badges => "Badges",
            Self::Notifications => "Notifications",
            Self::NotFound => "Page not found",
        }
    }
}

/// Strip query and fragment, and a single trailing `/` except on the root.
/// Repeated trailing slashes are kept, so `//` and `/profile//` match nothing.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() && !trimmed.ends_with('/') => trimmed,
        _ => path,
    }
}

/// Resolve `path` to the view the gate mounts for `status`.
#[must_use]
pub fn resolve_route(status: SessionStatus, path: &str) -> AppRoute {
    let path = normalize_path(path);
    match status {
        SessionStatus::Authenticated => AUTHENTICATED_ROUTES
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map_or(AppRoute::NotFound, |(_, route)| *route),
        SessionStatus::Loading | SessionStatus::Anonymous => {
            if path == "/" {
                AppRoute::Landing
            } else {
                AppRoute::NotFound
            }
        }
    }
}

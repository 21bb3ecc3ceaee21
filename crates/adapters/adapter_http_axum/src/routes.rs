//! Route table — which console view answers at which path.
//!
//! The table is a plain value built by the composition root and passed into
//! [`AppState`](crate::state::AppState). The router mounts one page per
//! entry and the navigation chrome is rendered from the same entries, so
//! the two can never disagree.

use std::fmt;

/// A console page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Card grid of managed proxy servers.
    Manager,
    /// Regular user accounts.
    UserList,
    /// Administrator accounts.
    Admin,
    /// Sign-in form.
    Login,
    /// Orderable plans.
    Pricing,
}

impl View {
    /// Label used in the navigation and page titles.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Manager => "Servers",
            Self::UserList => "Users",
            Self::Admin => "Administrators",
            Self::Login => "Sign in",
            Self::Pricing => "Pricing",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One `path → view` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRoute {
    pub path: String,
    pub view: View,
}

/// Entry of the rendered navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: String,
    pub title: &'static str,
    pub active: bool,
}

/// Errors raised while editing a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route path must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("route path is reserved: {0:?}")]
    Reserved(String),
    #[error("route path has an empty, wildcard or capture segment: {0:?}")]
    InvalidSegment(String),
    #[error("fallback target is not mounted: {0:?}")]
    UnmountedFallback(String),
}

/// Paths the router mounts itself.
const RESERVED: &[&str] = &["/", "/health"];

/// Segments axum would treat as something other than literal text.
fn is_literal_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with(['*', ':'])
        && !segment.contains(['{', '}'])
}

/// Ordered `path → view` table plus the redirect target for unknown paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<ViewRoute>,
    fallback: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::console()
    }
}

impl RouteTable {
    /// An empty table redirecting unknown paths to `/`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            fallback: "/".to_string(),
        }
    }

    /// The standard console layout.
    #[must_use]
    pub fn console() -> Self {
        let entries = [
            ("/manager", View::Manager),
            ("/user", View::UserList),
            ("/admin", View::Admin),
            ("/login", View::Login),
            ("/pricing", View::Pricing),
        ]
        .into_iter()
        .map(|(path, view)| ViewRoute {
            path: path.to_string(),
            view,
        })
        .collect();

        Self {
            entries,
            fallback: "/".to_string(),
        }
    }

    /// Mount `view` at `path`, replacing whatever was mounted there.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when `path` does not start with `/`, has a
    /// segment that is empty or would be read as a capture or wildcard, or
    /// collides with a path the router reserves (`/`, `/health`, `/api/…`).
    pub fn with_view(mut self, path: impl Into<String>, view: View) -> Result<Self, RouteError> {
        let path = path.into();
        let Some(rest) = path.strip_prefix('/') else {
            return Err(RouteError::MissingLeadingSlash(path));
        };
        if !rest.is_empty() && !rest.split('/').all(is_literal_segment) {
            return Err(RouteError::InvalidSegment(path));
        }
        if RESERVED.contains(&path.as_str()) || path == "/api" || path.starts_with("/api/") {
            return Err(RouteError::Reserved(path));
        }

        match self.entries.iter_mut().find(|entry| entry.path == path) {
            Some(entry) => entry.view = view,
            None => self.entries.push(ViewRoute { path, view }),
        }
        Ok(self)
    }

    /// Redirect unknown paths to `target` instead of `/`.
    ///
    /// The target must be `/` or a path already mounted in this table, so a
    /// redirect always lands on a page.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingLeadingSlash`] for relative targets and
    /// [`RouteError::UnmountedFallback`] for paths no view answers at.
    pub fn with_fallback(mut self, target: impl Into<String>) -> Result<Self, RouteError> {
        let target = target.into();
        if !target.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(target));
        }
        if target != "/" && !self.entries.iter().any(|entry| entry.path == target) {
            return Err(RouteError::UnmountedFallback(target));
        }
        self.fallback = target;
        Ok(self)
    }

    #[must_use]
    pub fn entries(&self) -> &[ViewRoute] {
        &self.entries
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// First path `view` is mounted at, if any.
    #[must_use]
    pub fn path_of(&self, view: View) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.view == view)
            .map(|entry| entry.path.as_str())
    }

    /// Navigation entries, flagging the one for `active`.
    #[must_use]
    pub fn nav(&self, active: Option<View>) -> Vec<NavItem> {
        self.entries
            .iter()
            .map(|entry| NavItem {
                path: entry.path.clone(),
                title: entry.view.title(),
                active: Some(entry.view) == active,
            })
            .collect()
    }
}

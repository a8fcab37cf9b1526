// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page routing: maps URL-style paths to pages and tracks navigation history.

/// Pages the application can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    RegistUser,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::RegistUser];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::RegistUser => "/regist-user",
        }
    }

    /// Stable route name.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::RegistUser => "registUser",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::RegistUser => "Register user",
        }
    }

    /// Resolve a path; a trailing slash is ignored. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

/// Current page plus back-history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
    scroll_to_top: bool,
}

impl Router {
    pub fn current(&self) -> Route {
        self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Switch to `route`. Returns `false` when already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        self.history.push(self.current);
        self.current = route;
        self.scroll_to_top = true;
        true
    }

    /// Return to the previous page, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.current = prev;
                self.scroll_to_top = true;
                true
            }
            None => false,
        }
    }

    /// One-shot flag telling the view to reset its scroll offset.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }
}

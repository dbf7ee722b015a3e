//! Declarative navigation route table.
//!
//! Pure configuration consumed by the view layer: each entry maps a URL-like
//! path to a view component and the window that renders it. There is no
//! navigation logic here and no history; those belong to the view framework.

use serde::Serialize;

use crate::WindowLabel;

/// Per-route metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    /// Window this route renders in.
    pub window: WindowLabel,
    /// Whether the loading screen is shown before the view is ready.
    pub show_loading: bool,
}

/// A single navigation route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// URL-like path, e.g. "/settings".
    pub path: &'static str,
    /// Symbolic route name, e.g. "Settings".
    pub name: &'static str,
    /// View component identifier.
    pub component: &'static str,
    pub meta: RouteMeta,
}

/// The static route table. Fixed at build time, like the event registry.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable;

impl RouteTable {
    pub const ROUTES: [Route; 4] = [
        Route {
            path: "/",
            name: "Main",
            component: "MainView",
            meta: RouteMeta {
                window: WindowLabel::Main,
                show_loading: true,
            },
        },
        Route {
            path: "/loading",
            name: "Loading",
            component: "LoadingView",
            meta: RouteMeta {
                window: WindowLabel::Main,
                show_loading: false,
            },
        },
        Route {
            path: "/settings",
            name: "Settings",
            component: "SettingsView",
            meta: RouteMeta {
                window: WindowLabel::Settings,
                show_loading: false,
            },
        },
        Route {
            path: "/floating",
            name: "Floating",
            component: "FloatingView",
            meta: RouteMeta {
                window: WindowLabel::Floating,
                show_loading: false,
            },
        },
    ];

    pub fn lookup_path(path: &str) -> Option<&'static Route> {
        Self::ROUTES.iter().find(|route| route.path == path)
    }

    pub fn lookup_name(name: &str) -> Option<&'static Route> {
        Self::ROUTES.iter().find(|route| route.name == name)
    }
}

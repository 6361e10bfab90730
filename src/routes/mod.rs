//! Route registry
//!
//! The fixed set of navigable destinations shown in the drawer,
//! each with a stable id string, a display label, and an icon glyph.

use crate::{MedleyError, Result};

/// Identifier of a navigable destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteId {
    Home,
    Music,
    Movies,
    Books,
    Profile,
    Settings,
}

impl RouteId {
    /// Stable id string used for string-keyed navigation
    pub fn as_str(self) -> &'static str {
        match self {
            RouteId::Home => "home",
            RouteId::Music => "music",
            RouteId::Movies => "movies",
            RouteId::Books => "books",
            RouteId::Profile => "profile",
            RouteId::Settings => "settings",
        }
    }
}

/// Immutable description of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The designated start destination of the navigation graph
pub const START: RouteId = RouteId::Home;

/// Drawer order, fixed at build time
const REGISTRY: [Route; 6] = [
    Route { id: RouteId::Home, label: "Home", icon: "⌂" },
    Route { id: RouteId::Music, label: "Music", icon: "♫" },
    Route { id: RouteId::Movies, label: "Movies", icon: "▣" },
    Route { id: RouteId::Books, label: "Books", icon: "≡" },
    Route { id: RouteId::Profile, label: "Profile", icon: "☺" },
    Route { id: RouteId::Settings, label: "Settings", icon: "⚙" },
];

/// All destinations in drawer order, stable across calls
pub fn all() -> &'static [Route] {
    &REGISTRY
}

/// Look up a destination by its id string
pub fn by_id(id: &str) -> Result<&'static Route> {
    REGISTRY
        .iter()
        .find(|route| route.id.as_str() == id)
        .ok_or_else(|| MedleyError::UnknownRoute(id.to_string()))
}

/// Look up a destination by its typed id (total over `RouteId`)
pub fn get(id: RouteId) -> &'static Route {
    match id {
        RouteId::Home => &REGISTRY[0],
        RouteId::Music => &REGISTRY[1],
        RouteId::Movies => &REGISTRY[2],
        RouteId::Books => &REGISTRY[3],
        RouteId::Profile => &REGISTRY[4],
        RouteId::Settings => &REGISTRY[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_stable() {
        let first: Vec<RouteId> = all().iter().map(|r| r.id).collect();
        let second: Vec<RouteId> = all().iter().map(|r| r.id).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], RouteId::Home);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn test_by_id_round_trips_every_route() {
        for route in all() {
            let found = by_id(route.id.as_str()).expect("registered route");
            assert_eq!(found, route);
        }
    }

    #[test]
    fn test_by_id_rejects_unknown() {
        let err = by_id("podcasts").unwrap_err();
        assert!(matches!(err, MedleyError::UnknownRoute(ref id) if id == "podcasts"));
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: Vec<&str> = all().iter().map(|r| r.id.as_str()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn test_get_agrees_with_the_registry_for_every_variant() {
        for route in all() {
            assert_eq!(get(route.id), route);
        }
    }

    #[test]
    fn test_start_route_is_registered() {
        assert_eq!(get(START).id, RouteId::Home);
        assert_eq!(get(START).label, "Home");
    }
}

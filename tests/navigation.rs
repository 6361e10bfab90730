//! Integration tests for the navigator's back-stack contract

use medley::nav::{NavOptions, Navigator, ScreenSnapshot};
use medley::routes::{self, RouteId};
use medley::MedleyError;

#[test]
fn test_registry_and_navigator_agree_on_every_route() {
    let mut nav = Navigator::new();
    for route in routes::all() {
        nav.navigate_to(
            route.id.as_str(),
            NavOptions::drawer(),
            ScreenSnapshot::default(),
        )
        .expect("registered route");
        assert_eq!(nav.current_route(), routes::by_id(route.id.as_str()).unwrap());
    }
}

#[test]
fn test_unknown_route_is_surfaced_not_swallowed() {
    let mut nav = Navigator::new();
    let err = nav
        .navigate_to("garage", NavOptions::drawer(), ScreenSnapshot::default())
        .unwrap_err();
    assert!(matches!(err, MedleyError::UnknownRoute(_)));
    assert_eq!(err.to_string(), "Unknown route: garage");
    assert_eq!(nav.current_id(), RouteId::Home);
}

#[test]
fn test_drawer_scenario_from_home_through_movies() {
    // Registry order: Home, Music, Movies, Books, Profile, Settings;
    // start at Home, navigate to movies with the full drawer policy.
    let mut nav = Navigator::new();
    let opts = NavOptions::drawer();

    let changed = nav
        .navigate_to("movies", opts, ScreenSnapshot::default())
        .unwrap();
    assert!(changed);
    assert_eq!(nav.current_route().id.as_str(), "movies");

    // Re-selecting home never piles up duplicate home entries
    nav.navigate_to("home", opts, ScreenSnapshot::default())
        .unwrap();
    let stack = nav.back_stack();
    for pair in stack.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert!(!stack
        .iter()
        .zip(stack.iter().skip(1))
        .any(|(a, b)| *a == RouteId::Home && *b == RouteId::Home));
}

#[test]
fn test_deep_drawer_hopping_keeps_stack_shallow() {
    let mut nav = Navigator::new();
    let opts = NavOptions::drawer();

    for id in ["music", "movies", "books", "profile", "settings"] {
        nav.navigate_to(id, opts, ScreenSnapshot::default()).unwrap();
        // Drawer policy pops to start before every push
        assert!(nav.back_stack().len() <= 1);
    }
    assert!(nav.go_back());
    assert_eq!(nav.current_id(), RouteId::Home);
    assert!(!nav.go_back());
}

#[test]
fn test_saved_state_follows_routes_across_the_stack() {
    let mut nav = Navigator::new();
    let opts = NavOptions::drawer();
    let scrolled = ScreenSnapshot {
        scroll: 4,
        selected: Some(6),
    };

    nav.navigate(RouteId::Books, opts, ScreenSnapshot::default());
    nav.navigate(RouteId::Profile, opts, scrolled);

    // Coming back to books restores exactly what was left behind
    nav.navigate(RouteId::Books, opts, ScreenSnapshot::default());
    assert_eq!(nav.take_saved(RouteId::Books), Some(scrolled));
    assert_eq!(nav.take_saved(RouteId::Books), None);
}

use wncl_portal::seed::default_seed;
use wncl_portal::state::{Action, AppState, NAV_ITEMS, Screen, apply_action, resolve_path};

#[test]
fn every_nav_entry_resolves_to_its_own_view() {
    for item in NAV_ITEMS.iter() {
        assert_eq!(resolve_path(item.screen.path()), item.screen);
    }
}

#[test]
fn paths_ignore_case_and_slashes() {
    assert_eq!(resolve_path(""), Screen::Home);
    assert_eq!(resolve_path("/"), Screen::Home);
    assert_eq!(resolve_path("home"), Screen::Home);
    assert_eq!(resolve_path("fixtures"), Screen::Fixtures);
    assert_eq!(resolve_path("/Fixtures/"), Screen::Fixtures);
    assert_eq!(resolve_path(" /NEWS "), Screen::News);
}

#[test]
fn unknown_path_becomes_not_found() {
    assert_eq!(
        resolve_path("/nope"),
        Screen::NotFound {
            path: "/nope".to_string()
        }
    );
    assert_eq!(Screen::NotFound { path: "/nope".to_string() }.path(), "/nope");
}

#[test]
fn navigation_resets_scroll_and_closes_the_picker() {
    let mut state = AppState::from_seed(default_seed().expect("embedded seed"));
    apply_action(&mut state, Action::Navigate(Screen::Availability));
    apply_action(&mut state, Action::ToggleDeclinePicker { id: "2".to_string() });
    assert!(state.availability.picker_open());

    state.scroll = 7;
    apply_action(&mut state, Action::NavigatePath("/stats".to_string()));

    assert_eq!(state.screen, Screen::Stats);
    assert_eq!(state.scroll, 0);
    assert!(!state.availability.picker_open());
}

#[test]
fn navigating_to_an_unknown_path_warns() {
    let mut state = AppState::new();
    apply_action(&mut state, Action::NavigatePath("/missing".to_string()));
    assert!(matches!(state.screen, Screen::NotFound { .. }));
    assert_eq!(
        state.logs.back().map(String::as_str),
        Some("[WARN] No view at /missing")
    );

    apply_action(&mut state, Action::NavigatePath("/".to_string()));
    assert_eq!(state.screen, Screen::Home);
}

#[test]
fn path_prompt_navigates_on_submit() {
    let mut state = AppState::new();
    state.begin_path_input();
    if let Some(input) = state.path_input.as_mut() {
        input.push_str("training");
    }
    state.submit_path_input();
    assert_eq!(state.screen, Screen::Training);
    assert!(state.path_input.is_none());

    state.begin_path_input();
    state.cancel_path_input();
    assert_eq!(state.screen, Screen::Training);
}

#[test]
fn sidebar_and_help_toggle() {
    let mut state = AppState::new();
    apply_action(&mut state, Action::ToggleSidebar);
    apply_action(&mut state, Action::ToggleHelp);
    assert!(state.sidebar_collapsed);
    assert!(state.help_overlay);
    apply_action(&mut state, Action::ToggleSidebar);
    assert!(!state.sidebar_collapsed);
}

#[test]
fn log_is_capped() {
    let mut state = AppState::new();
    for i in 0..250 {
        apply_action(&mut state, Action::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] line 50"));
}

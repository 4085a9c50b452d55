use ratatui::Terminal;
use ratatui::backend::TestBackend;

use wncl_portal::seed::default_seed;
use wncl_portal::state::{Action, AppState, NAV_ITEMS, Screen, apply_action};
use wncl_portal::ui;

fn render(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| ui::draw(f, state))
        .expect("draw should succeed");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn all_screens() -> Vec<Screen> {
    let mut screens: Vec<Screen> = NAV_ITEMS.iter().map(|item| item.screen.clone()).collect();
    screens.push(Screen::NotFound {
        path: "/nowhere".to_string(),
    });
    screens
}

fn seeded_state() -> AppState {
    AppState::from_seed(default_seed().expect("embedded seed"))
}

#[test]
fn every_screen_renders_without_seed_data() {
    let mut state = AppState::new();
    for screen in all_screens() {
        state.screen = screen;
        render(&state, 100, 40);
    }
}

#[test]
fn every_screen_renders_with_seed_data() {
    let mut state = seeded_state();
    for screen in all_screens() {
        state.screen = screen;
        render(&state, 120, 45);
    }
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut state = seeded_state();
    state.help_overlay = true;
    for screen in all_screens() {
        state.screen = screen;
        render(&state, 20, 8);
    }
}

#[test]
fn availability_lists_opponents_and_picker_reasons() {
    let mut state = seeded_state();
    apply_action(&mut state, Action::Navigate(Screen::Availability));
    let text = render(&state, 120, 45);
    assert!(text.contains("Northern FC"));

    apply_action(&mut state, Action::ToggleDeclinePicker { id: "2".to_string() });
    let text = render(&state, 120, 45);
    assert!(text.contains("Work Commitment"));
}

#[test]
fn not_found_shows_the_requested_path() {
    let mut state = AppState::new();
    apply_action(&mut state, Action::NavigatePath("/nowhere".to_string()));
    let text = render(&state, 100, 30);
    assert!(text.contains("/nowhere"));
}

#[test]
fn collapsed_sidebar_help_and_path_prompt_render() {
    let mut state = seeded_state();
    state.sidebar_collapsed = true;
    state.help_overlay = true;
    render(&state, 100, 40);

    state.help_overlay = false;
    state.begin_path_input();
    if let Some(input) = state.path_input.as_mut() {
        input.push_str("/fix");
    }
    let text = render(&state, 100, 40);
    assert!(text.contains("/fix"));
}

#[test]
fn formation_screen_marks_you() {
    let mut state = seeded_state();
    apply_action(&mut state, Action::Navigate(Screen::Formation));
    let text = render(&state, 120, 45);
    assert!(text.contains("YOU"));
    assert!(text.contains("4-3-3"));
}

use wncl_portal::formation::{FormationPreset, FormationView, PitchSlot, Player};
use wncl_portal::seed::default_seed;

fn slot(name: &str, x: f32, y: f32, is_you: bool) -> PitchSlot {
    PitchSlot {
        x,
        y,
        player: Player {
            id: name.to_ascii_lowercase(),
            name: name.to_string(),
            position: "CM".to_string(),
            number: 8,
            is_you,
        },
    }
}

fn seeded_view() -> FormationView {
    FormationView::new(default_seed().expect("embedded seed").formations)
}

#[test]
fn seeded_presets_start_at_the_first_shape() {
    let view = seeded_view();
    assert_eq!(view.len(), 2);
    assert_eq!(view.index(), 0);
    let current = view.current().expect("preset");
    assert_eq!(current.formation, "4-3-3");
    assert_eq!(current.players.len(), 11);
    assert!(view.has_next());
    assert!(!view.has_prev());
}

#[test]
fn stepping_clamps_at_both_ends() {
    let mut view = seeded_view();

    view.prev();
    assert_eq!(view.index(), 0);

    view.next();
    assert_eq!(view.index(), 1);
    assert_eq!(view.current().map(|p| p.formation.as_str()), Some("4-4-2"));

    view.next();
    assert_eq!(view.index(), 1);
    assert!(!view.has_next());
}

#[test]
fn select_out_of_range_lands_on_the_last_preset() {
    let mut view = seeded_view();
    view.select(99);
    assert_eq!(view.index(), 1);
    view.select(0);
    assert_eq!(view.index(), 0);
}

#[test]
fn empty_preset_list_has_no_current_shape() {
    let mut view = FormationView::default();
    assert!(view.is_empty());
    view.next();
    view.prev();
    view.select(3);
    assert_eq!(view.index(), 0);
    assert!(view.current().is_none());
    assert!(!view.has_next());
    assert!(!view.has_prev());
}

#[test]
fn each_seeded_preset_marks_you_once() {
    for preset in seeded_view().presets {
        let you = preset.your_slot().expect("you are on the pitch");
        assert_eq!(you.player.name, "M. Johnson");
        assert_eq!(you.marker_label(), "YOU");
    }
}

#[test]
fn marker_label_uses_the_surname() {
    assert_eq!(slot("K. Okafor", 50.0, 50.0, false).marker_label(), "Okafor");
    assert_eq!(slot("Pele", 50.0, 50.0, false).marker_label(), "Pele");
}

#[test]
fn grid_cell_scales_and_clamps_percentages() {
    assert_eq!(slot("A. B", 0.0, 0.0, false).grid_cell(21, 11), (0, 0));
    assert_eq!(slot("A. B", 50.0, 50.0, false).grid_cell(21, 11), (10, 5));
    assert_eq!(slot("A. B", 100.0, 100.0, false).grid_cell(21, 11), (20, 10));
    assert_eq!(slot("A. B", 140.0, -10.0, false).grid_cell(21, 11), (20, 0));
    assert_eq!(slot("A. B", 50.0, 50.0, false).grid_cell(0, 0), (0, 0));
}

#[test]
fn preset_without_you_has_no_highlight() {
    let preset = FormationPreset {
        name: "Bench".to_string(),
        formation: "3-5-2".to_string(),
        players: vec![slot("A. One", 10.0, 10.0, false)],
    };
    assert!(preset.your_slot().is_none());
}

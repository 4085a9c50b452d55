use std::path::Path;

use wncl_portal::availability::DeclineReason;
use wncl_portal::content::{RatingTier, countdown, format_kickoff, parse_kickoff};
use wncl_portal::fixtures::Outcome;
use wncl_portal::seed::{default_seed, load_seed, parse_seed_json};

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn embedded_seed_has_every_section() {
    let seed = default_seed().expect("embedded seed should parse");
    assert_eq!(seed.profile.name, "Marcus Johnson");
    assert_eq!(seed.profile.initials(), "MJ");
    assert_eq!(seed.availability.fixtures.len(), 5);
    assert_eq!(seed.availability.history.len(), 4);
    assert_eq!(seed.fixtures.matches.len(), 6);
    assert_eq!((seed.fixtures.played, seed.fixtures.remaining), (12, 18));
    assert_eq!(seed.formations.len(), 2);
    assert_eq!(seed.training.modules.len(), 3);
    assert_eq!(seed.feedback.badges.len(), 5);
    assert_eq!(seed.feedback.items.len(), 6);
    assert_eq!(seed.news.len(), 6);
    assert!(seed.as_of_time().is_some());
}

#[test]
fn minimal_seed_file_fills_missing_sections_with_defaults() {
    let seed = load_seed(Some(&fixture_path("minimal_seed.json"))).expect("minimal seed");
    assert_eq!(seed.profile.initials(), "AL");
    assert_eq!(seed.profile.notifications, 0);
    assert!(seed.formations.is_empty());
    assert!(seed.training.modules.is_empty());
    assert!(seed.news.is_empty());
    assert!(seed.as_of_time().is_none());

    let declined = &seed.availability.fixtures[1];
    assert_eq!(declined.decline_reason(), Some(DeclineReason::Travel));
    assert_eq!(seed.fixtures.matches[1].outcome(), Some(Outcome::Loss));
}

#[test]
fn missing_seed_file_is_an_error() {
    let err = load_seed(Some(&fixture_path("does_not_exist.json"))).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read seed file"));
}

#[test]
fn empty_and_malformed_documents_are_rejected() {
    assert!(parse_seed_json("   ").is_err());
    assert!(parse_seed_json("{ not json").is_err());
}

#[test]
fn declined_fixture_needs_a_known_reason() {
    let missing = r#"{ "availability": { "fixtures": [
        { "id": "1", "opponent": "A", "date": "d", "time": "t", "venue": "v", "status": "declined" }
    ] } }"#;
    assert!(parse_seed_json(missing).is_err());

    let unknown = r#"{ "availability": { "fixtures": [
        { "id": "1", "opponent": "A", "date": "d", "time": "t", "venue": "v",
          "status": "declined", "declineReason": "Hangover" }
    ] } }"#;
    assert!(parse_seed_json(unknown).is_err());
}

#[test]
fn duplicate_fixture_ids_are_rejected() {
    let raw = r#"{ "availability": { "fixtures": [
        { "id": "1", "opponent": "A", "date": "d", "time": "t", "venue": "v", "status": "pending" },
        { "id": "1", "opponent": "B", "date": "d", "time": "t", "venue": "v", "status": "pending" }
    ] } }"#;
    let err = parse_seed_json(raw).unwrap_err();
    assert!(err.to_string().contains("duplicate availability fixture id"));
}

#[test]
fn two_players_marked_as_you_are_rejected() {
    let raw = r#"{ "formations": [ { "name": "Attack", "formation": "4-3-3", "players": [
        { "x": 50, "y": 20, "player": { "id": "a", "name": "A. One", "position": "ST", "number": 9, "isYou": true } },
        { "x": 40, "y": 30, "player": { "id": "b", "name": "B. Two", "position": "CM", "number": 8, "isYou": true } }
    ] } ] }"#;
    let err = parse_seed_json(raw).unwrap_err();
    assert!(err.to_string().contains("at most one allowed"));
}

#[test]
fn next_match_countdown_and_kickoff_text() {
    let seed = default_seed().expect("embedded seed");
    let next = seed.dashboard.next_match.as_ref().expect("next match");
    let kickoff = next.kickoff_at().expect("kickoff parses");
    let as_of = seed.as_of_time().expect("as of parses");

    assert_eq!(countdown(kickoff, as_of), "2d 14h");
    assert_eq!(format_kickoff(&next.kickoff), "Sat, Dec 28 • 3:00 PM");
}

#[test]
fn countdown_units_shrink_as_kickoff_nears() {
    let kickoff = parse_kickoff("2024-12-28T15:00").expect("kickoff");
    let at = |raw: &str| parse_kickoff(raw).expect("as of");
    assert_eq!(countdown(kickoff, at("2024-12-28T09:30")), "5h 30m");
    assert_eq!(countdown(kickoff, at("2024-12-28T14:15")), "45m");
    assert_eq!(countdown(kickoff, at("2024-12-28T15:00")), "Kick-off");
    assert_eq!(countdown(kickoff, at("2024-12-29T10:00")), "Kick-off");
}

#[test]
fn unparseable_kickoff_falls_back_to_raw_text() {
    assert_eq!(format_kickoff(""), "TBD");
    assert_eq!(format_kickoff("Saturday afternoon"), "Saturday afternoon");
}

#[test]
fn match_ratings_are_tiered() {
    let seed = default_seed().expect("embedded seed");
    let ratings = &seed.stats.match_ratings;
    let tiers: Vec<RatingTier> = ratings.iter().map(|r| r.tier()).collect();
    assert_eq!(
        tiers,
        vec![
            RatingTier::Top,
            RatingTier::Good,
            RatingTier::Plain,
            RatingTier::Top,
            RatingTier::Good
        ]
    );
    assert_eq!(ratings[0].contributions(), "1 Goal · 1 Assist");
    assert_eq!(ratings[3].contributions(), "2 Goals");
    assert_eq!(ratings[2].contributions(), "");
}

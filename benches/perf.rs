use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use wncl_portal::availability::{
    AvailabilityStatus, DeclineReason, Fixture, confirmed_count, pending_count,
};
use wncl_portal::fixtures::{FixtureFilter, Match, MatchStatus, filter_matches};
use wncl_portal::seed::{DEFAULT_SEED, default_seed, parse_seed_json};
use wncl_portal::state::{AppState, NAV_ITEMS};
use wncl_portal::ui;

fn synthetic_fixtures(count: usize) -> Vec<Fixture> {
    (0..count)
        .map(|i| Fixture {
            id: i.to_string(),
            opponent: format!("Opponent {i}"),
            date: "Sat, Jan 4".to_string(),
            time: "3:00 PM".to_string(),
            venue: "City Stadium".to_string(),
            status: match i % 3 {
                0 => AvailabilityStatus::Pending,
                1 => AvailabilityStatus::Confirmed,
                _ => AvailabilityStatus::Declined {
                    reason: DeclineReason::ALL[i % DeclineReason::ALL.len()],
                },
            },
        })
        .collect()
}

fn synthetic_matches(count: usize) -> Vec<Match> {
    (0..count)
        .map(|i| Match {
            id: i.to_string(),
            opponent: format!("Opponent {i}"),
            date: "Jan 4".to_string(),
            time: "3:00 PM".to_string(),
            venue: "City Stadium".to_string(),
            is_home: i % 2 == 0,
            status: if i % 2 == 0 {
                MatchStatus::Past {
                    result: "2-1 W".to_string(),
                    position: None,
                }
            } else {
                MatchStatus::Upcoming
            },
        })
        .collect()
}

fn bench_seed_parse(c: &mut Criterion) {
    c.bench_function("seed_parse", |b| {
        b.iter(|| {
            let seed = parse_seed_json(black_box(DEFAULT_SEED)).unwrap();
            black_box(seed.availability.fixtures.len());
        })
    });
}

fn bench_availability_counts(c: &mut Criterion) {
    let fixtures = synthetic_fixtures(5_000);
    c.bench_function("availability_counts_5k", |b| {
        b.iter(|| {
            let pending = pending_count(black_box(&fixtures));
            let confirmed = confirmed_count(black_box(&fixtures));
            black_box(pending + confirmed);
        })
    });
}

fn bench_filter_matches(c: &mut Criterion) {
    let matches = synthetic_matches(5_000);
    c.bench_function("filter_matches_5k", |b| {
        b.iter(|| {
            for filter in FixtureFilter::ALL {
                let rows = filter_matches(black_box(&matches), filter);
                black_box(rows.len());
            }
        })
    });
}

fn bench_draw_all_screens(c: &mut Criterion) {
    let mut state = AppState::from_seed(default_seed().unwrap());
    let mut terminal = Terminal::new(TestBackend::new(120, 45)).unwrap();
    c.bench_function("draw_all_screens", |b| {
        b.iter(|| {
            for item in NAV_ITEMS.iter() {
                state.screen = item.screen.clone();
                terminal.draw(|f| ui::draw(f, &state)).unwrap();
            }
        })
    });
}

criterion_group!(
    perf,
    bench_seed_parse,
    bench_availability_counts,
    bench_filter_matches,
    bench_draw_all_screens
);
criterion_main!(perf);

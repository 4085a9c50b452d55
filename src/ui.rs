use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::availability::{Attendance, AvailabilityStatus, DeclineReason, Fixture};
use crate::content::{
    FeedbackKind, HighlightKind, NewsKind, QuickStatus, RatingTier, countdown, format_kickoff,
};
use crate::fixtures::{FixtureFilter, Match, MatchStatus, Outcome};
use crate::formation::{FormationPreset, PitchSlot};
use crate::state::{AppState, NAV_ITEMS, Screen};
use crate::training::{LessonStatus, Module};

const GOLD: Color = Color::Yellow;
const ROYAL: Color = Color::Blue;
const MUTED: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let sidebar_width = if state.sidebar_collapsed { 7 } else { 22 };
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
        .split(chunks[1]);

    render_sidebar(frame, body[0], state);

    let content = body[1];
    match &state.screen {
        Screen::Home => render_home(frame, content, state),
        Screen::Fixtures => render_fixtures(frame, content, state),
        Screen::Formation => render_formation(frame, content, state),
        Screen::Stats => render_stats(frame, content, state),
        Screen::Availability => render_availability(frame, content, state),
        Screen::Training => render_training(frame, content, state),
        Screen::Feedback => render_feedback(frame, content, state),
        Screen::News => render_news(frame, content, state),
        Screen::NotFound { path } => render_not_found(frame, content, path),
    }

    let console = Paragraph::new(console_text(state))
        .style(Style::default().fg(MUTED))
        .block(Block::default().title("Console").borders(Borders::TOP));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(state))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    let full = frame.size();
    if let Some(input) = &state.path_input {
        render_path_prompt(frame, full, input);
    }
    if state.help_overlay {
        render_help_overlay(frame, full);
    }
}

fn header_text(state: &AppState) -> String {
    let p = &state.profile;
    let season = if p.season.is_empty() {
        String::new()
    } else {
        format!(" | Season: {}", p.season)
    };
    let line1 = format!(
        "  .-.  WNCL PLAYER PORTAL | {}{season} | Alerts: {}",
        state.screen.label(),
        p.notifications
    );
    let line2 = format!(
        " (___) [{}] {} · {} • #{}",
        p.initials(),
        p.name,
        p.role,
        p.number
    );
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    let common = "1-8 Views | g Go to | [ Sidebar | ? Help | q Quit";
    let local = match &state.screen {
        Screen::Availability if state.availability.picker_open() => {
            "j/k Reason | Enter Decline | Esc Cancel"
        }
        Screen::Availability => "j/k Move | c Available | x Unavailable",
        Screen::Fixtures => "j/k Move | f Filter | a/u/p All/Upcoming/Past",
        Screen::Formation => "←/→ or h/l Preset",
        Screen::Training => "j/k Move | Enter Expand/Collapse",
        Screen::NotFound { .. } => "1 Home",
        _ => "j/k Scroll",
    };
    format!("{local} | {common}")
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No activity yet".to_string();
    }
    let start = state.logs.len().saturating_sub(2);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = Vec::new();
    for item in &NAV_ITEMS {
        let active = item.screen == state.screen;
        let style = if active {
            Style::default()
                .fg(GOLD)
                .bg(ROYAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let text = if state.sidebar_collapsed {
            format!(" {} {}", item.key, item.glyph)
        } else {
            format!(" {} {} {}", item.key, item.glyph, item.screen.label())
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::from(""));
    let toggle = if state.sidebar_collapsed { " [ »" } else { " [ « Collapse" };
    lines.push(Line::from(Span::styled(toggle, Style::default().fg(MUTED))));

    let title = if state.sidebar_collapsed { "" } else { "WNCL" };
    let sidebar =
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::RIGHT));
    frame.render_widget(sidebar, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(MUTED))
}

fn text_bar(percent: u16, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_scrolled(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, scroll: u16) {
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let p = &state.profile;
    let dash = &state.dashboard;
    let mut lines = vec![
        Line::from(muted("Welcome back,")),
        Line::from(Span::styled(
            p.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let mut badges = vec![Span::styled(
        format!(" {} ", p.role),
        Style::default().fg(Color::White).bg(ROYAL),
    )];
    if p.streak > 0 {
        badges.push(Span::raw(" "));
        badges.push(Span::styled(
            format!(" {} Match Streak ", p.streak),
            Style::default().fg(Color::Black).bg(GOLD),
        ));
    }
    lines.push(Line::from(badges));
    if !dash.form_stats.is_empty() {
        let mut spans = Vec::new();
        for stat in &dash.form_stats {
            spans.push(Span::styled(
                format!("{} ", stat.value),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ));
            spans.push(muted(format!("{}   ", stat.label)));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    lines.push(section("Next Match"));
    match &dash.next_match {
        Some(next) => {
            let countdown_text = match (next.kickoff_at(), state.as_of) {
                (Some(kickoff), Some(as_of)) => countdown(kickoff, as_of),
                _ => "-".to_string(),
            };
            lines.push(Line::from(vec![
                Span::raw("vs "),
                Span::styled(
                    next.opponent.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(countdown_text, Style::default().fg(GOLD)),
                muted(" countdown"),
            ]));
            lines.push(Line::from(muted(next.competition.clone())));
            let mut details = vec![
                Span::raw(format_kickoff(&next.kickoff)),
                muted("  |  "),
                Span::raw(next.venue_label()),
            ];
            if let Some(position) = &next.position {
                details.push(muted("  |  "));
                details.push(Span::styled(position.clone(), Style::default().fg(GOLD)));
            }
            lines.push(Line::from(details));
        }
        None => lines.push(Line::from(muted("No match scheduled"))),
    }
    lines.push(Line::from(""));

    lines.push(section("Quick Overview"));
    if dash.quick_stats.is_empty() {
        lines.push(Line::from(muted("Nothing to show yet")));
    }
    for stat in &dash.quick_stats {
        let color = match stat.status {
            QuickStatus::Success => Color::Green,
            QuickStatus::Progress => GOLD,
            QuickStatus::Rating => Color::White,
        };
        let mut spans = vec![
            Span::raw(format!("{:<14}", stat.label)),
            Span::styled(
                format!("{:<10}", stat.value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ];
        if stat.status == QuickStatus::Progress
            && let Some(pct) = stat.progress
        {
            spans.push(Span::styled(
                text_bar(u16::from(pct), 20),
                Style::default().fg(GOLD),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    lines.push(section("Recent Highlights"));
    if dash.highlights.is_empty() {
        lines.push(Line::from(muted("No highlights yet")));
    }
    for item in &dash.highlights {
        let (glyph, color) = match item.kind {
            HighlightKind::Praise => ("★", ROYAL),
            HighlightKind::Achievement => ("◆", GOLD),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{glyph} "), Style::default().fg(color)),
            Span::raw(item.text.clone()),
        ]));
        let by = match &item.author {
            Some(author) => format!("  {author} · {}", item.time),
            None => format!("  {}", item.time),
        };
        lines.push(Line::from(muted(by)));
    }

    render_scrolled(frame, area, "Home", lines, state.scroll);
}

fn render_fixtures(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.fixtures;
    let block = Block::default().title("My Fixtures").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let mut tabs = Vec::new();
    for filter in FixtureFilter::ALL {
        let style = if filter == view.filter {
            Style::default()
                .fg(Color::White)
                .bg(ROYAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        tabs.push(Span::styled(format!(" {} ", filter.label()), style));
        tabs.push(Span::raw(" "));
    }
    let summary = vec![
        Line::from(vec![
            muted(format!(
                "Season {} • {} matches remaining",
                state.profile.season, view.remaining
            )),
            Span::raw("   "),
            Span::styled(
                format!(" {} Played ", view.played),
                Style::default().fg(Color::Black).bg(GOLD),
            ),
        ]),
        Line::from(""),
        Line::from(tabs),
    ];
    frame.render_widget(Paragraph::new(summary), sections[0]);

    let list_area = sections[1];
    let filtered = view.filtered();
    if filtered.is_empty() {
        let empty = Paragraph::new("No matches for this filter").style(Style::default().fg(MUTED));
        frame.render_widget(empty, list_area);
        return;
    }

    const ROW_HEIGHT: u16 = 3;
    let visible = usize::from((list_area.height / ROW_HEIGHT).max(1));
    let (start, end) = visible_range(view.selected, filtered.len(), visible);
    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + (i as u16) * ROW_HEIGHT,
            width: list_area.width,
            height: ROW_HEIGHT.min(list_area.height.saturating_sub((i as u16) * ROW_HEIGHT)),
        };
        if row_area.height == 0 {
            break;
        }
        let selected = idx == view.selected;
        frame.render_widget(Paragraph::new(match_lines(filtered[idx], selected)), row_area);
    }
}

fn match_lines(m: &Match, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "> " } else { "  " };
    let title_style = if m.is_past() {
        Style::default().fg(MUTED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let (side, side_color) = if m.is_home {
        ("H", Color::Green)
    } else {
        ("A", Color::LightRed)
    };

    let status: Vec<Span<'static>> = match &m.status {
        MatchStatus::Past { result, position } => {
            let color = match m.outcome() {
                Some(Outcome::Win) => Color::Green,
                Some(Outcome::Draw) => MUTED,
                Some(Outcome::Loss) => Color::Red,
                None => Color::White,
            };
            vec![
                Span::styled(
                    result.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                muted(format!(" {}", position.clone().unwrap_or_default())),
            ]
        }
        MatchStatus::Confirmed { position } => vec![
            Span::styled(
                format!("★ {}", position.clone().unwrap_or_default()),
                Style::default().fg(GOLD),
            ),
            Span::styled(" ✓ Confirmed", Style::default().fg(Color::Green)),
        ],
        MatchStatus::Upcoming => vec![Span::styled(
            " Confirm ",
            Style::default().fg(Color::White).bg(ROYAL),
        )],
    };

    let mut first = vec![
        Span::raw(marker),
        Span::styled(m.opponent.clone(), title_style),
        Span::raw(" "),
        Span::styled(format!("[{side}]"), Style::default().fg(side_color)),
        Span::raw("   "),
    ];
    first.extend(status);

    let mut lines = vec![
        Line::from(first),
        Line::from(muted(format!(
            "    {} • {}   @ {}",
            m.date, m.time, m.venue
        ))),
    ];
    if selected {
        for line in &mut lines {
            line.style = Style::default().bg(Color::Black);
        }
    }
    lines
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_formation(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.formation;
    let Some(preset) = view.current() else {
        let empty = Paragraph::new("No formations published yet")
            .style(Style::default().fg(MUTED))
            .block(Block::default().title("My Position").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(area);

    let mut lines = vec![section("Formation view for next match"), Line::from("")];
    match preset.your_slot() {
        Some(slot) => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("#{} ", slot.player.number),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{} ({})", state.profile.role, slot.player.position),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(muted("Starting")));
        }
        None => lines.push(Line::from(muted("Not in this line-up"))),
    }
    lines.push(Line::from(""));

    let prev_style = if view.has_prev() {
        Style::default()
    } else {
        Style::default().fg(MUTED)
    };
    let next_style = if view.has_next() {
        Style::default()
    } else {
        Style::default().fg(MUTED)
    };
    lines.push(Line::from(vec![
        Span::styled("◀ ", prev_style),
        Span::styled(
            format!("{} · {}", preset.name, preset.formation),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", next_style),
    ]));
    lines.push(Line::from(muted(format!(
        "Preset {} of {}",
        view.index() + 1,
        view.len()
    ))));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(GOLD)),
        Span::raw("Your Position   "),
        Span::styled("● ", Style::default().fg(Color::White)),
        Span::raw("Teammates"),
    ]));

    let info = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("My Position").borders(Borders::ALL));
    frame.render_widget(info, columns[0]);

    render_pitch(frame, columns[1], preset);
}

fn render_pitch(frame: &mut Frame, area: Rect, preset: &FormationPreset) {
    let block = Block::default()
        .title(format!("Pitch · {}", preset.formation))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 4 || inner.height < 4 {
        return;
    }

    let halfway = Rect {
        x: inner.x,
        y: inner.y + inner.height / 2,
        width: inner.width,
        height: 1,
    };
    let line = Paragraph::new("─".repeat(usize::from(inner.width)))
        .style(Style::default().fg(Color::Green));
    frame.render_widget(line, halfway);

    // Keep the last row free for the caption under the bottom marker.
    let rows = inner.height - 1;
    for slot in &preset.players {
        render_marker(frame, inner, rows, slot);
    }
}

fn render_marker(frame: &mut Frame, pitch: Rect, rows: u16, slot: &PitchSlot) {
    let (cx, cy) = slot.grid_cell(pitch.width, rows);
    let style = if slot.player.is_you {
        Style::default()
            .fg(Color::Black)
            .bg(GOLD)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let caption_style = if slot.player.is_you {
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    render_centered(frame, pitch, cx, cy, &format!("({})", slot.player.number), style);
    render_centered(frame, pitch, cx, cy + 1, &slot.marker_label(), caption_style);
}

fn render_centered(frame: &mut Frame, bounds: Rect, cx: u16, row: u16, text: &str, style: Style) {
    if row >= bounds.height || bounds.width == 0 {
        return;
    }
    let width = (text.chars().count() as u16).min(bounds.width);
    let start = cx.saturating_sub(width / 2).min(bounds.width - width);
    let rect = Rect {
        x: bounds.x + start,
        y: bounds.y + row,
        width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(text.to_string()).style(style), rect);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let stats = &state.stats;
    let mut lines = vec![
        Line::from(vec![
            muted(format!("Season {} Analysis   ", state.profile.season)),
            Span::styled(
                format!(" {} Matches ", stats.matches_played),
                Style::default().fg(Color::Black).bg(GOLD),
            ),
        ]),
        Line::from(""),
        section("Season Overview"),
    ];
    if stats.season_stats.is_empty() {
        lines.push(Line::from(muted("No season stats yet")));
    }
    for stat in &stats.season_stats {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<12}", stat.label)),
            Span::styled(
                format!("{:<8}", stat.value),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(stat.change.clone(), Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section("Personal Bests"));
    if stats.personal_bests.is_empty() {
        lines.push(Line::from(muted("No personal bests yet")));
    }
    for best in &stats.personal_bests {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<16}", best.label)),
            Span::styled(
                format!("{:<16}", best.value),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            muted(best.context.clone()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section("Skills Breakdown"));
    if stats.skills.is_empty() {
        lines.push(Line::from(muted("No skill ratings yet")));
    }
    for skill in &stats.skills {
        let color = if skill.above_average() { GOLD } else { ROYAL };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<12}", skill.stat)),
            Span::styled(text_bar(u16::from(skill.value), 20), Style::default().fg(color)),
            Span::raw(format!(" {:>3}", skill.value)),
            muted(format!("  avg {}", skill.avg)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section("Recent Match Ratings"));
    if stats.match_ratings.is_empty() {
        lines.push(Line::from(muted("No rated matches yet")));
    }
    for rating in &stats.match_ratings {
        let style = match rating.tier() {
            RatingTier::Top => Style::default()
                .fg(Color::Black)
                .bg(GOLD)
                .add_modifier(Modifier::BOLD),
            RatingTier::Good => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            RatingTier::Plain => Style::default().fg(MUTED),
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:.1} ", rating.rating), style),
            Span::raw(format!("  vs {:<18}", rating.opponent)),
            muted(rating.contributions()),
        ]));
    }

    render_scrolled(frame, area, "Performance Stats", lines, state.scroll);
}

fn render_availability(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.availability;
    let block = Block::default().title("Availability").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let history_height = (view.history.len() as u16 + 2).clamp(3, 8);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(history_height),
        ])
        .split(inner);

    let counters = vec![
        Line::from(muted("Confirm your attendance for upcoming matches")),
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(
                view.confirmed_count().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Confirmed     "),
            Span::styled("◷ ", Style::default().fg(GOLD)),
            Span::styled(
                view.pending_count().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Pending"),
        ]),
    ];
    frame.render_widget(Paragraph::new(counters), sections[0]);

    let list_area = sections[1];
    if view.fixtures.is_empty() {
        let empty =
            Paragraph::new("No upcoming fixtures").style(Style::default().fg(MUTED));
        frame.render_widget(empty, list_area);
    } else {
        const ROW_HEIGHT: u16 = 2;
        let visible = usize::from((list_area.height / ROW_HEIGHT).max(1));
        let (start, end) = visible_range(view.selected, view.fixtures.len(), visible);
        for (i, idx) in (start..end).enumerate() {
            let offset = (i as u16) * ROW_HEIGHT;
            if offset >= list_area.height {
                break;
            }
            let row_area = Rect {
                x: list_area.x,
                y: list_area.y + offset,
                width: list_area.width,
                height: ROW_HEIGHT.min(list_area.height - offset),
            };
            let fixture = &view.fixtures[idx];
            let selected = idx == view.selected;
            frame.render_widget(Paragraph::new(fixture_lines(fixture, selected)), row_area);
        }
    }

    let mut history = vec![section("History")];
    if view.history.is_empty() {
        history.push(Line::from(muted("No past fixtures")));
    }
    for entry in &view.history {
        let outcome = match &entry.attendance {
            Attendance::Confirmed => {
                Span::styled("✓ Attended", Style::default().fg(Color::Green))
            }
            Attendance::Declined { reason } => Span::styled(
                format!("✗ Missed ({reason})"),
                Style::default().fg(Color::Red),
            ),
        };
        history.push(Line::from(vec![
            Span::raw(format!("vs {:<18}", entry.opponent)),
            muted(format!("{:<8}", entry.date)),
            outcome,
        ]));
    }
    frame.render_widget(
        Paragraph::new(history).block(Block::default().borders(Borders::TOP)),
        sections[2],
    );

    if let Some(active) = view.active_decline_id.as_deref()
        && let Some(fixture) = view.fixture(active)
    {
        render_reason_picker(frame, area, fixture, view.highlighted_reason());
    }
}

fn fixture_lines(fixture: &Fixture, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "> " } else { "  " };
    let status = match &fixture.status {
        AvailabilityStatus::Pending => vec![
            Span::styled(" c Available ", Style::default().fg(Color::White).bg(ROYAL)),
            Span::raw(" "),
            Span::styled(" x Unavailable ▾ ", Style::default().fg(Color::White)),
        ],
        AvailabilityStatus::Confirmed => vec![Span::styled(
            "✓ Confirmed",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )],
        AvailabilityStatus::Declined { reason } => vec![
            Span::styled(
                "✗ Unavailable",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            muted(format!(" ({reason})")),
        ],
    };
    let mut first = vec![
        Span::raw(marker),
        Span::styled(
            format!("vs {:<20}", fixture.opponent),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    first.extend(status);
    let mut lines = vec![
        Line::from(first),
        Line::from(muted(format!(
            "    {} • {} • {}",
            fixture.date, fixture.time, fixture.venue
        ))),
    ];
    if selected {
        for line in &mut lines {
            line.style = Style::default().bg(Color::Black);
        }
    }
    lines
}

fn render_reason_picker(
    frame: &mut Frame,
    area: Rect,
    fixture: &Fixture,
    highlighted: DeclineReason,
) {
    let height = DeclineReason::ALL.len() as u16 + 2;
    let width = 30u16.min(area.width);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width + 2),
        y: area.y + 4u16.min(area.height.saturating_sub(height)),
        width,
        height: height.min(area.height),
    };
    frame.render_widget(Clear, popup);

    let lines: Vec<Line<'static>> = DeclineReason::ALL
        .into_iter()
        .map(|reason| {
            if reason == highlighted {
                Line::from(Span::styled(
                    format!("> {reason}"),
                    Style::default().fg(Color::Black).bg(GOLD),
                ))
            } else {
                Line::from(format!("  {reason}"))
            }
        })
        .collect();
    let picker = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Unavailable vs {}", fixture.opponent))
            .borders(Borders::ALL),
    );
    frame.render_widget(picker, popup);
}

fn render_training(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.training;
    let progress = view.progress();

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(
                    "Training & Lessons | {}/{} Done",
                    progress.completed, progress.total
                ))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(GOLD).bg(Color::Black))
        .percent(progress.percent().min(100))
        .label(format!("Overall Progress {}%", progress.percent()));
    frame.render_widget(gauge, sections[0]);

    let mut lines = Vec::new();
    if view.modules.is_empty() {
        lines.push(Line::from(muted("No modules assigned yet")));
    }
    for (idx, module) in view.modules.iter().enumerate() {
        let expanded = view.is_active(&module.id);
        lines.push(module_header(module, expanded, idx == view.selected));
        if expanded {
            lines.extend(lesson_lines(module));
        }
    }

    // Keep the selected module header on screen.
    let selected_line = view
        .modules
        .iter()
        .take(view.selected)
        .map(|m| 1 + if view.is_active(&m.id) { m.lessons.len() * 2 } else { 0 })
        .sum::<usize>();
    let body_rows = usize::from(sections[1].height.saturating_sub(2)).max(1);
    let scroll = selected_line.saturating_sub(body_rows - 1).min(usize::from(u16::MAX)) as u16;

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Coach-assigned learning content")
                .borders(Borders::ALL),
        )
        .scroll((scroll, 0));
    frame.render_widget(body, sections[1]);
}

fn module_header(module: &Module, expanded: bool, selected: bool) -> Line<'static> {
    let arrow = if expanded { "▾" } else { "▸" };
    let marker = if selected { ">" } else { " " };
    let style = if selected {
        Style::default().bg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(format!("{marker} {arrow} {:<24}", module.title), style),
        Span::styled(
            text_bar(u16::from(module.progress), 12),
            Style::default().fg(GOLD),
        ),
        Span::raw(format!(" {:>3}%", module.progress)),
        muted(format!(
            "  {}/{} lessons",
            module.completed_lessons(),
            module.lessons.len()
        )),
    ])
}

fn lesson_lines(module: &Module) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for lesson in &module.lessons {
        let (glyph, glyph_style) = match lesson.status {
            LessonStatus::Completed => ("✓", Style::default().fg(Color::Green)),
            LessonStatus::InProgress => ("▶", Style::default().fg(GOLD)),
            LessonStatus::Locked => ("■", Style::default().fg(MUTED)),
        };
        let title_style = if lesson.status == LessonStatus::Locked {
            Style::default().fg(MUTED)
        } else {
            Style::default()
        };
        let mut first = vec![
            Span::raw("     "),
            Span::styled(format!("{glyph} "), glyph_style),
            Span::styled(lesson.title.clone(), title_style),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", lesson.kind.label()),
                Style::default().fg(Color::Cyan),
            ),
            muted(format!("  {}", lesson.duration)),
        ];
        if let Some(due) = &lesson.due_date {
            first.push(Span::styled(format!("  Due: {due}"), Style::default().fg(GOLD)));
        }
        lines.push(Line::from(first));

        let mut second = vec![muted(format!("       {}", lesson.description))];
        if lesson.status == LessonStatus::InProgress
            && let Some(pct) = lesson.progress
        {
            second.push(Span::raw("  "));
            second.push(Span::styled(
                text_bar(u16::from(pct), 10),
                Style::default().fg(GOLD),
            ));
            second.push(muted(format!(" {pct}%")));
        }
        lines.push(Line::from(second));
    }
    lines
}

fn render_feedback(frame: &mut Frame, area: Rect, state: &AppState) {
    let data = &state.feedback;
    let mut lines = vec![
        Line::from(vec![
            muted("Personalized insights and progress   "),
            Span::styled("AI Powered", Style::default().fg(GOLD)),
        ]),
        Line::from(""),
        section("Badges Earned"),
    ];
    if data.badges.is_empty() {
        lines.push(Line::from(muted("No badges yet")));
    } else {
        let mut spans = Vec::new();
        for badge in &data.badges {
            let span = if badge.unlocked {
                Span::styled(
                    format!(" ★ {} ", badge.label),
                    Style::default().fg(Color::Black).bg(GOLD),
                )
            } else {
                muted(format!(" ■ {} (Locked) ", badge.label))
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    lines.push(section("Recent Insights"));
    if data.items.is_empty() {
        lines.push(Line::from(muted("No insights yet")));
    }
    for item in &data.items {
        let color = match item.kind {
            FeedbackKind::Praise => GOLD,
            FeedbackKind::Tip => ROYAL,
            FeedbackKind::QuizResult => Color::Magenta,
            FeedbackKind::Milestone => Color::Green,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", item.kind.label()),
                Style::default().fg(color),
            ),
            Span::styled(
                item.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            muted(format!("  {}", item.time)),
        ]));
        lines.push(Line::from(format!("  {}", item.message)));
        lines.push(Line::from(""));
    }

    render_scrolled(frame, area, "AI Feedback", lines, state.scroll);
}

fn render_news(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(vec![
            muted("Announcements and updates   "),
            Span::styled(
                format!(" {} New ", state.news.len()),
                Style::default().fg(Color::Black).bg(GOLD),
            ),
        ]),
        Line::from(""),
    ];
    if state.news.is_empty() {
        lines.push(Line::from(muted("No team news yet")));
    }
    for item in &state.news {
        let color = match item.kind {
            NewsKind::Announcement => ROYAL,
            NewsKind::Reminder => GOLD,
            NewsKind::Media => Color::Magenta,
        };
        if item.important {
            lines.push(Line::from(Span::styled(
                "! Important",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled(
                item.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", item.kind.label()),
                Style::default().fg(color),
            ),
        ]));
        if let Some(author) = &item.author {
            lines.push(Line::from(muted(format!("Posted by {author}"))));
        }
        lines.push(Line::from(item.content.clone()));
        let mut footer = vec![muted(item.time.clone())];
        if item.kind == NewsKind::Media {
            footer.push(muted(format!("   ♥ {}", item.likes.unwrap_or(0))));
        }
        lines.push(Line::from(footer));
        lines.push(Line::from(""));
    }

    render_scrolled(frame, area, "Team News", lines, state.scroll);
}

fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "404",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Oops! No page at {path}")),
        Line::from(muted("Press 1 to return home")),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Not Found").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_path_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(50, 20, area);
    let popup = Rect {
        height: popup.height.min(3),
        ..popup
    };
    frame.render_widget(Clear, popup);
    let prompt = Paragraph::new(format!("{input}_"))
        .block(Block::default().title("Go to path").borders(Borders::ALL));
    frame.render_widget(prompt, popup);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "WNCL Player Portal - Help",
        "",
        "Global:",
        "  1-8          Jump to view",
        "  g            Go to path (e.g. /stats)",
        "  [            Collapse/expand sidebar",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Availability:",
        "  c            Mark available",
        "  x            Pick unavailable reason",
        "  Enter / Esc  Decline / cancel picker",
        "",
        "Fixtures:     f cycle filter, a/u/p pick",
        "Formation:    ←/→ previous/next preset",
        "Training:     Enter expand/collapse module",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use wncl_portal::config::PortalConfig;
use wncl_portal::fixtures::FixtureFilter;
use wncl_portal::seed::load_seed;
use wncl_portal::state::{Action, AppState, NAV_ITEMS, Screen, apply_action};
use wncl_portal::ui;

struct App {
    state: AppState,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    fn new(state: AppState, tick_rate: Duration) -> Self {
        Self {
            state,
            should_quit: false,
            tick_rate,
        }
    }

    fn dispatch(&mut self, action: Action) {
        apply_action(&mut self.state, action);
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.path_input.is_some() {
            self.on_path_key(key);
            return;
        }
        if self.state.screen == Screen::Availability && self.state.availability.picker_open() {
            self.on_picker_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.dispatch(Action::ToggleHelp),
            KeyCode::Char('g') | KeyCode::Char('/') => self.state.begin_path_input(),
            KeyCode::Char('[') => self.dispatch(Action::ToggleSidebar),
            KeyCode::Esc => self.state.help_overlay = false,
            KeyCode::Char(c) if NAV_ITEMS.iter().any(|item| item.key == c) => {
                if let Some(item) = NAV_ITEMS.iter().find(|item| item.key == c) {
                    self.dispatch(Action::Navigate(item.screen.clone()));
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            _ => self.on_view_key(key),
        }
    }

    fn on_view_key(&mut self, key: KeyEvent) {
        match self.state.screen {
            Screen::Availability => {
                let Some(id) = self.state.availability.selected_fixture().map(|f| f.id.clone())
                else {
                    return;
                };
                match key.code {
                    KeyCode::Char('c') => self.dispatch(Action::Confirm { id }),
                    KeyCode::Char('x') => self.dispatch(Action::ToggleDeclinePicker { id }),
                    _ => {}
                }
            }
            Screen::Fixtures => match key.code {
                KeyCode::Char('f') | KeyCode::Tab => {
                    let next = self.state.fixtures.filter.next();
                    self.dispatch(Action::SetFilter(next));
                }
                KeyCode::Char('a') => self.dispatch(Action::SetFilter(FixtureFilter::All)),
                KeyCode::Char('u') => self.dispatch(Action::SetFilter(FixtureFilter::Upcoming)),
                KeyCode::Char('p') => self.dispatch(Action::SetFilter(FixtureFilter::Past)),
                _ => {}
            },
            Screen::Formation => match key.code {
                KeyCode::Char('h') | KeyCode::Left => self.dispatch(Action::PrevFormation),
                KeyCode::Char('l') | KeyCode::Right => self.dispatch(Action::NextFormation),
                _ => {}
            },
            Screen::Training => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    if let Some(id) = self.state.training.selected_module().map(|m| m.id.clone()) {
                        self.dispatch(Action::ToggleModule { id });
                    }
                }
            }
            _ => {}
        }
    }

    fn on_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Enter => {
                let Some(id) = self.state.availability.active_decline_id.clone() else {
                    return;
                };
                let reason = self.state.availability.highlighted_reason();
                self.dispatch(Action::Decline { id, reason });
            }
            KeyCode::Esc | KeyCode::Char('x') => self.dispatch(Action::CloseDeclinePicker),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn on_path_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.cancel_path_input(),
            KeyCode::Enter => self.state.submit_path_input(),
            KeyCode::Backspace => {
                if let Some(input) = self.state.path_input.as_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.state.path_input.as_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = PortalConfig::from_env().context("invalid portal configuration")?;
    let seed = load_seed(config.seed_path.as_deref())?;

    let mut state = AppState::from_seed(seed);
    if config.as_of.is_some() {
        state.as_of = config.as_of;
    }
    state.sidebar_collapsed = config.sidebar_collapsed;
    apply_action(&mut state, Action::NavigatePath(config.start_path.clone()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(state, config.tick_rate);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app.state))?;

        let timeout = app
            .tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= app.tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

use crate::app::{update, AppMsg, Effect};
use crate::model::{load_config, load_records};
use crate::screens::order_form::OrderFormScreen;
use crate::screens::order_list::OrderListScreen;
use crate::screens::Screen;
use crate::widgets::header::draw_header;
use crate::widgets::menu::{draw_menu, Menu};
use crate::widgets::status_bar::draw_status;
use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
}

pub struct Toast {
    pub text: String,
    pub level: ToastLevel,
    pub expires_at_tick: u64,
}

#[derive(Default)]
pub struct AppState {
    pub stack: Vec<Box<dyn Screen>>,
    pub menu: Option<Menu>,
    pub theme: crate::theme::Theme,
    pub tick: u64,
    pub toast: Option<Toast>,
    pub should_quit: bool,
}

pub(crate) fn apply_effects(state: &mut AppState, effects: Vec<Effect>) {
    for eff in effects {
        match eff {
            Effect::Push(screen) => state.stack.push(screen),
            Effect::Pop => {
                if let Some(popped) = state.stack.pop() {
                    hand_back_record(state, popped);
                }
                if state.stack.is_empty() {
                    state.should_quit = true;
                }
            }
            Effect::OpenMenu => {
                if let Some(top) = state.stack.last() {
                    let mut menu = Menu::default();
                    top.build_menu(&mut menu);
                    state.menu = Some(menu);
                }
            }
            Effect::CloseMenu => state.menu = None,
            Effect::Quit => state.should_quit = true,
            Effect::Toast {
                text,
                level,
                seconds,
            } => {
                let ticks = seconds.saturating_mul(5); // ~200ms tick
                state.toast = Some(Toast {
                    text,
                    level,
                    expires_at_tick: state.tick.saturating_add(ticks),
                });
            }
        }
    }
}

/// A popped form screen that saved a snapshot hands it back to the list
/// screen underneath.
fn hand_back_record(state: &mut AppState, popped: Box<dyn Screen>) {
    let Some(form) = popped.as_any().downcast_ref::<OrderFormScreen>() else {
        return;
    };
    let Some(record) = form.updated_order_record().cloned() else {
        return;
    };
    if let Some(top) = state.stack.last_mut() {
        if let Some(list) = top.as_any_mut().downcast_mut::<OrderListScreen>() {
            list.apply_update(record);
        }
    }
}

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());
    draw_header(f, chunks[0], state);
    let tick = state.tick;
    if let Some(top) = state.stack.last_mut() {
        top.render(f, chunks[1], tick);
    }
    draw_status(f, chunks[2], state, help_text(state));
    if let Some(menu) = &state.menu {
        draw_menu(f, chunks[1], menu);
    }
}

fn help_text(state: &AppState) -> &'static str {
    if state.menu.is_some() {
        "↑/↓ select • Enter run • Esc close"
    } else if state.stack.len() > 1 {
        "↑/↓ fields • Enter menu • Esc back"
    } else {
        "↑/↓ select • Enter menu • q quit"
    }
}

pub fn run() -> Result<()> {
    let cfg = load_config()?;
    let records = load_records(&cfg).context("loading order records")?;
    let title = cfg
        .title
        .clone()
        .unwrap_or_else(|| "Order Records".to_string());
    let mut state = AppState {
        theme: crate::theme::Theme::from_name(cfg.theme.as_deref()),
        ..Default::default()
    };
    if records.is_empty() {
        state.toast = Some(Toast {
            text: "No order records found".into(),
            level: ToastLevel::Info,
            expires_at_tick: 25,
        });
    }
    state.stack.push(Box::new(OrderListScreen::new(title, records)));

    // Headless smoke mode for CI: render a few ticks and exit.
    let headless = std::env::var("ORDER_DESK_HEADLESS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if headless {
        let ticks: u64 = std::env::var("ORDER_DESK_TICKS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend)?;
        for _ in 0..ticks {
            terminal.draw(|f| draw(f, &mut state))?;
            state.tick = state.tick.wrapping_add(1);
        }
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();
    let res = loop {
        terminal.draw(|f| draw(f, &mut state))?;
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_millis(0));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break Ok(());
                }
                let effects = update(&mut state, AppMsg::Key(key.code));
                apply_effects(&mut state, effects);
                if state.should_quit {
                    break Ok(());
                }
            }
        }
        if last_tick.elapsed() >= tick_rate {
            state.tick = state.tick.wrapping_add(1);
            let expired = state
                .toast
                .as_ref()
                .map(|t| state.tick >= t.expires_at_tick)
                .unwrap_or(false);
            if expired {
                state.toast = None;
            }
            last_tick = Instant::now();
        }
    };
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    res
}

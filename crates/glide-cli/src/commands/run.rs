use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use glide_core::{AppConfig, Debouncer};
use glide_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{HeaderBarWidget, PageViewWidget, PopupWidget, StatusBarWidget},
};

use super::load_page;

/// Rows taken by the header bar
const HEADER_ROWS: u16 = 2;
/// Rows taken by the status bar
const STATUS_ROWS: u16 = 1;

pub async fn run(config: Arc<AppConfig>, page_path: Option<&Path>) -> Result<()> {
    let page = load_page(page_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Glide"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, page, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    page: glide_core::Page,
    config: &AppConfig,
) -> Result<()> {
    let mut app = App::new(page, config, Instant::now());

    let size = terminal.size()?;
    app.relayout(page_rows(size.height), Instant::now());

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.scroll.animation_fps);

    // Resize bursts collapse into one relayout after the terminal settles
    let (resize_tx, mut resize_rx) = mpsc::unbounded_channel::<u16>();
    let resize = Debouncer::new(
        move |rows: u16| {
            if resize_tx.send(rows).is_err() {
                debug!("Resize receiver dropped");
            }
        },
        Duration::from_millis(config.debounce.resize_wait_ms),
        false,
    );

    info!("Terminal host started");

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = app.needs_fast_update();

    // Main loop
    loop {
        // Apply any settled resize (non-blocking)
        while let Ok(rows) = resize_rx.try_recv() {
            app.relayout(rows, Instant::now());
        }

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(HEADER_ROWS),
                    Constraint::Min(1),
                    Constraint::Length(STATUS_ROWS),
                ])
                .split(size);

            HeaderBarWidget::render(frame, main_layout[0], &app);
            PageViewWidget::render(frame, main_layout[1], &app);
            StatusBarWidget::render(frame, main_layout[2], &app);

            match app.mode {
                Mode::Menu => PopupWidget::render_menu(frame, main_layout[1], &app),
                Mode::Help => PopupWidget::render_help(frame),
                Mode::Normal => {}
            }
        })?;

        // Handle events (use faster tick rate during animations)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    app.clear_status();
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, now);
                }
                AppEvent::Mouse(mouse) => {
                    let area = terminal.get_frame().area();
                    handle_mouse(&mut app, mouse, area, now);
                }
                AppEvent::Resize(_, height) => {
                    resize.call(page_rows(height));
                }
                AppEvent::Tick => {}
            }
            // Every loop turn is a frame for the page
            app.tick(now);
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    resize.cancel();
    info!("Terminal host stopped");
    Ok(())
}

/// Rows left for the page view in a terminal `height` rows tall
fn page_rows(height: u16) -> u16 {
    height.saturating_sub(HEADER_ROWS + STATUS_ROWS).max(1)
}

fn handle_action(app: &mut App, action: Action, now: Instant) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_rows(1, now),
        Action::ScrollUp => app.scroll_rows(-1, now),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(now),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(now),
        Action::FollowLink(index) => app.follow_link(index, now),
        Action::BackToTop => app.back_to_top(now),
        Action::ToggleMenu => app.toggle_menu(now),
        Action::ToggleHelp => app.toggle_help(),
        Action::None => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect, now: Instant) {
    let top = area.y + HEADER_ROWS;
    let bottom = area.bottom().saturating_sub(STATUS_ROWS);
    if mouse.row < top || mouse.row >= bottom {
        return;
    }
    let row = usize::from(mouse.row - top);

    match mouse.kind {
        MouseEventKind::Moved => app.hover_row(row, now),
        MouseEventKind::Down(MouseButton::Left) => app.click_row(row, now),
        MouseEventKind::ScrollDown => app.scroll_rows(3, now),
        MouseEventKind::ScrollUp => app.scroll_rows(-3, now),
        _ => {}
    }
}

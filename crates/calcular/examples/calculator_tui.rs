//! Interactive calculator in the terminal.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example calculator_tui
//! ```
//!
//! Click the keypad or type: digits, `.` or `,`, `+ - * /`, `Enter` for
//! equals, `Backspace` for DEL, `Esc` or `c` for clear, `n` for the sign
//! toggle, `%` for percent, `q` to quit. Logs go to `calcular.log` next to
//! the working directory; set `RUST_LOG` to adjust verbosity.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use calcular::tui::{keypad_area, render, CalculatorApp, InputHandler, KeyAction};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Writing to stdout would corrupt the TUI; log to a file or not at all.
    if let Ok(file) = File::create("calcular.log") {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        match event::read()? {
            Event::Key(key) => {
                app.keypad_mut().release_all();
                match input_handler.handle_key(key) {
                    KeyAction::Press(token) => {
                        app.keypad_mut().highlight_token(token);
                        let _ = app.press(token);
                    }
                    KeyAction::Quit => app.quit(),
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let frame_area = Rect::new(0, 0, size.width, size.height);
                handle_mouse(&mut app, frame_area, &mouse);
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn handle_mouse(app: &mut CalculatorApp, frame_area: Rect, mouse: &MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    app.keypad_mut().release_all();

    let region = keypad_area(frame_area);
    if let Some(index) = app.keypad().hit_test(region, mouse.column, mouse.row) {
        if let Some(token) = app.keypad().get_button(index).map(|b| b.token) {
            app.keypad_mut().press_button(index);
            let _ = app.press(token);
        }
    }
}

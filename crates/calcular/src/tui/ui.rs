//! Screen composition: bordered root, right-aligned display, keypad
//! grid, and a one-line key reference.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::Frame;

use crate::tui::{CalculatorApp, KeypadWidget};

/// Root window title.
pub const APP_TITLE: &str = " Advanced Calculator ";

/// One-line key reference shown under the keypad.
pub const HELP_LINE: &str = "0-9 . + - * / | Enter = | Bksp DEL | c clear | n ± | % | q quit";

/// Renders the full calculator screen into the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Region occupied by the keypad grid, for mouse hit-testing.
///
/// Computed from the full frame area with the same layout the renderer
/// uses, so coordinates from mouse events can be passed straight to
/// [`Keypad::hit_test`](crate::tui::Keypad::hit_test).
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    screen_regions(area).get(1).copied().unwrap_or(area)
}

/// Splits the frame into display, keypad, and footer regions, inside the
/// root border.
fn screen_regions(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(1),
        ])
        .split(area)
        .to_vec()
}

/// Widget rendering the whole calculator.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the widget over the given application state.
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }

    fn render_footer(area: Rect, buf: &mut Buffer) {
        Paragraph::new(HELP_LINE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .render(area, buf);

        let regions = screen_regions(area);
        if regions.len() < 3 {
            return;
        }
        self.render_display(regions[0], buf);
        KeypadWidget::new(self.app.keypad()).render(regions[1], buf);
        Self::render_footer(regions[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Op, Token};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &CalculatorApp) {
        terminal.draw(|frame| render(app, frame)).unwrap();
    }

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn row_string(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width;
        (0..width)
            .map(|x| buffer.content[(y * width + x) as usize].symbol())
            .collect()
    }

    // ===== Full screen =====

    #[test]
    fn test_render_initial_screen() {
        let mut terminal = create_test_terminal();
        let app = CalculatorApp::new();
        draw(&mut terminal, &app);
        let content = buffer_content(&terminal);
        assert!(content.contains("Advanced Calculator"));
        assert!(content.contains("[C]"));
        assert!(content.contains("[=]"));
        assert!(content.contains("q quit"));
    }

    #[test]
    fn test_render_shows_typed_number() {
        let mut terminal = create_test_terminal();
        let mut app = CalculatorApp::new();
        for d in [1, 2, 3] {
            app.press(Token::Digit(d)).unwrap();
        }
        draw(&mut terminal, &app);
        assert!(buffer_content(&terminal).contains("123"));
    }

    #[test]
    fn test_display_is_right_aligned() {
        let mut terminal = create_test_terminal();
        let mut app = CalculatorApp::new();
        for d in [1, 2, 3] {
            app.press(Token::Digit(d)).unwrap();
        }
        draw(&mut terminal, &app);
        // Display text row sits inside the display block border
        let row = row_string(&terminal, 2);
        let position = row.find("123").unwrap();
        assert!(position > 40, "display not right-aligned: {row}");
    }

    #[test]
    fn test_render_error_state() {
        let mut terminal = create_test_terminal();
        let mut app = CalculatorApp::new();
        for token in [
            Token::Digit(5),
            Token::Operator(Op::Divide),
            Token::Digit(0),
        ] {
            app.press(token).unwrap();
        }
        let _ = app.press(Token::Equals);
        draw(&mut terminal, &app);
        assert!(buffer_content(&terminal).contains("ERROR"));
    }

    #[test]
    fn test_render_highlighted_button() {
        let mut terminal = create_test_terminal();
        let mut app = CalculatorApp::new();
        app.keypad_mut().highlight_token(Token::Digit(7));
        draw(&mut terminal, &app);
        // Face text unchanged; the highlight only restyles the cell
        assert!(buffer_content(&terminal).contains("[7]"));
    }

    // ===== Layout =====

    #[test]
    fn test_keypad_area_below_display() {
        let area = Rect::new(0, 0, 80, 24);
        let keypad = keypad_area(area);
        assert_eq!(keypad.x, 1);
        assert_eq!(keypad.width, 78);
        assert_eq!(keypad.y, 4);
        assert!(keypad.height >= 7);
    }

    #[test]
    fn test_keypad_area_agrees_with_hit_test() {
        let mut terminal = create_test_terminal();
        let app = CalculatorApp::new();
        draw(&mut terminal, &app);
        let region = keypad_area(Rect::new(0, 0, 80, 24));
        // Just inside the keypad border is the top-left button
        assert_eq!(
            app.keypad().hit_test(region, region.x + 1, region.y + 1),
            Some(0)
        );
    }

    // ===== Degenerate sizes =====

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let app = CalculatorApp::new();
        draw(&mut terminal, &app);
    }

    #[test]
    fn test_render_narrow_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(3, 30)).unwrap();
        let app = CalculatorApp::new();
        draw(&mut terminal, &app);
    }
}

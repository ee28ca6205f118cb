//! Calculator keypad: a 5x4 button grid with mouse hit-testing.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Widget};

use crate::engine::{Op, Token};

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text shown on the button face
    pub label: &'static str,
    /// Whether the button is currently highlighted as pressed
    pub pressed: bool,
    /// Token emitted when the button is activated
    pub token: Token,
}

impl KeypadButton {
    /// Creates an unpressed button for the given token.
    #[must_use]
    pub const fn new(token: Token) -> Self {
        Self {
            label: token.label(),
            pressed: false,
            token,
        }
    }

    /// Sets the pressed highlight.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The full keypad grid, row-major.
///
/// Layout mirrors a pocket calculator: clear and the display transforms
/// on top, digits descending 7-8-9 to 0, operators down the right edge,
/// equals in the bottom-right corner.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard 5x4 keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ± % ÷
            KeypadButton::new(Token::Clear),
            KeypadButton::new(Token::ToggleSign),
            KeypadButton::new(Token::Percent),
            KeypadButton::new(Token::Operator(Op::Divide)),
            // Row 1: 7 8 9 ×
            KeypadButton::new(Token::Digit(7)),
            KeypadButton::new(Token::Digit(8)),
            KeypadButton::new(Token::Digit(9)),
            KeypadButton::new(Token::Operator(Op::Multiply)),
            // Row 2: 4 5 6 −
            KeypadButton::new(Token::Digit(4)),
            KeypadButton::new(Token::Digit(5)),
            KeypadButton::new(Token::Digit(6)),
            KeypadButton::new(Token::Operator(Op::Subtract)),
            // Row 3: 1 2 3 +
            KeypadButton::new(Token::Digit(1)),
            KeypadButton::new(Token::Digit(2)),
            KeypadButton::new(Token::Digit(3)),
            KeypadButton::new(Token::Operator(Op::Add)),
            // Row 4: 0 . DEL =
            KeypadButton::new(Token::Digit(0)),
            KeypadButton::new(Token::Decimal),
            KeypadButton::new(Token::Delete),
            KeypadButton::new(Token::Equals),
        ];
        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Total number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as `(rows, cols)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order.
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a flat index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Button at a grid position.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.get(row * self.cols + col)
    }

    /// Flat index of the button emitting the given token.
    #[must_use]
    pub fn find_button_by_token(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Flat index of the button with the given face label.
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Every button with its `(row, col)` position.
    #[must_use]
    pub fn buttons_with_positions(&self) -> Vec<(usize, usize, &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, b)| (i / self.cols, i % self.cols, b))
            .collect()
    }

    /// Marks a button as pressed. Returns `false` for an invalid index.
    pub fn press_button(&mut self, index: usize) -> bool {
        match self.buttons.get_mut(index) {
            Some(button) => {
                button.set_pressed(true);
                true
            }
            None => false,
        }
    }

    /// Clears every pressed highlight.
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.set_pressed(false);
        }
    }

    /// Highlights exactly the button for the given token, releasing any
    /// previous highlight. Returns `false` if no button emits the token.
    pub fn highlight_token(&mut self, token: Token) -> bool {
        self.release_all();
        match self.find_button_by_token(token) {
            Some(index) => self.press_button(index),
            None => false,
        }
    }

    /// Maps a screen coordinate inside the rendered keypad back to a
    /// button index. `area` must be the same rect the widget was rendered
    /// into; its one-cell border is excluded from the grid.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if area.width <= 2 || area.height <= 2 {
            return None;
        }
        let inner_x = area.x + 1;
        let inner_y = area.y + 1;
        let inner_w = area.width - 2;
        let inner_h = area.height - 2;
        if x < inner_x || y < inner_y || x >= inner_x + inner_w || y >= inner_y + inner_h {
            return None;
        }

        let btn_w = inner_w / self.cols as u16;
        let btn_h = inner_h / self.rows as u16;
        if btn_w == 0 || btn_h == 0 {
            return None;
        }

        let col = ((x - inner_x) / btn_w) as usize;
        let row = ((y - inner_y) / btn_h) as usize;
        // Clicks in the remainder strip past the last column or row miss
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row * self.cols + col)
    }
}

/// Widget rendering the keypad grid.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over the given keypad.
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(button: &KeypadButton) -> Style {
        if button.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match button.token {
            Token::Operator(_) => Style::default().fg(Color::Yellow),
            Token::Clear => Style::default().fg(Color::Red),
            Token::Equals => Style::default().fg(Color::Green),
            Token::ToggleSign | Token::Percent | Token::Delete => {
                Style::default().fg(Color::Gray)
            }
            Token::Digit(_) | Token::Decimal => Style::default().fg(Color::White),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Keypad ").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let (rows, cols) = self.keypad.dimensions();
        let btn_w = inner.width / cols as u16;
        let btn_h = inner.height / rows as u16;
        if btn_w < 3 || btn_h == 0 {
            // Too small to draw button faces
            return;
        }

        for (row, col, button) in self.keypad.buttons_with_positions() {
            let cell_x = inner.x + col as u16 * btn_w;
            let cell_y = inner.y + row as u16 * btn_h;
            let face = format!("[{}]", button.label);
            let face_width = face.chars().count() as u16;
            let x_offset = btn_w.saturating_sub(face_width) / 2;
            let y_offset = btn_h / 2;
            buf.set_span(
                cell_x + x_offset,
                cell_y + y_offset,
                &Span::styled(face, Self::button_style(button)),
                btn_w,
            );
        }
    }
}

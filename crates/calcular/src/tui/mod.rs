//! Terminal frontend: application state, keypad grid, keyboard mapping,
//! and rendering.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, APP_TITLE, HELP_LINE};

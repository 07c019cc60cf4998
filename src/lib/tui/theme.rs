//! TUI Theme - Consistent, elegant styling
//!
//! Soft cyan for primary elements, muted accents elsewhere.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Success indicator - soft green
pub const SUCCESS: Color = Color::Rgb(130, 200, 130);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Header/title style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Subtitle/secondary text style
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Loading indicator and placeholder style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::ITALIC)
}

/// User message prefix style
pub fn user_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// AI message prefix style
pub fn ai_prefix() -> Style {
    Style::default().fg(SUCCESS)
}

/// Failed turn prefix style
pub fn error_prefix() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

/// Failed turn body style
pub fn error_text() -> Style {
    Style::default().fg(ERROR)
}

/// System message style
pub fn system_prefix() -> Style {
    Style::default()
        .fg(HIGHLIGHT)
        .add_modifier(Modifier::ITALIC)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}

//! Terminal capability detection and colouring

use hospital::ColorChoice;
use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Colours shell output, or leaves it plain when colour is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Resolves the configured colour choice against the terminal.
    pub fn new(choice: ColorChoice) -> Self {
        let enabled = match choice {
            ColorChoice::Auto => supports_color(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Self { enabled }
    }

    /// A palette that never colours.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Whether this palette colours its output.
    pub const fn enabled(self) -> bool {
        self.enabled
    }

    /// Color as success (green)
    pub fn success(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as warning (amber)
    pub fn warning(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as info (blue)
    pub fn info(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::LightBlue>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    pub fn dim(self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

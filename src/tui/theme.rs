use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    /// Fill of secondary buttons
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Selected pill, primary button, slider
    pub accent: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0F, 0x0F, 0x1B),
            surface: Color::Rgb(0x1C, 0x1C, 0x2E),
            text: Color::Rgb(0xDD, 0xDD, 0xE8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x80, 0x80, 0x80),
            accent: Color::Rgb(0x7A, 0x55, 0xFC),
            border: Color::Rgb(0x33, 0x33, 0x33),
            selection_bg: Color::Rgb(0x2D, 0x22, 0x5A),
            match_fg: Color::Rgb(0xB8, 0xA4, 0xFF),
        }
    }
}

/// Parse a hex color string like "#7A55FC" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "surface" => theme.surface = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "accent" => theme.accent = color,
                "border" => theme.border = color,
                "selection_bg" => theme.selection_bg = color,
                "match_fg" => theme.match_fg = color,
                _ => {}
            }
        }

        theme
    }
}

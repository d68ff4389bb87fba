use crate::config::Config;
use crate::notify::ToastKind;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub copied: Color,
    pub language: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub toast_success: Color,
    pub toast_error: Color,
    pub toast_warning: Color,
    pub toast_info: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            cursor: Color::Cyan,
            copied: Color::Green,
            language: Color::DarkGray,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            toast_success: Color::Green,
            toast_error: Color::Red,
            toast_warning: Color::Yellow,
            toast_info: Color::Blue,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            cursor: Color::Blue,
            copied: Color::Green,
            language: Color::Gray,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
            toast_success: Color::Green,
            toast_error: Color::Red,
            toast_warning: Color::Yellow,
            toast_info: Color::Blue,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }

    pub fn toast_color(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => self.toast_success,
            ToastKind::Error => self.toast_error,
            ToastKind::Warning => self.toast_warning,
            ToastKind::Info => self.toast_info,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

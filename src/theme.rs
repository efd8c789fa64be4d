use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub selected: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl Theme {
    pub fn slate_dark() -> Self {
        Self {
            bg: Color::Rgb(24, 26, 30),
            fg: Color::White,
            accent: Color::Rgb(95, 175, 255),
            selected: Color::Rgb(255, 135, 0),
            success: Color::Green,
            error: Color::Red,
            muted: Color::DarkGray,
        }
    }

    pub fn slate_light() -> Self {
        Self {
            bg: Color::Rgb(245, 245, 247),
            fg: Color::Rgb(20, 20, 22),
            accent: Color::Rgb(30, 110, 210),
            selected: Color::Rgb(210, 95, 0),
            success: Color::Rgb(0, 140, 0),
            error: Color::Rgb(190, 0, 0),
            muted: Color::Rgb(120, 120, 130),
        }
    }

    /// Resolve the palette named in the config; anything unknown means dark.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if n.eq_ignore_ascii_case("light") => Self::slate_light(),
            _ => Self::slate_dark(),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn toast_color(&self, level: crate::ui::ToastLevel) -> Color {
        match level {
            crate::ui::ToastLevel::Success => self.success,
            crate::ui::ToastLevel::Info => self.accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate_dark()
    }
}

// Helpers over the default palette for widgets that do not carry a theme.
pub fn border_focused() -> Style {
    Style::default().fg(Theme::default().selected)
}

pub fn text_active_bold() -> Style {
    Style::default()
        .fg(Theme::default().accent)
        .add_modifier(Modifier::BOLD)
}

pub fn text_editing_bold() -> Style {
    Style::default()
        .fg(Theme::default().selected)
        .add_modifier(Modifier::BOLD)
}

pub fn text_muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn list_cursor_style() -> Style {
    let t = Theme::default();
    Style::default()
        .fg(t.bg)
        .bg(t.selected)
        .add_modifier(Modifier::BOLD)
}

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(201, 124, 74);
    pub const ACCENT_SOFT: Color = Color::Rgb(226, 184, 140);
    pub const BG_SURFACE: Color = Color::Rgb(38, 32, 28);
    pub const TEXT_PRIMARY: Color = Color::Rgb(240, 232, 220);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 140, 128);
    pub const DESTRUCTIVE: Color = Color::Rgb(210, 80, 70);
    pub const SUCCESS: Color = Color::Rgb(120, 180, 110);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn portal_title() -> Style {
        Style::default()
            .fg(Self::ACCENT_SOFT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn tab() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::BG_SURFACE)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_card() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_SOFT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_ok() -> Style {
        Style::default().fg(Self::SUCCESS).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default()
            .fg(Self::DESTRUCTIVE)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn popup() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }
}

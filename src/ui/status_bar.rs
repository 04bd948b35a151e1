use crate::app::state::*;
use crate::portal::router::Section;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Two rows: the portal footer, then the status line with key hints.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [footer_area, status_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let footer = Line::from(vec![
        Span::styled(format!(" {} ", state.config.portal.footer), Theme::tab_active()),
        Span::styled(format!(" {} ", state.config.portal.footer_note), Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(footer).style(Theme::status_bar()), footer_area);

    let status_style = match state.status {
        Some(ref s) if s.is_error => Theme::status_error(),
        Some(_) => Theme::status_ok(),
        None => Theme::status_bar(),
    };
    let status = format!(" {} ", state.status_line());

    let hints = key_hints(state);
    // Pad to fill remaining space
    let remaining = (status_area.width as usize).saturating_sub(status.width() + hints.width() + 2);
    let line = Line::from(vec![
        Span::styled(status, status_style),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(format!(" {} ", hints), Theme::status_bar()),
    ]);
    frame.render_widget(Paragraph::new(line), status_area);
}

fn key_hints(state: &AppState) -> &'static str {
    if state.news.is_composer_open() {
        return "Ctrl-S опубликовать · Tab поле · Esc закрыть";
    }
    match state.current_section() {
        Section::News => "n добавить · ↑↓ выбор · d удалить · q выход",
        _ => "1-5 разделы · Tab далее · q выход",
    }
}

use crate::app::state::AppState;
use crate::ui::layout::card_grid;
use crate::ui::theme::Theme;
use crate::ui::{card_block, section_heading};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [heading_area, grid_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);
    frame.render_widget(
        section_heading(Line::from(Span::styled(" Контакты семьи", Theme::heading()))),
        heading_area,
    );

    let cells = card_grid(grid_area, state.contacts.len(), 2, 5);
    for (contact, cell) in state.contacts.iter().zip(cells) {
        let row = |icon: &'static str, value: &str| {
            Line::from(vec![
                Span::styled(format!(" {} ", icon), Theme::muted()),
                Span::styled(value.to_string(), Theme::text()),
            ])
        };
        let card = Paragraph::new(vec![
            row("☎", &contact.phone),
            row("✉", &contact.email),
            row("⌖", &contact.city),
        ])
        .block(card_block(format!(" 👤 {} ", contact.name)));
        frame.render_widget(card, cell);
    }
}

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
        section_heading(Line::from(Span::styled(" Семейная галерея", Theme::heading()))),
        heading_area,
    );

    let cells = card_grid(grid_area, state.gallery.len(), 3, 6);
    for (item, cell) in state.gallery.iter().zip(cells) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled("🖼", Theme::muted())),
            Line::default(),
            Line::from(Span::styled(item.caption.as_str(), Theme::title())),
            Line::from(Span::styled(item.year.to_string(), Theme::muted())),
        ])
        .alignment(Alignment::Center)
        .block(card_block(""));
        frame.render_widget(card, cell);
    }
}

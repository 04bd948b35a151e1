use crate::app::state::AppState;
use crate::portal::draft::{DraftField, TextField};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

const CONTENT_ROWS: u16 = 6;

/// "Новая запись" dialog drawn over the active section.
pub fn render(frame: &mut Frame, state: &AppState) {
    let popup_area = centered(frame.area(), 64, CONTENT_ROWS + 15);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Новая запись ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1))
        .style(Theme::popup());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 8 || inner.width < 20 {
        return;
    }

    let [title_area, content_area, author_area, submit_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(CONTENT_ROWS + 2),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .areas(inner);

    let draft = &state.news.draft;
    for (field, area) in [
        (DraftField::Title, title_area),
        (DraftField::Content, content_area),
        (DraftField::Author, author_area),
    ] {
        render_field(
            frame,
            area,
            field,
            draft.field(field),
            state.composer_field == field,
        );
    }

    let submit = Paragraph::new(Line::from(vec![
        Span::styled("[ Опубликовать ]", Theme::tab_active()),
        Span::styled("  Ctrl-S", Theme::key_hint()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(submit, submit_area);

    let help = Line::from(vec![
        Span::styled(" Tab", Theme::key_hint()),
        Span::styled(" Поле  ", Theme::muted()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Далее  ", Theme::muted()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Закрыть", Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}

fn render_field(frame: &mut Frame, area: Rect, field: DraftField, input: &TextField, focused: bool) {
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(if focused { Theme::title() } else { Theme::muted() })
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (row, head) = input.cursor_line();
    let head_width = head.width();
    let scroll_x = horizontal_scroll(head_width, inner.width);

    if input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(field.placeholder(), Theme::placeholder()));
        frame.render_widget(placeholder, inner);
    } else {
        let scroll_y = (row as u16).saturating_sub(inner.height.saturating_sub(1));
        let lines: Vec<Line> = input
            .text
            .split('\n')
            .map(|l| Line::from(Span::styled(l, Theme::text())))
            .collect();
        frame.render_widget(Paragraph::new(lines).scroll((scroll_y, scroll_x)), inner);
    }

    if focused && inner.width > 0 && inner.height > 0 {
        let row = (row as u16).min(inner.height - 1);
        let col = (head_width.saturating_sub(scroll_x as usize) as u16).min(inner.width - 1);
        frame.set_cursor_position((inner.x + col, inner.y + row));
    }
}

/// Columns to shift the text left so a cursor `head_width` columns into the
/// line stays inside a box `width` columns wide.
fn horizontal_scroll(head_width: usize, width: u16) -> u16 {
    let visible = (width as usize).saturating_sub(1);
    head_width.saturating_sub(visible).min(u16::MAX as usize) as u16
}

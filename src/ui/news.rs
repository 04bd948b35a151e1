use crate::app::state::AppState;
use crate::portal::dates;
use crate::portal::model::NewsItem;
use crate::ui::theme::Theme;
use crate::ui::{section_heading, wrap_text};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [heading_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    let heading = Line::from(vec![
        Span::styled(" Семейные новости", Theme::heading()),
        Span::raw("   "),
        Span::styled("[n]", Theme::key_hint()),
        Span::styled(" Добавить новость", Theme::muted()),
    ]);
    frame.render_widget(section_heading(heading), heading_area);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border());
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    if state.news.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " Пока нет новостей. Нажмите n, чтобы добавить первую.",
            Theme::muted(),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let width = inner.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_span = (0usize, 0usize);
    for (i, item) in state.news.items().iter().enumerate() {
        let start = lines.len();
        let selected = i == state.news_cursor;
        lines.extend(item_lines(item, selected, width));
        if selected {
            selected_span = (start, lines.len());
        }
    }

    // Keep the highlighted item in view
    let (start, end) = selected_span;
    let height = inner.height as usize;
    let scroll = if end > height {
        (end - height).min(start)
    } else {
        0
    };

    let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn item_lines(item: &NewsItem, selected: bool, width: usize) -> Vec<Line<'static>> {
    let (marker, title_style) = if selected {
        ("▶ ", Theme::selected_card().add_modifier(Modifier::BOLD))
    } else {
        ("  ", Theme::title())
    };

    let mut meta = vec![
        Span::raw("  "),
        Span::styled(
            format!("{} • {}", item.author, dates::format_long(item.date)),
            Theme::muted(),
        ),
    ];
    if selected {
        meta.push(Span::raw("   "));
        meta.push(Span::styled("[d]", Theme::key_hint()));
        meta.push(Span::styled(
            " удалить",
            Style::default().fg(Theme::DESTRUCTIVE),
        ));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, Theme::selected_card()),
            Span::styled(item.title.clone(), title_style),
        ]),
        Line::from(meta),
    ];
    for line in wrap_text(&item.content, width) {
        lines.push(Line::from(Span::styled(format!("  {}", line), Theme::text())));
    }
    lines.push(Line::default());
    lines
}

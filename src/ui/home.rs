use crate::app::state::AppState;
use crate::portal::dates;
use crate::ui::theme::Theme;
use crate::ui::{card_block, clip_lines};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const WELCOME: &str = "Добро пожаловать в наш семейный портал";
const INTRO: &str = "Место, где собраны наши истории, воспоминания и традиции. \
                     Здесь мы делимся новостями, храним фотографии и помним о важных датах.";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [welcome_area, cards_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(6)]).areas(area);

    let welcome = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(WELCOME, Theme::heading())),
        Line::from(Span::styled(INTRO, Theme::muted())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(welcome, welcome_area);

    let [events_area, news_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .areas(cards_area);

    render_events(frame, events_area, state);
    render_latest_news(frame, news_area, state);
}

fn render_events(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = card_block(" 📅 Предстоящие события ");
    let mut lines: Vec<Line> = Vec::new();
    for event in state.calendar.upcoming(state.config.ui.home_event_count) {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", event.kind.glyph()), Theme::heading()),
            Span::styled(event.title.as_str(), Theme::title()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", dates::format_long(event.date)),
            Theme::muted(),
        )));
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(" Событий нет", Theme::muted())));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_latest_news(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = card_block(" 📰 Последние новости ");
    let width = block.inner(area).width.saturating_sub(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for item in state.news.recent(state.config.ui.home_news_count) {
        lines.push(Line::from(Span::styled(
            format!(" {}", item.title),
            Theme::title(),
        )));
        for line in clip_lines(&item.content, width, 2) {
            lines.push(Line::from(Span::styled(format!(" {}", line), Theme::text())));
        }
        lines.push(Line::from(Span::styled(
            format!(" {} • {}", item.author, dates::format_short(item.date)),
            Theme::muted(),
        )));
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(" Новостей пока нет", Theme::muted())));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

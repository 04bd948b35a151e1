use crate::app::state::AppState;
use crate::portal::router::Section;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

/// Portal title, subtitle and the section tab bar.
pub fn render(frame: &mut Frame, header: Rect, nav: Rect, state: &AppState) {
    let portal = &state.config.portal;
    let lines = vec![
        Line::from(vec![
            Span::styled(" ⌂ ", Style::default().fg(Theme::ACCENT)),
            Span::styled(portal.title.as_str(), Theme::portal_title()),
        ]),
        Line::from(Span::styled(format!("   {}", portal.subtitle), Theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines), header);

    let titles = Section::ALL
        .iter()
        .map(|s| format!(" {} {} ", s.index() + 1, s.label()));
    let tabs = Tabs::new(titles)
        .select(state.current_section().index())
        .style(Theme::tab())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled("│", Theme::border()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Theme::border()),
        );
    frame.render_widget(tabs, nav);
}

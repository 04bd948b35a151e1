mod composer;
mod contacts;
mod gallery;
mod header;
mod home;
mod layout;
mod news;
mod status_bar;
mod theme;
mod tree;

use crate::app::state::AppState;
use crate::portal::router::Section;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    header::render(frame, app_layout.header, app_layout.nav, state);
    match state.current_section() {
        Section::Home => home::render(frame, app_layout.content, state),
        Section::News => news::render(frame, app_layout.content, state),
        Section::Gallery => gallery::render(frame, app_layout.content, state),
        Section::Tree => tree::render(frame, app_layout.content, state),
        Section::Contacts => contacts::render(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    if state.news.is_composer_open() {
        composer::render(frame, state);
    }
}

fn section_heading(line: Line) -> Paragraph {
    Paragraph::new(line)
}

fn card_block<'a, T: Into<Line<'a>>>(title: T) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
}

/// Greedy word wrap to `width` display columns. Explicit newlines start a
/// new line; words wider than the line are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            if !line.is_empty() {
                if line_width + 1 + word.width() > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                } else {
                    line.push(' ');
                    line_width += 1;
                }
            }
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if line_width + w > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += w;
            }
        }
        lines.push(line);
    }
    lines
}

/// [`wrap_text`] limited to `max_lines`, marking the cut with an ellipsis.
fn clip_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            while !last.is_empty() && last.width() + 1 > width {
                last.pop();
            }
            last.push('…');
        }
    }
    lines
}

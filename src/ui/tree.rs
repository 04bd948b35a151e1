use crate::app::state::AppState;
use crate::portal::model::FamilyMember;
use crate::portal::tree::{FamilyTree, DISPLAYED_GENERATIONS};
use crate::ui::theme::Theme;
use crate::ui::{card_block, section_heading};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [heading_area, tree_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);
    frame.render_widget(
        section_heading(Line::from(Span::styled(" Древо семьи", Theme::heading()))),
        heading_area,
    );

    let mut lines: Vec<Line> = Vec::new();
    for (i, (generation, heading)) in DISPLAYED_GENERATIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled("│", Theme::border())));
        }
        lines.push(Line::from(Span::styled(*heading, Theme::heading())));

        let members = state.tree.members_of_generation(*generation);
        let names: Vec<Span> = members
            .iter()
            .enumerate()
            .flat_map(|(j, m)| {
                let gap = if j > 0 { "     " } else { "" };
                [
                    Span::raw(gap),
                    Span::styled(format!("👤 {}", m.name), Theme::title()),
                ]
            })
            .collect();
        lines.push(Line::from(names));

        let parents = parent_names(&state.tree, &members);
        if !parents.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("родители: {}", parents.join(", ")),
                Theme::muted(),
            )));
        }
    }

    let tree = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(card_block(""));
    frame.render_widget(tree, tree_area);
}

/// Distinct parent names of `members`, in first-seen order.
fn parent_names(tree: &FamilyTree, members: &[&FamilyMember]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for member in members {
        for parent in tree.parents_of(member.id) {
            if !names.contains(&parent.name) {
                names.push(parent.name.clone());
            }
        }
    }
    names
}

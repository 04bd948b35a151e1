use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub nav: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Length(3), // Section tabs
            Constraint::Min(5),    // Active section
            Constraint::Length(2), // Footer + status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        nav: chunks[1],
        content: chunks[2],
        status_bar: chunks[3],
    }
}

/// Split `area` into rows of `columns` equally sized cells, `row_height`
/// lines each, enough for `count` cards. Cells past the area are dropped.
pub fn card_grid(area: Rect, count: usize, columns: usize, row_height: u16) -> Vec<Rect> {
    if count == 0 || columns == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let mut cells = Vec::with_capacity(count);
    for r in 0..rows {
        let y = area.y.saturating_add(row_height.saturating_mul(r as u16));
        if y.saturating_add(row_height) > area.bottom() {
            break;
        }
        let row = Rect::new(area.x, y, area.width, row_height);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row);
        cells.extend(cols.iter().copied());
    }
    cells.truncate(count);
    cells
}

/// A `width` x `height` rectangle centred in `area`, clamped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

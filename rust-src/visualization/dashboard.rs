//! Dashboard layout: header, tab bar, active view and status line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::dashboard::{DashboardState, Tab};
use crate::view::TableView;
use crate::visualization::{render_charts, render_table};


const TITLE: &str = "Financial Data Dashboard";
const TAB_DIVIDER: &str = "|";


/// Screen regions from the last render, used for mouse hit-testing and paging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardLayout {
    pub tabs: Rect,
    pub main: Rect,
}


/// Render the complete dashboard.
pub fn render_dashboard(
    frame: &mut Frame,
    state: &DashboardState,
    table: Option<&TableView>,
    scroll_offset: u32,
) -> DashboardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_tabs(frame, chunks[1], state.active_tab);

    match (state.active_tab, table) {
        (Tab::Charts, _) => render_charts(frame, chunks[2], &state.line_chart, &state.bar_chart),
        (Tab::Table1, Some(view)) => {
            render_table(frame, chunks[2], Tab::Table1.title(), view, scroll_offset, &[]);
        }
        (Tab::Table2, Some(view)) => {
            let mutated = state.mutated_indices();
            render_table(frame, chunks[2], Tab::Table2.title(), view, scroll_offset, &mutated);
        }
        (_, None) => {}
    }

    render_status(frame, chunks[3], state, table, scroll_offset);

    DashboardLayout {
        tabs: chunks[1],
        main: chunks[2],
    }
}


fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}


fn render_tabs(frame: &mut Frame, area: Rect, active: Tab) {
    let tabs = Tabs::new(Tab::all().iter().map(|tab| tab.title()))
        .block(Block::default().borders(Borders::ALL))
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(TAB_DIVIDER);
    frame.render_widget(tabs, area);
}


fn render_status(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    table: Option<&TableView>,
    scroll_offset: u32,
) {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();

    if let Some(view) = table {
        spans.push(Span::styled(
            format!(" Rows {}/{} ", view.visible_count(), view.data().len()),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(format!("offset {scroll_offset}px "), dim));
        if state.active_tab == Tab::Table2 {
            spans.push(Span::styled(
                format!("{} rows changed ", state.mutation_log.len()),
                Style::default().fg(Color::Yellow),
            ));
        }
    } else {
        spans.push(Span::styled(
            format!(" First {} records ", state.line_chart.series.len()),
            Style::default().fg(Color::Cyan),
        ));
    }

    spans.push(Span::styled(
        "[1-3/Tab] switch  [↑↓ PgUp PgDn Home End] scroll  [q] quit",
        dim,
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}


/// Tab whose title sits under column `x` of row `y` in the tab bar.
pub fn tab_at(tabs_area: Rect, x: u16, y: u16) -> Option<Tab> {
    let inner_y = tabs_area.y + 1;
    if y != inner_y || x <= tabs_area.x {
        return None;
    }

    let divider = TAB_DIVIDER.chars().count() as u16;
    let mut start = tabs_area.x + 1;
    for &tab in Tab::all() {
        // one column of padding on either side of the title
        let end = start + tab.title().chars().count() as u16 + 2;
        if (start..end).contains(&x) {
            return Some(tab);
        }
        start = end + divider;
    }
    None
}

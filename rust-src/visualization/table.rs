//! Record table rendering.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::view::{first_row_for, TableView};


const HEADERS: [&str; 5] = ["Company Name", "Ticker", "COB Date", "Stock Price", "Market Cap"];


fn right(text: String) -> Cell<'static> {
    Cell::from(Line::from(text).alignment(Alignment::Right))
}


/// Render every revealed row of `view`, scrolled to `scroll_offset`.
///
/// Rows whose index is in `highlighted` (sorted) are drawn in the accent colour.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    view: &TableView,
    scroll_offset: u32,
    highlighted: &[usize],
) {
    let rows = view.visible_rows().iter().enumerate().map(|(index, record)| {
        let style = if highlighted.binary_search(&index).is_ok() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(record.company_name.clone()),
            Cell::from(record.ticker.clone()),
            Cell::from(record.date_key()),
            right(record.price_display()),
            right(record.market_cap_display()),
        ])
        .style(style)
    });

    let header = Row::new(HEADERS)
        .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan))
        .bottom_margin(1);

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} ")),
    );

    let mut state = TableState::default().with_offset(first_row_for(scroll_offset, view.visible_count()));
    frame.render_stateful_widget(table, area, &mut state);
}

//! Line and bar chart rendering for the charts tab.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::charts::{ChartSpec, Rgba};
use crate::visualization::format_number;


const BAR_GAP: u16 = 1;


fn color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}


fn chart_block(spec: &ChartSpec) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", spec.label))
}


/// Width of each bar so `count` bars fill `width` columns inside a border.
pub fn bar_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let inner = width.saturating_sub(2);
    let count = count as u16;
    (inner.saturating_sub(BAR_GAP * count.saturating_sub(1)) / count).max(1)
}


/// Render both charts side by side (stacked when the area is narrow).
pub fn render_charts(frame: &mut Frame, area: Rect, line: &ChartSpec, bar: &ChartSpec) {
    let direction = if area.width >= 100 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_line_chart(frame, chunks[0], line);
    render_bar_chart(frame, chunks[1], bar);
}


fn render_placeholder(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let text = Paragraph::new("No records to chart")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(chart_block(spec));
    frame.render_widget(text, area);
}


fn render_line_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    if spec.series.is_empty() {
        render_placeholder(frame, area, spec);
        return;
    }

    let points: Vec<(f64, f64)> = spec
        .series
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| (i as f64, value))
        .collect();

    let datasets = vec![Dataset::default()
        .name(spec.label)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color(spec.style.color)))
        .data(&points)];

    let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
    let y_max = (spec.series.max_value() * 1.1).max(1.0);

    // first and last ticker only; ten labels crowd narrow terminals
    let labels = &spec.series.labels;
    let x_labels: Vec<Span> = match (labels.first(), labels.last()) {
        (Some(first), Some(last)) if labels.len() > 1 => {
            vec![Span::raw(first.as_str()), Span::raw(last.as_str())]
        }
        (Some(only), _) => vec![Span::raw(only.as_str())],
        _ => Vec::new(),
    };
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_max / 2.0)),
        Span::raw(format!("{:.0}", y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(spec))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}


fn render_bar_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    if spec.series.is_empty() {
        render_placeholder(frame, area, spec);
        return;
    }

    let style = Style::default().fg(color(spec.style.color));
    let bars: Vec<Bar> = spec
        .series
        .labels
        .iter()
        .zip(&spec.series.values)
        .map(|(label, &value)| {
            Bar::default()
                .label(Line::from(label.as_str()))
                .value(value.max(0.0).round() as u64)
                .text_value(format_number(value.round() as i64))
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(spec))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area.width, bars.len()))
        .bar_gap(BAR_GAP);

    frame.render_widget(chart, area);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(62, 10), 5);
        assert_eq!(bar_width(10, 10), 1);
        assert_eq!(bar_width(40, 0), 1);
        assert_eq!(bar_width(22, 1), 20);
    }

    #[test]
    fn test_color_drops_alpha() {
        let rgba = Rgba { r: 53, g: 162, b: 235, alpha: 0.5 };
        assert_eq!(color(rgba), Color::Rgb(53, 162, 235));
    }
}

//! Historical trend view: one line chart per metric, fixed 0..100 Y axis.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::history::HistoryBuffer;
use crate::types::Metric;
use crate::ui::theme::{series_color, Palette};
use crate::ui::util::{axis_labels, draw_message};

pub const NO_HISTORY: &str = "No historical data available. Please wait for more data points.";

pub fn draw_history(f: &mut ratatui::Frame<'_>, area: Rect, history: &HistoryBuffer, pal: &Palette) {
    if history.is_empty() {
        draw_message(f, area, NO_HISTORY, Style::default().fg(pal.text));
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let x_labels = axis_labels(&history.labels());
    for (metric, slot) in Metric::ALL.into_iter().zip(rows.iter()) {
        draw_trend(f, *slot, history, metric, &x_labels, pal);
    }
}

fn draw_trend(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    history: &HistoryBuffer,
    metric: Metric,
    x_labels: &[String],
    pal: &Palette,
) {
    let data = history.chart_points(metric);
    let x_max = data.len().saturating_sub(1).max(1) as f64;
    let axis_style = Style::default().fg(pal.muted);

    let line = Dataset::default()
        .name(format!("{} (%)", metric.title()))
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(series_color(metric)))
        .data(&data);

    let chart = Chart::new(vec![line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} Over Time", metric.title()))
                .style(Style::default().fg(pal.text)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(x_labels.iter().map(|l| Span::raw(l.clone())).collect::<Vec<_>>())
                .style(axis_style),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")])
                .style(axis_style),
        );
    f.render_widget(chart, area);
}

//! Current snapshot view: one gauge card per metric plus the last-updated stamp.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::types::{Metric, Snapshot};
use crate::ui::theme::{gauge_color, Palette};
use crate::ui::util::{draw_message, gauge_ratio, gb, pct};

pub const NO_DATA: &str = "No data available. Please refresh to fetch system metrics.";

struct Card {
    metric: Metric,
    percent: f64,
    label: String,
    details: Vec<String>,
}

fn cards(s: &Snapshot) -> [Card; 3] {
    [
        Card {
            metric: Metric::Cpu,
            percent: s.cpu_usage_percent,
            label: s.cpu_usage_label.clone(),
            details: vec![format!("Raw Value: {}", pct(s.cpu_usage_percent))],
        },
        Card {
            metric: Metric::Memory,
            percent: s.memory_percent,
            label: pct(s.memory_percent),
            details: vec![
                format!("Used: {} / Total: {}", gb(s.memory_used_gb), gb(s.memory_total_gb)),
                format!("Remaining: {}", gb(s.memory_remaining_gb)),
            ],
        },
        Card {
            metric: Metric::Disk,
            percent: s.disk_percent,
            label: pct(s.disk_percent),
            details: vec![
                format!("Used: {} / Total: {}", gb(s.disk_used_gb), gb(s.disk_total_gb)),
                format!("Remaining: {}", gb(s.disk_remaining_gb)),
            ],
        },
    ]
}

pub fn draw_current(f: &mut ratatui::Frame<'_>, area: Rect, snap: Option<&Snapshot>, pal: &Palette) {
    let Some(s) = snap else {
        draw_message(f, area, NO_DATA, Style::default().fg(pal.text));
        return;
    };

    let cards = cards(s);
    // borders (2) + gauge (1) + detail lines
    let mut constraints: Vec<Constraint> = cards
        .iter()
        .map(|c| Constraint::Length(3 + c.details.len() as u16))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (card, slot) in cards.iter().zip(rows.iter()) {
        draw_card(f, *slot, card, pal);
    }

    let stamp = Paragraph::new(format!("Last Updated: {}", s.timestamp))
        .style(Style::default().fg(pal.muted));
    f.render_widget(stamp, rows[cards.len()]);
}

fn draw_card(f: &mut ratatui::Frame<'_>, area: Rect, card: &Card, pal: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(card.metric.title())
        .style(Style::default().fg(pal.text));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let gauge_rect = Rect { height: 1, ..inner };
    let g = Gauge::default()
        .ratio(gauge_ratio(card.percent))
        .label(card.label.clone())
        .gauge_style(
            Style::default()
                .fg(gauge_color(card.percent))
                .bg(pal.track)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(g, gauge_rect);

    let detail_rect = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let lines: Vec<Line> = card.details.iter().map(|d| Line::from(d.as_str())).collect();
    f.render_widget(
        Paragraph::new(lines).style(Style::default().fg(pal.detail)),
        detail_rect,
    );
}

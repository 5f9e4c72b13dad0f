//! Small UI helpers: number formatting, gauge ratios, axis labels, placeholders.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn pct(v: f64) -> String {
    format!("{v:.2}%")
}

pub fn gb(v: f64) -> String {
    format!("{v:.2} GB")
}

/// Gauge ratio in [0, 1]; anything out of range or non-finite is clamped.
pub fn gauge_ratio(percent: f64) -> f64 {
    if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

// first / middle / last
pub fn axis_labels(labels: &[&str]) -> Vec<String> {
    match labels {
        [] => Vec::new(),
        [only] => vec![only.to_string()],
        [first, last] => vec![first.to_string(), last.to_string()],
        _ => vec![
            labels[0].to_string(),
            labels[labels.len() / 2].to_string(),
            labels[labels.len() - 1].to_string(),
        ],
    }
}

pub fn draw_message(f: &mut ratatui::Frame<'_>, area: Rect, text: &str, style: Style) {
    let p = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimal_readouts() {
        assert_eq!(pct(85.0), "85.00%");
        assert_eq!(gb(15.256), "15.26 GB");
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(gauge_ratio(50.0), 0.5);
        assert_eq!(gauge_ratio(140.0), 1.0);
        assert_eq!(gauge_ratio(-3.0), 0.0);
        assert_eq!(gauge_ratio(f64::NAN), 0.0);
    }

    #[test]
    fn axis_labels_pick_ends_and_middle() {
        assert!(axis_labels(&[]).is_empty());
        assert_eq!(axis_labels(&["a"]), vec!["a"]);
        assert_eq!(axis_labels(&["a", "b"]), vec!["a", "b"]);
        assert_eq!(axis_labels(&["a", "b", "c", "d", "e"]), vec!["a", "c", "e"]);
    }
}

//! Title line and the control bar (view tabs, manual refresh, auto-refresh).

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::state::{Dashboard, ViewMode};
use crate::ui::theme::{Palette, ACCENT, AUTO_OFF, AUTO_ON};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, endpoint: &str, pal: &Palette) {
    let title = format!(
        "sysglance — {endpoint}  (q quit · r refresh · a auto-refresh · tab/1/2 switch view)"
    );
    f.render_widget(
        Block::default()
            .title(title)
            .borders(Borders::BOTTOM)
            .style(Style::default().fg(pal.text)),
        area,
    );
}

pub fn draw_controls(f: &mut ratatui::Frame<'_>, area: Rect, state: &Dashboard, pal: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(36),
            Constraint::Length(20),
            Constraint::Length(24),
        ])
        .split(area);

    let selected = match state.view_mode() {
        ViewMode::Current => 0,
        ViewMode::History => 1,
    };
    let tabs = Tabs::new(vec!["Current Metrics [1]", "Historical Trends [2]"])
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(pal.muted))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, cols[0]);

    let refresh = if state.loading() {
        Paragraph::new(Line::from("Refreshing…")).style(
            Style::default()
                .fg(pal.muted)
                .add_modifier(Modifier::DIM),
        )
    } else {
        Paragraph::new(Line::from("Refresh Now [r]"))
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    };
    f.render_widget(
        refresh
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        cols[1],
    );

    let (text, color) = if state.auto_refresh() {
        ("Auto-Refresh On [a]", AUTO_ON)
    } else {
        ("Auto-Refresh Off [a]", AUTO_OFF)
    };
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
        cols[2],
    );
}

//! UI module root: lays out the header, control bar and the active view.

pub mod gauges;
pub mod header;
pub mod theme;
pub mod trends;
pub mod util;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
};

use crate::state::{Dashboard, ViewMode};
use gauges::draw_current;
use header::{draw_controls, draw_header};
use theme::{palette, ThemeMode, ERROR_FG};
use trends::draw_history;
use util::draw_message;

pub fn draw(f: &mut ratatui::Frame<'_>, state: &Dashboard, endpoint: &str, theme: ThemeMode) {
    let pal = palette(theme);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // controls
            Constraint::Min(0),    // body
        ])
        .split(f.area());

    draw_header(f, rows[0], endpoint, &pal);
    draw_controls(f, rows[1], state, &pal);

    // an error replaces the view until the next successful fetch
    if let Some(err) = state.error() {
        draw_message(
            f,
            rows[2],
            err,
            Style::default().fg(ERROR_FG).add_modifier(Modifier::BOLD),
        );
        return;
    }

    match state.view_mode() {
        ViewMode::Current => draw_current(f, rows[2], state.snapshot(), &pal),
        ViewMode::History => draw_history(f, rows[2], state.history(), &pal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, FETCH_ERROR_MESSAGE};
    use crate::types::sample_snapshot;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
    use theme::{GAUGE_NORMAL, GAUGE_WARNING};

    fn buffer(state: &Dashboard) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(110, 36)).unwrap();
        terminal
            .draw(|f| draw(f, state, "http://localhost:5000/system-info", ThemeMode::Dark))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(state: &Dashboard) -> String {
        let buf = buffer(state);
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fetched(cpus: &[f64]) -> Dashboard {
        let mut d = Dashboard::default();
        for &cpu in cpus {
            let t = d.begin_fetch();
            d.complete_fetch(t, Ok(sample_snapshot(cpu)));
        }
        d
    }

    #[test]
    fn placeholders_when_nothing_fetched() {
        let mut d = Dashboard::default();
        assert!(render(&d).contains(gauges::NO_DATA));
        d.select_view(ViewMode::History);
        assert!(render(&d).contains(trends::NO_HISTORY));
    }

    #[test]
    fn current_view_shows_readouts() {
        let d = fetched(&[85.0]);
        let screen = render(&d);
        assert!(screen.contains("CPU Usage"));
        assert!(screen.contains("Raw Value: 85.00%"));
        assert!(screen.contains("Used: 8.00 GB / Total: 16.00 GB"));
        assert!(screen.contains("Remaining: 384.00 GB"));
        assert!(screen.contains("Last Updated: 2024-05-01 13:45:10"));
        assert!(screen.contains("Auto-Refresh On"));
        assert!(screen.contains("Refresh Now"));
    }

    /// Foreground of the first filled cell on the row under the "CPU Usage" card title.
    fn cpu_gauge_fill(state: &Dashboard) -> Color {
        let buf = buffer(state);
        let rows: Vec<_> = buf.content.chunks(buf.area.width as usize).collect();
        let title_row = rows
            .iter()
            .position(|row| row.iter().map(|c| c.symbol()).collect::<String>().contains("CPU Usage"))
            .expect("cpu card drawn");
        rows[title_row + 1]
            .iter()
            .find(|c| c.symbol() == "█")
            .expect("gauge has filled cells")
            .fg
    }

    #[test]
    fn cpu_gauge_colour_follows_latest_reading() {
        let mut d = fetched(&[10.0, 85.0]);
        assert_eq!(cpu_gauge_fill(&d), GAUGE_WARNING);

        let t = d.begin_fetch();
        d.complete_fetch(t, Ok(sample_snapshot(50.0)));
        assert_eq!(cpu_gauge_fill(&d), GAUGE_NORMAL);
    }

    #[test]
    fn history_view_draws_three_charts() {
        let mut d = fetched(&[10.0, 85.0, 50.0]);
        d.select_view(ViewMode::History);
        let screen = render(&d);
        for title in ["CPU Usage Over Time", "Memory Usage Over Time", "Disk Usage Over Time"] {
            assert!(screen.contains(title), "missing {title}\n{screen}");
        }
        assert!(screen.contains("13:45:10"));
    }

    #[test]
    fn error_replaces_the_view() {
        let mut d = fetched(&[20.0]);
        let t = d.begin_fetch();
        d.complete_fetch(t, Err(FetchError::Status(500)));
        let screen = render(&d);
        assert!(screen.contains(FETCH_ERROR_MESSAGE));
        assert!(!screen.contains("Raw Value"));
    }

    #[test]
    fn refresh_control_reflects_loading() {
        let mut d = Dashboard::default();
        d.begin_fetch();
        assert!(render(&d).contains("Refreshing…"));
    }
}

//! App shell and main loop: terminal lifecycle, key handling, feeding the poller, drawing.

use std::io;

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::config::Config;
use crate::poller::{PollEvent, Poller};
use crate::source::SnapshotSource;
use crate::state::{Dashboard, ViewMode};
use crate::ui::{self, theme::ThemeMode};

enum Step {
    Input(Event),
    Poll(PollEvent),
    Closed,
}

pub struct App<S: SnapshotSource> {
    poller: Poller<S>,
    endpoint: String,
    theme: ThemeMode,
    should_quit: bool,
}

impl<S: SnapshotSource> App<S> {
    pub fn new(source: S, config: &Config) -> Self {
        let state = Dashboard::new(config.history_cap, config.auto_refresh, config.fence_stale);
        Self {
            poller: Poller::new(source, config.interval, state),
            endpoint: config.endpoint.to_string(),
            theme: config.theme,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &Dashboard {
        self.poller.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        info!(endpoint = %self.endpoint, interval = ?self.poller.interval(), "dashboard started");
        self.poller.mount();
        let res = self.event_loop(&mut terminal).await;

        // Teardown
        self.poller.teardown();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        loop {
            terminal.draw(|f| ui::draw(f, self.poller.state(), &self.endpoint, self.theme))?;

            let step = tokio::select! {
                input = events.next() => match input {
                    Some(Ok(ev)) => Step::Input(ev),
                    Some(Err(e)) => return Err(e.into()),
                    None => Step::Closed,
                },
                Some(ev) = self.poller.next_event() => Step::Poll(ev),
            };

            match step {
                Step::Input(Event::Key(k)) => self.handle_key(k),
                Step::Input(_) => {}
                Step::Poll(ev) => self.poller.handle(ev),
                Step::Closed => break,
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, k: KeyEvent) {
        if k.kind != KeyEventKind::Press {
            return;
        }
        match k.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('r') | KeyCode::F(5) => {
                if !self.poller.refresh_now() {
                    debug!("manual refresh ignored: request outstanding");
                }
            }
            KeyCode::Char('a') => {
                let on = self.poller.toggle_auto_refresh();
                info!(on, "auto-refresh toggled");
            }
            KeyCode::Char('c') | KeyCode::Char('1') => {
                self.poller.select_view(ViewMode::Current);
            }
            KeyCode::Char('h') | KeyCode::Char('2') => {
                self.poller.select_view(ViewMode::History);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let other = self.poller.state().view_mode().other();
                self.poller.select_view(other);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::HttpSource;

    fn app() -> App<HttpSource> {
        // port 9 (discard) is never served in tests; results are irrelevant here
        let config = Config::default()
            .with_endpoint("http://127.0.0.1:9/system-info")
            .unwrap();
        App::new(HttpSource::new(config.endpoint.clone()), &config)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn view_keys_switch_modes() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('2')));
        assert_eq!(a.state().view_mode(), ViewMode::History);
        a.handle_key(key(KeyCode::Char('h')));
        assert_eq!(a.state().view_mode(), ViewMode::History);
        a.handle_key(key(KeyCode::Tab));
        assert_eq!(a.state().view_mode(), ViewMode::Current);
        a.handle_key(key(KeyCode::Char('1')));
        assert_eq!(a.state().view_mode(), ViewMode::Current);
    }

    #[test]
    fn quit_keys() {
        let mut a = app();
        a.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(a.should_quit());
        assert_eq!(a.state().view_mode(), ViewMode::Current);

        let mut b = app();
        b.handle_key(key(KeyCode::Esc));
        assert!(b.should_quit());
    }

    #[tokio::test]
    async fn refresh_and_auto_refresh_keys() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('r')));
        assert!(a.state().loading());

        a.handle_key(key(KeyCode::Char('a')));
        assert!(!a.state().auto_refresh());
        a.handle_key(key(KeyCode::Char('a')));
        assert!(a.state().auto_refresh());
    }
}

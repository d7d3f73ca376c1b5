// Terminal backend: raw-mode setup, mouse capture, event polling, and tick generation.
// Wraps crossterm + ratatui so the rest of the app just sees key/mouse/resize/tick events.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEvent,
        KeyEventKind, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

type CrosstermTerminal = Terminal<CrosstermBackend<std::io::Stderr>>;

pub struct Tui {
    terminal: CrosstermTerminal,
    pub event_rx: mpsc::UnboundedReceiver<TuiEvent>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    frame_rate: f64,
}

#[derive(Debug)]
pub enum TuiEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
}

impl Tui {
    pub fn new(frame_rate: f64) -> anyhow::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stderr());
        let terminal = Terminal::new(backend)?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            frame_rate: frame_rate.max(1.0),
        })
    }

    pub fn enter(&mut self) -> anyhow::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(std::io::stderr(), EnterAlternateScreen, EnableMouseCapture)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        self.start_event_polling();
        Ok(())
    }

    pub fn exit(&mut self) -> anyhow::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(std::io::stderr(), DisableMouseCapture, LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn start_event_polling(&self) {
        let tx = self.event_tx.clone();
        let tick_rate = Duration::from_secs_f64(1.0 / self.frame_rate);

        tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    event = reader.next() => {
                        match event {
                            Some(Ok(CrosstermEvent::Key(key))) => {
                                if key.kind == KeyEventKind::Press {
                                    tx.send(TuiEvent::Key(key)).ok();
                                }
                            }
                            Some(Ok(CrosstermEvent::Mouse(mouse))) => {
                                // Drags and moves are noise for a browse screen.
                                if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                                    tx.send(TuiEvent::Mouse(mouse)).ok();
                                }
                            }
                            Some(Ok(CrosstermEvent::Resize(..))) => {
                                tx.send(TuiEvent::Resize).ok();
                            }
                            Some(Err(_)) | None => break,
                            _ => {}
                        }
                    }
                    _ = tick_interval.tick() => {
                        tx.send(TuiEvent::Tick).ok();
                    }
                }
            }
        });
    }

    /// Draw a frame and return the area it covered, for mouse hit-testing.
    pub fn draw<F>(&mut self, f: F) -> anyhow::Result<Rect>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        let completed = self.terminal.draw(f)?;
        Ok(completed.area)
    }
}

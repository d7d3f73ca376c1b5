// Live search input in the nav bar. Activated with `/`; every edit is reported
// as `Action::SearchInput` and the App debounces the actual request.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

#[derive(Default)]
pub struct SearchBar {
    action_tx: Option<UnboundedSender<Action>>,
    pub input: String,
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Drop focus but keep the text (and whatever results it produced).
    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn emit_input(&self) -> anyhow::Result<()> {
        if let Some(tx) = &self.action_tx {
            tx.send(Action::SearchInput(self.input.clone()))?;
        }
        Ok(())
    }
}

impl Component for SearchBar {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if !self.focused {
            return Ok(false);
        }
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                self.emit_input()?;
                Ok(true)
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.emit_input()?;
                }
                Ok(true)
            }
            KeyCode::Enter => {
                self.focused = false;
                Ok(true)
            }
            KeyCode::Esc => {
                self.focused = false;
                if !self.input.is_empty() {
                    self.input.clear();
                    self.emit_input()?;
                }
                Ok(true)
            }
            // Let arrow keys fall through so the rows stay navigable.
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        if let Action::FocusSearch = action {
            self.focused = true;
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = if self.focused {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.text_dim)
        };

        let line = if self.input.is_empty() && !self.focused {
            Line::from(Span::styled("⌕ / Titles, people, genres", style))
        } else {
            let cursor = if self.focused { "_" } else { "" };
            Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(theme.primary)),
                Span::styled(format!("{}{}", self.input, cursor), style),
            ])
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

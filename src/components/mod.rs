// src/components/mod.rs

pub mod catalog_rows;
pub mod detail_modal;
pub mod hero_banner;
pub mod nav_bar;
pub mod search_bar;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::theme::Theme;

/// Frames of the loading spinner shown next to rows that are still fetching.
pub const BRAILLE_SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub trait Component {
    /// Register the action sender for this component.
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>);

    /// Handle a key event. Return Ok(true) if the event was consumed.
    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let _ = key;
        Ok(false)
    }

    /// Handle an action dispatched by App. Return optional follow-up actions.
    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        let _ = action;
        Ok(vec![])
    }

    /// Render this component into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// A `width`×`height` rect centered in `area`, clamped to fit.
pub fn centered_overlay(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

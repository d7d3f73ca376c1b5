// Key and mouse handling: maps terminal input to actions.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::action::Action;
use crate::app::App;
use crate::components::detail_modal::DetailModal;
use crate::components::Component;
use crate::ui;

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        use KeyCode::{Char, Esc};

        // Overlays consume all keys
        if self.show_help {
            self.action_tx.send(Action::HideHelp)?;
            return Ok(());
        }
        if self.detail_modal.handle_key_event(key)? {
            return Ok(());
        }

        // In search mode, forward to the search bar; if it didn't consume the
        // key (e.g. arrow keys), fall through to normal-mode bindings.
        if self.search_bar.is_focused() && self.search_bar.handle_key_event(key)? {
            return Ok(());
        }

        // Normal-mode keybindings
        match key.code {
            Char('q') => self.action_tx.send(Action::Quit)?,
            Char('?') => self.action_tx.send(Action::ShowHelp)?,
            Char('/') => self.action_tx.send(Action::FocusSearch)?,
            Char('r') => {
                self.error_message = None;
                self.action_tx.send(Action::LoadAllContent)?;
            }
            Esc => self.action_tx.send(Action::Back)?,
            _ => {
                if !self.hero_banner.handle_key_event(key)? {
                    self.catalog_rows.handle_key_event(key)?;
                }
            }
        }
        self.sync_scroll_state();
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> anyhow::Result<()> {
        let (column, row) = (mouse.column, mouse.row);

        if self.show_help {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.action_tx.send(Action::HideHelp)?;
            }
            return Ok(());
        }

        // The open modal swallows the wheel; a click on the scrim closes it.
        if self.detail_modal.is_visible() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                if !contains(DetailModal::overlay_area(self.viewport), column, row) {
                    self.action_tx.send(Action::CloseDetail)?;
                }
            }
            return Ok(());
        }

        let screen = ui::layout(self.viewport, self.nav_bar.is_scrolled());
        match mouse.kind {
            MouseEventKind::ScrollDown => self.catalog_rows.scroll(1),
            MouseEventKind::ScrollUp => self.catalog_rows.scroll(-1),
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(screen.search, column, row) {
                    self.action_tx.send(Action::FocusSearch)?;
                } else {
                    self.search_bar.blur();
                    if contains(screen.hero, column, row) {
                        if let Some(hero) = self.hero_banner.payload() {
                            self.action_tx.send(hero.more_info_action())?;
                        }
                    } else if let Some(item) = self.catalog_rows.click(screen.rows, column, row) {
                        self.action_tx.send(Action::OpenDetail(item))?;
                    }
                }
            }
            _ => {}
        }
        self.sync_scroll_state();
        Ok(())
    }
}

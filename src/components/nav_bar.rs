// Top bar: brand and section labels. Turns solid once the page is scrolled.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

const SECTIONS: &[&str] = &["Home", "TV Shows", "Movies", "New & Popular"];

#[derive(Default)]
pub struct NavBar {
    action_tx: Option<UnboundedSender<Action>>,
    scrolled: bool,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        self.scrolled = scrolled;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Component for NavBar {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![Span::styled(
            " TERMFLIX ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )];
        for (i, section) in SECTIONS.iter().enumerate() {
            let style = if i == 0 {
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_dim)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(*section, style));
        }

        let mut paragraph = Paragraph::new(Line::from(spans));
        if self.scrolled {
            paragraph = paragraph.style(Style::default().bg(theme.nav_bg));
        }
        frame.render_widget(paragraph, area);
    }
}

// Rotating banner above the rows: title, meta, a short overview and the
// Play / More Info buttons.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::Component;
use crate::present::{self, HeroPayload};
use crate::theme::Theme;

const OVERVIEW_MAX_CHARS: usize = 150;

#[derive(Default)]
pub struct HeroBanner {
    action_tx: Option<UnboundedSender<Action>>,
    payload: Option<HeroPayload>,
    position: usize,
    total: usize,
}

impl HeroBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `payload` as entry `position` of `total` rotating items.
    pub fn set(&mut self, payload: HeroPayload, position: usize, total: usize) {
        self.payload = Some(payload);
        self.position = position;
        self.total = total;
    }

    pub fn payload(&self) -> Option<&HeroPayload> {
        self.payload.as_ref()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Component for HeroBanner {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    /// `p` plays and `i` shows more info; both open the detail view.
    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let (Some(tx), Some(payload)) = (&self.action_tx, &self.payload) else {
            return Ok(false);
        };
        match key.code {
            KeyCode::Char('p') => tx.send(payload.play_action())?,
            KeyCode::Char('i') => tx.send(payload.more_info_action())?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.height == 0 {
            return;
        }
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border));

        let Some(hero) = &self.payload else {
            let line = Line::from(Span::styled(
                "  Loading featured titles…",
                Style::default().fg(theme.text_dim),
            ));
            frame.render_widget(Paragraph::new(line).block(block), area);
            return;
        };

        let mut meta = vec![Span::raw("  ")];
        let meta_text = hero.meta_line();
        if !meta_text.is_empty() {
            meta.push(Span::styled(meta_text, Style::default().fg(theme.text)));
            meta.push(Span::raw("  "));
        }
        meta.push(Span::styled(
            hero.match_badge,
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ));

        let dots: String = (0..self.total)
            .map(|i| if i == self.position { '●' } else { '○' })
            .collect();

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("  {}", hero.title.to_uppercase()),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("   {}", dots), Style::default().fg(theme.text_dim)),
            ]),
            Line::from(meta),
            Line::from(Span::styled(
                format!("  {}", present::truncate_text(&hero.overview, OVERVIEW_MAX_CHARS)),
                Style::default().fg(theme.secondary),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    " ▶ Play (p) ",
                    Style::default()
                        .fg(theme.nav_bg)
                        .bg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    " ⓘ More Info (i) ",
                    Style::default().fg(theme.text).bg(theme.selection_bg),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

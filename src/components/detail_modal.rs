// Detail overlay for a movie or show. Opens instantly with whatever the
// activating card already knew, then fills in authoritative details and the
// trailer as those requests land.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::api::models::CatalogItem;
use crate::components::{centered_overlay, Component};
use crate::present::DetailPayload;
use crate::theme::Theme;

const MODAL_WIDTH: u16 = 76;
const MODAL_HEIGHT: u16 = 18;

#[derive(Default)]
pub struct DetailModal {
    action_tx: Option<UnboundedSender<Action>>,
    visible: bool,
    request_id: u64,
    item: Option<CatalogItem>,
    payload: Option<DetailPayload>,
    loading_details: bool,
    resolving_trailer: bool,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn item(&self) -> Option<&CatalogItem> {
        self.item.as_ref()
    }

    pub fn payload(&self) -> Option<&DetailPayload> {
        self.payload.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading_details
    }

    pub fn is_resolving_trailer(&self) -> bool {
        self.resolving_trailer
    }

    /// Show the preliminary payload for request `request_id`.
    pub fn show(&mut self, request_id: u64, item: CatalogItem, preliminary: DetailPayload) {
        self.visible = true;
        self.request_id = request_id;
        self.item = Some(item);
        self.payload = Some(preliminary);
        self.loading_details = true;
        self.resolving_trailer = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.item = None;
        self.payload = None;
        self.loading_details = false;
        self.resolving_trailer = false;
    }

    fn is_current(&self, request_id: u64) -> bool {
        self.visible && self.request_id == request_id
    }

    /// Swap in authoritative details. Responses for a closed or superseded
    /// modal are ignored; returns whether the payload was applied.
    pub fn apply_details(&mut self, request_id: u64, details: DetailPayload) -> bool {
        if !self.is_current(request_id) {
            return false;
        }
        let trailer = self.payload.as_ref().and_then(|p| p.trailer_url.clone());
        self.payload = Some(details.with_trailer(trailer));
        self.loading_details = false;
        true
    }

    /// The lookup failed: stop waiting and keep the preliminary payload.
    pub fn details_unavailable(&mut self, request_id: u64) {
        if self.is_current(request_id) {
            self.loading_details = false;
        }
    }

    pub fn apply_trailer(&mut self, request_id: u64, url: Option<String>) -> bool {
        if !self.is_current(request_id) {
            return false;
        }
        if let Some(payload) = self.payload.as_mut() {
            payload.trailer_url = url;
        }
        self.resolving_trailer = false;
        true
    }

    /// Where the modal sits inside `area`; clicks outside it close the modal.
    pub fn overlay_area(area: Rect) -> Rect {
        centered_overlay(area, MODAL_WIDTH, MODAL_HEIGHT)
    }
}

impl Component for DetailModal {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    /// Consumes every key while open so the rows underneath stay put.
    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if !self.visible {
            return Ok(false);
        }
        let Some(tx) = &self.action_tx else {
            return Ok(true);
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => tx.send(Action::CloseDetail)?,
            KeyCode::Enter | KeyCode::Char('t') => {
                if let Some(url) = self.payload.as_ref().and_then(|p| p.trailer_url.clone()) {
                    tx.send(Action::OpenTrailer(url))?;
                }
            }
            _ => {}
        }
        Ok(true)
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            return;
        }
        let Some(detail) = &self.payload else {
            return;
        };

        let overlay_area = Self::overlay_area(area);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", detail.title))
            .title_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(overlay_area);
        frame.render_widget(block, overlay_area);

        let mut meta = vec![Span::styled(detail.meta_line(), Style::default().fg(theme.text))];
        if self.loading_details {
            meta.push(Span::styled("  loading…", Style::default().fg(theme.text_dim)));
        }

        let trailer_line = if let Some(url) = &detail.trailer_url {
            Line::from(vec![
                Span::styled(
                    " ▶ Play Trailer (t) ",
                    Style::default()
                        .fg(theme.text)
                        .bg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", url), Style::default().fg(theme.text_dim)),
            ])
        } else if self.resolving_trailer {
            Line::from(Span::styled(
                "Looking for a trailer…",
                Style::default().fg(theme.text_dim),
            ))
        } else {
            Line::from("")
        };

        let lines = vec![
            Line::from(meta),
            Line::from(""),
            Line::from(Span::styled(
                detail.overview.as_str(),
                Style::default().fg(theme.secondary),
            )),
            Line::from(""),
            trailer_line,
            Line::from(""),
            Line::from(Span::styled(
                format!("Backdrop: {}", detail.backdrop_url),
                Style::default().fg(theme.text_dim),
            )),
            Line::from(Span::styled(
                "Esc / x to close",
                Style::default().fg(theme.text_dim),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

// The scrollable stack of content rows. Each row is either a strip of
// skeletons (still loading) or a strip of cards built from catalog items.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::{Display, EnumIter, IntoEnumIterator};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::api::images::ImageUrls;
use crate::api::models::CatalogItem;
use crate::components::{Component, BRAILLE_SPINNER};
use crate::present::{self, CardPayload, SkeletonPayload};
use crate::theme::Theme;

const CARD_WIDTH: u16 = 22;
const CARD_HEIGHT: u16 = 4;
/// Title line plus the card strip.
const ROW_HEIGHT: u16 = CARD_HEIGHT + 1;

/// Named destinations on the browse screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum RowId {
    #[strum(to_string = "Search Results")]
    SearchResults,
    #[strum(to_string = "Trending Now")]
    Trending,
    #[strum(to_string = "Originals")]
    Originals,
    #[strum(to_string = "Popular Movies")]
    Popular,
    #[strum(to_string = "Top Rated")]
    TopRated,
    #[strum(to_string = "TV Shows")]
    TvShows,
    #[strum(to_string = "Continue Watching")]
    ContinueWatching,
    #[strum(to_string = "New Releases")]
    NewReleases,
}

#[derive(Debug, Clone)]
pub enum RowContent {
    Loading(Vec<SkeletonPayload>),
    Loaded(Vec<Card>),
}

/// A rendered card together with the record it was built from.
#[derive(Debug, Clone)]
pub struct Card {
    pub item: CatalogItem,
    pub payload: CardPayload,
}

#[derive(Debug, Clone)]
pub struct Row {
    pub id: RowId,
    pub content: RowContent,
    pub selected: usize,
}

impl Row {
    pub fn cards(&self) -> &[Card] {
        match &self.content {
            RowContent::Loaded(cards) => cards,
            RowContent::Loading(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.content, RowContent::Loading(_))
    }

    fn len(&self) -> usize {
        match &self.content {
            RowContent::Loaded(cards) => cards.len(),
            RowContent::Loading(skeletons) => skeletons.len(),
        }
    }
}

pub struct CatalogRows {
    action_tx: Option<UnboundedSender<Action>>,
    rows: Vec<Row>,
    images: ImageUrls,
    skeleton_count: usize,
    search_visible: bool,
    /// Index into the visible rows.
    focused: usize,
    frame_count: u64,
}

impl CatalogRows {
    pub fn new(images: ImageUrls, skeleton_count: usize) -> Self {
        let rows = RowId::iter()
            .map(|id| Row {
                id,
                content: RowContent::Loaded(vec![]),
                selected: 0,
            })
            .collect();
        Self {
            action_tx: None,
            rows,
            images,
            skeleton_count,
            search_visible: false,
            focused: 0,
            frame_count: 0,
        }
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn cards(&self, id: RowId) -> &[Card] {
        self.row(id).map(Row::cards).unwrap_or(&[])
    }

    pub fn visible_rows(&self) -> Vec<&Row> {
        self.rows
            .iter()
            .filter(|r| r.id != RowId::SearchResults || self.search_visible)
            .collect()
    }

    /// Put every content row back into the loading state.
    pub fn show_all_skeletons(&mut self) {
        let ids: Vec<RowId> = RowId::iter().filter(|id| *id != RowId::SearchResults).collect();
        for id in ids {
            self.show_skeletons(id);
        }
    }

    pub fn show_skeletons(&mut self, id: RowId) {
        let skeletons = vec![present::skeleton(); self.skeleton_count];
        if let Some(row) = self.row_mut(id) {
            row.content = RowContent::Loading(skeletons);
            row.selected = 0;
        }
    }

    /// Replace a row's content with cards. An empty list leaves the row empty.
    pub fn set_items(&mut self, id: RowId, items: Vec<CatalogItem>) {
        let cards: Vec<Card> = items
            .into_iter()
            .map(|item| Card {
                payload: present::card(&item, &self.images),
                item,
            })
            .collect();
        if let Some(row) = self.row_mut(id) {
            row.selected = row.selected.min(cards.len().saturating_sub(1));
            row.content = RowContent::Loaded(cards);
        }
    }

    /// Fill the results row, reveal it and move focus onto it.
    pub fn show_search_results(&mut self, items: Vec<CatalogItem>) {
        self.set_items(RowId::SearchResults, items);
        if let Some(row) = self.row_mut(RowId::SearchResults) {
            row.selected = 0;
        }
        self.search_visible = true;
        self.focused = 0;
    }

    pub fn hide_search_results(&mut self) {
        if !self.search_visible {
            return;
        }
        self.search_visible = false;
        self.set_items(RowId::SearchResults, vec![]);
        self.focused = self.focused.saturating_sub(1);
        self.clamp_focus();
    }

    pub fn is_search_visible(&self) -> bool {
        self.search_visible
    }

    pub fn focused_row(&self) -> Option<&Row> {
        self.visible_rows().get(self.focused).copied()
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        let row = self.focused_row()?;
        row.cards().get(row.selected).map(|c| &c.item)
    }

    /// True once focus has moved past the first row.
    pub fn is_scrolled(&self) -> bool {
        self.focused > 0
    }

    pub fn next_row(&mut self) {
        self.scroll(1);
    }

    pub fn prev_row(&mut self) {
        self.scroll(-1);
    }

    /// Move focus by `delta` rows, clamped to the visible range.
    pub fn scroll(&mut self, delta: i32) {
        let last = self.visible_rows().len().saturating_sub(1) as i64;
        let target = (self.focused as i64 + delta as i64).clamp(0, last.max(0));
        self.focused = target as usize;
    }

    pub fn next_card(&mut self) {
        if let Some(id) = self.focused_row().map(|r| r.id) {
            if let Some(row) = self.row_mut(id) {
                let len = row.len();
                if len > 0 {
                    row.selected = (row.selected + 1).min(len - 1);
                }
            }
        }
    }

    pub fn prev_card(&mut self) {
        if let Some(id) = self.focused_row().map(|r| r.id) {
            if let Some(row) = self.row_mut(id) {
                row.selected = row.selected.saturating_sub(1);
            }
        }
    }

    /// The visible rows on screen when the stack is drawn into `area`,
    /// as (index into `visible_rows`, row area) pairs.
    fn row_slots(&self, area: Rect) -> Vec<(usize, Rect)> {
        let count = self.visible_rows().len();
        let fit = (area.height / ROW_HEIGHT).max(1) as usize;
        let first = self.focused.saturating_sub(fit - 1);
        let bottom = area.y + area.height;

        (first..count)
            .take(fit)
            .enumerate()
            .map_while(|(slot, idx)| {
                let y = area.y + slot as u16 * ROW_HEIGHT;
                (y < bottom).then(|| {
                    let height = ROW_HEIGHT.min(bottom - y);
                    (idx, Rect::new(area.x, y, area.width, height))
                })
            })
            .collect()
    }

    /// Row and card index of the loaded card drawn at `(column, row)`.
    pub fn card_at(&self, area: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
        let position = Position::new(column, row);
        let rows = self.visible_rows();
        let (idx, row_area) = self
            .row_slots(area)
            .into_iter()
            .find(|(_, r)| r.contains(position))?;
        let target = rows.get(idx)?;
        let strip = card_strip(row_area)?;
        let first = first_card(target, idx == self.focused, strip.width);
        let slot = card_slots(strip).position(|card| card.contains(position))?;
        let card = first + slot;
        (card < target.cards().len()).then_some((idx, card))
    }

    /// Focus and select the card under a mouse click, returning its item.
    pub fn click(&mut self, area: Rect, column: u16, row: u16) -> Option<CatalogItem> {
        let (idx, card) = self.card_at(area, column, row)?;
        let id = self.visible_rows().get(idx)?.id;
        self.focused = idx;
        let row = self.row_mut(id)?;
        row.selected = card;
        row.cards().get(card).map(|c| c.item.clone())
    }

    fn clamp_focus(&mut self) {
        let len = self.visible_rows().len();
        if self.focused >= len {
            self.focused = len.saturating_sub(1);
        }
    }

    fn draw_row(&self, frame: &mut Frame, area: Rect, row: &Row, focused: bool, theme: &Theme) {
        let title_style = if focused {
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_dim)
        };
        let mut title_spans = vec![Span::styled(format!(" {}", row.id), title_style)];
        if row.is_loading() {
            let idx = (self.frame_count / 3) as usize % BRAILLE_SPINNER.len();
            title_spans.push(Span::styled(
                format!(" {}", BRAILLE_SPINNER[idx]),
                Style::default().fg(theme.primary),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(title_spans)),
            Rect { height: 1, ..area },
        );

        let Some(strip) = card_strip(area) else {
            return;
        };
        let first = first_card(row, focused, strip.width);

        for (slot, card_area) in card_slots(strip).enumerate() {
            let idx = first + slot;
            match &row.content {
                RowContent::Loading(skeletons) => match skeletons.get(idx) {
                    Some(s) => self.draw_skeleton(frame, card_area, s, idx, theme),
                    None => break,
                },
                RowContent::Loaded(cards) => match cards.get(idx) {
                    Some(card) => draw_card(
                        frame,
                        card_area,
                        &card.payload,
                        focused && idx == row.selected,
                        theme,
                    ),
                    None => break,
                },
            }
        }
    }

    fn draw_skeleton(
        &self,
        frame: &mut Frame,
        area: Rect,
        skeleton: &SkeletonPayload,
        idx: usize,
        theme: &Theme,
    ) {
        // Shimmer: one block per row of cards lights up in turn.
        let lit = (self.frame_count / 4) as usize % self.skeleton_count.max(1) == idx;
        let color = if lit { theme.text_dim } else { theme.skeleton };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.skeleton));
        let lines = vec![
            Line::from(Span::styled(
                "▒".repeat(skeleton.title_width as usize),
                Style::default().fg(color),
            )),
            Line::from(Span::styled(
                "▒".repeat(skeleton.meta_width as usize),
                Style::default().fg(color),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// The card strip below a row's title line.
fn card_strip(row_area: Rect) -> Option<Rect> {
    (row_area.height > 1).then(|| Rect {
        y: row_area.y + 1,
        height: (row_area.height - 1).min(CARD_HEIGHT),
        ..row_area
    })
}

/// Index of the leftmost card shown; the focused row keeps its selection in view.
fn first_card(row: &Row, focused: bool, strip_width: u16) -> usize {
    let fit = (strip_width / CARD_WIDTH).max(1) as usize;
    if focused {
        row.selected.saturating_sub(fit - 1)
    } else {
        0
    }
}

/// Card rectangles across a strip, left to right, whole cards only.
fn card_slots(strip: Rect) -> impl Iterator<Item = Rect> {
    let fit = (strip.width / CARD_WIDTH).max(1);
    (0..fit)
        .map(move |slot| strip.x + slot * CARD_WIDTH)
        .take_while(move |&x| x + CARD_WIDTH <= strip.x + strip.width)
        .map(move |x| Rect::new(x, strip.y, CARD_WIDTH - 1, strip.height))
}

fn draw_card(frame: &mut Frame, area: Rect, card: &CardPayload, selected: bool, theme: &Theme) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let (border, title_style) = if selected {
        (
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            Style::default()
                .fg(theme.text)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(theme.border),
            Style::default().fg(theme.text),
        )
    };

    let title = present::truncate_text(&card.title, inner_width.saturating_sub(3));
    let mut meta = vec![];
    if !card.year.is_empty() {
        meta.push(Span::styled(card.year.clone(), Style::default().fg(theme.text_dim)));
    }
    if card.rating != present::NO_RATING {
        if !meta.is_empty() {
            meta.push(Span::raw(" "));
        }
        meta.push(Span::styled(
            format!("★ {}", card.rating),
            Style::default().fg(theme.rating),
        ));
    }

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(meta),
    ])
    .block(block);
    frame.render_widget(paragraph, area);
}

impl Component for CatalogRows {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_row();
                Ok(true)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.prev_row();
                Ok(true)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.next_card();
                Ok(true)
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.prev_card();
                Ok(true)
            }
            KeyCode::Enter => {
                if let (Some(tx), Some(item)) = (&self.action_tx, self.selected_item()) {
                    tx.send(Action::OpenDetail(item.clone()))?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        if let Action::Tick = action {
            self.frame_count = self.frame_count.wrapping_add(1);
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.visible_rows();
        for (idx, row_area) in self.row_slots(area) {
            if let Some(row) = rows.get(idx) {
                self.draw_row(frame, row_area, row, idx == self.focused, theme);
            }
        }
    }
}

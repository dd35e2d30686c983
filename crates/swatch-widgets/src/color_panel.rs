#![forbid(unsafe_code)]

//! Color selection panel.
//!
//! A [`ColorPanel`] shows a horizontal strip of color swatches under a title
//! and lets the user page through them one entry at a time. Only a window of
//! `page_size` entries is visible; the window follows the selection with the
//! keep-in-view rules of [`PageWindow`].
//!
//! # Invariants
//!
//! After every public call returns:
//! 1. `selected_index()` is `None` iff the panel is empty, and in bounds otherwise.
//! 2. The selection is inside the visible window; the window starts at 0 when empty.
//! 3. `visible()` is exactly the window's slice of `entries()`, one slot per entry.
//! 4. The title text reflects the current style, count and selection.
//!
//! # Side-effect order
//!
//! A selection change runs: window reposition → store index → slot and
//! highlight geometry → title → cue. Failed calls change nothing.

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use swatch_core::color::Rgba;
use swatch_core::cue::{Cue, CuePlayer, Silent};
use swatch_core::geometry::{Point, Rect, Size};
use swatch_core::input::{Control, ControlInput};

use crate::config::{ColorPanelConfig, PanelMetrics};
use crate::draw::{Alignment, Canvas, Label};
use crate::error::PanelError;
use crate::title::{TitleStyle, TitleText};
use crate::window::PageWindow;
use crate::Panel;

/// Identity of a [`ColorEntry`].
///
/// Allocated once per [`ColorEntry::new`]; clones share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl EntryId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named color shown on the panel.
///
/// Two entries with the same name and color are still different entries.
/// Deserializing an entry allocates a fresh id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorEntry {
    #[cfg_attr(feature = "serde", serde(skip, default = "EntryId::next"))]
    id: EntryId,
    pub name: String,
    pub color: Rgba,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            id: EntryId::next(),
            name: name.into(),
            color,
        }
    }

    #[inline]
    pub const fn id(&self) -> EntryId {
        self.id
    }
}

/// Paged color picker strip.
pub struct ColorPanel {
    entries: Vec<ColorEntry>,
    selected: Option<usize>,
    window: PageWindow,

    title_style: TitleStyle,
    simple_title: String,
    show_count: bool,

    metrics: PanelMetrics,
    last_position: Point,
    last_width: f32,

    background: Rect,
    title: Label,
    /// Geometry of the visible entries, parallel to the window slice.
    slots: Vec<Rect>,
    highlight: Option<Rect>,

    cue: Option<Cue>,
    player: Box<dyn CuePlayer>,
}

impl fmt::Debug for ColorPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPanel")
            .field("entries", &self.entries)
            .field("selected", &self.selected)
            .field("window", &self.window)
            .field("title", &self.title.text)
            .field("cue", &self.cue)
            .finish_non_exhaustive()
    }
}

impl Default for ColorPanel {
    fn default() -> Self {
        Self::unpopulated(ColorPanelConfig::default())
    }
}

impl ColorPanel {
    /// An empty panel with the given simple title.
    pub fn new(title: impl Into<String>) -> Self {
        Self::unpopulated(ColorPanelConfig::default().title(title))
    }

    /// A panel titled `title` holding `entries`, in order.
    pub fn with_entries(
        title: impl Into<String>,
        entries: impl IntoIterator<Item = ColorEntry>,
    ) -> Result<Self, PanelError> {
        let mut panel = Self::new(title);
        panel.extend(entries)?;
        Ok(panel)
    }

    /// A panel built from `config`, holding its colors in order. Cues go to
    /// [`Silent`] until a player is supplied.
    ///
    /// # Errors
    ///
    /// [`PanelError::DuplicateEntry`] if `config.colors` holds the same entry twice.
    pub fn with_config(mut config: ColorPanelConfig) -> Result<Self, PanelError> {
        let colors = std::mem::take(&mut config.colors);
        let mut panel = Self::unpopulated(config);
        panel.extend(colors)?;
        Ok(panel)
    }

    /// Every setting of `config` except its colors.
    fn unpopulated(config: ColorPanelConfig) -> Self {
        let title = Label::new(config.metrics.title_scale)
            .alignment(Alignment::Center)
            .color(config.metrics.title_color);
        let mut panel = Self {
            entries: Vec::new(),
            selected: None,
            window: PageWindow::new(config.page_size),
            title_style: config.title_style,
            simple_title: config.title,
            show_count: config.show_count,
            metrics: config.metrics,
            last_position: Point::ZERO,
            last_width: 0.0,
            background: Rect::default(),
            title,
            slots: Vec::new(),
            highlight: None,
            cue: config.cue,
            player: Box::new(Silent),
        };
        panel.relayout();
        panel
    }

    /// Route cues to `player`.
    #[must_use]
    pub fn with_cue_player(mut self, player: impl CuePlayer + 'static) -> Self {
        self.player = Box::new(player);
        self
    }

    // ── Queries ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: EntryId) -> Option<&ColorEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected entry.
    pub fn selected(&self) -> Option<&ColorEntry> {
        self.selected.and_then(|index| self.entries.get(index))
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Indices of the visible entries.
    pub fn visible_range(&self) -> Range<usize> {
        self.window.range(self.entries.len())
    }

    /// Visible entries with their slot geometry, left to right.
    pub fn visible(&self) -> impl Iterator<Item = (&ColorEntry, Rect)> + '_ {
        self.window
            .slice(&self.entries)
            .iter()
            .zip(self.slots.iter().copied())
    }

    /// Slot of the selected entry.
    pub fn selected_rect(&self) -> Option<Rect> {
        let index = self.selected?;
        let offset = index.checked_sub(self.window.start())?;
        self.slots.get(offset).copied()
    }

    pub fn background(&self) -> Rect {
        self.background
    }

    pub fn title(&self) -> &Label {
        &self.title
    }

    pub fn title_text(&self) -> &str {
        &self.title.text
    }

    /// Selection strip above the selected slot. `None` when empty.
    pub fn highlight(&self) -> Option<Rect> {
        self.highlight
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.window.page_size()
    }

    pub fn title_style(&self) -> TitleStyle {
        self.title_style
    }

    /// Text used by [`TitleStyle::Simple`].
    pub fn simple_title(&self) -> &str {
        &self.simple_title
    }

    pub fn show_count(&self) -> bool {
        self.show_count
    }

    pub fn cue(&self) -> Option<&Cue> {
        self.cue.as_ref()
    }

    pub fn metrics(&self) -> &PanelMetrics {
        &self.metrics
    }

    /// Layout constraints from the last [`recalculate`](Self::recalculate).
    pub fn last_layout(&self) -> (Point, f32) {
        (self.last_position, self.last_width)
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Select the next entry, wrapping to the first. No-op when empty.
    pub fn next(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        let target = if current + 1 >= self.entries.len() {
            0
        } else {
            current + 1
        };
        self.apply_selection(target);
    }

    /// Select the previous entry, wrapping to the last. No-op when empty.
    pub fn previous(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        let target = if current == 0 {
            self.entries.len() - 1
        } else {
            current - 1
        };
        self.apply_selection(target);
    }

    /// Select the entry at `index`.
    ///
    /// # Errors
    ///
    /// [`PanelError::InvalidState`] when the panel is empty and
    /// [`PanelError::OutOfRange`] when `index >= len()`.
    pub fn set_selected_index(&mut self, index: usize) -> Result<(), PanelError> {
        if self.entries.is_empty() {
            return Err(PanelError::InvalidState);
        }
        if index >= self.entries.len() {
            return Err(PanelError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.apply_selection(index);
        Ok(())
    }

    /// Signed variant of [`set_selected_index`](Self::set_selected_index) for
    /// hosts that compute offsets. Negative indices are [`PanelError::NegativeIndex`].
    pub fn set_selected_index_signed(&mut self, index: isize) -> Result<(), PanelError> {
        if self.entries.is_empty() {
            return Err(PanelError::InvalidState);
        }
        match usize::try_from(index) {
            Ok(index) => self.set_selected_index(index),
            Err(_) => Err(PanelError::NegativeIndex {
                index,
                len: self.entries.len(),
            }),
        }
    }

    /// Select the entry with `id`. Returns `false` if it is not on the panel.
    pub fn select(&mut self, id: EntryId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.apply_selection(index);
                true
            }
            None => false,
        }
    }

    /// The selection pathway. `index` must be in bounds.
    fn apply_selection(&mut self, index: usize) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "color_panel.select",
            index,
            len = self.entries.len(),
            start = self.window.start()
        )
        .entered();

        debug_assert!(index < self.entries.len());
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let moved = self.window.reposition(index);
        self.selected = Some(index);
        self.refresh_items();
        swatch_core::debug!(
            index,
            start = self.window.start(),
            moved = ?moved,
            title = %self.title.text,
            "selection changed"
        );
        self.play_cue();
    }

    fn play_cue(&mut self) {
        if let Some(cue) = &self.cue {
            swatch_core::trace!(cue = %cue, "playing cue");
            self.player.play(cue);
        }
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Append `entry`.
    ///
    /// The first entry added to an empty panel becomes the selection.
    ///
    /// # Errors
    ///
    /// [`PanelError::DuplicateEntry`] if an entry with the same id is already
    /// present; the panel is left untouched.
    pub fn add(&mut self, entry: ColorEntry) -> Result<(), PanelError> {
        self.push_entry(entry)?;
        self.relayout();
        Ok(())
    }

    /// Append every entry in order, stopping at the first duplicate.
    ///
    /// Entries before the duplicate stay added.
    pub fn extend(
        &mut self,
        entries: impl IntoIterator<Item = ColorEntry>,
    ) -> Result<(), PanelError> {
        let mut result = Ok(());
        for entry in entries {
            if let Err(err) = self.push_entry(entry) {
                result = Err(err);
                break;
            }
        }
        self.relayout();
        result
    }

    fn push_entry(&mut self, entry: ColorEntry) -> Result<(), PanelError> {
        if self.contains(entry.id) {
            swatch_core::warn!(id = %entry.id, "rejected duplicate entry");
            return Err(PanelError::DuplicateEntry { id: entry.id });
        }
        swatch_core::trace!(id = %entry.id, name = %entry.name, "entry added");
        self.entries.push(entry);
        if self.selected.is_none() {
            self.selected = Some(0);
            self.window.reset();
        }
        Ok(())
    }

    /// Remove the entry with `id`, returning it. Absent ids are ignored.
    ///
    /// If the selection falls off the end it moves to the new last entry
    /// (playing the cue); otherwise the index is kept.
    pub fn remove(&mut self, id: EntryId) -> Option<ColorEntry> {
        let index = self.position(id)?;
        let removed = self.entries.remove(index);
        swatch_core::trace!(id = %id, index, "entry removed");

        let len = self.entries.len();
        match self.selected {
            Some(selected) if selected >= len => {
                if len == 0 {
                    self.selected = None;
                    self.window.reset();
                    self.refresh_items();
                } else {
                    self.apply_selection(len - 1);
                }
            }
            _ => self.refresh_items(),
        }
        Some(removed)
    }

    /// Remove every entry matching `predicate` and return how many went.
    ///
    /// The selection index is clamped into the remaining entries without a cue.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&ColorEntry) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !predicate(entry));
        let removed = before - self.entries.len();
        swatch_core::debug!(removed, remaining = self.entries.len(), "bulk removal");

        self.selected = match self.entries.len() {
            0 => None,
            len => self.selected.map(|index| index.min(len - 1)),
        };
        match self.selected {
            Some(index) => {
                self.window.reposition(index);
            }
            None => self.window.reset(),
        }
        self.relayout();
        removed
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
        self.window.reset();
        self.relayout();
    }

    /// Edit an entry in place (name or color). Returns `false` if absent.
    pub fn update_entry(&mut self, id: EntryId, edit: impl FnOnce(&mut ColorEntry)) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        edit(entry);
        self.refresh_title();
        true
    }

    // ── Configuration ───────────────────────────────────────────────────

    /// Change how many entries are visible at once.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        if page_size == self.window.page_size() {
            return;
        }
        self.window.set_page_size(page_size);
        match self.selected {
            Some(index) => {
                self.window.reposition(index);
            }
            None => self.window.reset(),
        }
        self.refresh_items();
    }

    pub fn set_title_style(&mut self, style: TitleStyle) {
        self.title_style = style;
        self.refresh_title();
    }

    pub fn set_show_count(&mut self, show: bool) {
        self.show_count = show;
        self.refresh_title();
    }

    /// Text used by [`TitleStyle::Simple`].
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.simple_title = title.into();
        self.refresh_title();
    }

    /// Cue played on selection changes. `None` disables it.
    pub fn set_cue(&mut self, cue: Option<Cue>) {
        self.cue = cue;
    }

    pub fn set_cue_player(&mut self, player: impl CuePlayer + 'static) {
        self.player = Box::new(player);
    }

    pub fn set_metrics(&mut self, metrics: PanelMetrics) {
        self.metrics = metrics;
        self.title.scale = metrics.title_scale;
        self.title.color = metrics.title_color;
        self.relayout();
    }

    // ── Layout ──────────────────────────────────────────────────────────

    /// Lay the panel out at `position` with `width`, caching both for later
    /// mutations.
    pub fn recalculate(&mut self, position: Point, width: f32) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "color_panel.recalculate",
            x = position.x,
            y = position.y,
            width,
            entries = self.entries.len()
        )
        .entered();

        self.last_position = position;
        self.last_width = width;

        self.background = Rect::from_parts(position, Size::new(width, self.metrics.height));
        self.title.position = position.offset(
            self.metrics.title_offset.x,
            self.metrics.title_offset.y,
        );
        self.refresh_items();
    }

    fn relayout(&mut self) {
        self.recalculate(self.last_position, self.last_width);
    }

    /// Rebuild slot and highlight geometry for the current window, then the title.
    fn refresh_items(&mut self) {
        let range = self.window.range(self.entries.len());
        let slot_width = self
            .metrics
            .slot_width(self.last_width, self.window.page_size());
        let left = self.last_position.x + self.metrics.left_margin;
        let top = self.last_position.y + self.metrics.slot_top;
        let height = self.metrics.slot_height;

        self.slots.clear();
        self.slots.extend(
            (0..range.len()).map(|k| Rect::new(left + slot_width * k as f32, top, slot_width, height)),
        );

        self.highlight = self
            .selected_rect()
            .map(|slot| slot.strip_above(self.metrics.highlight_height));

        self.refresh_title();
    }

    fn refresh_title(&mut self) {
        let text = TitleText::new(self.title_style)
            .simple(&self.simple_title)
            .selected_name(self.selected().map(|entry| entry.name.as_str()))
            .count(self.selected, self.entries.len())
            .show_count(self.show_count)
            .compose();
        self.title.text = text;
    }

    /// Emit background, title, visible swatches and the selection strip.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.background, self.metrics.background);
        canvas.text(&self.title);
        for (entry, slot) in self.visible() {
            canvas.fill_rect(slot, entry.color);
        }
        if let Some(highlight) = self.highlight
            && !self.entries.is_empty()
        {
            canvas.fill_rect(highlight, self.metrics.highlight);
        }
    }
}

impl Panel for ColorPanel {
    fn recalculate(&mut self, position: Point, width: f32) {
        ColorPanel::recalculate(self, position, width);
    }

    fn handle_input(&mut self, input: &mut dyn ControlInput) {
        if input.is_just_pressed(Control::PageLeft) {
            self.previous();
        } else if input.is_just_pressed(Control::PageRight) {
            self.next();
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        ColorPanel::draw(self, canvas);
    }
}

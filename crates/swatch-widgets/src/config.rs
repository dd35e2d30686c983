#![forbid(unsafe_code)]

//! Panel configuration.
//!
//! [`ColorPanelConfig`] gathers every independently settable knob of a
//! [`ColorPanel`](crate::ColorPanel) so a host can build one in a single call.
//! [`PanelMetrics`] holds the fixed layout measurements, in the same screen
//! units as the position and width handed down by the parent.

use std::num::NonZeroUsize;

use swatch_core::color::Rgba;
use swatch_core::cue::{Cue, DEFAULT_CUE};
use swatch_core::geometry::Point;

use crate::color_panel::ColorEntry;
use crate::title::TitleStyle;

/// Default number of entries visible at once.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(9) {
    Some(n) => n,
    None => unreachable!(),
};

/// Fixed layout measurements of the panel strip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelMetrics {
    /// Total height of the background.
    pub height: f32,
    /// Gap between the panel's left edge and the first slot.
    pub left_margin: f32,
    /// Gap between the last slot position and the panel's right edge.
    pub right_margin: f32,
    /// Title anchor, relative to the panel position.
    pub title_offset: Point,
    pub title_scale: f32,
    /// Top of the color slots, relative to the panel position.
    pub slot_top: f32,
    pub slot_height: f32,
    /// Height of the selection strip drawn above the selected slot.
    pub highlight_height: f32,
    pub background: Rgba,
    pub highlight: Rgba,
    pub title_color: Rgba,
}

impl Default for PanelMetrics {
    fn default() -> Self {
        Self {
            height: 111.0,
            left_margin: 16.0,
            right_margin: 12.0,
            title_offset: Point::new(218.0, 10.0),
            title_scale: 0.325,
            slot_top: 54.0,
            slot_height: 45.0,
            highlight_height: 8.0,
            background: Rgba::rgba(0, 0, 0, 180),
            highlight: Rgba::WHITE,
            title_color: Rgba::WHITE,
        }
    }
}

impl PanelMetrics {
    /// Width of one slot when `width` is split into `page_size` slots.
    ///
    /// Never negative, even for widths narrower than the margins.
    pub fn slot_width(&self, width: f32, page_size: NonZeroUsize) -> f32 {
        ((width - self.left_margin - self.right_margin) / page_size.get() as f32).max(0.0)
    }
}

/// Everything needed to build a [`ColorPanel`](crate::ColorPanel).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorPanelConfig {
    pub page_size: NonZeroUsize,
    pub title_style: TitleStyle,
    /// Text shown with [`TitleStyle::Simple`].
    pub title: String,
    pub show_count: bool,
    /// Cue played on every selection change. `None` disables audio feedback.
    pub cue: Option<Cue>,
    pub metrics: PanelMetrics,
    /// Entries the panel starts with, in order.
    pub colors: Vec<ColorEntry>,
}

impl Default for ColorPanelConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            title_style: TitleStyle::Simple,
            title: "Color".to_owned(),
            show_count: true,
            cue: Some(DEFAULT_CUE),
            metrics: PanelMetrics::default(),
            colors: Vec::new(),
        }
    }
}

impl ColorPanelConfig {
    #[must_use]
    pub fn page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: TitleStyle) -> Self {
        self.title_style = style;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn show_count(mut self, show: bool) -> Self {
        self.show_count = show;
        self
    }

    #[must_use]
    pub fn cue(mut self, cue: Option<Cue>) -> Self {
        self.cue = cue;
        self
    }

    #[must_use]
    pub fn metrics(mut self, metrics: PanelMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the starting entries.
    #[must_use]
    pub fn colors(mut self, colors: impl IntoIterator<Item = ColorEntry>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero")
    }

    #[test]
    fn defaults_match_native_panel() {
        let config = ColorPanelConfig::default();
        assert_eq!(config.page_size.get(), 9);
        assert_eq!(config.title_style, TitleStyle::Simple);
        assert_eq!(config.title, "Color");
        assert!(config.show_count);
        assert_eq!(config.cue, Some(DEFAULT_CUE));
        assert!(config.colors.is_empty());
    }

    #[test]
    fn builder_chain() {
        let config = ColorPanelConfig::default()
            .page_size(nz(4))
            .title_style(TitleStyle::ColorName)
            .title("Paint")
            .show_count(false)
            .cue(None)
            .colors([ColorEntry::new("Red", Rgba::RED)]);
        assert_eq!(config.page_size.get(), 4);
        assert_eq!(config.title_style, TitleStyle::ColorName);
        assert_eq!(config.title, "Paint");
        assert!(!config.show_count);
        assert!(config.cue.is_none());
        assert_eq!(config.colors.len(), 1);
        assert_eq!(config.colors[0].name, "Red");
    }

    #[test]
    fn slot_width_splits_inner_width() {
        let metrics = PanelMetrics::default();
        assert_eq!(metrics.slot_width(431.0, nz(9)), (431.0 - 28.0) / 9.0);
        assert_eq!(metrics.slot_width(128.0, nz(4)), 25.0);
    }

    #[test]
    fn slot_width_never_negative() {
        let metrics = PanelMetrics::default();
        assert_eq!(metrics.slot_width(10.0, nz(3)), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_json() {
        let config: ColorPanelConfig =
            serde_json::from_str(r#"{"page_size": 3, "title_style": "color_name"}"#)
                .expect("valid config");
        assert_eq!(config.page_size.get(), 3);
        assert_eq!(config.title_style, TitleStyle::ColorName);
        assert_eq!(config.title, "Color");
        assert_eq!(config.cue, Some(DEFAULT_CUE));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn disabled_cue_survives_round_trip() {
        let config = ColorPanelConfig::default().cue(None).title("Paint");
        let json = serde_json::to_string(&config).expect("serializable");
        let back: ColorPanelConfig = serde_json::from_str(&json).expect("valid config");
        assert_eq!(back.cue, None);
        assert_eq!(config, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn custom_cue_survives_round_trip() {
        let config = ColorPanelConfig::default().cue(Some(Cue::owned("MENU_SET", "SELECT")));
        let json = serde_json::to_string(&config).expect("serializable");
        let back: ColorPanelConfig = serde_json::from_str(&json).expect("valid config");
        assert_eq!(back.cue, Some(Cue::owned("MENU_SET", "SELECT")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn colors_round_trip_as_new_entries() {
        let config = ColorPanelConfig::default().colors([
            ColorEntry::new("Red", Rgba::RED),
            ColorEntry::new("Blue", Rgba::BLUE),
        ]);
        let json = serde_json::to_string(&config).expect("serializable");
        let back: ColorPanelConfig = serde_json::from_str(&json).expect("valid config");

        let pairs: Vec<(&str, Rgba)> = back
            .colors
            .iter()
            .map(|entry| (entry.name.as_str(), entry.color))
            .collect();
        assert_eq!(pairs, vec![("Red", Rgba::RED), ("Blue", Rgba::BLUE)]);
        assert_ne!(back.colors[0].id(), config.colors[0].id());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn zero_page_size_is_rejected() {
        let parsed = serde_json::from_str::<ColorPanelConfig>(r#"{"page_size": 0}"#);
        assert!(parsed.is_err());
    }
}

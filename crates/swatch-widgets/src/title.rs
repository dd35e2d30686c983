#![forbid(unsafe_code)]

//! Panel title composition.

/// What the panel header shows before the optional count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TitleStyle {
    /// No base text. The count is still shown when enabled.
    None,
    /// The configured simple title, shared by every entry.
    #[default]
    Simple,
    /// The selected entry's name.
    ColorName,
}

/// Builder for the header text.
///
/// ```
/// use swatch_widgets::title::{TitleStyle, TitleText};
///
/// let text = TitleText::new(TitleStyle::Simple)
///     .simple("Color")
///     .count(Some(1), 3)
///     .show_count(true)
///     .compose();
/// assert_eq!(text, "Color (2 of 3)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleText<'a> {
    style: TitleStyle,
    simple: &'a str,
    selected_name: Option<&'a str>,
    selected: Option<usize>,
    total: usize,
    show_count: bool,
}

impl<'a> TitleText<'a> {
    pub fn new(style: TitleStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Text used by [`TitleStyle::Simple`].
    #[must_use]
    pub fn simple(mut self, simple: &'a str) -> Self {
        self.simple = simple;
        self
    }

    /// Name used by [`TitleStyle::ColorName`]. `None` when nothing is selected.
    #[must_use]
    pub fn selected_name(mut self, name: Option<&'a str>) -> Self {
        self.selected_name = name;
        self
    }

    /// Zero-based selection and total entry count.
    #[must_use]
    pub fn count(mut self, selected: Option<usize>, total: usize) -> Self {
        self.selected = selected;
        self.total = total;
        self
    }

    #[must_use]
    pub fn show_count(mut self, show: bool) -> Self {
        self.show_count = show;
        self
    }

    fn base(&self) -> &'a str {
        match self.style {
            TitleStyle::None => "",
            TitleStyle::Simple => self.simple,
            TitleStyle::ColorName => self.selected_name.unwrap_or(""),
        }
    }

    /// One-based position shown in the count. No selection shows as 0.
    fn ordinal(&self) -> usize {
        self.selected.map_or(0, |index| index + 1)
    }

    /// Build the header string.
    pub fn compose(&self) -> String {
        let base = self.base();
        if !self.show_count {
            return base.to_owned();
        }

        let mut out = String::with_capacity(base.len() + 16);
        out.push_str(base);
        if !base.is_empty() && !base.ends_with(' ') {
            out.push(' ');
        }
        out.push_str(&format!("({} of {})", self.ordinal(), self.total));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_with_count() {
        let text = TitleText::new(TitleStyle::Simple)
            .simple("Color")
            .count(Some(1), 3)
            .show_count(true)
            .compose();
        assert_eq!(text, "Color (2 of 3)");
    }

    #[test]
    fn color_name_without_count() {
        let text = TitleText::new(TitleStyle::ColorName)
            .selected_name(Some("Red"))
            .count(Some(0), 4)
            .compose();
        assert_eq!(text, "Red");
    }

    #[test]
    fn none_style_shows_bare_count() {
        let text = TitleText::new(TitleStyle::None)
            .simple("ignored")
            .count(Some(0), 5)
            .show_count(true)
            .compose();
        assert_eq!(text, "(1 of 5)");
    }

    #[test]
    fn none_style_without_count_is_empty() {
        let text = TitleText::new(TitleStyle::None).count(Some(2), 5).compose();
        assert!(text.is_empty());
    }

    #[test]
    fn trailing_space_is_not_doubled() {
        let text = TitleText::new(TitleStyle::Simple)
            .simple("Paint ")
            .count(Some(0), 1)
            .show_count(true)
            .compose();
        assert_eq!(text, "Paint (1 of 1)");
    }

    #[test]
    fn no_selection_counts_from_zero() {
        let text = TitleText::new(TitleStyle::Simple)
            .simple("Color")
            .count(None, 0)
            .show_count(true)
            .compose();
        assert_eq!(text, "Color (0 of 0)");
    }

    #[test]
    fn color_name_without_selection_is_empty() {
        let text = TitleText::new(TitleStyle::ColorName)
            .count(None, 0)
            .show_count(true)
            .compose();
        assert_eq!(text, "(0 of 0)");
    }

    #[test]
    fn default_style_is_simple() {
        assert_eq!(TitleStyle::default(), TitleStyle::Simple);
    }
}

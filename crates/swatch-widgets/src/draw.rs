#![forbid(unsafe_code)]

//! Draw surface consumed by panels.
//!
//! Panels describe what to draw as a short list of rectangles and text labels.
//! A renderer implements [`Canvas`]; tests and headless hosts use [`DrawList`],
//! which just records the commands in order.

use std::fmt;

use swatch_core::color::Rgba;
use swatch_core::geometry::{Point, Rect};

/// Horizontal text alignment relative to a label's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A positioned run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Point,
    pub text: String,
    /// Font scale understood by the renderer.
    pub scale: f32,
    pub color: Rgba,
    pub alignment: Alignment,
}

impl Label {
    /// Create an empty white label at the origin.
    pub fn new(scale: f32) -> Self {
        Self {
            position: Point::ZERO,
            text: String::new(),
            scale,
            color: Rgba::WHITE,
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

/// Receiver of draw primitives.
pub trait Canvas {
    /// Fill `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw a text label.
    fn text(&mut self, label: &Label);
}

/// A single recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Rgba },
    Text(Label),
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect { rect, color } => write!(
                f,
                "rect  ({:.1}, {:.1}) {:.1}x{:.1} {color}",
                rect.x, rect.y, rect.width, rect.height
            ),
            Self::Text(label) => write!(
                f,
                "text  ({:.1}, {:.1}) {:?} {:?}",
                label.position.x, label.position.y, label.alignment, label.text
            ),
        }
    }
}

/// A [`Canvas`] that records commands in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded rectangles, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Rgba)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            DrawCommand::Text(_) => None,
        })
    }

    /// Recorded labels, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &Label> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text(label) => Some(label),
            DrawCommand::Rect { .. } => None,
        })
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn text(&mut self, label: &Label) {
        self.commands.push(DrawCommand::Text(label.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 5.0), Rgba::RED);
        list.text(&Label::new(0.325).alignment(Alignment::Center));
        list.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0), Rgba::BLUE);

        assert_eq!(list.len(), 3);
        let colors: Vec<Rgba> = list.rects().map(|(_, c)| c).collect();
        assert_eq!(colors, vec![Rgba::RED, Rgba::BLUE]);
        assert_eq!(list.texts().count(), 1);
        assert!(matches!(list.commands()[1], DrawCommand::Text(_)));
    }

    #[test]
    fn clear_empties() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::default(), Rgba::BLACK);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn label_defaults() {
        let label = Label::new(0.5);
        assert_eq!(label.alignment, Alignment::Left);
        assert_eq!(label.color, Rgba::WHITE);
        assert!(label.text.is_empty());
    }

    #[test]
    fn command_display() {
        let cmd = DrawCommand::Rect {
            rect: Rect::new(16.0, 54.0, 44.8, 45.0),
            color: Rgba::RED,
        };
        assert_eq!(cmd.to_string(), "rect  (16.0, 54.0) 44.8x45.0 #ff0000ff");
    }
}

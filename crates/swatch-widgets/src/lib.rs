#![forbid(unsafe_code)]

//! Swatch widgets: a paged color-selection panel and its building blocks.
//!
//! The panel is a pure state machine. It does no drawing, polling or audio on
//! its own; a parent container feeds it layout through [`Panel::recalculate`],
//! a [`ControlInput`] once per frame through [`Panel::process`], and reads the
//! result back through a [`Canvas`](draw::Canvas).

pub mod color_panel;
pub mod config;
pub mod draw;
pub mod error;
pub mod title;
pub mod window;

pub use color_panel::{ColorEntry, ColorPanel, EntryId};
pub use config::{ColorPanelConfig, PanelMetrics};
pub use draw::{Alignment, Canvas, DrawCommand, DrawList, Label};
pub use error::PanelError;
pub use title::{TitleStyle, TitleText};
pub use window::{PageWindow, WindowMove};

use swatch_core::geometry::Point;
use swatch_core::input::ControlInput;

/// A `Panel` is a fixed-height strip laid out by a parent menu.
///
/// The parent owns the position and width. It calls [`recalculate`](Panel::recalculate)
/// whenever its own layout changes and [`process`](Panel::process) once per frame.
pub trait Panel {
    /// Lay the panel out at `position` with the given `width`.
    ///
    /// Must be idempotent: the same arguments yield the same geometry.
    fn recalculate(&mut self, position: Point, width: f32);

    /// React to this frame's control presses.
    fn handle_input(&mut self, input: &mut dyn ControlInput);

    /// Emit this panel's primitives.
    fn draw(&self, canvas: &mut dyn draw::Canvas);

    /// One frame: input first, then drawing.
    fn process(&mut self, input: &mut dyn ControlInput, canvas: &mut dyn draw::Canvas) {
        self.handle_input(input);
        self.draw(canvas);
    }
}

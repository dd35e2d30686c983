#![forbid(unsafe_code)]

//! Edge-triggered panel controls.
//!
//! A panel never polls devices. Once per frame it asks a [`ControlInput`]
//! whether one of its [`Control`]s was *just* pressed. [`FrameInput`] answers
//! that question from the events collected during one frame, using a
//! [`ControlMap`] to translate key codes into controls.
//!
//! # Invariants
//! 1. Only [`KeyEventKind::Press`](crate::event::KeyEventKind::Press) events
//!    trigger a control; held keys do not auto-repeat navigation.
//! 2. A control reports at most one press per frame, no matter how many
//!    bound keys were pressed.
//! 3. A binding matches only the exact modifier set it was bound with, so
//!    `Ctrl+Left` does not page unless it is bound itself.

use crate::event::{Event, KeyCode, Modifiers};

/// Discrete navigation signals understood by selection panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Move the selection one entry to the left.
    PageLeft,
    /// Move the selection one entry to the right.
    PageRight,
}

/// Source of edge-triggered control presses, queried once per frame.
pub trait ControlInput {
    /// Whether `control` went down since the previous frame.
    fn is_just_pressed(&mut self, control: Control) -> bool;
}

/// Input that never reports a press. Useful for draw-only frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl ControlInput for NoInput {
    fn is_just_pressed(&mut self, _control: Control) -> bool {
        false
    }
}

/// Key chord to control bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlMap {
    bindings: Vec<(KeyCode, Modifiers, Control)>,
}

impl Default for ControlMap {
    /// Arrow keys, `q`/`e`, and the pad shoulder buttons.
    fn default() -> Self {
        Self::empty()
            .bind(KeyCode::Left, Control::PageLeft)
            .bind(KeyCode::Char('q'), Control::PageLeft)
            .bind(KeyCode::ShoulderLeft, Control::PageLeft)
            .bind(KeyCode::Right, Control::PageRight)
            .bind(KeyCode::Char('e'), Control::PageRight)
            .bind(KeyCode::ShoulderRight, Control::PageRight)
    }
}

impl ControlMap {
    /// A map with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind the bare `code` to `control`, replacing any previous binding for it.
    #[must_use]
    pub fn bind(self, code: KeyCode, control: Control) -> Self {
        self.bind_with(code, Modifiers::NONE, control)
    }

    /// Bind `code` held with exactly `modifiers` to `control`, replacing any
    /// previous binding for that chord.
    #[must_use]
    pub fn bind_with(mut self, code: KeyCode, modifiers: Modifiers, control: Control) -> Self {
        self.bindings
            .retain(|(bound, held, _)| (*bound, *held) != (code, modifiers));
        self.bindings.push((code, modifiers, control));
        self
    }

    /// Control bound to `code` with exactly `modifiers`, if any.
    #[must_use]
    pub fn lookup(&self, code: KeyCode, modifiers: Modifiers) -> Option<Control> {
        self.bindings
            .iter()
            .find(|(bound, held, _)| *bound == code && *held == modifiers)
            .map(|(_, _, control)| *control)
    }
}

/// Control presses collected from one frame of events.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    left: bool,
    right: bool,
}

impl FrameInput {
    /// Collect presses from `events` using `map`.
    pub fn collect<'a>(events: impl IntoIterator<Item = &'a Event>, map: &ControlMap) -> Self {
        let mut input = Self::default();
        for key in events.into_iter().filter_map(Event::as_key) {
            if !key.is_press() {
                continue;
            }
            match map.lookup(key.code, key.modifiers) {
                Some(Control::PageLeft) => input.left = true,
                Some(Control::PageRight) => input.right = true,
                None => {}
            }
        }
        crate::trace!(left = input.left, right = input.right, "frame input collected");
        input
    }

    /// Whether no control was pressed this frame.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !self.left && !self.right
    }
}

impl ControlInput for FrameInput {
    fn is_just_pressed(&mut self, control: Control) -> bool {
        match control {
            Control::PageLeft => self.left,
            Control::PageRight => self.right,
        }
    }
}

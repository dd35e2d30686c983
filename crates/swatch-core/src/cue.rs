#![forbid(unsafe_code)]

//! Audio cues for navigation feedback.
//!
//! Panels do not play audio themselves. They hold an optional [`Cue`] (what to
//! play) and a [`CuePlayer`] (how to play it), both injected at construction.
//! Playback is fire-and-forget: players return nothing and must not fail.

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A named sound inside a sound set.
///
/// Built-in cues borrow static names; cues read from configuration own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cue {
    /// Sound set (bank) the cue lives in.
    pub set: Cow<'static, str>,
    /// Sound name inside the set.
    pub name: Cow<'static, str>,
}

impl Cue {
    #[must_use]
    pub const fn new(set: &'static str, name: &'static str) -> Self {
        Self {
            set: Cow::Borrowed(set),
            name: Cow::Borrowed(name),
        }
    }

    /// A cue with runtime-provided names.
    #[must_use]
    pub fn owned(set: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            set: Cow::Owned(set.into()),
            name: Cow::Owned(name.into()),
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.set, self.name)
    }
}

/// Cue played when a panel's selection moves left or right.
pub const DEFAULT_CUE: Cue = Cue::new("HUD_FRONTEND_DEFAULT_SOUNDSET", "NAV_LEFT_RIGHT");

/// Something that can play a [`Cue`].
pub trait CuePlayer {
    fn play(&mut self, cue: &Cue);
}

/// Player that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn play(&mut self, cue: &Cue) {
        crate::trace!(cue = %cue, "cue discarded");
    }
}

/// Shared log of played cues.
///
/// Keep one clone and hand the other to the panel to observe playback.
impl CuePlayer for Rc<RefCell<Vec<Cue>>> {
    fn play(&mut self, cue: &Cue) {
        self.borrow_mut().push(cue.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cue_is_frontend_nav() {
        assert_eq!(DEFAULT_CUE.set, "HUD_FRONTEND_DEFAULT_SOUNDSET");
        assert_eq!(DEFAULT_CUE.name, "NAV_LEFT_RIGHT");
        assert_eq!(
            DEFAULT_CUE.to_string(),
            "HUD_FRONTEND_DEFAULT_SOUNDSET/NAV_LEFT_RIGHT"
        );
    }

    #[test]
    fn shared_log_records_in_order() {
        let log: Rc<RefCell<Vec<Cue>>> = Rc::default();
        let mut player = Rc::clone(&log);
        let other = Cue::owned("SET", "SELECT");
        player.play(&DEFAULT_CUE);
        player.play(&other);
        assert_eq!(*log.borrow(), vec![DEFAULT_CUE, other]);
    }

    #[test]
    fn borrowed_and_owned_names_compare_equal() {
        let owned = Cue::owned("HUD_FRONTEND_DEFAULT_SOUNDSET", "NAV_LEFT_RIGHT");
        assert_eq!(owned, DEFAULT_CUE);
        assert_eq!(owned.to_string(), DEFAULT_CUE.to_string());
    }

    #[test]
    fn silent_accepts_anything() {
        let mut player = Silent;
        player.play(&DEFAULT_CUE);
    }
}

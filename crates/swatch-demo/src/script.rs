#![forbid(unsafe_code)]

//! Keystroke scripts.
//!
//! Each non-whitespace character is one frame. Arrow and bumper keys have
//! single-character spellings; `.` is a frame with no input. `+` and `-`
//! resize the parent by [`RESIZE_STEP`], which the panel sees as a new width.

use swatch_core::event::{Event, KeyCode, KeyEvent};

/// Width change applied by `+` and `-`.
pub const RESIZE_STEP: f32 = 40.0;

/// Events for one frame.
pub type Frame = Vec<Event>;

fn key_for(ch: char) -> Option<KeyCode> {
    match ch {
        '.' => None,
        '>' => Some(KeyCode::Right),
        '<' => Some(KeyCode::Left),
        ']' => Some(KeyCode::ShoulderRight),
        '[' => Some(KeyCode::ShoulderLeft),
        other => Some(KeyCode::Char(other)),
    }
}

/// Split `script` into frames, starting from a parent of `width`.
pub fn frames(script: &str, width: f32) -> Vec<Frame> {
    let mut width = width;
    script
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            '+' => {
                width += RESIZE_STEP;
                vec![Event::Resize { width }]
            }
            '-' => {
                width = (width - RESIZE_STEP).max(0.0);
                vec![Event::Resize { width }]
            }
            other => key_for(other)
                .map(|code| vec![Event::Key(KeyEvent::new(code))])
                .unwrap_or_default(),
        })
        .collect()
}

/// The last width the parent was resized to during `frame`, if any.
pub fn resized_width(frame: &[Event]) -> Option<f32> {
    frame.iter().rev().find_map(|event| match event {
        Event::Resize { width } => Some(*width),
        Event::Key(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(frame: &Frame) -> Option<KeyCode> {
        frame.first().and_then(Event::as_key).map(|key| key.code)
    }

    #[test]
    fn one_frame_per_character() {
        let frames = frames("><.q", 431.0);
        assert_eq!(frames.len(), 4);
        assert_eq!(code(&frames[0]), Some(KeyCode::Right));
        assert_eq!(code(&frames[1]), Some(KeyCode::Left));
        assert!(frames[2].is_empty());
        assert_eq!(code(&frames[3]), Some(KeyCode::Char('q')));
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(frames(" > \n [ ", 431.0).len(), 2);
    }

    #[test]
    fn bumpers() {
        let frames = frames("[]", 431.0);
        assert_eq!(code(&frames[0]), Some(KeyCode::ShoulderLeft));
        assert_eq!(code(&frames[1]), Some(KeyCode::ShoulderRight));
    }

    #[test]
    fn resize_keys_track_width() {
        let frames = frames("+>--", 100.0);
        let widths: Vec<Option<f32>> = frames.iter().map(|f| resized_width(f)).collect();
        assert_eq!(widths, vec![Some(140.0), None, Some(100.0), Some(60.0)]);
    }

    #[test]
    fn width_never_goes_negative() {
        let frames = frames("--", 50.0);
        assert_eq!(resized_width(&frames[1]), Some(0.0));
    }

    #[test]
    fn last_resize_in_a_frame_wins() {
        let frame = [
            Event::Resize { width: 200.0 },
            Event::Key(KeyEvent::new(KeyCode::Left)),
            Event::Resize { width: 300.0 },
        ];
        assert_eq!(resized_width(&frame), Some(300.0));
    }
}

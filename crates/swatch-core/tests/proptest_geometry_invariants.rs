//! Property-based invariant tests for geometry and input primitives.
//!
//! 1. `from_parts` and `origin`/`size` agree.
//! 2. Right/bottom edges are consistent with x+width, y+height.
//! 3. A strip above a rectangle touches it and shares its horizontal extent.
//! 4. Every point of a non-empty rectangle's top-left corner is contained.
//! 5. Frame input never reports a control nobody bound.

use proptest::prelude::*;
use swatch_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use swatch_core::geometry::{Point, Rect, Size};
use swatch_core::input::{Control, ControlInput, ControlMap, FrameInput};

// ── Helpers ─────────────────────────────────────────────────────────────

fn coord() -> impl Strategy<Value = f32> {
    (-2_000i32..=2_000).prop_map(|v| v as f32 * 0.5)
}

fn extent() -> impl Strategy<Value = f32> {
    (0i32..=2_000).prop_map(|v| v as f32 * 0.25)
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (coord(), coord(), extent(), extent()).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn key_strategy() -> impl Strategy<Value = Event> {
    let code = prop_oneof![
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Enter),
        any::<char>().prop_map(KeyCode::Char),
    ];
    let kind = prop_oneof![
        Just(KeyEventKind::Press),
        Just(KeyEventKind::Repeat),
        Just(KeyEventKind::Release),
    ];
    (code, kind).prop_map(|(code, kind)| Event::Key(KeyEvent::new(code).with_kind(kind)))
}

// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parts_round_trip(r in rect_strategy()) {
        let rebuilt = Rect::from_parts(r.origin(), r.size());
        prop_assert_eq!(rebuilt, r);
        prop_assert_eq!(r.size(), Size::new(r.width, r.height));
    }

    #[test]
    fn edges_match_extent(r in rect_strategy()) {
        prop_assert_eq!(r.right(), r.x + r.width);
        prop_assert_eq!(r.bottom(), r.y + r.height);
    }

    #[test]
    fn strip_above_touches(r in rect_strategy(), h in extent()) {
        let strip = r.strip_above(h);
        prop_assert_eq!(strip.x, r.x);
        prop_assert_eq!(strip.width, r.width);
        prop_assert_eq!(strip.height, h);
        prop_assert!((strip.bottom() - r.y).abs() < 1e-3);
    }

    #[test]
    fn origin_inside_non_empty(r in rect_strategy()) {
        prop_assume!(!r.is_empty());
        prop_assert!(r.contains(r.origin()));
        prop_assert!(!r.contains(Point::new(r.right(), r.y)));
    }

    #[test]
    fn unbound_keys_stay_idle(events in prop::collection::vec(key_strategy(), 0..16)) {
        let map = ControlMap::empty().bind(KeyCode::Left, Control::PageLeft);
        let mut input = FrameInput::collect(&events, &map);
        prop_assert!(!input.is_just_pressed(Control::PageRight));
        let pressed_left = events.iter().filter_map(Event::as_key).any(|k| {
            k.code == KeyCode::Left && k.kind == KeyEventKind::Press
        });
        prop_assert_eq!(input.is_just_pressed(Control::PageLeft), pressed_left);
    }
}

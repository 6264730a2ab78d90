//! Platform-independent translation from raw platform input to canonical
//! [`UiohookEvent`]s.
//!
//! Grounded in the sequencing described for the original dispatcher
//! (`dispatch_event.h`/`.c` across all three backends): each platform
//! runtime resolves its native event into a [`RawInput`] value — virtual
//! code and button index already resolved via that platform's keymap and
//! button-map lookup — and feeds it to a single [`Dispatcher`] instance,
//! which owns click-count and drag-threshold bookkeeping and is the only
//! place that touches [`crate::modifiers`].

use crate::hook::keyboard::{KeyboardEvent, KeyboardEventType};
use crate::hook::mouse::{MouseButton, MouseEvent, MouseEventType};
use crate::hook::wheel::WheelEvent;
use crate::hook::{HookLifecycleEvent, UiohookEvent};
use crate::modifiers;
use crate::unicode::codepoint_to_utf16;
use crate::vcode;
use std::convert::TryFrom;

/// A single intercepted native input, already reduced to canonical
/// ingredients (virtual code, remapped button index) by the platform
/// runtime that produced it.
#[derive(Debug, Clone)]
pub enum RawInput {
    KeyDown {
        vc: u32,
        native_code: u32,
        /// Unicode code point derived by the platform's text lookup for
        /// this key press, if any (`None` for non-printable keys).
        codepoint: Option<u32>,
    },
    KeyUp {
        vc: u32,
        native_code: u32,
    },
    MouseDown {
        button: u32,
        x: i16,
        y: i16,
    },
    MouseUp {
        button: u32,
        x: i16,
        y: i16,
    },
    MouseMove {
        x: i16,
        y: i16,
    },
    MouseWheel {
        amount: u16,
        rotation: i16,
        wheel_type: u8,
        direction: u8,
        x: i16,
        y: i16,
    },
    HookEnabled,
    HookDisabled,
}

/// Maximum time between two presses of the same button at the same
/// position for them to count as one click sequence. Mirrors the
/// platform double-click interval the original queries from the OS; fixed
/// here since there is no single cross-platform query for it.
const MULTI_CLICK_INTERVAL_MS: u64 = 500;

/// Maximum pointer displacement, in either axis, for two presses to be
/// considered "the same position" for click counting, and for an
/// intervening move to not count as a drag.
const DRAG_THRESHOLD_PX: i32 = 5;

fn is_modifier_vc(vc: u32) -> bool {
    matches!(
        vc,
        vcode::VC_SHIFT_L
            | vcode::VC_SHIFT_R
            | vcode::VC_CONTROL_L
            | vcode::VC_CONTROL_R
            | vcode::VC_ALT_L
            | vcode::VC_ALT_R
            | vcode::VC_META_L
            | vcode::VC_META_R
    )
}

fn modifier_mask_bit(vc: u32) -> u16 {
    match vc {
        vcode::VC_SHIFT_L => modifiers::MASK_SHIFT_L,
        vcode::VC_SHIFT_R => modifiers::MASK_SHIFT_R,
        vcode::VC_CONTROL_L => modifiers::MASK_CTRL_L,
        vcode::VC_CONTROL_R => modifiers::MASK_CTRL_R,
        vcode::VC_ALT_L => modifiers::MASK_ALT_L,
        vcode::VC_ALT_R => modifiers::MASK_ALT_R,
        vcode::VC_META_L => modifiers::MASK_META_L,
        vcode::VC_META_R => modifiers::MASK_META_R,
        _ => 0,
    }
}

fn latch_bit(vc: u32) -> Option<u16> {
    match vc {
        vcode::VC_CAPS_LOCK => Some(modifiers::MASK_CAPS_LOCK),
        vcode::VC_NUM_LOCK => Some(modifiers::MASK_NUM_LOCK),
        vcode::VC_SCROLL_LOCK => Some(modifiers::MASK_SCROLL_LOCK),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct PressRecord {
    button: u32,
    x: i16,
    y: i16,
    clicks: u16,
    moved_beyond_threshold: bool,
    // Caller stamps these with its own clock; the dispatcher never reads
    // the system clock itself (see src/dispatch.rs tests for fixed-time use).
    last_click_time_ms: u64,
}

/// Owns click-count and drag-threshold state across a single `run()`.
/// Platform-independent: never touches an OS handle.
pub struct Dispatcher {
    last_press: Option<PressRecord>,
    active_press: Option<PressRecord>,
    clock_ms: u64,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            last_press: None,
            active_press: None,
            clock_ms: 0,
        }
    }

    /// Advances the dispatcher's notion of "now", used only for the
    /// multi-click window. Platform runtimes call this with their event
    /// timestamp before dispatching.
    pub fn advance_clock(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
    }

    /// Dispatches one raw input, invoking `sink` for each canonical event
    /// produced, in order. Returns whether the input was "consumed"
    /// (always `false` here; platform runtimes with suppression semantics
    /// decide that independently based on the emitted events).
    pub fn dispatch(&mut self, raw: RawInput, mut sink: impl FnMut(UiohookEvent)) -> bool {
        match raw {
            RawInput::HookEnabled => {
                sink(UiohookEvent::HookEnabled(HookLifecycleEvent {
                    timestamp: self.clock_ms,
                    modifier_mask: modifiers::get(),
                }));
                false
            }
            RawInput::HookDisabled => {
                sink(UiohookEvent::HookDisabled(HookLifecycleEvent {
                    timestamp: self.clock_ms,
                    modifier_mask: modifiers::get(),
                }));
                false
            }
            RawInput::KeyDown { vc, native_code, codepoint } => {
                if is_modifier_vc(vc) {
                    modifiers::set(modifier_mask_bit(vc));
                } else if let Some(bit) = latch_bit(vc) {
                    modifiers::toggle_latch_on_press(bit);
                }

                let key_code = crate::hook::keyboard::KeyCode::try_from(vc)
                    .unwrap_or(crate::hook::keyboard::KeyCode::Undefined);
                sink(UiohookEvent::Keyboard(KeyboardEvent {
                    event_type: KeyboardEventType::Pressed,
                    key_code,
                    raw_code: native_code,
                    key_char: None,
                    codepoint: None,
                    timestamp: self.clock_ms,
                    modifier_mask: modifiers::get(),
                }));

                if let Some(cp) = codepoint {
                    for unit in codepoint_to_utf16(cp) {
                        sink(UiohookEvent::Keyboard(KeyboardEvent {
                            event_type: KeyboardEventType::Typed,
                            key_code,
                            raw_code: native_code,
                            key_char: Some(unit),
                            codepoint: Some(cp),
                            timestamp: self.clock_ms,
                            modifier_mask: modifiers::get(),
                        }));
                    }
                }
                false
            }
            RawInput::KeyUp { vc, native_code } => {
                if is_modifier_vc(vc) {
                    modifiers::clear(modifier_mask_bit(vc));
                }
                // Latched locks are never cleared on release.

                let key_code = crate::hook::keyboard::KeyCode::try_from(vc)
                    .unwrap_or(crate::hook::keyboard::KeyCode::Undefined);
                sink(UiohookEvent::Keyboard(KeyboardEvent {
                    event_type: KeyboardEventType::Released,
                    key_code,
                    raw_code: native_code,
                    key_char: None,
                    codepoint: None,
                    timestamp: self.clock_ms,
                    modifier_mask: modifiers::get(),
                }));
                false
            }
            RawInput::MouseDown { button, x, y } => {
                modifiers::set(modifiers::button_mask(button as u16));

                let clicks = match self.last_press {
                    Some(prev)
                        if prev.button == button
                            && (prev.x - x).unsigned_abs() as i32 <= DRAG_THRESHOLD_PX
                            && (prev.y - y).unsigned_abs() as i32 <= DRAG_THRESHOLD_PX
                            && self.clock_ms.saturating_sub(prev.last_click_time_ms) <= MULTI_CLICK_INTERVAL_MS =>
                    {
                        prev.clicks.saturating_add(1)
                    }
                    _ => 1,
                };

                self.active_press = Some(PressRecord {
                    button,
                    x,
                    y,
                    clicks,
                    moved_beyond_threshold: false,
                    last_click_time_ms: self.clock_ms,
                });

                sink(UiohookEvent::Mouse(MouseEvent {
                    event_type: MouseEventType::Pressed,
                    button: MouseButton::try_from(button).unwrap_or(MouseButton::NoButton),
                    clicks,
                    x,
                    y,
                    timestamp: self.clock_ms,
                    modifier_mask: modifiers::get(),
                }));
                false
            }
            RawInput::MouseUp { button, x, y } => {
                modifiers::clear(modifiers::button_mask(button as u16));

                sink(UiohookEvent::Mouse(MouseEvent {
                    event_type: MouseEventType::Released,
                    button: MouseButton::try_from(button).unwrap_or(MouseButton::NoButton),
                    clicks: self.active_press.map(|p| p.clicks).unwrap_or(1),
                    x,
                    y,
                    timestamp: self.clock_ms,
                    modifier_mask: modifiers::get(),
                }));

                if let Some(press) = self.active_press.take() {
                    if press.button == button && !press.moved_beyond_threshold {
                        sink(UiohookEvent::Mouse(MouseEvent {
                            event_type: MouseEventType::Clicked,
                            button: MouseButton::try_from(button).unwrap_or(MouseButton::NoButton),
                            clicks: press.clicks,
                            x,
                            y,
                            timestamp: self.clock_ms,
                            modifier_mask: modifiers::get(),
                        }));
                    }
                    self.last_press = Some(PressRecord {
                        x,
                        y,
                        last_click_time_ms: self.clock_ms,
                        ..press
                    });
                }
                false
            }
            RawInput::MouseMove { x, y } => {
                if modifiers::any_button_held() {
                    if let Some(press) = self.active_press.as_mut() {
                        if (press.x - x).unsigned_abs() as i32 > DRAG_THRESHOLD_PX
                            || (press.y - y).unsigned_abs() as i32 > DRAG_THRESHOLD_PX
                        {
                            press.moved_beyond_threshold = true;
                        }
                    }
                    sink(UiohookEvent::Mouse(MouseEvent {
                        event_type: MouseEventType::Dragged,
                        button: MouseButton::NoButton,
                        clicks: 0,
                        x,
                        y,
                        timestamp: self.clock_ms,
                        modifier_mask: modifiers::get(),
                    }));
                } else {
                    sink(UiohookEvent::Mouse(MouseEvent {
                        event_type: MouseEventType::Moved,
                        button: MouseButton::NoButton,
                        clicks: 0,
                        x,
                        y,
                        timestamp: self.clock_ms,
                        modifier_mask: modifiers::get(),
                    }));
                }
                false
            }
            RawInput::MouseWheel { amount, rotation, wheel_type, direction, x, y } => {
                sink(UiohookEvent::Wheel(WheelEvent::new(
                    1,
                    x,
                    y,
                    wheel_type,
                    amount,
                    rotation,
                    direction,
                    self.clock_ms,
                    modifiers::get(),
                )));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::wheel::WHEEL_VERTICAL_DIRECTION;
    use std::sync::Mutex;

    static LOCK: Mutex<()> = Mutex::new(());

    fn collect(raw: Vec<RawInput>) -> Vec<UiohookEvent> {
        let mut d = Dispatcher::new();
        let mut out = Vec::new();
        for r in raw {
            d.dispatch(r, |e| out.push(e));
        }
        out
    }

    #[test]
    fn test_simple_letter_scenario() {
        let _g = LOCK.lock().unwrap();
        modifiers::reset();
        let events = collect(vec![
            RawInput::HookEnabled,
            RawInput::KeyDown { vc: vcode::VC_A, native_code: 0x41, codepoint: Some('a' as u32) },
            RawInput::KeyUp { vc: vcode::VC_A, native_code: 0x41 },
            RawInput::HookDisabled,
        ]);

        assert!(matches!(events[0], UiohookEvent::HookEnabled(_)));
        assert!(matches!(events.last().unwrap(), UiohookEvent::HookDisabled(_)));
        let kinds: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                UiohookEvent::Keyboard(k) => Some(k.event_type),
                _ => None,
            })
            .collect();
        assert_eq!(kinds, vec![KeyboardEventType::Pressed, KeyboardEventType::Typed, KeyboardEventType::Released]);
    }

    #[test]
    fn test_astral_codepoint_delivers_both_surrogate_halves() {
        let _g = LOCK.lock().unwrap();
        modifiers::reset();
        // U+1F600 GRINNING FACE
        let events = collect(vec![RawInput::KeyDown {
            vc: vcode::VC_A,
            native_code: 0x41,
            codepoint: Some(0x1F600),
        }]);
        let typed: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                UiohookEvent::Keyboard(k) if k.event_type == KeyboardEventType::Typed => Some(k),
                _ => None,
            })
            .collect();
        assert_eq!(typed.len(), 2);
        assert_eq!(typed[0].key_char, Some(0xD83D));
        assert_eq!(typed[1].key_char, Some(0xDE00));
        assert_eq!(typed[0].codepoint, Some(0x1F600));
        assert_eq!(typed[1].codepoint, Some(0x1F600));
    }

    #[test]
    fn test_shift_sets_mask_before_emit_and_clears_after() {
        let _g = LOCK.lock().unwrap();
        modifiers::reset();
        let mut d = Dispatcher::new();
        let mut masks = Vec::new();
        d.dispatch(RawInput::KeyDown { vc: vcode::VC_SHIFT_L, native_code: 1, codepoint: None }, |_| {});
        masks.push(modifiers::get());
        d.dispatch(RawInput::KeyUp { vc: vcode::VC_SHIFT_L, native_code: 1 }, |_| {});
        masks.push(modifiers::get());

        assert_eq!(masks[0], modifiers::MASK_SHIFT_L);
        assert_eq!(masks[1], 0);
    }

    #[test]
    fn test_keypad_5_num_lock_off_disambiguation() {
        let vc = vcode::apply_keypad_rule(vcode::VC_KP_5, false);
        assert_eq!(vc & vcode::KEYPAD_NAVIGATION_BIT, vcode::KEYPAD_NAVIGATION_BIT);
    }

    #[test]
    fn test_double_click_increments_count_within_window() {
        let _g = LOCK.lock().unwrap();
        modifiers::reset();
        let mut d = Dispatcher::new();
        let mut clicks = Vec::new();
        d.advance_clock(0);
        d.dispatch(RawInput::MouseDown { button: 1, x: 10, y: 10 }, |_| {});
        d.dispatch(RawInput::MouseUp { button: 1, x: 10, y: 10 }, |e| {
            if let UiohookEvent::Mouse(m) = e {
                if m.event_type == MouseEventType::Clicked {
                    clicks.push(m.clicks);
                }
            }
        });
        d.advance_clock(100);
        d.dispatch(RawInput::MouseDown { button: 1, x: 10, y: 10 }, |_| {});
        d.dispatch(RawInput::MouseUp { button: 1, x: 10, y: 10 }, |e| {
            if let UiohookEvent::Mouse(m) = e {
                if m.event_type == MouseEventType::Clicked {
                    clicks.push(m.clicks);
                }
            }
        });

        assert_eq!(clicks, vec![1, 2]);
    }

    #[test]
    fn test_drag_beyond_threshold_suppresses_clicked() {
        let _g = LOCK.lock().unwrap();
        modifiers::reset();
        let mut d = Dispatcher::new();
        let mut saw_clicked = false;
        let mut dragged_count = 0;
        d.dispatch(RawInput::MouseDown { button: 1, x: 0, y: 0 }, |_| {});
        for pos in [50, 100, 150] {
            d.dispatch(RawInput::MouseMove { x: pos, y: pos }, |e| {
                if let UiohookEvent::Mouse(m) = e {
                    if m.event_type == MouseEventType::Dragged {
                        dragged_count += 1;
                    }
                }
            });
        }
        d.dispatch(RawInput::MouseUp { button: 1, x: 150, y: 150 }, |e| {
            if let UiohookEvent::Mouse(m) = e {
                if m.event_type == MouseEventType::Clicked {
                    saw_clicked = true;
                }
            }
        });

        assert_eq!(dragged_count, 3);
        assert!(!saw_clicked);
    }

    #[test]
    fn test_mouse_move_without_button_is_moved_not_dragged() {
        let _g = LOCK.lock().unwrap();
        modifiers::reset();
        let events = collect(vec![RawInput::MouseMove { x: 5, y: 5 }]);
        assert!(matches!(
            events[0],
            UiohookEvent::Mouse(MouseEvent { event_type: MouseEventType::Moved, .. })
        ));
    }

    #[test]
    fn test_wheel_event_direction_passthrough() {
        let events = collect(vec![RawInput::MouseWheel {
            amount: 3,
            rotation: -120,
            wheel_type: crate::vcode::WHEEL_UNIT_SCROLL,
            direction: WHEEL_VERTICAL_DIRECTION,
            x: 0,
            y: 0,
        }]);
        if let UiohookEvent::Wheel(w) = &events[0] {
            assert!(w.is_vertical());
            assert!(!w.is_horizontal());
            assert_eq!(w.rotation, -120);
        } else {
            panic!("expected wheel event");
        }
    }
}

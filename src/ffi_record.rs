//! Binary-stable event record for C-ABI consumers.
//!
//! This is the wire shape a C caller linking against a future `cdylib`
//! build of this crate would read; it is never used internally for event
//! delivery (that happens through [`crate::hook::UiohookEvent`]).

use crate::hook::keyboard::{KeyboardEvent, KeyboardEventType};
use crate::hook::mouse::{MouseEvent, MouseEventType};
use crate::hook::wheel::WheelEvent;
use crate::hook::{HookLifecycleEvent, UiohookEvent};

pub const EVENT_HOOK_ENABLED: u32 = 1;
pub const EVENT_HOOK_DISABLED: u32 = 2;
pub const EVENT_KEY_PRESSED: u32 = 3;
pub const EVENT_KEY_RELEASED: u32 = 4;
pub const EVENT_KEY_TYPED: u32 = 5;
pub const EVENT_MOUSE_PRESSED: u32 = 6;
pub const EVENT_MOUSE_RELEASED: u32 = 7;
pub const EVENT_MOUSE_CLICKED: u32 = 8;
pub const EVENT_MOUSE_MOVED: u32 = 9;
pub const EVENT_MOUSE_DRAGGED: u32 = 10;
pub const EVENT_MOUSE_WHEEL: u32 = 11;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct KeyRecord {
    pub virtual_code: u16,
    pub native_keycode: u32,
    pub key_char: u16,
    pub raw_code: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MouseRecord {
    pub button: u16,
    pub click_count: u16,
    pub x: i16,
    pub y: i16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct WheelRecord {
    pub clicks: u16,
    pub x: i16,
    pub y: i16,
    pub type_: u8,
    pub rotation: i8,
    pub delta: i16,
    pub direction: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union EventPayload {
    pub key: KeyRecord,
    pub mouse: MouseRecord,
    pub wheel: WheelRecord,
}

#[repr(C)]
pub struct EventRecord {
    pub kind: u32,
    pub timestamp: u64,
    pub modifier_mask: u16,
    pub reserved: u16,
    pub payload: EventPayload,
}

impl From<&UiohookEvent> for EventRecord {
    fn from(event: &UiohookEvent) -> Self {
        match event {
            UiohookEvent::HookEnabled(le) => EventRecord {
                kind: EVENT_HOOK_ENABLED,
                timestamp: le.timestamp,
                modifier_mask: le.modifier_mask,
                reserved: 0,
                payload: EventPayload { key: KeyRecord { virtual_code: 0, native_keycode: 0, key_char: 0, raw_code: 0 } },
            },
            UiohookEvent::HookDisabled(le) => EventRecord {
                kind: EVENT_HOOK_DISABLED,
                timestamp: le.timestamp,
                modifier_mask: le.modifier_mask,
                reserved: 0,
                payload: EventPayload { key: KeyRecord { virtual_code: 0, native_keycode: 0, key_char: 0, raw_code: 0 } },
            },
            UiohookEvent::Keyboard(ke) => EventRecord {
                kind: keyboard_kind(ke),
                timestamp: ke.timestamp,
                modifier_mask: ke.modifier_mask,
                reserved: 0,
                payload: EventPayload { key: key_record(ke) },
            },
            UiohookEvent::Mouse(me) => EventRecord {
                kind: mouse_kind(me),
                timestamp: me.timestamp,
                modifier_mask: me.modifier_mask,
                reserved: 0,
                payload: EventPayload { mouse: mouse_record(me) },
            },
            UiohookEvent::Wheel(we) => EventRecord {
                kind: EVENT_MOUSE_WHEEL,
                timestamp: we.timestamp,
                modifier_mask: we.modifier_mask,
                reserved: 0,
                payload: EventPayload { wheel: wheel_record(we) },
            },
        }
    }
}

fn keyboard_kind(ke: &KeyboardEvent) -> u32 {
    match ke.event_type {
        KeyboardEventType::Pressed => EVENT_KEY_PRESSED,
        KeyboardEventType::Released => EVENT_KEY_RELEASED,
        KeyboardEventType::Typed => EVENT_KEY_TYPED,
    }
}

fn key_record(ke: &KeyboardEvent) -> KeyRecord {
    KeyRecord {
        virtual_code: u32::from(ke.key_code) as u16,
        native_keycode: ke.raw_code,
        key_char: ke.key_char.unwrap_or(0),
        raw_code: ke.codepoint.unwrap_or(0),
    }
}

fn mouse_kind(me: &MouseEvent) -> u32 {
    match me.event_type {
        MouseEventType::Moved => EVENT_MOUSE_MOVED,
        MouseEventType::Pressed => EVENT_MOUSE_PRESSED,
        MouseEventType::Released => EVENT_MOUSE_RELEASED,
        MouseEventType::Clicked => EVENT_MOUSE_CLICKED,
        MouseEventType::Dragged => EVENT_MOUSE_DRAGGED,
    }
}

fn mouse_record(me: &MouseEvent) -> MouseRecord {
    MouseRecord {
        button: u32::from(me.button) as u16,
        click_count: me.clicks,
        x: me.x,
        y: me.y,
    }
}

fn wheel_record(we: &WheelEvent) -> WheelRecord {
    WheelRecord {
        clicks: we.clicks,
        x: we.x,
        y: we.y,
        type_: we.type_,
        rotation: we.rotation.clamp(i8::MIN as i16, i8::MAX as i16) as i8,
        delta: we.rotation,
        direction: we.direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::keyboard::KeyCode;

    #[test]
    fn test_keyboard_event_converts_to_key_record() {
        let ke = KeyboardEvent {
            event_type: KeyboardEventType::Pressed,
            key_code: KeyCode::A,
            raw_code: 0x41,
            key_char: Some('A' as u16),
            codepoint: Some('A' as u32),
            timestamp: 1234,
            modifier_mask: 0,
        };
        let record = EventRecord::from(&UiohookEvent::Keyboard(ke));
        assert_eq!(record.kind, EVENT_KEY_PRESSED);
        assert_eq!(record.timestamp, 1234);
        unsafe {
            assert_eq!(record.payload.key.native_keycode, 0x41);
            assert_eq!(record.payload.key.key_char, 'A' as u16);
            assert_eq!(record.payload.key.raw_code, 'A' as u32);
        }
    }

    #[test]
    fn test_astral_typed_event_carries_full_codepoint_in_raw_code() {
        // The lone surrogate half in `key_char` is not a valid code point;
        // `raw_code` must carry the unsplit scalar instead.
        let ke = KeyboardEvent {
            event_type: KeyboardEventType::Typed,
            key_code: KeyCode::Undefined,
            raw_code: 0,
            key_char: Some(0xD83D),
            codepoint: Some(0x1F600),
            timestamp: 0,
            modifier_mask: 0,
        };
        let record = EventRecord::from(&UiohookEvent::Keyboard(ke));
        unsafe {
            assert_eq!(record.payload.key.key_char, 0xD83D);
            assert_eq!(record.payload.key.raw_code, 0x1F600);
        }
    }

    #[test]
    fn test_hook_enabled_has_no_payload_semantics() {
        let record = EventRecord::from(&UiohookEvent::HookEnabled(HookLifecycleEvent {
            timestamp: 42,
            modifier_mask: 7,
        }));
        assert_eq!(record.kind, EVENT_HOOK_ENABLED);
        assert_eq!(record.timestamp, 42);
        assert_eq!(record.modifier_mask, 7);
    }
}

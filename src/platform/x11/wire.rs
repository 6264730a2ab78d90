//! Bit-exact decoder for the raw X11 core-protocol event bytes XRecord
//! hands back.
//!
//! Grounded in `wire_data_to_event()` in
//! `original_source/src/x11/input_helper.c`, whose comment credits
//! `_XWireToEvent` in Xlib's `Xlibint.c`: every `KeyPress`/`KeyRelease`/
//! `ButtonPress`/`ButtonRelease`/`MotionNotify` event is the X11 core
//! protocol's 32-byte `xEvent` wire structure, byte-for-byte:
//!
//! ```text
//! byte  0      : type (bit 0x80 is the send-event flag, masked off here)
//! byte  1      : detail (keycode for key events, button number for button events)
//! bytes 2..4   : sequence number (unused)
//! bytes 4..8   : time, CARD32
//! bytes 8..20  : root/event/child window XIDs (unused)
//! bytes 20..22 : root_x, INT16 (unused)
//! bytes 22..24 : root_y, INT16 (unused)
//! bytes 24..26 : event_x, INT16
//! bytes 26..28 : event_y, INT16
//! bytes 28..30 : state, CARD16 (button/modifier mask)
//! byte  30     : same_screen (unused)
//! byte  31     : padding
//! ```
//!
//! Decoded in the byte order the connection negotiated at setup, which on
//! every X server this crate targets (x86/ARM Linux and BSD) is
//! little-endian.

pub const KEY_PRESS: u8 = 2;
pub const KEY_RELEASE: u8 = 3;
pub const BUTTON_PRESS: u8 = 4;
pub const BUTTON_RELEASE: u8 = 5;
pub const MOTION_NOTIFY: u8 = 6;
pub const MAPPING_NOTIFY: u8 = 34;

pub const WIRE_EVENT_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireEvent {
    pub event_type: u8,
    pub detail: u8,
    pub time: u32,
    pub event_x: i16,
    pub event_y: i16,
    pub state: u16,
}

/// Decodes one 32-byte core-protocol event from the front of `buf`.
/// Returns `None` if fewer than [`WIRE_EVENT_LEN`] bytes remain.
pub fn decode_event(buf: &[u8]) -> Option<WireEvent> {
    if buf.len() < WIRE_EVENT_LEN {
        return None;
    }
    Some(WireEvent {
        event_type: buf[0] & 0x7F,
        detail: buf[1],
        time: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
        event_x: i16::from_le_bytes([buf[24], buf[25]]),
        event_y: i16::from_le_bytes([buf[26], buf[27]]),
        state: u16::from_le_bytes([buf[28], buf[29]]),
    })
}

/// Decodes every complete 32-byte event packed back-to-back in `buf`,
/// which is how XRecord delivers a burst of events in one callback.
pub fn decode_all(mut buf: &[u8]) -> Vec<WireEvent> {
    let mut events = Vec::new();
    while let Some(event) = decode_event(buf) {
        events.push(event);
        buf = &buf[WIRE_EVENT_LEN..];
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned_key_press(keycode: u8, time: u32, state: u16) -> [u8; WIRE_EVENT_LEN] {
        let mut buf = [0u8; WIRE_EVENT_LEN];
        buf[0] = KEY_PRESS;
        buf[1] = keycode;
        buf[4..8].copy_from_slice(&time.to_le_bytes());
        buf[28..30].copy_from_slice(&state.to_le_bytes());
        buf
    }

    fn canned_button_press(button: u8, x: i16, y: i16) -> [u8; WIRE_EVENT_LEN] {
        let mut buf = [0u8; WIRE_EVENT_LEN];
        buf[0] = BUTTON_PRESS;
        buf[1] = button;
        buf[24..26].copy_from_slice(&x.to_le_bytes());
        buf[26..28].copy_from_slice(&y.to_le_bytes());
        buf
    }

    #[test]
    fn test_decode_key_press_fields() {
        let buf = canned_key_press(38, 123_456, 0x0011);
        let event = decode_event(&buf).unwrap();
        assert_eq!(event.event_type, KEY_PRESS);
        assert_eq!(event.detail, 38);
        assert_eq!(event.time, 123_456);
        assert_eq!(event.state, 0x0011);
    }

    #[test]
    fn test_decode_masks_off_send_event_bit() {
        let mut buf = canned_key_press(38, 0, 0);
        buf[0] |= 0x80; // synthetic/send-event flag
        let event = decode_event(&buf).unwrap();
        assert_eq!(event.event_type, KEY_PRESS);
    }

    #[test]
    fn test_decode_button_press_position() {
        let buf = canned_button_press(1, -17, 200);
        let event = decode_event(&buf).unwrap();
        assert_eq!(event.event_type, BUTTON_PRESS);
        assert_eq!(event.detail, 1);
        assert_eq!(event.event_x, -17);
        assert_eq!(event.event_y, 200);
    }

    #[test]
    fn test_decode_all_splits_back_to_back_events() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&canned_key_press(38, 1, 0));
        buf.extend_from_slice(&canned_button_press(1, 10, 20));
        let events = decode_all(&buf);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, KEY_PRESS);
        assert_eq!(events[1].event_type, BUTTON_PRESS);
    }

    #[test]
    fn test_decode_short_buffer_returns_none() {
        assert!(decode_event(&[0u8; 10]).is_none());
        assert_eq!(decode_all(&[0u8; 10]).len(), 0);
    }
}

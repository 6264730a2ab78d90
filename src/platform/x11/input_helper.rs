//! X11 Input Helper: lock state via the XKB indicator LEDs, held-modifier
//! state via `QueryKeymap`/`QueryPointer`, and the button2/button3 swap
//! every X server needs normalized away.
//!
//! Grounded in `initialize_locks()`/`initialize_modifiers()`/
//! `button_map_lookup()` in `original_source/src/x11/input_helper.c`.

use crate::error::UiohookError;
use crate::modifiers;
use crate::platform::InputHelper;
use std::sync::Arc;
use x11rb::connection::Connection;
use x11rb::protocol::xkb::ConnectionExt as _;
use x11rb::protocol::xproto::{ConnectionExt as _, ButtonMask, Keycode, Keysym};
use x11rb::rust_connection::RustConnection;

const LED_CAPS_LOCK: u32 = 0x01;
const LED_NUM_LOCK: u32 = 0x02;
const LED_SCROLL_LOCK: u32 = 0x04;

// From X11/keysymdef.h.
const XK_SHIFT_L: Keysym = 0xffe1;
const XK_SHIFT_R: Keysym = 0xffe2;
const XK_CONTROL_L: Keysym = 0xffe3;
const XK_CONTROL_R: Keysym = 0xffe4;
const XK_ALT_L: Keysym = 0xffe9;
const XK_ALT_R: Keysym = 0xffea;
const XK_SUPER_L: Keysym = 0xffeb;
const XK_SUPER_R: Keysym = 0xffec;

/// Reverse of Xlib's `XKeysymToKeycode`: scans the connection's current
/// keyboard mapping for the first keycode whose first keysym matches.
fn keysym_to_keycode(conn: &RustConnection, keysym: Keysym) -> Option<Keycode> {
    let setup = conn.setup();
    let count = setup.max_keycode.saturating_sub(setup.min_keycode).saturating_add(1);
    let reply = conn.get_keyboard_mapping(setup.min_keycode, count).ok()?.reply().ok()?;
    let per_code = reply.keysyms_per_keycode.max(1) as usize;
    for (i, chunk) in reply.keysyms.chunks(per_code).enumerate() {
        if chunk.iter().any(|&k| k == keysym) {
            return Some(setup.min_keycode + i as u8);
        }
    }
    None
}

fn key_is_down(keymap: &[u8; 32], keycode: Keycode) -> bool {
    keymap[(keycode / 8) as usize] & (1 << (keycode % 8)) != 0
}

pub struct X11InputHelper {
    conn: Arc<RustConnection>,
    root: u32,
}

impl X11InputHelper {
    pub fn new(conn: Arc<RustConnection>, root: u32) -> Self {
        Self { conn, root }
    }

    fn initialize_locks(&self) {
        if let Ok(cookie) = self.conn.xkb_get_indicator_state(x11rb::protocol::xkb::ID::USE_CORE_KBD.into()) {
            if let Ok(reply) = cookie.reply() {
                let leds = reply.state;
                for (led, bit) in [
                    (LED_CAPS_LOCK, modifiers::MASK_CAPS_LOCK),
                    (LED_NUM_LOCK, modifiers::MASK_NUM_LOCK),
                    (LED_SCROLL_LOCK, modifiers::MASK_SCROLL_LOCK),
                ] {
                    if leds & led != 0 {
                        modifiers::toggle_latch_on_press(bit);
                    }
                }
                return;
            }
        }
        log::warn!("XkbGetIndicatorState failed; lock state starts unset");
    }

    fn initialize_held_modifiers(&self) {
        let keymap = match self.conn.query_keymap().ok().and_then(|c| c.reply().ok()) {
            Some(reply) => reply.keys,
            None => {
                log::warn!("QueryKeymap failed; held-modifier state starts unset");
                return;
            }
        };

        let pairs = [
            (XK_SHIFT_L, modifiers::MASK_SHIFT_L),
            (XK_SHIFT_R, modifiers::MASK_SHIFT_R),
            (XK_CONTROL_L, modifiers::MASK_CTRL_L),
            (XK_CONTROL_R, modifiers::MASK_CTRL_R),
            (XK_ALT_L, modifiers::MASK_ALT_L),
            (XK_ALT_R, modifiers::MASK_ALT_R),
            (XK_SUPER_L, modifiers::MASK_META_L),
            (XK_SUPER_R, modifiers::MASK_META_R),
        ];
        for (keysym, bit) in pairs {
            if let Some(keycode) = keysym_to_keycode(&self.conn, keysym) {
                if key_is_down(&keymap, keycode) {
                    modifiers::set(bit);
                }
            }
        }

        // QueryPointer's button mask is an independent cross-check the
        // original also performs; a failure here is non-fatal since the
        // keymap scan above already covers the keyboard modifiers.
        if let Some(reply) = self.conn.query_pointer(self.root).ok().and_then(|c| c.reply().ok()) {
            let mask: u16 = reply.mask.into();
            for (button_mask, bit) in [
                (u16::from(ButtonMask::M1), modifiers::MASK_BUTTON1),
                (u16::from(ButtonMask::M2), modifiers::MASK_BUTTON2),
                (u16::from(ButtonMask::M3), modifiers::MASK_BUTTON3),
                (u16::from(ButtonMask::M4), modifiers::MASK_BUTTON4),
                (u16::from(ButtonMask::M5), modifiers::MASK_BUTTON5),
            ] {
                if mask & button_mask != 0 {
                    modifiers::set(bit);
                }
            }
        }
    }
}

impl InputHelper for X11InputHelper {
    fn load(&mut self) -> Result<(), UiohookError> {
        modifiers::reset();
        self.initialize_locks();
        self.initialize_held_modifiers();
        Ok(())
    }

    fn unload(&mut self) {
        modifiers::reset();
    }

    /// X11 numbers the middle/right buttons backwards relative to every
    /// other platform (`Button2` is physically the middle button); swap
    /// them here after applying the server's own pointer-button remap.
    fn button_map_lookup(&self, raw_button: u32) -> u32 {
        let remapped = self
            .conn
            .get_pointer_mapping()
            .ok()
            .and_then(|c| c.reply().ok())
            .and_then(|reply| reply.map.get(raw_button.saturating_sub(1) as usize).copied())
            .map(|b| b as u32)
            .unwrap_or(raw_button);

        match remapped {
            2 => 3,
            3 => 2,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_down_bit_math() {
        let mut keymap = [0u8; 32];
        keymap[38 / 8] = 1 << (38 % 8);
        assert!(key_is_down(&keymap, 38));
        assert!(!key_is_down(&keymap, 39));
    }
}

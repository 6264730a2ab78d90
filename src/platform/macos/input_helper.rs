//! macOS Input Helper: initial lock/modifier state via `CGEventSourceKeyState`
//! and `CGEventSourceFlagsState`, identity button remap (Quartz already
//! reports left=1/right=2/center=3, decoded in `runtime.rs`).
//!
//! `core-graphics` does not wrap these two calls, so they are declared
//! directly against the `CoreGraphics` framework, the same way
//! `runtime.rs` declares the event-tap calls it needs.

use crate::error::UiohookError;
use crate::modifiers;
use crate::platform::InputHelper;

type CGEventSourceStateID = i32;
const K_CG_EVENT_SOURCE_STATE_COMBINED_SESSION_STATE: CGEventSourceStateID = 0;
const K_CG_EVENT_SOURCE_STATE_HID_SYSTEM_STATE: CGEventSourceStateID = 1;

const FLAG_ALPHA_SHIFT: u64 = 1 << 16;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGEventSourceKeyState(state_id: CGEventSourceStateID, key: u16) -> bool;
    fn CGEventSourceFlagsState(state_id: CGEventSourceStateID) -> u64;
}

fn is_down(keycode: u16) -> bool {
    unsafe { CGEventSourceKeyState(K_CG_EVENT_SOURCE_STATE_HID_SYSTEM_STATE, keycode) }
}

#[derive(Default)]
pub struct MacosInputHelper;

impl MacosInputHelper {
    pub fn new() -> Self {
        Self
    }
}

impl InputHelper for MacosInputHelper {
    fn load(&mut self) -> Result<(), UiohookError> {
        modifiers::reset();

        let flags = unsafe { CGEventSourceFlagsState(K_CG_EVENT_SOURCE_STATE_COMBINED_SESSION_STATE) };
        if flags & FLAG_ALPHA_SHIFT != 0 {
            modifiers::toggle_latch_on_press(modifiers::MASK_CAPS_LOCK);
        }
        // macOS keyboards have no hardware NumLock/ScrollLock; those masks
        // stay clear until a client explicitly sets them.

        let pairs = [
            (0x38u16, modifiers::MASK_SHIFT_L),
            (0x3C, modifiers::MASK_SHIFT_R),
            (0x3B, modifiers::MASK_CTRL_L),
            (0x3E, modifiers::MASK_CTRL_R),
            (0x3A, modifiers::MASK_ALT_L),
            (0x3D, modifiers::MASK_ALT_R),
            (0x37, modifiers::MASK_META_L),
            (0x36, modifiers::MASK_META_R),
        ];
        for (keycode, bit) in pairs {
            if is_down(keycode) {
                modifiers::set(bit);
            }
        }

        Ok(())
    }

    fn unload(&mut self) {
        modifiers::reset();
    }

    fn button_map_lookup(&self, raw_button: u32) -> u32 {
        raw_button
    }
}

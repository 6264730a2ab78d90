//! Windows Input Helper: lock/modifier state via `GetKeyState`, identity
//! button remap (Windows already delivers left=1/right=2/middle=3).

use crate::error::UiohookError;
use crate::modifiers;
use crate::platform::InputHelper;
use winapi::um::winuser::{GetKeyState, VK_CAPITAL, VK_NUMLOCK, VK_SCROLL};

const VK_LSHIFT: i32 = 0xA0;
const VK_RSHIFT: i32 = 0xA1;
const VK_LCONTROL: i32 = 0xA2;
const VK_RCONTROL: i32 = 0xA3;
const VK_LMENU: i32 = 0xA4;
const VK_RMENU: i32 = 0xA5;
const VK_LWIN: i32 = 0x5B;
const VK_RWIN: i32 = 0x5C;

/// True if the high-order bit of `GetKeyState` is set, i.e. the key is
/// currently held down.
fn is_down(vk: i32) -> bool {
    unsafe { (GetKeyState(vk) as u16) & 0x8000 != 0 }
}

/// True if the low-order bit of `GetKeyState` is set, i.e. the key is a
/// toggled (latched) lock that is currently "on".
fn is_toggled(vk: i32) -> bool {
    unsafe { (GetKeyState(vk) as u16) & 0x0001 != 0 }
}

#[derive(Default)]
pub struct WindowsInputHelper;

impl WindowsInputHelper {
    pub fn new() -> Self {
        Self
    }
}

impl InputHelper for WindowsInputHelper {
    fn load(&mut self) -> Result<(), UiohookError> {
        modifiers::reset();

        if is_toggled(VK_CAPITAL) {
            modifiers::toggle_latch_on_press(modifiers::MASK_CAPS_LOCK);
        }
        if is_toggled(VK_NUMLOCK) {
            modifiers::toggle_latch_on_press(modifiers::MASK_NUM_LOCK);
        }
        if is_toggled(VK_SCROLL) {
            modifiers::toggle_latch_on_press(modifiers::MASK_SCROLL_LOCK);
        }

        let pairs = [
            (VK_LSHIFT, modifiers::MASK_SHIFT_L),
            (VK_RSHIFT, modifiers::MASK_SHIFT_R),
            (VK_LCONTROL, modifiers::MASK_CTRL_L),
            (VK_RCONTROL, modifiers::MASK_CTRL_R),
            (VK_LMENU, modifiers::MASK_ALT_L),
            (VK_RMENU, modifiers::MASK_ALT_R),
            (VK_LWIN, modifiers::MASK_META_L),
            (VK_RWIN, modifiers::MASK_META_R),
        ];
        for (vk, bit) in pairs {
            if is_down(vk) {
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

//! Process-wide modifier and mouse-button mask.
//!
//! Exactly one instance exists per process. Mutation is confined to the
//! hook thread; the mask is read back by the dispatcher on the same
//! thread, so a plain atomic is sufficient without a lock.

use std::sync::atomic::{AtomicU16, Ordering};

pub const MASK_SHIFT_L: u16 = 1 << 0;
pub const MASK_CTRL_L: u16 = 1 << 1;
pub const MASK_META_L: u16 = 1 << 2;
pub const MASK_ALT_L: u16 = 1 << 3;
pub const MASK_SHIFT_R: u16 = 1 << 4;
pub const MASK_CTRL_R: u16 = 1 << 5;
pub const MASK_META_R: u16 = 1 << 6;
pub const MASK_ALT_R: u16 = 1 << 7;
pub const MASK_BUTTON1: u16 = 1 << 8;
pub const MASK_BUTTON2: u16 = 1 << 9;
pub const MASK_BUTTON3: u16 = 1 << 10;
pub const MASK_BUTTON4: u16 = 1 << 11;
pub const MASK_BUTTON5: u16 = 1 << 12;
pub const MASK_NUM_LOCK: u16 = 1 << 13;
pub const MASK_CAPS_LOCK: u16 = 1 << 14;
pub const MASK_SCROLL_LOCK: u16 = 1 << 15;

pub const MASK_SHIFT: u16 = MASK_SHIFT_L | MASK_SHIFT_R;
pub const MASK_CTRL: u16 = MASK_CTRL_L | MASK_CTRL_R;
pub const MASK_META: u16 = MASK_META_L | MASK_META_R;
pub const MASK_ALT: u16 = MASK_ALT_L | MASK_ALT_R;

/// Masks whose bit is latched (toggled on press only, never on release).
const LATCHED_MASK: u16 = MASK_NUM_LOCK | MASK_CAPS_LOCK | MASK_SCROLL_LOCK;

static MASK: AtomicU16 = AtomicU16::new(0);

/// Sets the given bits in the process-wide mask.
pub fn set(bits: u16) {
    MASK.fetch_or(bits, Ordering::SeqCst);
}

/// Clears the given bits in the process-wide mask.
pub fn clear(bits: u16) {
    MASK.fetch_and(!bits, Ordering::SeqCst);
}

/// Returns the current mask.
pub fn get() -> u16 {
    MASK.load(Ordering::SeqCst)
}

/// Toggles a latched bit (NumLock/CapsLock/ScrollLock) on press; no-op on
/// release. Non-latched bits should use `set`/`clear` directly.
pub fn toggle_latch_on_press(bit: u16) {
    debug_assert_eq!(bit & !LATCHED_MASK, 0, "not a latched bit");
    MASK.fetch_xor(bit, Ordering::SeqCst);
}

pub fn is_latched(bit: u16) -> bool {
    bit & LATCHED_MASK != 0
}

/// Resets the mask to zero. Called by Input Helper on `unload()`.
pub fn reset() {
    MASK.store(0, Ordering::SeqCst);
}

/// True if any `MouseBtn*` bit is currently set.
pub fn any_button_held() -> bool {
    get() & (MASK_BUTTON1 | MASK_BUTTON2 | MASK_BUTTON3 | MASK_BUTTON4 | MASK_BUTTON5) != 0
}

pub fn button_mask(button: u16) -> u16 {
    match button {
        1 => MASK_BUTTON1,
        2 => MASK_BUTTON2,
        3 => MASK_BUTTON3,
        4 => MASK_BUTTON4,
        5 => MASK_BUTTON5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests against the process-wide mask.
    static LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_clear_get() {
        let _g = LOCK.lock().unwrap();
        reset();
        set(MASK_SHIFT_L);
        assert_eq!(get(), MASK_SHIFT_L);
        clear(MASK_SHIFT_L);
        assert_eq!(get(), 0);
    }

    #[test]
    fn test_latched_toggle_on_press_only() {
        let _g = LOCK.lock().unwrap();
        reset();
        toggle_latch_on_press(MASK_CAPS_LOCK);
        assert_eq!(get() & MASK_CAPS_LOCK, MASK_CAPS_LOCK);
        // release does nothing to a latch
        assert!(is_latched(MASK_CAPS_LOCK));
        toggle_latch_on_press(MASK_CAPS_LOCK);
        assert_eq!(get() & MASK_CAPS_LOCK, 0);
    }

    #[test]
    fn test_any_button_held() {
        let _g = LOCK.lock().unwrap();
        reset();
        assert!(!any_button_held());
        set(button_mask(3));
        assert!(any_button_held());
        clear(button_mask(3));
        assert!(!any_button_held());
    }

    #[test]
    fn test_button_mask_unknown() {
        assert_eq!(button_mask(0), 0);
        assert_eq!(button_mask(6), 0);
    }
}

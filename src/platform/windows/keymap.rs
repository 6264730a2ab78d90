//! Windows virtual-key-code table.
//!
//! Grounded in `original_source/src/windows/input_helper.c`'s
//! `vcode_to_ui_table`/`ui_to_vcode_table` pairing, re-expressed as the
//! flat pair list [`crate::vcode::TableVirtualCodeTable`] expects.

use crate::vcode::{self, TableVirtualCodeTable};

#[rustfmt::skip]
const PAIRS: &[(u32, u32)] = &[
    (vcode::VC_ESCAPE, 0x1B),

    (vcode::VC_F1, 0x70), (vcode::VC_F2, 0x71), (vcode::VC_F3, 0x72), (vcode::VC_F4, 0x73),
    (vcode::VC_F5, 0x74), (vcode::VC_F6, 0x75), (vcode::VC_F7, 0x76), (vcode::VC_F8, 0x77),
    (vcode::VC_F9, 0x78), (vcode::VC_F10, 0x79), (vcode::VC_F11, 0x7A), (vcode::VC_F12, 0x7B),
    (vcode::VC_F13, 0x7C), (vcode::VC_F14, 0x7D), (vcode::VC_F15, 0x7E), (vcode::VC_F16, 0x7F),
    (vcode::VC_F17, 0x80), (vcode::VC_F18, 0x81), (vcode::VC_F19, 0x82), (vcode::VC_F20, 0x83),
    (vcode::VC_F21, 0x84), (vcode::VC_F22, 0x85), (vcode::VC_F23, 0x86), (vcode::VC_F24, 0x87),

    (vcode::VC_BACKQUOTE, 0xC0),
    (vcode::VC_1, 0x31), (vcode::VC_2, 0x32), (vcode::VC_3, 0x33), (vcode::VC_4, 0x34),
    (vcode::VC_5, 0x35), (vcode::VC_6, 0x36), (vcode::VC_7, 0x37), (vcode::VC_8, 0x38),
    (vcode::VC_9, 0x39), (vcode::VC_0, 0x30),
    (vcode::VC_MINUS, 0xBD), (vcode::VC_EQUALS, 0xBB), (vcode::VC_BACKSPACE, 0x08),

    (vcode::VC_TAB, 0x09), (vcode::VC_CAPS_LOCK, 0x14),
    (vcode::VC_A, 0x41), (vcode::VC_B, 0x42), (vcode::VC_C, 0x43), (vcode::VC_D, 0x44),
    (vcode::VC_E, 0x45), (vcode::VC_F, 0x46), (vcode::VC_G, 0x47), (vcode::VC_H, 0x48),
    (vcode::VC_I, 0x49), (vcode::VC_J, 0x4A), (vcode::VC_K, 0x4B), (vcode::VC_L, 0x4C),
    (vcode::VC_M, 0x4D), (vcode::VC_N, 0x4E), (vcode::VC_O, 0x4F), (vcode::VC_P, 0x50),
    (vcode::VC_Q, 0x51), (vcode::VC_R, 0x52), (vcode::VC_S, 0x53), (vcode::VC_T, 0x54),
    (vcode::VC_U, 0x55), (vcode::VC_V, 0x56), (vcode::VC_W, 0x57), (vcode::VC_X, 0x58),
    (vcode::VC_Y, 0x59), (vcode::VC_Z, 0x5A),
    (vcode::VC_OPEN_BRACKET, 0xDB), (vcode::VC_CLOSE_BRACKET, 0xDD), (vcode::VC_BACK_SLASH, 0xDC),
    (vcode::VC_SEMICOLON, 0xBA), (vcode::VC_QUOTE, 0xDE), (vcode::VC_ENTER, 0x0D),
    (vcode::VC_COMMA, 0xBC), (vcode::VC_PERIOD, 0xBE), (vcode::VC_SLASH, 0xBF),
    (vcode::VC_SPACE, 0x20),

    (vcode::VC_PRINTSCREEN, 0x2C), (vcode::VC_SCROLL_LOCK, 0x91), (vcode::VC_PAUSE, 0x13),
    (vcode::VC_INSERT, 0x2D), (vcode::VC_DELETE, 0x2E), (vcode::VC_HOME, 0x24), (vcode::VC_END, 0x23),
    (vcode::VC_PAGE_UP, 0x21), (vcode::VC_PAGE_DOWN, 0x22),
    (vcode::VC_UP, 0x26), (vcode::VC_LEFT, 0x25), (vcode::VC_CLEAR, 0x0C), (vcode::VC_RIGHT, 0x27), (vcode::VC_DOWN, 0x28),

    (vcode::VC_NUM_LOCK, 0x90),
    (vcode::VC_KP_DIVIDE, 0x6F), (vcode::VC_KP_MULTIPLY, 0x6A), (vcode::VC_KP_SUBTRACT, 0x6D),
    (vcode::VC_KP_ADD, 0x6B), (vcode::VC_KP_ENTER, 0x0D), (vcode::VC_KP_SEPARATOR, 0x6C),
    (vcode::VC_KP_1, 0x61), (vcode::VC_KP_2, 0x62), (vcode::VC_KP_3, 0x63), (vcode::VC_KP_4, 0x64),
    (vcode::VC_KP_5, 0x65), (vcode::VC_KP_6, 0x66), (vcode::VC_KP_7, 0x67), (vcode::VC_KP_8, 0x68),
    (vcode::VC_KP_9, 0x69), (vcode::VC_KP_0, 0x60),

    (vcode::VC_SHIFT_L, 0xA0), (vcode::VC_SHIFT_R, 0xA1),
    (vcode::VC_CONTROL_L, 0xA2), (vcode::VC_CONTROL_R, 0xA3),
    (vcode::VC_ALT_L, 0xA4), (vcode::VC_ALT_R, 0xA5),
    (vcode::VC_META_L, 0x5B), (vcode::VC_META_R, 0x5C),
    (vcode::VC_CONTEXT_MENU, 0x5D),

    (vcode::VC_POWER, 0x3F), (vcode::VC_SLEEP, 0x5F),

    (vcode::VC_MEDIA_PLAY, 0xB3), (vcode::VC_MEDIA_STOP, 0xB2),
    (vcode::VC_MEDIA_PREVIOUS, 0xB1), (vcode::VC_MEDIA_NEXT, 0xB0),
    (vcode::VC_MEDIA_SELECT, 0xB5), (vcode::VC_VOLUME_MUTE, 0xAD),
    (vcode::VC_VOLUME_UP, 0xAF), (vcode::VC_VOLUME_DOWN, 0xAE),

    (vcode::VC_APP_MAIL, 0xB4), (vcode::VC_APP_CALCULATOR, 0xB7),

    (vcode::VC_BROWSER_SEARCH, 0xAA), (vcode::VC_BROWSER_HOME, 0xAC),
    (vcode::VC_BROWSER_BACK, 0xA6), (vcode::VC_BROWSER_FORWARD, 0xA7),
    (vcode::VC_BROWSER_STOP, 0xA8), (vcode::VC_BROWSER_REFRESH, 0xA9),
    (vcode::VC_BROWSER_FAVORITES, 0xAB),

    (vcode::VC_KATAKANA, 0x15), (vcode::VC_KANJI, 0x19),
];

pub const TABLE: TableVirtualCodeTable = TableVirtualCodeTable::new(PAIRS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcode::VirtualCodeTable;

    #[test]
    fn test_common_keys_resolve() {
        assert_eq!(TABLE.native_to_virtual(0x41), vcode::VC_A);
        assert_eq!(TABLE.native_to_virtual(0x1B), vcode::VC_ESCAPE);
        assert_eq!(TABLE.native_to_virtual(0xFFFF), vcode::VC_UNDEFINED);
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(TABLE.virtual_to_native(vcode::VC_A), Some(0x41));
        assert_eq!(TABLE.native_to_virtual(TABLE.virtual_to_native(vcode::VC_A).unwrap()), vcode::VC_A);
    }
}

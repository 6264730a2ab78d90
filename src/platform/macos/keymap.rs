//! macOS virtual-key-code table.
//!
//! `CGKeyCode` values below are the standard ANSI-layout HIToolbox
//! constants (`kVK_*`); grounded the same way as
//! `src/platform/windows/keymap.rs`, as a flat pair list over
//! [`crate::vcode::TableVirtualCodeTable`].

use crate::vcode::{self, TableVirtualCodeTable};

#[rustfmt::skip]
const PAIRS: &[(u32, u32)] = &[
    (vcode::VC_ESCAPE, 0x35),

    (vcode::VC_F1, 0x7A), (vcode::VC_F2, 0x78), (vcode::VC_F3, 0x63), (vcode::VC_F4, 0x76),
    (vcode::VC_F5, 0x60), (vcode::VC_F6, 0x61), (vcode::VC_F7, 0x62), (vcode::VC_F8, 0x64),
    (vcode::VC_F9, 0x65), (vcode::VC_F10, 0x6D), (vcode::VC_F11, 0x67), (vcode::VC_F12, 0x6F),
    (vcode::VC_F13, 0x69), (vcode::VC_F14, 0x6B), (vcode::VC_F15, 0x71), (vcode::VC_F16, 0x6A),
    (vcode::VC_F17, 0x40), (vcode::VC_F18, 0x4F), (vcode::VC_F19, 0x50), (vcode::VC_F20, 0x5A),

    (vcode::VC_BACKQUOTE, 0x32),
    (vcode::VC_1, 0x12), (vcode::VC_2, 0x13), (vcode::VC_3, 0x14), (vcode::VC_4, 0x15),
    (vcode::VC_5, 0x17), (vcode::VC_6, 0x16), (vcode::VC_7, 0x1A), (vcode::VC_8, 0x1C),
    (vcode::VC_9, 0x19), (vcode::VC_0, 0x1D),
    (vcode::VC_MINUS, 0x1B), (vcode::VC_EQUALS, 0x18), (vcode::VC_BACKSPACE, 0x33),

    (vcode::VC_TAB, 0x30), (vcode::VC_CAPS_LOCK, 0x39),
    (vcode::VC_A, 0x00), (vcode::VC_B, 0x0B), (vcode::VC_C, 0x08), (vcode::VC_D, 0x02),
    (vcode::VC_E, 0x0E), (vcode::VC_F, 0x03), (vcode::VC_G, 0x05), (vcode::VC_H, 0x04),
    (vcode::VC_I, 0x22), (vcode::VC_J, 0x26), (vcode::VC_K, 0x28), (vcode::VC_L, 0x25),
    (vcode::VC_M, 0x2E), (vcode::VC_N, 0x2D), (vcode::VC_O, 0x1F), (vcode::VC_P, 0x23),
    (vcode::VC_Q, 0x0C), (vcode::VC_R, 0x0F), (vcode::VC_S, 0x01), (vcode::VC_T, 0x11),
    (vcode::VC_U, 0x20), (vcode::VC_V, 0x09), (vcode::VC_W, 0x0D), (vcode::VC_X, 0x07),
    (vcode::VC_Y, 0x10), (vcode::VC_Z, 0x06),
    (vcode::VC_OPEN_BRACKET, 0x21), (vcode::VC_CLOSE_BRACKET, 0x1E), (vcode::VC_BACK_SLASH, 0x2A),
    (vcode::VC_SEMICOLON, 0x29), (vcode::VC_QUOTE, 0x27), (vcode::VC_ENTER, 0x24),
    (vcode::VC_COMMA, 0x2B), (vcode::VC_PERIOD, 0x2F), (vcode::VC_SLASH, 0x2C),
    (vcode::VC_SPACE, 0x31),

    (vcode::VC_HOME, 0x73), (vcode::VC_PAGE_UP, 0x74), (vcode::VC_DELETE, 0x75),
    (vcode::VC_END, 0x77), (vcode::VC_PAGE_DOWN, 0x79),
    (vcode::VC_LEFT, 0x7B), (vcode::VC_RIGHT, 0x7C), (vcode::VC_DOWN, 0x7D), (vcode::VC_UP, 0x7E),

    (vcode::VC_KP_SEPARATOR, 0x41),
    (vcode::VC_KP_MULTIPLY, 0x43), (vcode::VC_KP_ADD, 0x45), (vcode::VC_KP_CLEAR, 0x47),
    (vcode::VC_KP_DIVIDE, 0x4B), (vcode::VC_KP_ENTER, 0x4C), (vcode::VC_KP_SUBTRACT, 0x4E),
    (vcode::VC_KP_EQUALS, 0x51),
    (vcode::VC_KP_0, 0x52), (vcode::VC_KP_1, 0x53), (vcode::VC_KP_2, 0x54), (vcode::VC_KP_3, 0x55),
    (vcode::VC_KP_4, 0x56), (vcode::VC_KP_5, 0x57), (vcode::VC_KP_6, 0x58), (vcode::VC_KP_7, 0x59),
    (vcode::VC_KP_8, 0x5B), (vcode::VC_KP_9, 0x5C),

    (vcode::VC_SHIFT_L, 0x38), (vcode::VC_SHIFT_R, 0x3C),
    (vcode::VC_CONTROL_L, 0x3B), (vcode::VC_CONTROL_R, 0x3E),
    (vcode::VC_ALT_L, 0x3A), (vcode::VC_ALT_R, 0x3D),
    (vcode::VC_META_L, 0x37), (vcode::VC_META_R, 0x36),

    (vcode::VC_VOLUME_UP, 0x48), (vcode::VC_VOLUME_DOWN, 0x49), (vcode::VC_VOLUME_MUTE, 0x4A),

    (vcode::VC_YEN, 0x5D), (vcode::VC_UNDERSCORE, 0x5E), (vcode::VC_KP_COMMA, 0x5F),
];

pub const TABLE: TableVirtualCodeTable = TableVirtualCodeTable::new(PAIRS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcode::VirtualCodeTable;

    #[test]
    fn test_common_keys_resolve() {
        assert_eq!(TABLE.native_to_virtual(0x00), vcode::VC_A);
        assert_eq!(TABLE.native_to_virtual(0x35), vcode::VC_ESCAPE);
        assert_eq!(TABLE.native_to_virtual(0xFFFF), vcode::VC_UNDEFINED);
    }

    #[test]
    fn test_left_right_modifiers_distinct() {
        assert_eq!(TABLE.native_to_virtual(0x37), vcode::VC_META_L);
        assert_eq!(TABLE.native_to_virtual(0x36), vcode::VC_META_R);
        assert_ne!(TABLE.native_to_virtual(0x37), TABLE.native_to_virtual(0x36));
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(TABLE.virtual_to_native(vcode::VC_Z), Some(0x06));
        assert_eq!(TABLE.native_to_virtual(TABLE.virtual_to_native(vcode::VC_Z).unwrap()), vcode::VC_Z);
    }
}

//! X11 keysym table.
//!
//! Grounded in `original_source/src/x11/input_helper.c`'s
//! `uiocode_keysym_table`: a flat, many-to-one `(virtual_code, keysym)`
//! pair list, re-expressed over [`crate::vcode::TableVirtualCodeTable`].
//! Vendor/alternate keysyms that alias a virtual code the original table
//! also lists (`XK_ISO_Left_Tab`, `XK_Shift_Lock`) are kept to exercise
//! the table's many-to-one resolution; HP/Sun-only vendor keysyms outside
//! `keysymdef.h` proper are dropped since this crate's [`crate::vcode`]
//! space has no corresponding entries for most of them.

use crate::vcode::{self, TableVirtualCodeTable};

#[rustfmt::skip]
const PAIRS: &[(u32, u32)] = &[
    (vcode::VC_ESCAPE, 0xff1b),

    (vcode::VC_F1, 0xffbe), (vcode::VC_F2, 0xffbf), (vcode::VC_F3, 0xffc0), (vcode::VC_F4, 0xffc1),
    (vcode::VC_F5, 0xffc2), (vcode::VC_F6, 0xffc3), (vcode::VC_F7, 0xffc4), (vcode::VC_F8, 0xffc5),
    (vcode::VC_F9, 0xffc6), (vcode::VC_F10, 0xffc7), (vcode::VC_F11, 0xffc8), (vcode::VC_F12, 0xffc9),
    (vcode::VC_F13, 0xffca), (vcode::VC_F14, 0xffcb), (vcode::VC_F15, 0xffcc), (vcode::VC_F16, 0xffcd),
    (vcode::VC_F17, 0xffce), (vcode::VC_F18, 0xffcf), (vcode::VC_F19, 0xffd0), (vcode::VC_F20, 0xffd1),
    (vcode::VC_F21, 0xffd2), (vcode::VC_F22, 0xffd3), (vcode::VC_F23, 0xffd4), (vcode::VC_F24, 0xffd5),

    (vcode::VC_BACKQUOTE, 0x0060),
    (vcode::VC_1, 0x0031), (vcode::VC_2, 0x0032), (vcode::VC_3, 0x0033), (vcode::VC_4, 0x0034),
    (vcode::VC_5, 0x0035), (vcode::VC_6, 0x0036), (vcode::VC_7, 0x0037), (vcode::VC_8, 0x0038),
    (vcode::VC_9, 0x0039), (vcode::VC_0, 0x0030),
    (vcode::VC_MINUS, 0x002d), (vcode::VC_EQUALS, 0x003d), (vcode::VC_BACKSPACE, 0xff08),

    (vcode::VC_TAB, 0xff09), (vcode::VC_TAB, 0xff74 /* XK_ISO_Left_Tab */),
    (vcode::VC_CAPS_LOCK, 0xffe5), (vcode::VC_CAPS_LOCK, 0xffe6 /* XK_Shift_Lock */),

    (vcode::VC_A, 0x0061), (vcode::VC_B, 0x0062), (vcode::VC_C, 0x0063), (vcode::VC_D, 0x0064),
    (vcode::VC_E, 0x0065), (vcode::VC_F, 0x0066), (vcode::VC_G, 0x0067), (vcode::VC_H, 0x0068),
    (vcode::VC_I, 0x0069), (vcode::VC_J, 0x006a), (vcode::VC_K, 0x006b), (vcode::VC_L, 0x006c),
    (vcode::VC_M, 0x006d), (vcode::VC_N, 0x006e), (vcode::VC_O, 0x006f), (vcode::VC_P, 0x0070),
    (vcode::VC_Q, 0x0071), (vcode::VC_R, 0x0072), (vcode::VC_S, 0x0073), (vcode::VC_T, 0x0074),
    (vcode::VC_U, 0x0075), (vcode::VC_V, 0x0076), (vcode::VC_W, 0x0077), (vcode::VC_X, 0x0078),
    (vcode::VC_Y, 0x0079), (vcode::VC_Z, 0x007a),
    (vcode::VC_OPEN_BRACKET, 0x005b), (vcode::VC_CLOSE_BRACKET, 0x005d), (vcode::VC_BACK_SLASH, 0x005c),
    (vcode::VC_SEMICOLON, 0x003b), (vcode::VC_QUOTE, 0x0027), (vcode::VC_ENTER, 0xff0d),
    (vcode::VC_COMMA, 0x002c), (vcode::VC_PERIOD, 0x002e), (vcode::VC_SLASH, 0x002f),
    (vcode::VC_SPACE, 0x0020),

    (vcode::VC_PRINTSCREEN, 0xff61), (vcode::VC_SCROLL_LOCK, 0xff14), (vcode::VC_PAUSE, 0xff13),
    (vcode::VC_INSERT, 0xff63), (vcode::VC_DELETE, 0xffff),
    (vcode::VC_HOME, 0xff50), (vcode::VC_END, 0xff57),
    (vcode::VC_PAGE_UP, 0xff55), (vcode::VC_PAGE_DOWN, 0xff56),
    (vcode::VC_UP, 0xff52), (vcode::VC_LEFT, 0xff51), (vcode::VC_CLEAR, 0xff0b),
    (vcode::VC_RIGHT, 0xff53), (vcode::VC_DOWN, 0xff54),

    (vcode::VC_NUM_LOCK, 0xff7f),
    (vcode::VC_KP_DIVIDE, 0xffaf), (vcode::VC_KP_MULTIPLY, 0xffaa), (vcode::VC_KP_SUBTRACT, 0xffad),
    (vcode::VC_KP_EQUALS, 0xffbd), (vcode::VC_KP_ADD, 0xffab), (vcode::VC_KP_ENTER, 0xff8d),
    (vcode::VC_KP_SEPARATOR, 0xffac),
    (vcode::VC_KP_1, 0xffb1), (vcode::VC_KP_2, 0xffb2), (vcode::VC_KP_3, 0xffb3), (vcode::VC_KP_4, 0xffb4),
    (vcode::VC_KP_5, 0xffb5), (vcode::VC_KP_6, 0xffb6), (vcode::VC_KP_7, 0xffb7), (vcode::VC_KP_8, 0xffb8),
    (vcode::VC_KP_9, 0xffb9), (vcode::VC_KP_0, 0xffb0),
    (vcode::VC_KP_END, 0xff9c), (vcode::VC_KP_DOWN, 0xff99), (vcode::VC_KP_PAGE_DOWN, 0xff9b),
    (vcode::VC_KP_LEFT, 0xff96), (vcode::VC_KP_CLEAR, 0xff0b), (vcode::VC_KP_RIGHT, 0xff98),
    (vcode::VC_KP_HOME, 0xff95), (vcode::VC_KP_UP, 0xff97), (vcode::VC_KP_PAGE_UP, 0xff9a),
    (vcode::VC_KP_INSERT, 0xff9e), (vcode::VC_KP_DELETE, 0xff9f),

    (vcode::VC_SHIFT_L, 0xffe1), (vcode::VC_SHIFT_R, 0xffe2),
    (vcode::VC_CONTROL_L, 0xffe3), (vcode::VC_CONTROL_R, 0xffe4),
    (vcode::VC_ALT_L, 0xffe9), (vcode::VC_ALT_R, 0xffea),
    (vcode::VC_META_L, 0xffeb /* XK_Super_L */), (vcode::VC_META_R, 0xffec /* XK_Super_R */),
    (vcode::VC_CONTEXT_MENU, 0xff67),

    (vcode::VC_MEDIA_PLAY, 0x1008ff14), (vcode::VC_MEDIA_STOP, 0x1008ff15),
    (vcode::VC_MEDIA_PREVIOUS, 0x1008ff16), (vcode::VC_MEDIA_NEXT, 0x1008ff17),
    (vcode::VC_VOLUME_MUTE, 0x1008ff12), (vcode::VC_VOLUME_UP, 0x1008ff13), (vcode::VC_VOLUME_DOWN, 0x1008ff11),

    (vcode::VC_APP_MAIL, 0x1008ff19), (vcode::VC_APP_CALCULATOR, 0x1008ff1d),

    (vcode::VC_BROWSER_SEARCH, 0x1008ff1b), (vcode::VC_BROWSER_HOME, 0x1008ff18),
    (vcode::VC_BROWSER_BACK, 0x1008ff26), (vcode::VC_BROWSER_FORWARD, 0x1008ff27),
    (vcode::VC_BROWSER_STOP, 0x1008ff28), (vcode::VC_BROWSER_REFRESH, 0x1008ff29),
    (vcode::VC_BROWSER_FAVORITES, 0x1008ff30),

    (vcode::VC_KATAKANA, 0xff26), (vcode::VC_KANJI, 0xff21), (vcode::VC_HIRAGANA, 0xff25),
];

pub const TABLE: TableVirtualCodeTable = TableVirtualCodeTable::new(PAIRS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcode::VirtualCodeTable;

    #[test]
    fn test_common_keys_resolve() {
        assert_eq!(TABLE.native_to_virtual(0x0061), vcode::VC_A);
        assert_eq!(TABLE.native_to_virtual(0xff1b), vcode::VC_ESCAPE);
        assert_eq!(TABLE.native_to_virtual(0xFFFF_FFFF), vcode::VC_UNDEFINED);
    }

    #[test]
    fn test_many_to_one_caps_lock_aliases() {
        assert_eq!(TABLE.native_to_virtual(0xffe5), vcode::VC_CAPS_LOCK);
        assert_eq!(TABLE.native_to_virtual(0xffe6), vcode::VC_CAPS_LOCK);
    }

    #[test]
    fn test_first_match_wins_on_virtual_to_native() {
        // VC_TAB has two native entries (XK_Tab, XK_ISO_Left_Tab); the
        // first one listed wins on the reverse lookup.
        assert_eq!(TABLE.virtual_to_native(vcode::VC_TAB), Some(0xff09));
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(TABLE.virtual_to_native(vcode::VC_Z), Some(0x007a));
        assert_eq!(TABLE.native_to_virtual(TABLE.virtual_to_native(vcode::VC_Z).unwrap()), vcode::VC_Z);
    }
}

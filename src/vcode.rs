//! Canonical virtual-code constants and the bidirectional per-platform
//! translation table.
//!
//! The constants mirror the original `VC_*` identifiers; the per-platform
//! tables (`src/platform/*/keymap.rs`) each implement [`VirtualCodeTable`]
//! over one of these constant spaces.

pub const VC_ESCAPE: u32 = 0x0001;

pub const VC_F1: u32 = 0x0002;
pub const VC_F2: u32 = 0x0003;
pub const VC_F3: u32 = 0x0004;
pub const VC_F4: u32 = 0x0005;
pub const VC_F5: u32 = 0x0006;
pub const VC_F6: u32 = 0x0007;
pub const VC_F7: u32 = 0x0008;
pub const VC_F8: u32 = 0x0009;
pub const VC_F9: u32 = 0x000A;
pub const VC_F10: u32 = 0x000B;
pub const VC_F11: u32 = 0x000C;
pub const VC_F12: u32 = 0x000D;
pub const VC_F13: u32 = 0x000E;
pub const VC_F14: u32 = 0x000F;
pub const VC_F15: u32 = 0x0010;
pub const VC_F16: u32 = 0x0011;
pub const VC_F17: u32 = 0x0012;
pub const VC_F18: u32 = 0x0013;
pub const VC_F19: u32 = 0x0014;
pub const VC_F20: u32 = 0x0015;
pub const VC_F21: u32 = 0x0016;
pub const VC_F22: u32 = 0x0017;
pub const VC_F23: u32 = 0x0018;
pub const VC_F24: u32 = 0x0019;

pub const VC_BACKQUOTE: u32 = 0x0020;
pub const VC_1: u32 = 0x0021;
pub const VC_2: u32 = 0x0022;
pub const VC_3: u32 = 0x0023;
pub const VC_4: u32 = 0x0024;
pub const VC_5: u32 = 0x0025;
pub const VC_6: u32 = 0x0026;
pub const VC_7: u32 = 0x0027;
pub const VC_8: u32 = 0x0028;
pub const VC_9: u32 = 0x0029;
pub const VC_0: u32 = 0x002A;
pub const VC_MINUS: u32 = 0x002B;
pub const VC_EQUALS: u32 = 0x002C;
pub const VC_BACKSPACE: u32 = 0x002D;

pub const VC_TAB: u32 = 0x0030;
pub const VC_CAPS_LOCK: u32 = 0x0031;
pub const VC_A: u32 = 0x0032;
pub const VC_B: u32 = 0x0033;
pub const VC_C: u32 = 0x0034;
pub const VC_D: u32 = 0x0035;
pub const VC_E: u32 = 0x0036;
pub const VC_F: u32 = 0x0037;
pub const VC_G: u32 = 0x0038;
pub const VC_H: u32 = 0x0039;
pub const VC_I: u32 = 0x003A;
pub const VC_J: u32 = 0x003B;
pub const VC_K: u32 = 0x003C;
pub const VC_L: u32 = 0x003D;
pub const VC_M: u32 = 0x003E;
pub const VC_N: u32 = 0x003F;
pub const VC_O: u32 = 0x0040;
pub const VC_P: u32 = 0x0041;
pub const VC_Q: u32 = 0x0042;
pub const VC_R: u32 = 0x0043;
pub const VC_S: u32 = 0x0044;
pub const VC_T: u32 = 0x0045;
pub const VC_U: u32 = 0x0046;
pub const VC_V: u32 = 0x0047;
pub const VC_W: u32 = 0x0048;
pub const VC_X: u32 = 0x0049;
pub const VC_Y: u32 = 0x004A;
pub const VC_Z: u32 = 0x004B;
pub const VC_OPEN_BRACKET: u32 = 0x004C;
pub const VC_CLOSE_BRACKET: u32 = 0x004D;
pub const VC_BACK_SLASH: u32 = 0x004E;
pub const VC_SEMICOLON: u32 = 0x004F;
pub const VC_QUOTE: u32 = 0x0050;
pub const VC_ENTER: u32 = 0x0051;
pub const VC_COMMA: u32 = 0x0052;
pub const VC_PERIOD: u32 = 0x0053;
pub const VC_SLASH: u32 = 0x0054;
pub const VC_SPACE: u32 = 0x0055;

pub const VC_PRINTSCREEN: u32 = 0x0060;
pub const VC_SCROLL_LOCK: u32 = 0x0061;
pub const VC_PAUSE: u32 = 0x0062;
pub const VC_LESSER_GREATER: u32 = 0x0063;
pub const VC_INSERT: u32 = 0x0064;
pub const VC_DELETE: u32 = 0x0065;
pub const VC_HOME: u32 = 0x0066;
pub const VC_END: u32 = 0x0067;
pub const VC_PAGE_UP: u32 = 0x0068;
pub const VC_PAGE_DOWN: u32 = 0x0069;
pub const VC_UP: u32 = 0x006A;
pub const VC_LEFT: u32 = 0x006B;
pub const VC_CLEAR: u32 = 0x006C;
pub const VC_RIGHT: u32 = 0x006D;
pub const VC_DOWN: u32 = 0x006E;

pub const VC_NUM_LOCK: u32 = 0x0070;
pub const VC_KP_DIVIDE: u32 = 0x0071;
pub const VC_KP_MULTIPLY: u32 = 0x0072;
pub const VC_KP_SUBTRACT: u32 = 0x0073;
pub const VC_KP_EQUALS: u32 = 0x0074;
pub const VC_KP_ADD: u32 = 0x0075;
pub const VC_KP_ENTER: u32 = 0x0076;
pub const VC_KP_SEPARATOR: u32 = 0x0077;
pub const VC_KP_1: u32 = 0x0078;
pub const VC_KP_2: u32 = 0x0079;
pub const VC_KP_3: u32 = 0x007A;
pub const VC_KP_4: u32 = 0x007B;
pub const VC_KP_5: u32 = 0x007C;
pub const VC_KP_6: u32 = 0x007D;
pub const VC_KP_7: u32 = 0x007E;
pub const VC_KP_8: u32 = 0x007F;
pub const VC_KP_9: u32 = 0x0080;
pub const VC_KP_0: u32 = 0x0081;
pub const VC_KP_END: u32 = 0x0082;
pub const VC_KP_DOWN: u32 = 0x0083;
pub const VC_KP_PAGE_DOWN: u32 = 0x0084;
pub const VC_KP_LEFT: u32 = 0x0085;
pub const VC_KP_CLEAR: u32 = 0x0086;
pub const VC_KP_RIGHT: u32 = 0x0087;
pub const VC_KP_HOME: u32 = 0x0088;
pub const VC_KP_UP: u32 = 0x0089;
pub const VC_KP_PAGE_UP: u32 = 0x008A;
pub const VC_KP_INSERT: u32 = 0x008B;
pub const VC_KP_DELETE: u32 = 0x008C;

pub const VC_SHIFT_L: u32 = 0x0090;
pub const VC_SHIFT_R: u32 = 0x0091;
pub const VC_CONTROL_L: u32 = 0x0092;
pub const VC_CONTROL_R: u32 = 0x0093;
pub const VC_ALT_L: u32 = 0x0094;
pub const VC_ALT_R: u32 = 0x0095;
pub const VC_META_L: u32 = 0x0096;
pub const VC_META_R: u32 = 0x0097;
pub const VC_CONTEXT_MENU: u32 = 0x0098;

pub const VC_POWER: u32 = 0x00A0;
pub const VC_SLEEP: u32 = 0x00A1;
pub const VC_WAKE: u32 = 0x00A2;

pub const VC_MEDIA_PLAY: u32 = 0x00B0;
pub const VC_MEDIA_STOP: u32 = 0x00B1;
pub const VC_MEDIA_PREVIOUS: u32 = 0x00B2;
pub const VC_MEDIA_NEXT: u32 = 0x00B3;
pub const VC_MEDIA_SELECT: u32 = 0x00B4;
pub const VC_MEDIA_EJECT: u32 = 0x00B5;
pub const VC_VOLUME_MUTE: u32 = 0x00B6;
pub const VC_VOLUME_UP: u32 = 0x00B7;
pub const VC_VOLUME_DOWN: u32 = 0x00B8;

pub const VC_APP_MAIL: u32 = 0x00C0;
pub const VC_APP_CALCULATOR: u32 = 0x00C1;
pub const VC_APP_MUSIC: u32 = 0x00C2;
pub const VC_APP_PICTURES: u32 = 0x00C3;

pub const VC_BROWSER_SEARCH: u32 = 0x00D0;
pub const VC_BROWSER_HOME: u32 = 0x00D1;
pub const VC_BROWSER_BACK: u32 = 0x00D2;
pub const VC_BROWSER_FORWARD: u32 = 0x00D3;
pub const VC_BROWSER_STOP: u32 = 0x00D4;
pub const VC_BROWSER_REFRESH: u32 = 0x00D5;
pub const VC_BROWSER_FAVORITES: u32 = 0x00D6;

pub const VC_KATAKANA: u32 = 0x00E0;
pub const VC_UNDERSCORE: u32 = 0x00E1;
pub const VC_FURIGANA: u32 = 0x00E2;
pub const VC_KANJI: u32 = 0x00E3;
pub const VC_HIRAGANA: u32 = 0x00E4;
pub const VC_YEN: u32 = 0x00E5;
pub const VC_KP_COMMA: u32 = 0x00E6;

pub const VC_SUN_HELP: u32 = 0x00F0;
pub const VC_SUN_STOP: u32 = 0x00F1;
pub const VC_SUN_PROPS: u32 = 0x00F2;
pub const VC_SUN_FRONT: u32 = 0x00F3;
pub const VC_SUN_OPEN: u32 = 0x00F4;
pub const VC_SUN_FIND: u32 = 0x00F5;
pub const VC_SUN_AGAIN: u32 = 0x00F6;
pub const VC_SUN_UNDO: u32 = 0x00F7;
pub const VC_SUN_COPY: u32 = 0x00F8;
pub const VC_SUN_INSERT: u32 = 0x00F9;
pub const VC_SUN_CUT: u32 = 0x00FA;

pub const VC_UNDEFINED: u32 = 0xFFFF;
pub const CHAR_UNDEFINED: u32 = 0xFFFF;

pub const MOUSE_NOBUTTON: u32 = 0;
pub const MOUSE_BUTTON1: u32 = 1;
pub const MOUSE_BUTTON2: u32 = 2;
pub const MOUSE_BUTTON3: u32 = 3;
pub const MOUSE_BUTTON4: u32 = 4;
pub const MOUSE_BUTTON5: u32 = 5;

pub const WHEEL_UNIT_SCROLL: u8 = 1;
pub const WHEEL_BLOCK_SCROLL: u8 = 2;
pub const WHEEL_VERTICAL_DIRECTION: u8 = 3;
pub const WHEEL_HORIZONTAL_DIRECTION: u8 = 4;

/// Bit OR'd into a resolved keypad numeric/separator virtual code when
/// NumLock is clear, disambiguating the navigation interpretation from the
/// numeric one. Applied only on the native-to-canonical translation path.
pub const KEYPAD_NAVIGATION_BIT: u32 = 0xEE00;

/// True if `vc` is one of the keypad numeric/separator codes subject to the
/// NumLock disambiguation rule (spec.md §4.1).
pub fn is_keypad_numeric(vc: u32) -> bool {
    matches!(
        vc,
        VC_KP_0
            | VC_KP_1
            | VC_KP_2
            | VC_KP_3
            | VC_KP_4
            | VC_KP_5
            | VC_KP_6
            | VC_KP_7
            | VC_KP_8
            | VC_KP_9
            | VC_KP_SEPARATOR
    )
}

/// Applies the keypad/NumLock disambiguation rule: when `vc` is a keypad
/// numeric code and `num_lock_set` is false, OR `KEYPAD_NAVIGATION_BIT` into
/// the returned value.
pub fn apply_keypad_rule(vc: u32, num_lock_set: bool) -> u32 {
    if is_keypad_numeric(vc) && !num_lock_set {
        vc | KEYPAD_NAVIGATION_BIT
    } else {
        vc
    }
}

/// Bidirectional mapping between canonical virtual codes and a platform's
/// native key identifiers (Windows virtual-key codes, macOS `CGKeyCode`,
/// X11 `KeySym`). One native value maps to exactly one virtual code; many
/// native values may map to the same virtual code.
pub trait VirtualCodeTable: Send + Sync {
    /// Resolves `native` to a canonical virtual code, or `VC_UNDEFINED` if
    /// no entry matches.
    fn native_to_virtual(&self, native: u32) -> u32;

    /// Resolves `vc` to the first matching native identifier, or `None` if
    /// the table has no entry for it.
    fn virtual_to_native(&self, vc: u32) -> Option<u32>;
}

/// A table built from a flat `(virtual_code, native_code)` pair list, which
/// is how every platform table here is expressed (mirroring the original
/// `uiocode_keysym_table` layout).
pub struct TableVirtualCodeTable {
    pairs: &'static [(u32, u32)],
}

impl TableVirtualCodeTable {
    pub const fn new(pairs: &'static [(u32, u32)]) -> Self {
        Self { pairs }
    }
}

impl VirtualCodeTable for TableVirtualCodeTable {
    fn native_to_virtual(&self, native: u32) -> u32 {
        self.pairs
            .iter()
            .find(|(_, n)| *n == native)
            .map(|(vc, _)| *vc)
            .unwrap_or(VC_UNDEFINED)
    }

    fn virtual_to_native(&self, vc: u32) -> Option<u32> {
        self.pairs.iter().find(|(v, _)| *v == vc).map(|(_, n)| n).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TABLE: &[(u32, u32)] = &[
        (VC_ENTER, 100),
        (VC_ENTER, 101), // many-to-one: a second native code for the same VC
        (VC_A, 200),
        (VC_KP_5, 300),
    ];

    #[test]
    fn test_native_to_virtual_many_to_one() {
        let table = TableVirtualCodeTable::new(TEST_TABLE);
        assert_eq!(table.native_to_virtual(100), VC_ENTER);
        assert_eq!(table.native_to_virtual(101), VC_ENTER);
        assert_eq!(table.native_to_virtual(999), VC_UNDEFINED);
    }

    #[test]
    fn test_virtual_to_native_first_match_wins() {
        let table = TableVirtualCodeTable::new(TEST_TABLE);
        assert_eq!(table.virtual_to_native(VC_ENTER), Some(100));
        assert_eq!(table.virtual_to_native(VC_A), Some(200));
        assert_eq!(table.virtual_to_native(VC_ESCAPE), None);
    }

    #[test]
    fn test_round_trip_native_to_virtual_to_native() {
        let table = TableVirtualCodeTable::new(TEST_TABLE);
        for &(vc, _) in TEST_TABLE {
            if let Some(native) = table.virtual_to_native(vc) {
                assert_eq!(table.native_to_virtual(native), vc);
            }
        }
    }

    #[test]
    fn test_keypad_rule_applies_only_when_num_lock_clear() {
        assert_eq!(apply_keypad_rule(VC_KP_5, false), VC_KP_5 | KEYPAD_NAVIGATION_BIT);
        assert_eq!(apply_keypad_rule(VC_KP_5, true), VC_KP_5);
        // Non-keypad codes are never touched.
        assert_eq!(apply_keypad_rule(VC_A, false), VC_A);
    }

    #[test]
    fn test_is_keypad_numeric() {
        assert!(is_keypad_numeric(VC_KP_0));
        assert!(is_keypad_numeric(VC_KP_SEPARATOR));
        assert!(!is_keypad_numeric(VC_KP_ENTER));
        assert!(!is_keypad_numeric(VC_A));
    }
}

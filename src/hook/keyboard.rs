use crate::error::UiohookError;
use crate::vcode;
use crate::Uiohook;
use crate::UiohookEvent;
use std::convert::TryFrom;

/// Represents the type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEventType {
    /// A key was pressed down.
    Pressed,
    /// A key was released.
    Released,
    /// A character was typed (usually follows a press and release).
    Typed,
}

/// Represents a keyboard event.
#[derive(Debug, Clone)]
pub struct KeyboardEvent {
    /// The type of the keyboard event.
    pub event_type: KeyboardEventType,
    /// The key code of the event.
    pub key_code: KeyCode,
    /// The raw native key code as received from the platform backend.
    pub raw_code: u32,
    /// The raw UTF-16 code unit a `Typed` event carries. An astral code
    /// point is delivered as two `Typed` events, each holding one half of
    /// the surrogate pair here, so this can be a lone surrogate and not a
    /// standalone `char`. `None` for `Pressed`/`Released`.
    pub key_char: Option<u16>,
    /// The full Unicode scalar `key_char` was derived from, before any
    /// surrogate splitting. `None` for `Pressed`/`Released`.
    pub codepoint: Option<u32>,
    /// Milliseconds since the clock `crate::hook::now_ms` uses, taken when
    /// the event was produced.
    pub timestamp: u64,
    /// The modifier/button mask live at the moment of the event.
    pub modifier_mask: u16,
}

/// Represents a key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Function keys
    Escape,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    // Alphanumeric keys
    Backquote,
    Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9, Num0,
    Minus, Equals, Backspace,
    Tab, CapsLock,
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    OpenBracket, CloseBracket, Backslash,
    Semicolon, Quote, Enter,
    Comma, Period, Slash,
    Space,

    // Navigation keys
    PrintScreen, ScrollLock, Pause, LesserGreater,
    Insert, Delete, Home, End, PageUp, PageDown,
    Up, Left, Clear, Right, Down,

    // Numeric keypad
    NumLock,
    KpDivide, KpMultiply, KpSubtract, KpEquals, KpAdd, KpEnter, KpSeparator,
    Kp1, Kp2, Kp3, Kp4, Kp5, Kp6, Kp7, Kp8, Kp9, Kp0,
    KpEnd, KpDown, KpPageDown, KpLeft, KpClear, KpRight, KpHome, KpUp, KpPageUp,
    KpInsert, KpDelete,

    // Modifier keys
    ShiftL, ShiftR, ControlL, ControlR, AltL, AltR, MetaL, MetaR,

    // Additional keys
    ContextMenu, Power, Sleep, Wake,

    // Media keys
    MediaPlay, MediaStop, MediaPrevious, MediaNext, MediaSelect, MediaEject,
    VolumeMute, VolumeUp, VolumeDown,

    // Application keys
    AppMail, AppCalculator, AppMusic, AppPictures,

    // Browser keys
    BrowserSearch, BrowserHome, BrowserBack, BrowserForward, BrowserStop, BrowserRefresh, BrowserFavorites,

    // Japanese keys
    Katakana, Underscore, Furigana, Kanji, Hiragana, Yen, KpComma,

    // Sun keys
    SunHelp, SunStop, SunProps, SunFront, SunOpen, SunFind, SunAgain, SunUndo, SunCopy, SunInsert, SunCut,

    // Undefined key
    Undefined, CharUndefined,
}

impl TryFrom<u32> for KeyCode {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            vcode::VC_ESCAPE => Ok(KeyCode::Escape),
            vcode::VC_F1 => Ok(KeyCode::F1),
            vcode::VC_F2 => Ok(KeyCode::F2),
            vcode::VC_F3 => Ok(KeyCode::F3),
            vcode::VC_F4 => Ok(KeyCode::F4),
            vcode::VC_F5 => Ok(KeyCode::F5),
            vcode::VC_F6 => Ok(KeyCode::F6),
            vcode::VC_F7 => Ok(KeyCode::F7),
            vcode::VC_F8 => Ok(KeyCode::F8),
            vcode::VC_F9 => Ok(KeyCode::F9),
            vcode::VC_F10 => Ok(KeyCode::F10),
            vcode::VC_F11 => Ok(KeyCode::F11),
            vcode::VC_F12 => Ok(KeyCode::F12),
            vcode::VC_F13 => Ok(KeyCode::F13),
            vcode::VC_F14 => Ok(KeyCode::F14),
            vcode::VC_F15 => Ok(KeyCode::F15),
            vcode::VC_F16 => Ok(KeyCode::F16),
            vcode::VC_F17 => Ok(KeyCode::F17),
            vcode::VC_F18 => Ok(KeyCode::F18),
            vcode::VC_F19 => Ok(KeyCode::F19),
            vcode::VC_F20 => Ok(KeyCode::F20),
            vcode::VC_F21 => Ok(KeyCode::F21),
            vcode::VC_F22 => Ok(KeyCode::F22),
            vcode::VC_F23 => Ok(KeyCode::F23),
            vcode::VC_F24 => Ok(KeyCode::F24),
            vcode::VC_BACKQUOTE => Ok(KeyCode::Backquote),
            vcode::VC_1 => Ok(KeyCode::Num1),
            vcode::VC_2 => Ok(KeyCode::Num2),
            vcode::VC_3 => Ok(KeyCode::Num3),
            vcode::VC_4 => Ok(KeyCode::Num4),
            vcode::VC_5 => Ok(KeyCode::Num5),
            vcode::VC_6 => Ok(KeyCode::Num6),
            vcode::VC_7 => Ok(KeyCode::Num7),
            vcode::VC_8 => Ok(KeyCode::Num8),
            vcode::VC_9 => Ok(KeyCode::Num9),
            vcode::VC_0 => Ok(KeyCode::Num0),
            vcode::VC_MINUS => Ok(KeyCode::Minus),
            vcode::VC_EQUALS => Ok(KeyCode::Equals),
            vcode::VC_BACKSPACE => Ok(KeyCode::Backspace),
            vcode::VC_TAB => Ok(KeyCode::Tab),
            vcode::VC_CAPS_LOCK => Ok(KeyCode::CapsLock),
            vcode::VC_A => Ok(KeyCode::A),
            vcode::VC_B => Ok(KeyCode::B),
            vcode::VC_C => Ok(KeyCode::C),
            vcode::VC_D => Ok(KeyCode::D),
            vcode::VC_E => Ok(KeyCode::E),
            vcode::VC_F => Ok(KeyCode::F),
            vcode::VC_G => Ok(KeyCode::G),
            vcode::VC_H => Ok(KeyCode::H),
            vcode::VC_I => Ok(KeyCode::I),
            vcode::VC_J => Ok(KeyCode::J),
            vcode::VC_K => Ok(KeyCode::K),
            vcode::VC_L => Ok(KeyCode::L),
            vcode::VC_M => Ok(KeyCode::M),
            vcode::VC_N => Ok(KeyCode::N),
            vcode::VC_O => Ok(KeyCode::O),
            vcode::VC_P => Ok(KeyCode::P),
            vcode::VC_Q => Ok(KeyCode::Q),
            vcode::VC_R => Ok(KeyCode::R),
            vcode::VC_S => Ok(KeyCode::S),
            vcode::VC_T => Ok(KeyCode::T),
            vcode::VC_U => Ok(KeyCode::U),
            vcode::VC_V => Ok(KeyCode::V),
            vcode::VC_W => Ok(KeyCode::W),
            vcode::VC_X => Ok(KeyCode::X),
            vcode::VC_Y => Ok(KeyCode::Y),
            vcode::VC_Z => Ok(KeyCode::Z),
            vcode::VC_OPEN_BRACKET => Ok(KeyCode::OpenBracket),
            vcode::VC_CLOSE_BRACKET => Ok(KeyCode::CloseBracket),
            vcode::VC_BACK_SLASH => Ok(KeyCode::Backslash),
            vcode::VC_SEMICOLON => Ok(KeyCode::Semicolon),
            vcode::VC_QUOTE => Ok(KeyCode::Quote),
            vcode::VC_ENTER => Ok(KeyCode::Enter),
            vcode::VC_COMMA => Ok(KeyCode::Comma),
            vcode::VC_PERIOD => Ok(KeyCode::Period),
            vcode::VC_SLASH => Ok(KeyCode::Slash),
            vcode::VC_SPACE => Ok(KeyCode::Space),
            vcode::VC_PRINTSCREEN => Ok(KeyCode::PrintScreen),
            vcode::VC_SCROLL_LOCK => Ok(KeyCode::ScrollLock),
            vcode::VC_PAUSE => Ok(KeyCode::Pause),
            vcode::VC_LESSER_GREATER => Ok(KeyCode::LesserGreater),
            vcode::VC_INSERT => Ok(KeyCode::Insert),
            vcode::VC_DELETE => Ok(KeyCode::Delete),
            vcode::VC_HOME => Ok(KeyCode::Home),
            vcode::VC_END => Ok(KeyCode::End),
            vcode::VC_PAGE_UP => Ok(KeyCode::PageUp),
            vcode::VC_PAGE_DOWN => Ok(KeyCode::PageDown),
            vcode::VC_UP => Ok(KeyCode::Up),
            vcode::VC_LEFT => Ok(KeyCode::Left),
            vcode::VC_CLEAR => Ok(KeyCode::Clear),
            vcode::VC_RIGHT => Ok(KeyCode::Right),
            vcode::VC_DOWN => Ok(KeyCode::Down),
            vcode::VC_NUM_LOCK => Ok(KeyCode::NumLock),
            vcode::VC_KP_DIVIDE => Ok(KeyCode::KpDivide),
            vcode::VC_KP_MULTIPLY => Ok(KeyCode::KpMultiply),
            vcode::VC_KP_SUBTRACT => Ok(KeyCode::KpSubtract),
            vcode::VC_KP_EQUALS => Ok(KeyCode::KpEquals),
            vcode::VC_KP_ADD => Ok(KeyCode::KpAdd),
            vcode::VC_KP_ENTER => Ok(KeyCode::KpEnter),
            vcode::VC_KP_SEPARATOR => Ok(KeyCode::KpSeparator),
            vcode::VC_KP_1 => Ok(KeyCode::Kp1),
            vcode::VC_KP_2 => Ok(KeyCode::Kp2),
            vcode::VC_KP_3 => Ok(KeyCode::Kp3),
            vcode::VC_KP_4 => Ok(KeyCode::Kp4),
            vcode::VC_KP_5 => Ok(KeyCode::Kp5),
            vcode::VC_KP_6 => Ok(KeyCode::Kp6),
            vcode::VC_KP_7 => Ok(KeyCode::Kp7),
            vcode::VC_KP_8 => Ok(KeyCode::Kp8),
            vcode::VC_KP_9 => Ok(KeyCode::Kp9),
            vcode::VC_KP_0 => Ok(KeyCode::Kp0),
            vcode::VC_KP_END => Ok(KeyCode::KpEnd),
            vcode::VC_KP_DOWN => Ok(KeyCode::KpDown),
            vcode::VC_KP_PAGE_DOWN => Ok(KeyCode::KpPageDown),
            vcode::VC_KP_LEFT => Ok(KeyCode::KpLeft),
            vcode::VC_KP_CLEAR => Ok(KeyCode::KpClear),
            vcode::VC_KP_RIGHT => Ok(KeyCode::KpRight),
            vcode::VC_KP_HOME => Ok(KeyCode::KpHome),
            vcode::VC_KP_UP => Ok(KeyCode::KpUp),
            vcode::VC_KP_PAGE_UP => Ok(KeyCode::KpPageUp),
            vcode::VC_KP_INSERT => Ok(KeyCode::KpInsert),
            vcode::VC_KP_DELETE => Ok(KeyCode::KpDelete),
            vcode::VC_SHIFT_L => Ok(KeyCode::ShiftL),
            vcode::VC_SHIFT_R => Ok(KeyCode::ShiftR),
            vcode::VC_CONTROL_L => Ok(KeyCode::ControlL),
            vcode::VC_CONTROL_R => Ok(KeyCode::ControlR),
            vcode::VC_ALT_L => Ok(KeyCode::AltL),
            vcode::VC_ALT_R => Ok(KeyCode::AltR),
            vcode::VC_META_L => Ok(KeyCode::MetaL),
            vcode::VC_META_R => Ok(KeyCode::MetaR),
            vcode::VC_CONTEXT_MENU => Ok(KeyCode::ContextMenu),
            vcode::VC_POWER => Ok(KeyCode::Power),
            vcode::VC_SLEEP => Ok(KeyCode::Sleep),
            vcode::VC_WAKE => Ok(KeyCode::Wake),
            vcode::VC_MEDIA_PLAY => Ok(KeyCode::MediaPlay),
            vcode::VC_MEDIA_STOP => Ok(KeyCode::MediaStop),
            vcode::VC_MEDIA_PREVIOUS => Ok(KeyCode::MediaPrevious),
            vcode::VC_MEDIA_NEXT => Ok(KeyCode::MediaNext),
            vcode::VC_MEDIA_SELECT => Ok(KeyCode::MediaSelect),
            vcode::VC_MEDIA_EJECT => Ok(KeyCode::MediaEject),
            vcode::VC_VOLUME_MUTE => Ok(KeyCode::VolumeMute),
            vcode::VC_VOLUME_UP => Ok(KeyCode::VolumeUp),
            vcode::VC_VOLUME_DOWN => Ok(KeyCode::VolumeDown),
            vcode::VC_APP_MAIL => Ok(KeyCode::AppMail),
            vcode::VC_APP_CALCULATOR => Ok(KeyCode::AppCalculator),
            vcode::VC_APP_MUSIC => Ok(KeyCode::AppMusic),
            vcode::VC_APP_PICTURES => Ok(KeyCode::AppPictures),
            vcode::VC_BROWSER_SEARCH => Ok(KeyCode::BrowserSearch),
            vcode::VC_BROWSER_HOME => Ok(KeyCode::BrowserHome),
            vcode::VC_BROWSER_BACK => Ok(KeyCode::BrowserBack),
            vcode::VC_BROWSER_FORWARD => Ok(KeyCode::BrowserForward),
            vcode::VC_BROWSER_STOP => Ok(KeyCode::BrowserStop),
            vcode::VC_BROWSER_REFRESH => Ok(KeyCode::BrowserRefresh),
            vcode::VC_BROWSER_FAVORITES => Ok(KeyCode::BrowserFavorites),
            vcode::VC_KATAKANA => Ok(KeyCode::Katakana),
            vcode::VC_UNDERSCORE => Ok(KeyCode::Underscore),
            vcode::VC_FURIGANA => Ok(KeyCode::Furigana),
            vcode::VC_KANJI => Ok(KeyCode::Kanji),
            vcode::VC_HIRAGANA => Ok(KeyCode::Hiragana),
            vcode::VC_YEN => Ok(KeyCode::Yen),
            vcode::VC_KP_COMMA => Ok(KeyCode::KpComma),
            vcode::VC_SUN_HELP => Ok(KeyCode::SunHelp),
            vcode::VC_SUN_STOP => Ok(KeyCode::SunStop),
            vcode::VC_SUN_PROPS => Ok(KeyCode::SunProps),
            vcode::VC_SUN_FRONT => Ok(KeyCode::SunFront),
            vcode::VC_SUN_OPEN => Ok(KeyCode::SunOpen),
            vcode::VC_SUN_FIND => Ok(KeyCode::SunFind),
            vcode::VC_SUN_AGAIN => Ok(KeyCode::SunAgain),
            vcode::VC_SUN_UNDO => Ok(KeyCode::SunUndo),
            vcode::VC_SUN_COPY => Ok(KeyCode::SunCopy),
            vcode::VC_SUN_INSERT => Ok(KeyCode::SunInsert),
            vcode::VC_SUN_CUT => Ok(KeyCode::SunCut),
            vcode::VC_UNDEFINED => Ok(KeyCode::Undefined),
            vcode::CHAR_UNDEFINED => Ok(KeyCode::CharUndefined),
            _ => Err(()),
        }
    }
}

impl From<KeyCode> for u32 {
    fn from(key_code: KeyCode) -> Self {
        match key_code {
            KeyCode::Escape => vcode::VC_ESCAPE,
            KeyCode::F1 => vcode::VC_F1,
            KeyCode::F2 => vcode::VC_F2,
            KeyCode::F3 => vcode::VC_F3,
            KeyCode::F4 => vcode::VC_F4,
            KeyCode::F5 => vcode::VC_F5,
            KeyCode::F6 => vcode::VC_F6,
            KeyCode::F7 => vcode::VC_F7,
            KeyCode::F8 => vcode::VC_F8,
            KeyCode::F9 => vcode::VC_F9,
            KeyCode::F10 => vcode::VC_F10,
            KeyCode::F11 => vcode::VC_F11,
            KeyCode::F12 => vcode::VC_F12,
            KeyCode::F13 => vcode::VC_F13,
            KeyCode::F14 => vcode::VC_F14,
            KeyCode::F15 => vcode::VC_F15,
            KeyCode::F16 => vcode::VC_F16,
            KeyCode::F17 => vcode::VC_F17,
            KeyCode::F18 => vcode::VC_F18,
            KeyCode::F19 => vcode::VC_F19,
            KeyCode::F20 => vcode::VC_F20,
            KeyCode::F21 => vcode::VC_F21,
            KeyCode::F22 => vcode::VC_F22,
            KeyCode::F23 => vcode::VC_F23,
            KeyCode::F24 => vcode::VC_F24,
            KeyCode::Backquote => vcode::VC_BACKQUOTE,
            KeyCode::Num1 => vcode::VC_1,
            KeyCode::Num2 => vcode::VC_2,
            KeyCode::Num3 => vcode::VC_3,
            KeyCode::Num4 => vcode::VC_4,
            KeyCode::Num5 => vcode::VC_5,
            KeyCode::Num6 => vcode::VC_6,
            KeyCode::Num7 => vcode::VC_7,
            KeyCode::Num8 => vcode::VC_8,
            KeyCode::Num9 => vcode::VC_9,
            KeyCode::Num0 => vcode::VC_0,
            KeyCode::Minus => vcode::VC_MINUS,
            KeyCode::Equals => vcode::VC_EQUALS,
            KeyCode::Backspace => vcode::VC_BACKSPACE,
            KeyCode::Tab => vcode::VC_TAB,
            KeyCode::CapsLock => vcode::VC_CAPS_LOCK,
            KeyCode::A => vcode::VC_A,
            KeyCode::B => vcode::VC_B,
            KeyCode::C => vcode::VC_C,
            KeyCode::D => vcode::VC_D,
            KeyCode::E => vcode::VC_E,
            KeyCode::F => vcode::VC_F,
            KeyCode::G => vcode::VC_G,
            KeyCode::H => vcode::VC_H,
            KeyCode::I => vcode::VC_I,
            KeyCode::J => vcode::VC_J,
            KeyCode::K => vcode::VC_K,
            KeyCode::L => vcode::VC_L,
            KeyCode::M => vcode::VC_M,
            KeyCode::N => vcode::VC_N,
            KeyCode::O => vcode::VC_O,
            KeyCode::P => vcode::VC_P,
            KeyCode::Q => vcode::VC_Q,
            KeyCode::R => vcode::VC_R,
            KeyCode::S => vcode::VC_S,
            KeyCode::T => vcode::VC_T,
            KeyCode::U => vcode::VC_U,
            KeyCode::V => vcode::VC_V,
            KeyCode::W => vcode::VC_W,
            KeyCode::X => vcode::VC_X,
            KeyCode::Y => vcode::VC_Y,
            KeyCode::Z => vcode::VC_Z,
            KeyCode::OpenBracket => vcode::VC_OPEN_BRACKET,
            KeyCode::CloseBracket => vcode::VC_CLOSE_BRACKET,
            KeyCode::Backslash => vcode::VC_BACK_SLASH,
            KeyCode::Semicolon => vcode::VC_SEMICOLON,
            KeyCode::Quote => vcode::VC_QUOTE,
            KeyCode::Enter => vcode::VC_ENTER,
            KeyCode::Comma => vcode::VC_COMMA,
            KeyCode::Period => vcode::VC_PERIOD,
            KeyCode::Slash => vcode::VC_SLASH,
            KeyCode::Space => vcode::VC_SPACE,
            KeyCode::PrintScreen => vcode::VC_PRINTSCREEN,
            KeyCode::ScrollLock => vcode::VC_SCROLL_LOCK,
            KeyCode::Pause => vcode::VC_PAUSE,
            KeyCode::LesserGreater => vcode::VC_LESSER_GREATER,
            KeyCode::Insert => vcode::VC_INSERT,
            KeyCode::Delete => vcode::VC_DELETE,
            KeyCode::Home => vcode::VC_HOME,
            KeyCode::End => vcode::VC_END,
            KeyCode::PageUp => vcode::VC_PAGE_UP,
            KeyCode::PageDown => vcode::VC_PAGE_DOWN,
            KeyCode::Up => vcode::VC_UP,
            KeyCode::Left => vcode::VC_LEFT,
            KeyCode::Clear => vcode::VC_CLEAR,
            KeyCode::Right => vcode::VC_RIGHT,
            KeyCode::Down => vcode::VC_DOWN,
            KeyCode::NumLock => vcode::VC_NUM_LOCK,
            KeyCode::KpDivide => vcode::VC_KP_DIVIDE,
            KeyCode::KpMultiply => vcode::VC_KP_MULTIPLY,
            KeyCode::KpSubtract => vcode::VC_KP_SUBTRACT,
            KeyCode::KpEquals => vcode::VC_KP_EQUALS,
            KeyCode::KpAdd => vcode::VC_KP_ADD,
            KeyCode::KpEnter => vcode::VC_KP_ENTER,
            KeyCode::KpSeparator => vcode::VC_KP_SEPARATOR,
            KeyCode::Kp1 => vcode::VC_KP_1,
            KeyCode::Kp2 => vcode::VC_KP_2,
            KeyCode::Kp3 => vcode::VC_KP_3,
            KeyCode::Kp4 => vcode::VC_KP_4,
            KeyCode::Kp5 => vcode::VC_KP_5,
            KeyCode::Kp6 => vcode::VC_KP_6,
            KeyCode::Kp7 => vcode::VC_KP_7,
            KeyCode::Kp8 => vcode::VC_KP_8,
            KeyCode::Kp9 => vcode::VC_KP_9,
            KeyCode::Kp0 => vcode::VC_KP_0,
            KeyCode::KpEnd => vcode::VC_KP_END,
            KeyCode::KpDown => vcode::VC_KP_DOWN,
            KeyCode::KpPageDown => vcode::VC_KP_PAGE_DOWN,
            KeyCode::KpLeft => vcode::VC_KP_LEFT,
            KeyCode::KpClear => vcode::VC_KP_CLEAR,
            KeyCode::KpRight => vcode::VC_KP_RIGHT,
            KeyCode::KpHome => vcode::VC_KP_HOME,
            KeyCode::KpUp => vcode::VC_KP_UP,
            KeyCode::KpPageUp => vcode::VC_KP_PAGE_UP,
            KeyCode::KpInsert => vcode::VC_KP_INSERT,
            KeyCode::KpDelete => vcode::VC_KP_DELETE,
            KeyCode::ShiftL => vcode::VC_SHIFT_L,
            KeyCode::ShiftR => vcode::VC_SHIFT_R,
            KeyCode::ControlL => vcode::VC_CONTROL_L,
            KeyCode::ControlR => vcode::VC_CONTROL_R,
            KeyCode::AltL => vcode::VC_ALT_L,
            KeyCode::AltR => vcode::VC_ALT_R,
            KeyCode::MetaL => vcode::VC_META_L,
            KeyCode::MetaR => vcode::VC_META_R,
            KeyCode::ContextMenu => vcode::VC_CONTEXT_MENU,
            KeyCode::Power => vcode::VC_POWER,
            KeyCode::Sleep => vcode::VC_SLEEP,
            KeyCode::Wake => vcode::VC_WAKE,
            KeyCode::MediaPlay => vcode::VC_MEDIA_PLAY,
            KeyCode::MediaStop => vcode::VC_MEDIA_STOP,
            KeyCode::MediaPrevious => vcode::VC_MEDIA_PREVIOUS,
            KeyCode::MediaNext => vcode::VC_MEDIA_NEXT,
            KeyCode::MediaSelect => vcode::VC_MEDIA_SELECT,
            KeyCode::MediaEject => vcode::VC_MEDIA_EJECT,
            KeyCode::VolumeMute => vcode::VC_VOLUME_MUTE,
            KeyCode::VolumeUp => vcode::VC_VOLUME_UP,
            KeyCode::VolumeDown => vcode::VC_VOLUME_DOWN,
            KeyCode::AppMail => vcode::VC_APP_MAIL,
            KeyCode::AppCalculator => vcode::VC_APP_CALCULATOR,
            KeyCode::AppMusic => vcode::VC_APP_MUSIC,
            KeyCode::AppPictures => vcode::VC_APP_PICTURES,
            KeyCode::BrowserSearch => vcode::VC_BROWSER_SEARCH,
            KeyCode::BrowserHome => vcode::VC_BROWSER_HOME,
            KeyCode::BrowserBack => vcode::VC_BROWSER_BACK,
            KeyCode::BrowserForward => vcode::VC_BROWSER_FORWARD,
            KeyCode::BrowserStop => vcode::VC_BROWSER_STOP,
            KeyCode::BrowserRefresh => vcode::VC_BROWSER_REFRESH,
            KeyCode::BrowserFavorites => vcode::VC_BROWSER_FAVORITES,
            KeyCode::Katakana => vcode::VC_KATAKANA,
            KeyCode::Underscore => vcode::VC_UNDERSCORE,
            KeyCode::Furigana => vcode::VC_FURIGANA,
            KeyCode::Kanji => vcode::VC_KANJI,
            KeyCode::Hiragana => vcode::VC_HIRAGANA,
            KeyCode::Yen => vcode::VC_YEN,
            KeyCode::KpComma => vcode::VC_KP_COMMA,
            KeyCode::SunHelp => vcode::VC_SUN_HELP,
            KeyCode::SunStop => vcode::VC_SUN_STOP,
            KeyCode::SunProps => vcode::VC_SUN_PROPS,
            KeyCode::SunFront => vcode::VC_SUN_FRONT,
            KeyCode::SunOpen => vcode::VC_SUN_OPEN,
            KeyCode::SunFind => vcode::VC_SUN_FIND,
            KeyCode::SunAgain => vcode::VC_SUN_AGAIN,
            KeyCode::SunUndo => vcode::VC_SUN_UNDO,
            KeyCode::SunCopy => vcode::VC_SUN_COPY,
            KeyCode::SunInsert => vcode::VC_SUN_INSERT,
            KeyCode::SunCut => vcode::VC_SUN_CUT,
            KeyCode::Undefined => vcode::VC_UNDEFINED,
            KeyCode::CharUndefined => vcode::CHAR_UNDEFINED,
        }
    }
}

/// Simulates a key tap (press and release) for the given key code, holding
/// `modifiers` down for the duration of the tap.
///
/// ```no_run
/// use uiohook_rs::{Uiohook, EventHandler, UiohookEvent, keyboard::{key_tap, KeyCode}};
///
/// struct MyHandler;
///
/// impl EventHandler for MyHandler {
///     fn handle_event(&self, event: &UiohookEvent) {
///         println!("Event: {:?}", event);
///     }
/// }
///
/// let hook = Uiohook::new(MyHandler);
/// key_tap(&hook, KeyCode::A, &[KeyCode::ShiftL]).expect("Failed to tap key");
/// ```
pub fn key_tap(uiohook: &Uiohook, key: KeyCode, modifiers: &[KeyCode]) -> Result<(), UiohookError> {
    for &modifier in modifiers {
        let press_event = create_keyboard_event(KeyboardEventType::Pressed, modifier);
        uiohook.post_event(&UiohookEvent::Keyboard(press_event))?;
    }

    let key_press_event = create_keyboard_event(KeyboardEventType::Pressed, key);
    uiohook.post_event(&UiohookEvent::Keyboard(key_press_event))?;

    let key_release_event = create_keyboard_event(KeyboardEventType::Released, key);
    uiohook.post_event(&UiohookEvent::Keyboard(key_release_event))?;

    for &modifier in modifiers.iter().rev() {
        let release_event = create_keyboard_event(KeyboardEventType::Released, modifier);
        uiohook.post_event(&UiohookEvent::Keyboard(release_event))?;
    }

    Ok(())
}

/// Simulates a key press or release for the given key code.
///
/// ```no_run
/// use uiohook_rs::{Uiohook, EventHandler, UiohookEvent, keyboard::{key_toggle, KeyCode}};
///
/// struct MyHandler;
///
/// impl EventHandler for MyHandler {
///     fn handle_event(&self, event: &UiohookEvent) {
///         println!("Event: {:?}", event);
///     }
/// }
///
/// let hook = Uiohook::new(MyHandler);
/// key_toggle(&hook, KeyCode::ShiftL, true).expect("Failed to press key");
/// key_toggle(&hook, KeyCode::ShiftL, false).expect("Failed to release key");
/// ```
pub fn key_toggle(uiohook: &Uiohook, key: KeyCode, down: bool) -> Result<(), UiohookError> {
    let event_type = if down { KeyboardEventType::Pressed } else { KeyboardEventType::Released };
    let event = create_keyboard_event(event_type, key);
    uiohook.post_event(&UiohookEvent::Keyboard(event))?;
    Ok(())
}

fn create_keyboard_event(event_type: KeyboardEventType, key: KeyCode) -> KeyboardEvent {
    KeyboardEvent {
        event_type,
        key_code: key,
        raw_code: u32::from(key),
        key_char: None,
        codepoint: None,
        timestamp: crate::hook::now_ms(),
        modifier_mask: crate::modifiers::get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_conversion() {
        assert_eq!(KeyCode::try_from(vcode::VC_ESCAPE), Ok(KeyCode::Escape));
        assert_eq!(KeyCode::try_from(vcode::VC_F1), Ok(KeyCode::F1));
        assert_eq!(KeyCode::try_from(0xFFFFFFFF), Err(()));

        assert_eq!(u32::from(KeyCode::Escape), vcode::VC_ESCAPE);
        assert_eq!(u32::from(KeyCode::F1), vcode::VC_F1);
    }

    #[test]
    fn test_key_code_round_trip() {
        let codes = [
            KeyCode::A, KeyCode::Enter, KeyCode::Kp5, KeyCode::ShiftL,
            KeyCode::ContextMenu, KeyCode::SunCut, KeyCode::Undefined,
        ];
        for code in codes {
            let vc = u32::from(code);
            assert_eq!(KeyCode::try_from(vc), Ok(code));
        }
    }

    #[test]
    fn test_create_keyboard_event_carries_raw_code() {
        let event = create_keyboard_event(KeyboardEventType::Pressed, KeyCode::A);
        assert_eq!(event.key_code, KeyCode::A);
        assert_eq!(event.raw_code, vcode::VC_A);
        assert!(event.key_char.is_none());
        assert!(event.codepoint.is_none());
    }
}

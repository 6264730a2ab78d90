//! A cross-platform global keyboard and mouse hook for Windows, macOS, and
//! X11-based Linux, implemented natively in Rust against each platform's
//! own event APIs rather than by binding a C library.

pub mod dispatch;
pub mod error;
pub mod ffi_record;
pub mod hook;
pub mod logger;
pub mod modifiers;
pub mod platform;
pub mod unicode;
pub mod utils;
pub mod vcode;

pub use error::UiohookError;
pub use hook::{EventHandler, HookLifecycleEvent, HookState, Uiohook, UiohookEvent};
pub use hook::keyboard::{KeyCode, KeyboardEvent, KeyboardEventType};
pub use hook::mouse::{MouseButton, MouseEvent, MouseEventType};
pub use hook::wheel::WheelEvent;

// Re-export every virtual key code so callers can match on `vcode::VC_*`
// without a second `use` line.
pub use vcode::{
    VC_ESCAPE,
    VC_F1, VC_F2, VC_F3, VC_F4, VC_F5, VC_F6, VC_F7, VC_F8, VC_F9, VC_F10, VC_F11, VC_F12,
    VC_F13, VC_F14, VC_F15, VC_F16, VC_F17, VC_F18, VC_F19, VC_F20, VC_F21, VC_F22, VC_F23, VC_F24,
    VC_BACKQUOTE,
    VC_1, VC_2, VC_3, VC_4, VC_5, VC_6, VC_7, VC_8, VC_9, VC_0,
    VC_MINUS, VC_EQUALS, VC_BACKSPACE,
    VC_TAB, VC_CAPS_LOCK,
    VC_A, VC_B, VC_C, VC_D, VC_E, VC_F, VC_G, VC_H, VC_I, VC_J, VC_K, VC_L, VC_M,
    VC_N, VC_O, VC_P, VC_Q, VC_R, VC_S, VC_T, VC_U, VC_V, VC_W, VC_X, VC_Y, VC_Z,
    VC_OPEN_BRACKET, VC_CLOSE_BRACKET, VC_BACK_SLASH,
    VC_SEMICOLON, VC_QUOTE, VC_ENTER,
    VC_COMMA, VC_PERIOD, VC_SLASH,
    VC_SPACE,
    VC_PRINTSCREEN, VC_SCROLL_LOCK, VC_PAUSE,
    VC_LESSER_GREATER,
    VC_INSERT, VC_DELETE, VC_HOME, VC_END, VC_PAGE_UP, VC_PAGE_DOWN,
    VC_UP, VC_LEFT, VC_CLEAR, VC_RIGHT, VC_DOWN,
    VC_NUM_LOCK,
    VC_KP_DIVIDE, VC_KP_MULTIPLY, VC_KP_SUBTRACT, VC_KP_EQUALS, VC_KP_ADD, VC_KP_ENTER, VC_KP_SEPARATOR,
    VC_KP_1, VC_KP_2, VC_KP_3, VC_KP_4, VC_KP_5, VC_KP_6, VC_KP_7, VC_KP_8, VC_KP_9, VC_KP_0,
    VC_KP_END, VC_KP_DOWN, VC_KP_PAGE_DOWN, VC_KP_LEFT, VC_KP_CLEAR, VC_KP_RIGHT,
    VC_KP_HOME, VC_KP_UP, VC_KP_PAGE_UP, VC_KP_INSERT, VC_KP_DELETE,
    VC_SHIFT_L, VC_SHIFT_R, VC_CONTROL_L, VC_CONTROL_R, VC_ALT_L, VC_ALT_R, VC_META_L, VC_META_R,
    VC_CONTEXT_MENU,
    VC_POWER, VC_SLEEP, VC_WAKE,
    VC_MEDIA_PLAY, VC_MEDIA_STOP, VC_MEDIA_PREVIOUS, VC_MEDIA_NEXT, VC_MEDIA_SELECT, VC_MEDIA_EJECT,
    VC_VOLUME_MUTE, VC_VOLUME_UP, VC_VOLUME_DOWN,
    VC_APP_MAIL, VC_APP_CALCULATOR, VC_APP_MUSIC, VC_APP_PICTURES,
    VC_BROWSER_SEARCH, VC_BROWSER_HOME, VC_BROWSER_BACK, VC_BROWSER_FORWARD,
    VC_BROWSER_STOP, VC_BROWSER_REFRESH, VC_BROWSER_FAVORITES,
    VC_KATAKANA, VC_UNDERSCORE, VC_FURIGANA, VC_KANJI, VC_HIRAGANA, VC_YEN, VC_KP_COMMA,
    VC_SUN_HELP, VC_SUN_STOP, VC_SUN_PROPS, VC_SUN_FRONT, VC_SUN_OPEN, VC_SUN_FIND,
    VC_SUN_AGAIN, VC_SUN_UNDO, VC_SUN_COPY, VC_SUN_INSERT, VC_SUN_CUT,
    VC_UNDEFINED,
    CHAR_UNDEFINED,
    MOUSE_NOBUTTON, MOUSE_BUTTON1, MOUSE_BUTTON2, MOUSE_BUTTON3, MOUSE_BUTTON4, MOUSE_BUTTON5,
    WHEEL_UNIT_SCROLL, WHEEL_BLOCK_SCROLL,
    WHEEL_VERTICAL_DIRECTION, WHEEL_HORIZONTAL_DIRECTION,
};

// Re-export modifier mask constants.
pub use modifiers::{
    MASK_SHIFT_L, MASK_CTRL_L, MASK_META_L, MASK_ALT_L,
    MASK_SHIFT_R, MASK_CTRL_R, MASK_META_R, MASK_ALT_R,
    MASK_SHIFT, MASK_CTRL, MASK_META, MASK_ALT,
    MASK_BUTTON1, MASK_BUTTON2, MASK_BUTTON3, MASK_BUTTON4, MASK_BUTTON5,
    MASK_NUM_LOCK, MASK_CAPS_LOCK, MASK_SCROLL_LOCK,
};

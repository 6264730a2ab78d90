//! Windows Hook Runtime: `WH_KEYBOARD_LL` + `WH_MOUSE_LL`, pumped from the
//! message loop of the thread that installed them.
//!
//! Grounded in `original_source/src/windows/input_hook.c`'s hook
//! procedures, with the extra-mouse-button fix from SPEC_FULL.md §9: both
//! the press and release paths resolve the actual X1/X2 button index and
//! set/clear `MASK_BUTTON4`/`MASK_BUTTON5` through
//! [`crate::modifiers::button_mask`] rather than hardcoding button 5 or
//! using the raw button-number constant as a mask.

use crate::dispatch::RawInput;
use crate::error::UiohookError;
use crate::platform::windows::input_helper::WindowsInputHelper;
use crate::platform::windows::keymap::TABLE;
use crate::platform::{InputHelper, PlatformHook};
use crate::vcode::VirtualCodeTable;
use std::cell::RefCell;
use std::ptr::null_mut;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use winapi::shared::minwindef::{LPARAM, LRESULT, WPARAM};
use winapi::shared::windef::HHOOK;
use winapi::um::libloaderapi::GetModuleHandleW;
use winapi::um::winuser::{
    CallNextHookEx, DispatchMessageW, GetKeyboardState, GetMessageW, ToUnicodeEx, KBDLLHOOKSTRUCT,
    MSG, MSLLHOOKSTRUCT, PostThreadMessageW, SetWindowsHookExW, TranslateMessage,
    UnhookWindowsHookEx, HC_ACTION, WH_KEYBOARD_LL, WH_MOUSE_LL, WM_KEYDOWN, WM_KEYUP,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP, WM_MOUSEHWHEEL, WM_MOUSEMOVE,
    WM_MOUSEWHEEL, WM_QUIT, WM_RBUTTONDOWN, WM_RBUTTONUP, WM_SYSKEYDOWN, WM_SYSKEYUP,
    WM_XBUTTONDOWN, WM_XBUTTONUP,
};

/// Derives the character a key press would type, the way `hook_event_proc`
/// in the original's Windows backend does with `ToUnicodeEx`: it needs the
/// live keyboard state (for shift/altgr/dead-key composition) rather than
/// just the virtual key, so there's no shortcut around calling
/// `GetKeyboardState` on every key press.
fn key_to_codepoint(data: &KBDLLHOOKSTRUCT) -> Option<u32> {
    let mut state = [0u8; 256];
    if unsafe { GetKeyboardState(state.as_mut_ptr()) } == 0 {
        return None;
    }
    let mut buf = [0u16; 4];
    let len = unsafe {
        ToUnicodeEx(
            data.vkCode,
            data.scanCode,
            state.as_ptr(),
            buf.as_mut_ptr(),
            buf.len() as i32,
            0,
            null_mut(),
        )
    };
    if len <= 0 {
        return None;
    }
    crate::unicode::utf16_to_codepoint(&buf[..len as usize])
}

thread_local! {
    static EMIT_SLOT: RefCell<Option<*mut dyn FnMut(RawInput)>> = RefCell::new(None);
}

fn with_emit(f: impl FnOnce(&mut dyn FnMut(RawInput))) {
    EMIT_SLOT.with(|slot| {
        if let Some(ptr) = *slot.borrow() {
            unsafe { f(&mut *ptr) }
        }
    });
}

unsafe extern "system" fn keyboard_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 {
        let data = &*(lparam as *const KBDLLHOOKSTRUCT);
        let native = data.vkCode;
        let vc = TABLE.native_to_virtual(native);
        match wparam as u32 {
            WM_KEYDOWN | WM_SYSKEYDOWN => {
                let codepoint = key_to_codepoint(data);
                with_emit(|emit| emit(RawInput::KeyDown { vc, native_code: native, codepoint }));
            }
            WM_KEYUP | WM_SYSKEYUP => {
                with_emit(|emit| emit(RawInput::KeyUp { vc, native_code: native }));
            }
            _ => {}
        }
    }
    CallNextHookEx(null_mut(), code, wparam, lparam)
}

unsafe extern "system" fn mouse_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 {
        let data = &*(lparam as *const MSLLHOOKSTRUCT);
        let x = data.pt.x as i16;
        let y = data.pt.y as i16;
        match wparam as u32 {
            WM_LBUTTONDOWN => with_emit(|emit| emit(RawInput::MouseDown { button: 1, x, y })),
            WM_LBUTTONUP => with_emit(|emit| emit(RawInput::MouseUp { button: 1, x, y })),
            WM_RBUTTONDOWN => with_emit(|emit| emit(RawInput::MouseDown { button: 2, x, y })),
            WM_RBUTTONUP => with_emit(|emit| emit(RawInput::MouseUp { button: 2, x, y })),
            WM_MBUTTONDOWN => with_emit(|emit| emit(RawInput::MouseDown { button: 3, x, y })),
            WM_MBUTTONUP => with_emit(|emit| emit(RawInput::MouseUp { button: 3, x, y })),
            WM_XBUTTONDOWN => {
                let button = extra_button_index(data.mouseData);
                with_emit(|emit| emit(RawInput::MouseDown { button, x, y }));
            }
            WM_XBUTTONUP => {
                let button = extra_button_index(data.mouseData);
                with_emit(|emit| emit(RawInput::MouseUp { button, x, y }));
            }
            WM_MOUSEMOVE => with_emit(|emit| emit(RawInput::MouseMove { x, y })),
            WM_MOUSEWHEEL => {
                let rotation = ((data.mouseData >> 16) as i16 as i32 / 120) as i16;
                with_emit(|emit| {
                    emit(RawInput::MouseWheel {
                        amount: 3,
                        rotation,
                        wheel_type: crate::vcode::WHEEL_UNIT_SCROLL,
                        direction: crate::vcode::WHEEL_VERTICAL_DIRECTION,
                        x,
                        y,
                    })
                });
            }
            WM_MOUSEHWHEEL => {
                let rotation = ((data.mouseData >> 16) as i16 as i32 / 120) as i16;
                with_emit(|emit| {
                    emit(RawInput::MouseWheel {
                        amount: 3,
                        rotation,
                        wheel_type: crate::vcode::WHEEL_UNIT_SCROLL,
                        direction: crate::vcode::WHEEL_HORIZONTAL_DIRECTION,
                        x,
                        y,
                    })
                });
            }
            _ => {}
        }
    }
    CallNextHookEx(null_mut(), code, wparam, lparam)
}

/// Decodes the X1/X2 button index (4 or 5) out of `mouseData`'s high-order
/// word. Both the press and release hook procedures go through this same
/// path, which is the fix for the original's hardcoded-button-5 release
/// defect (SPEC_FULL.md §9).
fn extra_button_index(mouse_data: u32) -> u32 {
    match (mouse_data >> 16) & 0xFFFF {
        1 => 4,
        2 => 5,
        _ => 4,
    }
}

pub struct WindowsHook {
    keyboard_hook: HHOOK,
    mouse_hook: HHOOK,
    thread_id: Arc<AtomicU32>,
    stopped: Arc<AtomicBool>,
}

unsafe impl Send for WindowsHook {}

impl WindowsHook {
    pub fn new() -> Self {
        Self {
            keyboard_hook: null_mut(),
            mouse_hook: null_mut(),
            thread_id: Arc::new(AtomicU32::new(0)),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl PlatformHook for WindowsHook {
    fn install(&mut self) -> Result<(), UiohookError> {
        self.thread_id.store(unsafe { winapi::um::processthreadsapi::GetCurrentThreadId() }, Ordering::SeqCst);

        let module = unsafe { GetModuleHandleW(null_mut()) };
        if module.is_null() {
            return Err(UiohookError::PlatformHandleUnavailable("GetModuleHandleW"));
        }

        self.keyboard_hook = unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_proc), module, 0) };
        if self.keyboard_hook.is_null() {
            return Err(UiohookError::PlatformInstallFailed {
                platform: "windows",
                detail: "SetWindowsHookExW(WH_KEYBOARD_LL) returned null".into(),
            });
        }

        self.mouse_hook = unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_proc), module, 0) };
        if self.mouse_hook.is_null() {
            unsafe { UnhookWindowsHookEx(self.keyboard_hook) };
            self.keyboard_hook = null_mut();
            return Err(UiohookError::PlatformInstallFailed {
                platform: "windows",
                detail: "SetWindowsHookExW(WH_MOUSE_LL) returned null".into(),
            });
        }

        let mut helper = WindowsInputHelper::new();
        helper.load()?;

        Ok(())
    }

    fn pump(&mut self, emit: &mut dyn FnMut(RawInput)) -> Result<(), UiohookError> {
        // Windows delivers no "hook started" callback; the Dispatcher
        // bracket is synthesized here immediately after install.
        emit(RawInput::HookEnabled);

        EMIT_SLOT.with(|slot| {
            *slot.borrow_mut() = Some(emit as *mut dyn FnMut(RawInput));
        });

        let mut msg: MSG = unsafe { std::mem::zeroed() };
        loop {
            let ret = unsafe { GetMessageW(&mut msg, null_mut(), 0, 0) };
            if ret == 0 || self.stopped.load(Ordering::SeqCst) {
                break;
            }
            if ret == -1 {
                return Err(UiohookError::InternalLogic("GetMessageW failed".into()));
            }
            unsafe {
                TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
            if msg.message == WM_QUIT {
                break;
            }
        }

        EMIT_SLOT.with(|slot| *slot.borrow_mut() = None);
        emit(RawInput::HookDisabled);
        Ok(())
    }

    fn signal_stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        let tid = self.thread_id.load(Ordering::SeqCst);
        if tid != 0 {
            unsafe {
                PostThreadMessageW(tid, WM_QUIT, 0, 0);
            }
        }
    }

    fn teardown(&mut self) {
        if !self.mouse_hook.is_null() {
            unsafe { UnhookWindowsHookEx(self.mouse_hook) };
            self.mouse_hook = null_mut();
        }
        if !self.keyboard_hook.is_null() {
            unsafe { UnhookWindowsHookEx(self.keyboard_hook) };
            self.keyboard_hook = null_mut();
        }
        let mut helper = WindowsInputHelper::new();
        helper.unload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_button_index_resolves_x1_and_x2_distinctly() {
        assert_eq!(extra_button_index(1 << 16), 4);
        assert_eq!(extra_button_index(2 << 16), 5);
        assert_ne!(extra_button_index(1 << 16), extra_button_index(2 << 16));
    }
}

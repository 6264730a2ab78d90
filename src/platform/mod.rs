//! Per-platform Hook Runtime and Input Helper implementations.
//!
//! Exactly one of the three backend modules below is compiled in, selected
//! by `cfg(target_os = ...)`; [`active_backend`] constructs it. Each
//! backend implements [`PlatformHook`], the capability set named in
//! DESIGN NOTES §9: `install`, `pump`, `signal_stop`, `teardown`.

use crate::dispatch::RawInput;
use crate::error::UiohookError;

#[cfg(target_os = "windows")]
pub mod windows;
#[cfg(target_os = "macos")]
pub mod macos;
#[cfg(all(unix, not(target_os = "macos")))]
pub mod x11;

/// The outer state machine every platform backend implements. `pump`
/// blocks the calling (hook) thread, invoking `emit` for each
/// [`RawInput`] it decodes, until `signal_stop` has been called from
/// another thread or a fatal platform error occurs.
pub trait PlatformHook: Send {
    fn install(&mut self) -> Result<(), UiohookError>;
    fn pump(&mut self, emit: &mut dyn FnMut(RawInput)) -> Result<(), UiohookError>;
    fn signal_stop(&self);
    fn teardown(&mut self);
}

/// Resolves the keyboard's native lock-key and held-modifier state and the
/// pointer-button remap table needed to translate raw events. One instance
/// per platform; loaded at hook install, unloaded at teardown.
pub trait InputHelper {
    /// Initializes lock/modifier state into [`crate::modifiers`] from the
    /// OS. Called once from `install()`.
    fn load(&mut self) -> Result<(), UiohookError>;

    /// Frees any platform resources and resets the modifier mask.
    /// Idempotent.
    fn unload(&mut self);

    /// Applies the OS pointer-button remap table, then the X11-specific
    /// button2/button3 swap (a no-op identity remap on Windows/macOS).
    fn button_map_lookup(&self, raw_button: u32) -> u32;
}

#[cfg(target_os = "windows")]
pub fn active_backend() -> Box<dyn PlatformHook> {
    Box::new(windows::WindowsHook::new())
}

#[cfg(target_os = "macos")]
pub fn active_backend() -> Box<dyn PlatformHook> {
    Box::new(macos::MacosHook::new())
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn active_backend() -> Box<dyn PlatformHook> {
    Box::new(x11::X11Hook::new())
}

#[cfg(not(any(target_os = "windows", target_os = "macos", all(unix, not(target_os = "macos")))))]
pub fn active_backend() -> Box<dyn PlatformHook> {
    compile_error!("uiohook-rs has no Hook Runtime backend for this target");
}

use std::result;
use thiserror::Error;

/// A specialized Result type for uiohook operations.
pub type Result<T> = result::Result<T, UiohookError>;

/// Represents all possible errors returned by the uiohook library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiohookError {
    /// Allocation failed while building a platform resource (e.g. the
    /// screen-info table, the X11 button-map buffer).
    #[error("out of memory")]
    OutOfMemory,

    /// No module handle / no display connection could be obtained.
    #[error("platform handle unavailable: {0}")]
    PlatformHandleUnavailable(&'static str),

    /// `SetWindowsHookEx` / `CGEventTapCreate` / `XRecordCreateContext`
    /// (or an earlier step in that platform's install sequence) failed.
    #[error("failed to install {platform} hook: {detail}")]
    PlatformInstallFailed {
        platform: &'static str,
        detail: String,
    },

    /// The XRecord extension is not present on the X server.
    #[error("XRecord extension unavailable")]
    ExtensionUnavailable,

    /// A `run()` was attempted while a hook was already active.
    #[error("hook is already running")]
    AlreadyRunning,

    /// A `stop()` was attempted while no hook was active.
    #[error("hook is not running")]
    NotRunning,

    /// An invariant the library relies on internally was violated (a bug
    /// in this crate, not a platform failure).
    #[error("internal error: {0}")]
    InternalLogic(String),

    /// The specified mouse button is not recognized.
    #[error("unknown mouse button: {0}")]
    UnknownMouseButton(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UiohookError::OutOfMemory.to_string(), "out of memory");
        assert_eq!(UiohookError::AlreadyRunning.to_string(), "hook is already running");
        assert_eq!(UiohookError::NotRunning.to_string(), "hook is not running");
        assert_eq!(
            UiohookError::PlatformHandleUnavailable("display").to_string(),
            "platform handle unavailable: display"
        );
        assert_eq!(
            UiohookError::PlatformInstallFailed {
                platform: "windows",
                detail: "SetWindowsHookEx returned null".into(),
            }
            .to_string(),
            "failed to install windows hook: SetWindowsHookEx returned null"
        );
        assert_eq!(
            UiohookError::UnknownMouseButton(9).to_string(),
            "unknown mouse button: 9"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(UiohookError::OutOfMemory, UiohookError::OutOfMemory);
        assert_ne!(UiohookError::OutOfMemory, UiohookError::AlreadyRunning);
    }
}

//! Screen geometry and input-device property accessors.
//!
//! Kept from the original `utils.rs` minus the FFI marshaling: there is no
//! longer a C struct to copy out of, so every function here talks to its
//! platform's own API directly.

use crate::error::{Result, UiohookError};

/// Represents information about a screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenData {
    /// The screen number.
    pub number: u8,
    /// The x-coordinate of the screen.
    pub x: i16,
    /// The y-coordinate of the screen.
    pub y: i16,
    /// The width of the screen.
    pub width: u16,
    /// The height of the screen.
    pub height: u16,
}

/// Retrieves information about all available screens.
///
/// # Errors
///
/// Returns a `UiohookError` if the platform call fails.
///
/// # Examples
///
/// ```rust,no_run
/// use uiohook_rs::utils::create_screen_info;
///
/// match create_screen_info() {
///     Ok(screens) => {
///         for screen in screens {
///             println!("Screen {}: {}x{} at ({}, {})",
///                      screen.number, screen.width, screen.height, screen.x, screen.y);
///         }
///     },
///     Err(e) => eprintln!("Failed to get screen info: {}", e),
/// }
/// ```
#[cfg(target_os = "windows")]
pub fn create_screen_info() -> Result<Vec<ScreenData>> {
    use winapi::um::winuser::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};
    let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
    let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    if width <= 0 || height <= 0 {
        return Err(UiohookError::PlatformHandleUnavailable("GetSystemMetrics"));
    }
    // Multi-monitor enumeration would need EnumDisplayMonitors with a
    // callback; every caller so far only needs the primary display.
    Ok(vec![ScreenData { number: 0, x: 0, y: 0, width: width as u16, height: height as u16 }])
}

#[cfg(target_os = "macos")]
pub fn create_screen_info() -> Result<Vec<ScreenData>> {
    use core_graphics::display::CGDisplay;
    let bounds = CGDisplay::main().bounds();
    Ok(vec![ScreenData {
        number: 0,
        x: bounds.origin.x as i16,
        y: bounds.origin.y as i16,
        width: bounds.size.width as u16,
        height: bounds.size.height as u16,
    }])
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn create_screen_info() -> Result<Vec<ScreenData>> {
    use x11rb::connection::Connection;
    use x11rb::rust_connection::RustConnection;
    let (conn, screen_num) = RustConnection::connect(None)
        .map_err(|_| UiohookError::PlatformHandleUnavailable("XOpenDisplay"))?;

    #[cfg(feature = "xrandr")]
    {
        if let Some(screens) = xrandr_screens(&conn, screen_num)? {
            if !screens.is_empty() {
                return Ok(screens);
            }
        }
    }

    #[cfg(feature = "xinerama")]
    {
        if let Some(screens) = xinerama_screens(&conn)? {
            if !screens.is_empty() {
                return Ok(screens);
            }
        }
    }

    let screen = &conn.setup().roots[screen_num];
    Ok(vec![ScreenData { number: screen_num as u8, x: 0, y: 0, width: screen.width_in_pixels, height: screen.height_in_pixels }])
}

/// Queries per-monitor geometry via the RandR extension, the extension
/// modern X servers keep current for multi-head setups. Returns `None` if
/// the server has no RandR support (rather than an error), so callers fall
/// back to single-head geometry the same way they would with no feature
/// enabled at all.
#[cfg(feature = "xrandr")]
fn xrandr_screens(conn: &x11rb::rust_connection::RustConnection, screen_num: usize) -> Result<Option<Vec<ScreenData>>> {
    use x11rb::protocol::randr::ConnectionExt;

    let root = conn.setup().roots[screen_num].root;
    let reply = match conn.randr_get_monitors(root, true) {
        Ok(cookie) => cookie.reply(),
        Err(_) => return Ok(None),
    };
    let reply = match reply {
        Ok(r) => r,
        Err(_) => return Ok(None),
    };

    Ok(Some(
        reply
            .monitors
            .into_iter()
            .enumerate()
            .map(|(i, m)| ScreenData { number: i as u8, x: m.x, y: m.y, width: m.width, height: m.height })
            .collect(),
    ))
}

/// Queries per-head geometry via the Xinerama extension, the predecessor
/// to RandR for the same purpose. Returns `None` if unsupported.
#[cfg(feature = "xinerama")]
fn xinerama_screens(conn: &x11rb::rust_connection::RustConnection) -> Result<Option<Vec<ScreenData>>> {
    use x11rb::protocol::xinerama::ConnectionExt;

    let is_active = match conn.xinerama_is_active() {
        Ok(cookie) => cookie.reply().map(|r| r.state != 0).unwrap_or(false),
        Err(_) => false,
    };
    if !is_active {
        return Ok(None);
    }

    let reply = match conn.xinerama_query_screens() {
        Ok(cookie) => cookie.reply(),
        Err(_) => return Ok(None),
    };
    let reply = match reply {
        Ok(r) => r,
        Err(_) => return Ok(None),
    };

    Ok(Some(
        reply
            .screen_info
            .into_iter()
            .enumerate()
            .map(|(i, s)| ScreenData { number: i as u8, x: s.x_org, y: s.y_org, width: s.width, height: s.height })
            .collect(),
    ))
}

/// Retrieves the keyboard auto repeat rate, in repeats per second.
pub fn get_auto_repeat_rate() -> Result<i64> {
    #[cfg(target_os = "windows")]
    {
        use winapi::um::winuser::{SystemParametersInfoW, SPI_GETKEYBOARDSPEED};
        let mut speed: u32 = 0;
        let ok = unsafe {
            SystemParametersInfoW(SPI_GETKEYBOARDSPEED, 0, &mut speed as *mut _ as *mut _, 0)
        };
        if ok == 0 {
            return Err(UiohookError::PlatformHandleUnavailable("SystemParametersInfoW"));
        }
        return Ok(speed as i64);
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return x11_repeat_controls().map(|(_, interval)| interval);
    }
    #[cfg(target_os = "macos")]
    {
        // Not exposed through a public Carbon/Quartz call; uiohook's own
        // upstream falls back to this value on Darwin too.
        return Ok(30);
    }
}

/// Retrieves the keyboard auto repeat delay, in milliseconds.
pub fn get_auto_repeat_delay() -> Result<i64> {
    #[cfg(target_os = "windows")]
    {
        use winapi::um::winuser::{SystemParametersInfoW, SPI_GETKEYBOARDDELAY};
        let mut delay: u32 = 0;
        let ok = unsafe {
            SystemParametersInfoW(SPI_GETKEYBOARDDELAY, 0, &mut delay as *mut _ as *mut _, 0)
        };
        if ok == 0 {
            return Err(UiohookError::PlatformHandleUnavailable("SystemParametersInfoW"));
        }
        // SPI_GETKEYBOARDDELAY returns 0..3, each step worth 250ms.
        return Ok((delay as i64 + 1) * 250);
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return x11_repeat_controls().map(|(delay, _)| delay);
    }
    #[cfg(target_os = "macos")]
    {
        return Ok(500);
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn x11_repeat_controls() -> Result<(i64, i64)> {
    use x11rb::protocol::xkb::ConnectionExt as _;
    use x11rb::rust_connection::RustConnection;
    let (conn, _) = RustConnection::connect(None)
        .map_err(|_| UiohookError::PlatformHandleUnavailable("XOpenDisplay"))?;
    let reply = conn
        .xkb_get_controls(x11rb::protocol::xkb::ID::USE_CORE_KBD.into())
        .map_err(|_| UiohookError::PlatformHandleUnavailable("XkbGetControls"))?
        .reply()
        .map_err(|_| UiohookError::PlatformHandleUnavailable("XkbGetControls"))?;
    let delay = reply.repeat_delay as i64;
    let interval = reply.repeat_interval.max(1) as i64;
    Ok((delay, 1000 / interval))
}

/// Retrieves the pointer acceleration multiplier.
pub fn get_pointer_acceleration_multiplier() -> Result<i64> {
    #[cfg(target_os = "windows")]
    {
        use winapi::um::winuser::{SystemParametersInfoW, SPI_GETMOUSE};
        let mut values: [i32; 3] = [0; 3];
        let ok = unsafe {
            SystemParametersInfoW(SPI_GETMOUSE, 0, values.as_mut_ptr() as *mut _, 0)
        };
        if ok == 0 {
            return Err(UiohookError::PlatformHandleUnavailable("SystemParametersInfoW"));
        }
        return Ok(values[2] as i64);
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return x11_pointer_control().map(|(num, _, _)| num);
    }
    #[cfg(target_os = "macos")]
    {
        return Ok(1);
    }
}

/// Retrieves the pointer acceleration threshold.
pub fn get_pointer_acceleration_threshold() -> Result<i64> {
    #[cfg(target_os = "windows")]
    {
        use winapi::um::winuser::{SystemParametersInfoW, SPI_GETMOUSE};
        let mut values: [i32; 3] = [0; 3];
        let ok = unsafe {
            SystemParametersInfoW(SPI_GETMOUSE, 0, values.as_mut_ptr() as *mut _, 0)
        };
        if ok == 0 {
            return Err(UiohookError::PlatformHandleUnavailable("SystemParametersInfoW"));
        }
        return Ok(values[0] as i64);
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return x11_pointer_control().map(|(_, _, threshold)| threshold);
    }
    #[cfg(target_os = "macos")]
    {
        return Ok(4);
    }
}

/// Retrieves the pointer sensitivity.
pub fn get_pointer_sensitivity() -> Result<i64> {
    #[cfg(target_os = "windows")]
    {
        use winapi::um::winuser::SPI_GETMOUSESPEED;
        use winapi::um::winuser::SystemParametersInfoW;
        let mut speed: u32 = 0;
        let ok = unsafe {
            SystemParametersInfoW(SPI_GETMOUSESPEED, 0, &mut speed as *mut _ as *mut _, 0)
        };
        if ok == 0 {
            return Err(UiohookError::PlatformHandleUnavailable("SystemParametersInfoW"));
        }
        return Ok(speed as i64);
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return x11_pointer_control().map(|(_, denom, _)| denom);
    }
    #[cfg(target_os = "macos")]
    {
        return Ok(3);
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn x11_pointer_control() -> Result<(i64, i64, i64)> {
    use x11rb::protocol::xproto::ConnectionExt as _;
    use x11rb::rust_connection::RustConnection;
    let (conn, _) = RustConnection::connect(None)
        .map_err(|_| UiohookError::PlatformHandleUnavailable("XOpenDisplay"))?;
    let reply = conn
        .get_pointer_control()
        .map_err(|_| UiohookError::PlatformHandleUnavailable("GetPointerControl"))?
        .reply()
        .map_err(|_| UiohookError::PlatformHandleUnavailable("GetPointerControl"))?;
    Ok((reply.acceleration_numerator as i64, reply.acceleration_denominator as i64, reply.threshold as i64))
}

/// Retrieves the double/triple click interval, in milliseconds.
pub fn get_multi_click_time() -> Result<i64> {
    #[cfg(target_os = "windows")]
    {
        use winapi::um::winuser::GetDoubleClickTime;
        return Ok(unsafe { GetDoubleClickTime() } as i64);
    }
    #[cfg(any(target_os = "macos", all(unix, not(target_os = "macos"))))]
    {
        // Neither Quartz nor the X11 core protocol exposes this as a
        // queryable system property; both desktop environments default
        // to 500ms and this crate's own multi-click tracking in
        // `crate::dispatch` uses the same constant.
        return Ok(500);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_data_is_copy() {
        let a = ScreenData { number: 1, x: 0, y: 0, width: 1920, height: 1080 };
        let b = a;
        assert_eq!(a.number, b.number);
        assert_eq!(b.width, 1920);
    }
}

//! Core functionality for hooking keyboard and mouse events.
//!
//! This module provides the main `Uiohook` struct and the `EventHandler` trait
//! for handling uiohook events.

use crate::dispatch::Dispatcher;
use crate::error::UiohookError;
use crate::platform::{self, PlatformHook};
use self::keyboard::KeyboardEvent;
use self::mouse::MouseEvent;
use self::wheel::WheelEvent;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::thread;

pub mod keyboard;
pub mod mouse;
pub mod wheel;

static GLOBAL_HANDLER: OnceLock<Arc<RwLock<dyn EventHandler>>> = OnceLock::new();

/// Wraps the raw backend pointer so it can live in the `Arc<Mutex<..>>`
/// shared between the hook thread and `stop()`. Safety follows
/// `backend_ptr`'s own invariant documented on `Uiohook`: the pointer is
/// only ever dereferenced through `&self`-only, atomics-based methods
/// while shared.
struct SendPtr(*mut dyn PlatformHook);
unsafe impl Send for SendPtr {}

/// Trait for handling uiohook events.
pub trait EventHandler: Send + Sync {
    /// Handle a uiohook event.
    fn handle_event(&self, event: &UiohookEvent);
}

/// Lifecycle state of a [`Uiohook`], tracked for diagnostics and to reject
/// a concurrent `run()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    Uninitialized,
    Installing,
    Running,
    Stopping,
    Teardown,
}

/// Main struct for interacting with uiohook.
pub struct Uiohook {
    event_handler: Arc<RwLock<dyn EventHandler>>,
    running: Arc<AtomicBool>,
    state: Arc<Mutex<HookState>>,
    // Raw pointer to the backend owned by the hook thread for the
    // duration of one run. `stop()` dereferences it only to call
    // `signal_stop`, an atomics-only `&self` method every backend
    // implements to be safe under exactly this kind of concurrent call
    // while the owning thread holds `&mut self` inside `pump`.
    backend_ptr: Arc<Mutex<Option<SendPtr>>>,
    thread_handle: RwLock<Option<thread::JoinHandle<()>>>,
}

unsafe impl Send for Uiohook {}
unsafe impl Sync for Uiohook {}

impl Uiohook {
    /// Create a new Uiohook instance with the given event handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uiohook_rs::{Uiohook, EventHandler, UiohookEvent};
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
    /// ```
    pub fn new<H: EventHandler + 'static>(event_handler: H) -> Self {
        Self {
            event_handler: Arc::new(RwLock::new(event_handler)),
            running: Arc::new(AtomicBool::new(false)),
            state: Arc::new(Mutex::new(HookState::Uninitialized)),
            backend_ptr: Arc::new(Mutex::new(None)),
            thread_handle: RwLock::new(None),
        }
    }

    /// The hook's current lifecycle state.
    pub fn state(&self) -> HookState {
        *self.state.lock().unwrap()
    }

    /// Run the uiohook event loop.
    ///
    /// This method spawns the hook thread and returns immediately; the
    /// thread blocks installing and then pumping platform events until
    /// `stop()` is called or the platform backend fails.
    ///
    /// # Errors
    ///
    /// Returns a `UiohookError` if a hook is already running.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use uiohook_rs::{Uiohook, EventHandler, UiohookEvent};
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
    /// hook.run().expect("Failed to run uiohook");
    /// ```
    pub fn run(&self) -> Result<(), UiohookError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(UiohookError::AlreadyRunning);
        }
        *self.state.lock().unwrap() = HookState::Installing;

        // GLOBAL_HANDLER is process-wide; only the first Uiohook's handler
        // in the process ever receives events, matching the single
        // dispatch-proc slot the teacher's design also assumed.
        let _ = GLOBAL_HANDLER.set(Arc::clone(&self.event_handler));

        let running = self.running.clone();
        let state = self.state.clone();
        let backend_ptr_slot = self.backend_ptr.clone();

        // `install()` has to run on the same thread that later blocks in
        // `pump()`: it's the thread whose message queue/run loop/display
        // connection every backend's `signal_stop` targets by thread id,
        // run loop handle, or socket. Both install and pump happen inside
        // the spawned closure; `ready_tx` reports the install outcome back
        // to this call so `run()` can still fail synchronously.
        let (ready_tx, ready_rx) = std::sync::mpsc::channel::<Result<(), UiohookError>>();

        let thread = thread::spawn(move || {
            let mut backend = platform::active_backend();
            if let Err(e) = backend.install() {
                log::error!("hook install failed: {e}");
                running.store(false, Ordering::SeqCst);
                *state.lock().unwrap() = HookState::Uninitialized;
                let _ = ready_tx.send(Err(e));
                return;
            }
            *state.lock().unwrap() = HookState::Running;

            let raw_ptr: *mut dyn PlatformHook = Box::into_raw(backend);
            *backend_ptr_slot.lock().unwrap() = Some(SendPtr(raw_ptr));
            let _ = ready_tx.send(Ok(()));

            // Safety: this thread is the sole owner of `raw_ptr` for the
            // duration of the run; `stop()` only ever reaches it through
            // `signal_stop`, documented above as safe under concurrent
            // `&self` access while this `&mut` borrow is live.
            let backend: &mut dyn PlatformHook = unsafe { &mut *raw_ptr };

            let mut dispatcher = Dispatcher::new();
            let result = backend.pump(&mut |raw| {
                dispatcher.advance_clock(now_ms());
                dispatcher.dispatch(raw, dispatch_to_handler);
            });
            if let Err(e) = result {
                log::error!("hook pump failed: {e}");
            }

            *state.lock().unwrap() = HookState::Teardown;
            backend.teardown();
            unsafe { drop(Box::from_raw(raw_ptr)) };
            *backend_ptr_slot.lock().unwrap() = None;
            running.store(false, Ordering::SeqCst);
            *state.lock().unwrap() = HookState::Uninitialized;
        });

        *self.thread_handle.write().unwrap() = Some(thread);

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                if let Some(t) = self.thread_handle.write().unwrap().take() {
                    let _ = t.join();
                }
                Err(e)
            }
            Err(_) => {
                if let Some(t) = self.thread_handle.write().unwrap().take() {
                    let _ = t.join();
                }
                Err(UiohookError::InternalLogic("hook thread exited before completing install".into()))
            }
        }
    }

    /// Stop the uiohook event loop.
    ///
    /// # Errors
    ///
    /// Returns a `UiohookError` if no hook is currently running.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uiohook_rs::{Uiohook, EventHandler, UiohookEvent};
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
    ///
    /// hook.run().expect("Failed to run uiohook");
    /// hook.stop().expect("Failed to stop uiohook");
    /// ```
    pub fn stop(&self) -> Result<(), UiohookError> {
        if !self.running.load(Ordering::SeqCst) {
            return Err(UiohookError::NotRunning);
        }
        *self.state.lock().unwrap() = HookState::Stopping;

        if let Some(SendPtr(ptr)) = *self.backend_ptr.lock().unwrap() {
            // Safety: `ptr` is valid until the hook thread reclaims it via
            // `Box::from_raw` after `pump` returns; `signal_stop` only
            // touches atomics, so this shared read is sound even while
            // that thread holds the `&mut` borrow inside `pump`.
            let backend: &dyn PlatformHook = unsafe { &*ptr };
            backend.signal_stop();
        }

        if let Some(thread) = self.thread_handle.write().unwrap().take() {
            thread.join().map_err(|_| UiohookError::InternalLogic("hook thread panicked".into()))?;
        }

        Ok(())
    }

    /// Post a synthetic event directly to the registered handler.
    ///
    /// There is no real OS event injection; this hands `event` straight to
    /// whichever `EventHandler` is currently registered, exactly as if the
    /// platform backend had produced it.
    ///
    /// # Examples
    ///
    /// ```
    /// use uiohook_rs::{Uiohook, EventHandler, UiohookEvent};
    /// use uiohook_rs::hook::keyboard::{KeyboardEvent, KeyboardEventType, KeyCode};
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
    ///
    /// let key_event = KeyboardEvent {
    ///     event_type: KeyboardEventType::Pressed,
    ///     key_code: KeyCode::A,
    ///     raw_code: 0x41,
    ///     key_char: None,
    ///     codepoint: None,
    ///     timestamp: 0,
    ///     modifier_mask: 0,
    /// };
    ///
    /// hook.post_event(&UiohookEvent::Keyboard(key_event)).expect("Failed to post event");
    /// ```
    pub fn post_event(&self, event: &UiohookEvent) -> Result<(), UiohookError> {
        dispatch_to_handler(event.clone());
        Ok(())
    }
}

/// Milliseconds since an arbitrary epoch: wall-clock UNIX time when the
/// `epoch-time` feature is enabled, otherwise a process-relative
/// monotonic clock, matching spec.md §6's `USE_EPOCH_TIME` switch.
pub(crate) fn now_ms() -> u64 {
    #[cfg(feature = "epoch-time")]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
    }
    #[cfg(not(feature = "epoch-time"))]
    {
        use std::time::Instant;
        static START: OnceLock<Instant> = OnceLock::new();
        let start = START.get_or_init(Instant::now);
        start.elapsed().as_millis() as u64
    }
}

fn dispatch_to_handler(event: UiohookEvent) {
    if let Some(handler) = GLOBAL_HANDLER.get() {
        if let Ok(guard) = handler.read() {
            let handler_ref: &dyn EventHandler = &*guard;
            if panic::catch_unwind(AssertUnwindSafe(|| handler_ref.handle_event(&event))).is_err() {
                log::error!("event handler panicked");
            }
        }
    }
}

/// Carries the `timestamp`/`modifier_mask` snapshot for a hook lifecycle
/// event, the same pair every other canonical event carries alongside its
/// kind-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookLifecycleEvent {
    /// Milliseconds since the clock `crate::hook::now_ms` uses, taken when
    /// the event was produced.
    pub timestamp: u64,
    /// The modifier/button mask live at the moment of the transition.
    pub modifier_mask: u16,
}

/// Enumeration of possible uiohook events.
#[derive(Debug, Clone)]
pub enum UiohookEvent {
    /// Keyboard event (key press, release, or type)
    Keyboard(KeyboardEvent),
    /// Mouse event (movement, button press, release, or click)
    Mouse(MouseEvent),
    /// Mouse wheel event
    Wheel(WheelEvent),
    /// Hook enabled event
    HookEnabled(HookLifecycleEvent),
    /// Hook disabled event
    HookDisabled(HookLifecycleEvent),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct TestHandler {
        event_count: Arc<AtomicUsize>,
    }

    impl EventHandler for TestHandler {
        fn handle_event(&self, _event: &UiohookEvent) {
            self.event_count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_stop_without_run_is_not_running() {
        let hook = Uiohook::new(TestHandler { event_count: Arc::new(AtomicUsize::new(0)) });
        assert_eq!(hook.stop(), Err(UiohookError::NotRunning));
    }

    #[test]
    fn test_initial_state_is_uninitialized() {
        let hook = Uiohook::new(TestHandler { event_count: Arc::new(AtomicUsize::new(0)) });
        assert_eq!(hook.state(), HookState::Uninitialized);
    }
}

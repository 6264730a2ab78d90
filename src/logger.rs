//! Diagnostic logging for the hook runtime.
//!
//! There is no C dispatch callback to register here any more; every
//! platform backend and the dispatcher log through the `log` facade
//! directly. `init_logger` just wires up a default subscriber for
//! consumers who don't want to bring their own, mirroring what the
//! demo binary does with `colored` for its own terminal output.

/// Installs `env_logger` as the default subscriber, reading `RUST_LOG`
/// as usual. Calling this more than once, or after another subscriber
/// is already installed, is a no-op.
pub fn init_logger() {
    let _ = env_logger::try_init();
}

pub mod input_helper;
pub mod keymap;
pub mod runtime;
pub mod wire;

pub use runtime::X11Hook;

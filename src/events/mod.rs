pub mod controls;
pub mod keyboard;
pub mod pointer;

pub use controls::wire_controls;
pub use keyboard::{wire_fullscreen_change, wire_global_keydown};
pub use pointer::{wire_pointer_handlers, DragListeners};

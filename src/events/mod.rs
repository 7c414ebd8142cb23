pub mod buttons;
pub mod pointer;

pub use buttons::wire_buttons;
pub use pointer::{attach_drag, wire_drag_handlers};

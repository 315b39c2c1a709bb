pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_escape;
pub use pointer::wire_pointer_tracking;
pub use scroll::{wire_scroll, ScrollWiring};

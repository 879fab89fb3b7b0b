pub mod keyboard;
pub mod keys;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointerdown;

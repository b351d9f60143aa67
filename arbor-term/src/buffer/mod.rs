mod buffer;
mod cell;
mod surface;

pub use buffer::Buffer;
pub use cell::Cell;
pub use surface::{Region, Surface};

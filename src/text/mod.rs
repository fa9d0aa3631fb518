pub mod base;
pub mod wrap;

pub use base::{from_base, to_base};
pub use wrap::{wrap, TextWrapper};

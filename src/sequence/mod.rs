pub mod lis;
pub mod powerset;

pub use lis::{lis, lis_sequence};
pub use powerset::powerset;

// Shared helpers

pub mod constants;
pub mod phone;

pub use constants::*;
pub use phone::{normalize_phone, PhoneError};

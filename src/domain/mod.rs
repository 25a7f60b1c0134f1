pub mod conversion;
pub mod session;
pub mod shared;

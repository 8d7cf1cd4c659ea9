// sprime Core - Field codec, records & ports
// NO process or IO dependencies (hexagonal layout)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

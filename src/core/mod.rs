pub mod error;

pub use error::{DistError, Result};

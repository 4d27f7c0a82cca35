pub mod error;
pub mod result;

pub use error::TaskdeckError;
pub use result::TaskdeckResult;

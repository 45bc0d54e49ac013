pub mod domain;
pub mod error;
pub mod session;
pub mod wire;

pub use domain::*;
pub use error::AppError;
pub use session::Session;
pub use wire::*;

//! HTTP request handlers.

mod error;
mod extractors;
mod groups;
mod system;
mod users;


pub use error::*;
pub use extractors::*;
pub use groups::*;
pub use system::*;
pub use users::*;

mod aggregate;
mod error;
mod reading;
mod status;

pub use aggregate::*;
pub use error::*;
pub use reading::*;
pub use status::*;

pub mod error;
pub mod result;
pub mod text;

pub use error::*;
pub use result::*;
pub use text::*;

pub mod batch;
pub mod native;
pub mod token;

pub use batch::*;
pub use native::*;
pub use token::*;

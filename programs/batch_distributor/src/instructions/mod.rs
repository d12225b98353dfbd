pub mod create_distributor;
pub mod distribute_native;
pub mod distribute_token;

pub use create_distributor::*;
pub use distribute_native::*;
pub use distribute_token::*;

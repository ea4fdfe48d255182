pub mod batch;
pub mod config;
pub mod corpus;
pub mod scores;

pub use batch::*;
pub use config::*;
pub use corpus::*;
pub use scores::*;

pub mod bleu;
pub mod rouge;

pub use bleu::*;
pub use rouge::*;

pub mod calculators;
pub mod ngrams;
pub mod scorer;
pub mod tokenizer;

pub use calculators::*;
pub use scorer::*;
pub use tokenizer::*;

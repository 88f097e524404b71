pub mod dates;
pub mod expand;
pub mod filter;
pub mod normalize;
pub mod parse;
pub mod runner;
pub mod schema;

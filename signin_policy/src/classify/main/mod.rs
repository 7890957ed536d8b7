mod codes;
mod core;
mod phrases;
mod utils;

pub use self::core::{classify, classify_with_config};

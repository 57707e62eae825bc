pub mod document;
pub mod output;

pub use document::*;
pub use output::*;

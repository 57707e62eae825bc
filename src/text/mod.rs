//! Character-level scanning shared by the stages.

pub mod segmenter;
pub mod words;

pub use segmenter::*;
pub use words::*;

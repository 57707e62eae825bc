pub mod stage0_whitespace;
pub mod stage1_correct;
pub mod stage2_case;
pub mod stage3_synthesize;

pub use stage0_whitespace::*;
pub use stage1_correct::*;
pub use stage2_case::*;
pub use stage3_synthesize::*;

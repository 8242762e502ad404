pub mod archive;
pub mod convert;
pub mod dwell;
pub mod reader;
pub mod transform;
pub mod writer;

pub use convert::{ConvertLogic, ConvertOptions, RunOutcome, RunSummary};

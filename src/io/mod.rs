mod format;
mod output;

pub use format::DocumentFormat;
pub use output::{OutputDestination, OutputOptions, emit};

mod draft;
mod format;
mod input;
mod output;

pub use draft::{DraftError, draft_commands, parse_override};
pub use format::DocumentFormat;
pub use input::{parse_document_any, parse_document_str};
pub use output::{OutputDestination, OutputOptions, emit};

//! Quotes module — prompt construction, the model invocation seam, and
//! category-specific parsing of model replies.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;

pub mod document_ctx;
pub mod parse_flow;

pub use document_ctx::DocumentCtx;
pub use parse_flow::{parse_text, QuestionParser};

pub mod loaders;
pub mod question;

pub use loaders::{load_all_text_documents, load_text_document, TextDocument};
pub use question::{BatchSummary, DocumentReport, ParseResult, ParsedQuestion};

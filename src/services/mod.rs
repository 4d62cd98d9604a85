pub mod boundary_scanner;
pub mod markers;
pub mod result_writer;
pub mod segment_parser;
pub mod segmenter;
pub mod validator;
pub mod warn_writer;

pub use markers::{MarkerMatch, MarkerSet, ANSWER_MARKERS, QUESTION_MARKERS};
pub use result_writer::ResultWriter;
pub use segmenter::{Segment, SegmentKind};
pub use warn_writer::WarnWriter;

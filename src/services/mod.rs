pub mod block_splitter;
pub mod duplicate_detector;
pub mod normalizer;
pub mod question_extractor;
pub mod report_writer;

pub use block_splitter::{split_blocks, Blocks};
pub use duplicate_detector::detect_duplicates;
pub use normalizer::normalize;
pub use question_extractor::{extract_question, extract_questions};
pub use report_writer::{format_report, ReportWriter};

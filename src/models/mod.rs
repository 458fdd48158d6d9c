pub mod duplicate;
pub mod loaders;
pub mod question;

pub use duplicate::{DuplicateReport, ExactGroup, SubsetPair, TopicPair};
pub use loaders::load_document;
pub use question::QuestionRecord;

//! surveypages turns a Google Sheets survey into a set of static HTML
//! profile pages: one page per person, a shared stylesheet, and a directory
//! page linking them all.

pub mod error;
pub mod ingest;
pub mod person;
pub mod pipeline;
pub mod render;
pub mod sheets;
pub mod validate;

pub use error::{Error, ValidationError};
pub use person::PersonRecord;
pub use pipeline::SurveyPipeline;
pub use validate::ValidatedInput;

//! Renders the ordered record set into the output file set: one profile
//! page per record, the shared stylesheet, and the directory page.

pub mod html;
pub mod sink;

pub use html::{INDEX_NAME, STYLESHEET_NAME};
pub use sink::{DirSink, OutputSink};

use tracing::info;

use crate::error::Error;
use crate::person::PersonRecord;

/// Writes the full output set for one run through the injected sink. A
/// failed write aborts the pass; documents already written stay on disk.
pub struct Renderer<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> Renderer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn render(&self, records: &[PersonRecord]) -> Result<(), Error> {
        self.sink.create_dir_if_absent()?;
        self.sink.write_text(html::STYLESHEET_NAME, html::STYLESHEET)?;

        for (i, person) in records.iter().enumerate() {
            let file_name = person.file_name();
            info!(file = %file_name, "writing profile page");
            self.sink
                .write_text(&file_name, &html::person_page(person, records.get(i + 1)))?;
        }

        self.sink
            .write_text(html::INDEX_NAME, &html::index_page(records))?;
        info!(pages = records.len(), "render complete");
        Ok(())
    }
}

//! The end-to-end run: validate the coordinates, retrieve the range, build
//! the records, sort them by last name, and write the page set.

use tracing::info;

use crate::error::Error;
use crate::ingest;
use crate::render::{OutputSink, Renderer};
use crate::sheets::SheetSource;
use crate::validate;

/// Facade over the whole pipeline. Collaborators are injected at
/// construction, so tests run it against canned rows and an in-memory sink.
pub struct SurveyPipeline<S: SheetSource, K: OutputSink> {
    source: S,
    renderer: Renderer<K>,
}

impl<S: SheetSource, K: OutputSink> SurveyPipeline<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            renderer: Renderer::new(sink),
        }
    }

    /// Run once, start to finish. Validation failures surface before any
    /// network or file I/O happens.
    pub fn run(&self, url: &str, range: &str, image_column: &str) -> Result<(), Error> {
        let input = validate::validate(url, range, image_column)?;
        info!(
            spreadsheet_id = %input.spreadsheet_id,
            range = %input.range,
            image_index = input.image_index,
            "starting survey run"
        );

        let rows = self.source.retrieve(&input.spreadsheet_id, &input.range)?;
        let mut records = ingest::ingest(&rows, input.image_index)?;
        ingest::sort_by_last_name(&mut records);

        self.renderer.render(&records)?;
        info!(people = records.len(), "finished generating files");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sink::MemorySink;

    const URL: &str = "https://docs.google.com/spreadsheets/d/test";
    const RANGE: &str = "A1:D3";
    const IMAGE_COLUMN: &str = "C";

    /// Returns canned rows and records what was asked for.
    struct StubSource {
        rows: Vec<Vec<String>>,
        requests: std::cell::RefCell<Vec<(String, String)>>,
    }

    impl StubSource {
        fn new(rows: Vec<Vec<String>>) -> Self {
            Self {
                rows,
                requests: std::cell::RefCell::new(Vec::new()),
            }
        }
    }

    impl SheetSource for StubSource {
        fn retrieve(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>, Error> {
            self.requests
                .borrow_mut()
                .push((spreadsheet_id.to_string(), range.to_string()));
            Ok(self.rows.clone())
        }
    }

    impl SheetSource for &StubSource {
        fn retrieve(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>, Error> {
            (*self).retrieve(spreadsheet_id, range)
        }
    }

    fn sample_rows() -> Vec<Vec<String>> {
        [
            vec!["Given First Name", "Last Name", "Link to Picture"],
            vec!["First", "Last", "pic1"],
            vec!["Second", "Second to Last", "pic2"],
        ]
        .into_iter()
        .map(|row| row.into_iter().map(String::from).collect())
        .collect()
    }

    #[test]
    fn end_to_end_generates_the_full_file_set() {
        let source = StubSource::new(sample_rows());
        let sink = MemorySink::new();

        SurveyPipeline::new(&source, &sink)
            .run(URL, RANGE, IMAGE_COLUMN)
            .unwrap();

        assert_eq!(
            source.requests.borrow().as_slice(),
            [("test".to_string(), RANGE.to_string())]
        );
        assert_eq!(
            sink.file_names(),
            [
                "style.css",
                "First Last.html",
                "Second Second to Last.html",
                "index.html"
            ]
        );

        let first = sink.contents_of("First Last.html").unwrap();
        assert!(first.contains("<img src=\"pic1\">"));
        assert!(first.contains("<b>Given First Name: </b>First<br>"));
        assert!(first.contains("<a href=\"Second Second to Last.html\">Next Person</a>"));

        let index = sink.contents_of("index.html").unwrap();
        let first_pos = index.find("First Last.html").unwrap();
        let second_pos = index.find("Second Second to Last.html").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn records_are_ordered_by_last_name_before_rendering() {
        let mut rows = sample_rows();
        rows.swap(1, 2);
        let source = StubSource::new(rows);
        let sink = MemorySink::new();

        SurveyPipeline::new(&source, &sink)
            .run(URL, RANGE, IMAGE_COLUMN)
            .unwrap();

        // "Last" sorts before "Second to Last" regardless of row order.
        assert_eq!(
            sink.file_names(),
            [
                "style.css",
                "First Last.html",
                "Second Second to Last.html",
                "index.html"
            ]
        );
    }

    #[test]
    fn validation_failure_stops_the_run_before_retrieval() {
        let source = StubSource::new(sample_rows());
        let sink = MemorySink::new();

        let err = SurveyPipeline::new(&source, &sink)
            .run("https://facebook.com", RANGE, IMAGE_COLUMN)
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(source.requests.borrow().is_empty());
        assert!(sink.file_names().is_empty());
    }

    #[test]
    fn empty_retrieved_range_is_an_error() {
        let source = StubSource::new(Vec::new());
        let sink = MemorySink::new();

        let err = SurveyPipeline::new(&source, &sink)
            .run(URL, RANGE, IMAGE_COLUMN)
            .unwrap_err();

        assert!(matches!(err, Error::EmptyRange));
        assert!(sink.file_names().is_empty());
    }
}

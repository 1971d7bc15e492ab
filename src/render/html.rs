//! Pure HTML builders for the profile pages, the directory page, and the
//! shared stylesheet. No I/O here; the sink writes what these return.

use crate::person::PersonRecord;

pub const STYLESHEET_NAME: &str = "style.css";
pub const INDEX_NAME: &str = "index.html";

pub const STYLESHEET: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 48em; }
img { max-height: 12em; }
table h1 { margin-left: 0.5em; }
a { color: #1a5276; }
";

/// Render one profile page. `next` is the record following this one in the
/// ordered set; the last page carries no navigation link.
pub fn person_page(person: &PersonRecord, next: Option<&PersonRecord>) -> String {
    let display = person.display_name();
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n");
    page.push_str(&format!(
        "<head><title>{display} Profile</title>\
         <link rel=\"stylesheet\" type=\"text/css\" href=\"{STYLESHEET_NAME}\"></head>\n"
    ));
    page.push_str("<body>\n");
    page.push_str(&format!(
        "<table><tr><td><img src=\"{}\"></td><td><h1>{display}</h1></td></tr></table>\n",
        person.image_link()
    ));
    if let Some(next) = next {
        page.push_str(&format!(
            "<a href=\"{}\">Next Person</a><br>\n",
            next.file_name()
        ));
    }
    for (label, value) in person.fields() {
        if let Some(line) = field_line(label, value) {
            page.push_str(&line);
            page.push('\n');
        }
    }
    page.push_str("</body>\n</html>\n");
    page
}

/// One rendered survey answer, or `None` when the value is empty or "N/A"
/// (any case). A label already ending with a colon is reused as-is, so no
/// line ever carries a doubled colon.
pub fn field_line(label: &str, value: &str) -> Option<String> {
    if value.is_empty() || value.eq_ignore_ascii_case("N/A") {
        return None;
    }
    let line = if label.ends_with(':') {
        format!("<b>{label} </b>{value}<br>")
    } else {
        format!("<b>{label}: </b>{value}<br>")
    };
    Some(line)
}

/// The directory page: one link per profile, in the order given.
pub fn index_page(records: &[PersonRecord]) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n");
    page.push_str(&format!(
        "<head><title>Directory</title>\
         <link rel=\"stylesheet\" type=\"text/css\" href=\"{STYLESHEET_NAME}\"></head>\n"
    ));
    page.push_str("<body>\n<h1>Directory</h1>\n<ul>\n");
    for person in records {
        page.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            person.file_name(),
            person.display_name()
        ));
    }
    page.push_str("</ul>\n</body>\n</html>\n");
    page
}

//! The per-person record built from one spreadsheet row, and the name
//! resolution that derives its display name and file name.

use unicode_normalization::UnicodeNormalization;

pub const GIVEN_FIRST_NAME_KEY: &str = "Given First Name";
pub const FIRST_NAME_KEY: &str = "First Name";
pub const LAST_NAME_KEY: &str = "Last Name";
pub const PREFERRED_NAME_KEY: &str = "Preferred First Name";

/// Survey answer meaning "my preferred name is my given name".
const SAME: &str = "Same";

/// One person's survey responses: the field values keyed by header, in
/// header column order, plus the image link extracted from the designated
/// image column. Immutable after construction; the display name and file
/// name are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Header-ordered (label, value) pairs. Duplicate headers overwrite the
    /// value in place, keeping the first position, so labels are unique.
    fields: Vec<(String, String)>,
    image_link: String,
}

impl PersonRecord {
    pub(crate) fn new(fields: Vec<(String, String)>, image_link: String) -> Self {
        Self { fields, image_link }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_str())
    }

    /// Field (label, value) pairs in header column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn image_link(&self) -> &str {
        &self.image_link
    }

    /// `"{first name part} {last name}"`, where the first name part honors
    /// the person's preferred name. Ingestion guarantees the name columns
    /// are present.
    pub fn display_name(&self) -> String {
        let (first, last) = self.resolve_name();
        format!("{first} {last}")
    }

    /// The display name plus the `.html` extension.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.display_name())
    }

    fn resolve_name(&self) -> (&str, &str) {
        let raw_first = self
            .get(GIVEN_FIRST_NAME_KEY)
            .or_else(|| self.get(FIRST_NAME_KEY))
            .unwrap_or_default();
        let last = self.get(LAST_NAME_KEY).unwrap_or_default();
        let first = match self.get(PREFERRED_NAME_KEY) {
            None => raw_first,
            Some(preferred) if keeps_given_name(raw_first, preferred) => raw_first,
            Some(preferred) => preferred_name_part(preferred),
        };
        (first, last)
    }
}

/// A preferred name matching the given name (any case) or the literal
/// "Same" means the given name is used verbatim.
fn keeps_given_name(raw_first: &str, preferred: &str) -> bool {
    preferred.eq_ignore_ascii_case(raw_first) || preferred.eq_ignore_ascii_case(SAME)
}

/// Survey answers like "Liz/Elizabeth" or "Liz or Elizabeth" list
/// alternatives; the part before the first separator wins. The "or" match
/// is a raw substring search, so a preferred name carrying those letters
/// inside a word ("Theodore") is truncated there too.
fn preferred_name_part(preferred: &str) -> &str {
    if let Some(idx) = preferred.find('/') {
        &preferred[..idx]
    } else if let Some(idx) = preferred.find("or") {
        preferred[..idx].trim()
    } else {
        preferred
    }
}

/// NFD-decompose the value and drop every non-ASCII character, so "Zoë"
/// becomes "Zoe". Applied to every non-image cell during ingestion.
pub(crate) fn normalize_ascii(value: &str) -> String {
    value.nfd().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_NAME: &str = "First";
    const LAST_NAME: &str = "Last";

    fn record(preferred: Option<&str>) -> PersonRecord {
        let mut fields = vec![
            (GIVEN_FIRST_NAME_KEY.to_string(), FIRST_NAME.to_string()),
            (LAST_NAME_KEY.to_string(), LAST_NAME.to_string()),
        ];
        if let Some(preferred) = preferred {
            fields.push((PREFERRED_NAME_KEY.to_string(), preferred.to_string()));
        }
        PersonRecord::new(fields, String::new())
    }

    #[test]
    fn file_name_is_display_name_plus_extension() {
        let person = record(Some(FIRST_NAME));
        assert_eq!(person.display_name(), "First Last");
        assert_eq!(person.file_name(), "First Last.html");
    }

    #[test]
    fn uses_preferred_name_when_different() {
        let person = record(Some("Preferred"));
        assert_eq!(person.file_name(), "Preferred Last.html");
    }

    #[test]
    fn uses_given_name_when_preferred_is_literal_same() {
        let person = record(Some("Same"));
        assert_eq!(person.file_name(), "First Last.html");

        let person = record(Some("same"));
        assert_eq!(person.file_name(), "First Last.html");
    }

    #[test]
    fn preferred_comparison_is_case_insensitive() {
        let person = record(Some("first"));
        // The given name's own casing wins, not the preferred spelling.
        assert_eq!(person.file_name(), "First Last.html");
    }

    #[test]
    fn uses_given_name_when_preferred_is_absent() {
        let person = record(None);
        assert_eq!(person.display_name(), "First Last");
    }

    #[test]
    fn falls_back_to_first_name_key() {
        let fields = vec![
            (FIRST_NAME_KEY.to_string(), FIRST_NAME.to_string()),
            (LAST_NAME_KEY.to_string(), LAST_NAME.to_string()),
        ];
        let person = PersonRecord::new(fields, String::new());
        assert_eq!(person.file_name(), "First Last.html");
    }

    #[test]
    fn preferred_with_slash_keeps_text_before_it() {
        let person = record(Some("Liz/Elizabeth"));
        assert_eq!(person.display_name(), "Liz Last");
    }

    #[test]
    fn preferred_with_or_keeps_trimmed_text_before_it() {
        let person = record(Some("Liz or Elizabeth"));
        assert_eq!(person.display_name(), "Liz Last");
    }

    #[test]
    fn slash_takes_precedence_over_or() {
        let person = record(Some("Dora/Theodora"));
        assert_eq!(person.display_name(), "Dora Last");
    }

    #[test]
    fn or_match_is_a_raw_substring_search() {
        // "Theodore" contains the letters "or" mid-word and is truncated
        // there. Deliberate: this pins the historical behavior.
        let person = record(Some("Theodore"));
        assert_eq!(person.display_name(), "Theod Last");
    }

    #[test]
    fn resolution_is_idempotent() {
        let person = record(Some("Liz or Elizabeth"));
        assert_eq!(person.display_name(), person.display_name());
    }

    #[test]
    fn normalize_ascii_strips_diacritics() {
        assert_eq!(normalize_ascii("Zoë"), "Zoe");
        assert_eq!(normalize_ascii("José Núñez"), "Jose Nunez");
        assert_eq!(normalize_ascii("plain"), "plain");
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

const NUMBER_WIDTH: usize = 5;

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[/\\:*?"<>|]"#).unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Number and title of a single decision record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordName {
    pub number: usize,
    pub title: String,
}

impl RecordName {
    pub fn new(number: usize, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }

    /// Zero padded to five digits. Larger numbers render at full width.
    pub fn padded_number(&self) -> String {
        format!("{:0width$}", self.number, width = NUMBER_WIDTH)
    }

    pub fn heading(&self) -> String {
        format!("{} - {}", self.padded_number(), self.title)
    }

    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.padded_number(), sanitize_title(&self.title))
    }
}

/// Strip `/ \ : * ? " < > |` and turn each whitespace run into a single hyphen.
pub fn sanitize_title(title: &str) -> String {
    let stripped = UNSAFE_CHARS.replace_all(title, "");
    WHITESPACE_RUN.replace_all(&stripped, "-").into_owned()
}

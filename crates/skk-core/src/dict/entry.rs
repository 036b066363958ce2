/// One candidate of a dictionary line, e.g. `送;send` in `おくr /送;send/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub annotation: Option<String>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(text: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: Some(annotation.into()),
        }
    }
}

/// All candidates recorded for one reading, in dictionary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub reading: String,
    pub words: Vec<Word>,
}

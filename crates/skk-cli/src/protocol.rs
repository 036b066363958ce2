//! Request and response shapes for the line protocol.
//!
//! JSON mode reads `{"method": "...", "text": "..."}` per line and answers
//! `{"status":"OK","result":[...]}` or `{"status":"NG","result":"<error>"}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    RawText(String),
    Structured { method: String, text: String },
}

#[derive(Deserialize)]
struct StructuredRequest {
    #[serde(default)]
    method: String,
    #[serde(default)]
    text: String,
}

impl Request {
    /// Parse one JSON request line. Missing fields are empty strings.
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        let req: StructuredRequest = serde_json::from_str(line)?;
        Ok(Request::Structured {
            method: req.method,
            text: req.text,
        })
    }

    /// The romaji payload to convert.
    pub fn text(&self) -> &str {
        match self {
            Request::RawText(text) | Request::Structured { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result")]
pub enum Response {
    #[serde(rename = "OK")]
    Ok(Vec<String>),
    #[serde(rename = "NG")]
    Error(String),
}

//! The request loop: one line in, one response out.

use std::io::{BufRead, Write};

use tracing::debug;

use skk_core::candidates::convert_line;
use skk_core::dict::Dictionary;
use skk_core::settings::CandidateSettings;

use crate::protocol::{Request, Response};
use crate::CliError;

const PROMPT: &str = "> ";
const EMPTY_INPUT: &str = "empty input";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One candidate per line.
    Plain,
    /// One JSON response object per request line.
    Json,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub mode: OutputMode,
    /// Print `> ` before each read (plain mode only).
    pub prompt: bool,
    pub candidates: CandidateSettings,
}

/// Serve requests from `input` until end of file.
pub fn run<R: BufRead, W: Write>(
    dict: &dyn Dictionary,
    options: &Options,
    mut input: R,
    mut output: W,
) -> Result<(), CliError> {
    let mut line = String::new();
    loop {
        if options.mode == OutputMode::Plain && options.prompt {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match options.mode {
            OutputMode::Json => {
                let response = match Request::from_json(line) {
                    Ok(request) => respond(dict, options, &request),
                    Err(e) => {
                        debug!(error = %e, "malformed request");
                        Response::Error(e.to_string())
                    }
                };
                serde_json::to_writer(&mut output, &response)?;
                output.write_all(b"\n")?;
            }
            OutputMode::Plain => {
                let request = Request::RawText(line.to_string());
                if let Response::Ok(candidates) = respond(dict, options, &request) {
                    for candidate in candidates {
                        writeln!(output, "{candidate}")?;
                    }
                }
            }
        }
        output.flush()?;
    }
    Ok(())
}

fn respond(dict: &dyn Dictionary, options: &Options, request: &Request) -> Response {
    if let Request::Structured { method, .. } = request {
        debug!(%method, "request");
    }
    match convert_line(dict, request.text(), &options.candidates) {
        Some(candidates) => Response::Ok(candidates),
        None => Response::Error(EMPTY_INPUT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use skk_core::dict::SkkDictionary;

    use super::*;

    const DICT: &str = "\
;; okuri-ari entries.
おくr /送/贈/
;; okuri-nasi entries.
かんじ /漢字/感じ/
Tanaka /田中/
";

    fn make_test_dict() -> SkkDictionary {
        let mut dict = SkkDictionary::new();
        dict.load_str(DICT);
        dict
    }

    fn run_with(mode: OutputMode, prompt: bool, input: &str) -> String {
        let options = Options {
            mode,
            prompt,
            candidates: CandidateSettings::default(),
        };
        let mut out = Vec::new();
        run(&make_test_dict(), &options, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_one_candidate_per_line() {
        let out = run_with(OutputMode::Plain, false, "OkuRu\nKanji\n");
        assert_eq!(out, "送る\n贈る\nおくる\n漢字\n感じ\nかんじ\n");
    }

    #[test]
    fn plain_skips_empty_lines() {
        let out = run_with(OutputMode::Plain, false, "\nkanji\r\n\n");
        assert_eq!(out, "かんじ\n");
    }

    #[test]
    fn plain_prompt() {
        let out = run_with(OutputMode::Plain, true, "kanji\n");
        assert_eq!(out, "> かんじ\n> ");
    }

    #[test]
    fn plain_last_line_without_newline() {
        let out = run_with(OutputMode::Plain, false, "Tanaka");
        assert_eq!(out, "田中\nたなか\n");
    }

    #[test]
    fn json_ok_response() {
        let out = run_with(
            OutputMode::Json,
            false,
            "{\"method\":\"convert\",\"text\":\"OkuRu\"}\n",
        );
        assert_eq!(out, "{\"status\":\"OK\",\"result\":[\"送る\",\"贈る\",\"おくる\"]}\n");
    }

    #[test]
    fn json_malformed_request_continues() {
        let out = run_with(OutputMode::Json, false, "OkuRu\n{\"text\":\"kanji\"}\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("{\"status\":\"NG\",\"result\":\""));
        assert_eq!(lines[1], "{\"status\":\"OK\",\"result\":[\"かんじ\"]}");
    }

    #[test]
    fn json_empty_text() {
        let out = run_with(OutputMode::Json, true, "{\"text\":\"\"}\n");
        assert_eq!(out, "{\"status\":\"NG\",\"result\":\"empty input\"}\n");
    }
}

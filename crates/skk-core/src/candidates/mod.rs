//! Candidate generation for one line of SKK-style romaji input.
//!
//! `segment` cuts the line into case runs, `split_stem_okuri` separates the
//! converted prefix, stem and okuri, `plan` picks the dictionary searches,
//! and `assemble` merges their results.

use tracing::debug;

use crate::dict::Dictionary;
use crate::settings::CandidateSettings;

mod assemble;
mod dispatch;
mod segment;


pub use assemble::assemble;
pub use dispatch::{okuri_ari_key, plan, Plan, Query, Step};
pub use segment::{segment, split_stem_okuri, trim_trailing_vowel, SegmentedRequest, Shape};

/// Convert one input line into its candidate list.
///
/// Returns `None` for an empty line; otherwise the list is never empty.
pub fn convert_line(
    dict: &dyn Dictionary,
    line: &str,
    settings: &CandidateSettings,
) -> Option<Vec<String>> {
    if line.is_empty() {
        return None;
    }

    let runs = segment(line);
    let request = split_stem_okuri(&runs);
    let plan = plan(line, &request, settings);
    debug!(
        line,
        runs = runs.len(),
        prefix = %request.prefix,
        shape = ?request.shape(),
        "planned conversion"
    );

    Some(assemble(dict, &plan, &request.prefix, settings.max_results))
}

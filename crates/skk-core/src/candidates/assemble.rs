//! Merge dictionary results into one ordered candidate list.

use super::dispatch::{Plan, Query, Step};
use crate::dict::Dictionary;

/// Run the plan against `dict` and collect candidate strings.
///
/// Candidates keep step order, then dictionary order, then word order.
/// Okuri-ari words are wrapped as `prefix + word + okuri`; other words are
/// taken verbatim. The list is cut to `max_results` and falls back to the
/// plain reading when nothing was produced.
pub fn assemble(dict: &dyn Dictionary, plan: &Plan, prefix: &str, max_results: usize) -> Vec<String> {
    let mut candidates = Vec::new();

    for step in &plan.steps {
        match step {
            Step::Lookup(query) => {
                for entry in query.search(dict) {
                    for word in &entry.words {
                        candidates.push(match query {
                            Query::OkuriAri { okuri, .. } => format!("{prefix}{}{okuri}", word.text),
                            Query::OkuriNasi { .. } | Query::Prefix { .. } => word.text.clone(),
                        });
                    }
                }
            }
            Step::Reading => candidates.push(plan.reading.clone()),
        }
    }

    candidates.truncate(max_results);
    if candidates.is_empty() {
        candidates.push(plan.reading.clone());
    }
    candidates
}

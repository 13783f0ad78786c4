//! Method name resolution: `operationId`, then summary-derived candidates,
//! then a route-derived name.

use heck::{ToLowerCamelCase, ToPascalCase};

use super::HttpVerb;
use super::registry::NameRegistry;
use crate::parse::operation::Operation;

/// Summary-derived candidates are truncated to this length, at the last
/// space boundary, so that a sentence-long summary does not become a
/// sentence-long identifier.
const MAX_SUMMARY_NAME_LEN: usize = 40;

/// Resolve the base method name for an operation.
///
/// The returned candidate is not yet claimed; the caller claims it in the
/// run's [`NameRegistry`], which breaks residual collisions with a random
/// suffix.
pub fn resolve_method_name(
    operation: &Operation,
    verb: HttpVerb,
    path: &str,
    registry: &NameRegistry,
) -> String {
    if let Some(ref id) = operation.operation_id {
        return id.to_lower_camel_case();
    }

    if let Some(ref summary) = operation.summary {
        if let Some(name) = summary_candidate(summary, registry) {
            return name;
        }
    }

    route_to_name(verb, path)
}

/// Derive a candidate from a free-text summary.
///
/// Summaries of the form `"Deal: get current deals"` use the text after the
/// first colon; otherwise the whole summary with colons stripped. When the
/// colon-split candidate is already claimed elsewhere in the document, the
/// whole-summary fallback is preferred.
fn summary_candidate(summary: &str, registry: &NameRegistry) -> Option<String> {
    let colon_split = if summary.contains(':') && summary.split(' ').count() > 2 {
        summary.split(':').nth(1).unwrap_or(summary)
    } else {
        summary
    };
    let whole = summary.replace(':', "");

    let candidate = tidy(colon_split)?;
    if registry.contains(&candidate) {
        return tidy(&whole).or(Some(candidate));
    }
    Some(candidate)
}

/// Strip non-alphabetic characters (keeping word spaces), truncate at the
/// last space boundary, camel-case.
fn tidy(fragment: &str) -> Option<String> {
    let stripped: String = fragment
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();
    let mut trimmed = stripped.trim();

    if trimmed.len() > MAX_SUMMARY_NAME_LEN {
        let cut = &trimmed[..MAX_SUMMARY_NAME_LEN];
        trimmed = match cut.rfind(' ') {
            Some(boundary) => &cut[..boundary],
            None => cut,
        };
    }

    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lower_camel_case())
}

/// Derive a camelCase operation name from HTTP verb + path, the fallback
/// when an operation declares neither `operationId` nor a usable summary.
///
/// - `GET /deals` → `listDeals`
/// - `GET /deals/{dealId}` → `getDeal`
/// - `POST /deals` → `createDeals`
/// - `DELETE /lists/{id}` → `deleteList`
pub fn route_to_name(verb: HttpVerb, path: &str) -> String {
    let mut resource_parts: Vec<&str> = Vec::new();
    let mut ends_with_param = false;

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if segment.starts_with('{') && segment.ends_with('}') {
            ends_with_param = true;
        } else {
            resource_parts.push(segment);
            ends_with_param = false;
        }
    }

    let prefix = match verb {
        HttpVerb::Get if ends_with_param => "get",
        HttpVerb::Get => "list",
        HttpVerb::Post => "create",
        HttpVerb::Put => "update",
        HttpVerb::Patch => "patch",
        HttpVerb::Delete => "delete",
        HttpVerb::Head => "head",
        HttpVerb::Options => "options",
        HttpVerb::Trace => "trace",
    };

    if resource_parts.is_empty() {
        return prefix.to_string();
    }

    let mut pascal_parts = String::new();
    for (i, part) in resource_parts.iter().enumerate() {
        let is_last = i == resource_parts.len() - 1;
        let word = if is_last && ends_with_param {
            singularize(part)
        } else {
            (*part).to_string()
        };
        pascal_parts.push_str(&word.to_pascal_case());
    }

    format!("{prefix}{pascal_parts}")
}

/// Naive singularization: strips trailing 's' forms.
fn singularize(word: &str) -> String {
    if word.ends_with("ies") && word.len() > 3 {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with("ses") || word.ends_with("xes") || word.ends_with("zes") {
        word[..word.len() - 2].to_string()
    } else if word.ends_with('s') && !word.ends_with("ss") && word.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op_with(id: Option<&str>, summary: Option<&str>) -> Operation {
        Operation {
            operation_id: id.map(String::from),
            summary: summary.map(String::from),
            ..Operation::default()
        }
    }

    #[test]
    fn operation_id_wins() {
        let op = op_with(Some("getCurrentDeals"), Some("Deal: get current deals"));
        let registry = NameRegistry::new();
        assert_eq!(
            resolve_method_name(&op, HttpVerb::Get, "/deals", &registry),
            "getCurrentDeals"
        );
    }

    #[test]
    fn operation_id_is_camel_cased() {
        let op = op_with(Some("get-current_deals"), None);
        let registry = NameRegistry::new();
        assert_eq!(
            resolve_method_name(&op, HttpVerb::Get, "/deals", &registry),
            "getCurrentDeals"
        );
    }

    #[test]
    fn colon_summary_uses_text_after_the_colon() {
        let op = op_with(None, Some("Deal: get current deals"));
        let registry = NameRegistry::new();
        assert_eq!(
            resolve_method_name(&op, HttpVerb::Get, "/deals", &registry),
            "getCurrentDeals"
        );
    }

    #[test]
    fn claimed_colon_candidate_falls_back_to_whole_summary() {
        let op = op_with(None, Some("Deal: get current deals"));
        let mut registry = NameRegistry::new();
        registry.claim("getCurrentDeals").unwrap();
        assert_eq!(
            resolve_method_name(&op, HttpVerb::Get, "/deals", &registry),
            "dealGetCurrentDeals"
        );
    }

    #[test]
    fn short_colon_summary_is_used_whole() {
        // only one space: the colon is part of the phrase, not a prefix
        let op = op_with(None, Some("Run: everything"));
        let registry = NameRegistry::new();
        assert_eq!(
            resolve_method_name(&op, HttpVerb::Post, "/run", &registry),
            "runEverything"
        );
    }

    #[test]
    fn long_summary_is_cut_at_a_word_boundary() {
        let op = op_with(
            None,
            Some("Retrieve every currently available promotional deal for the user"),
        );
        let registry = NameRegistry::new();
        let name = resolve_method_name(&op, HttpVerb::Get, "/deals", &registry);
        assert_eq!(name, "retrieveEveryCurrentlyAvailable");
    }

    #[test]
    fn nonalphabetic_characters_are_stripped() {
        let op = op_with(None, Some("Fetch 3 deals (v2)"));
        let registry = NameRegistry::new();
        assert_eq!(
            resolve_method_name(&op, HttpVerb::Get, "/deals", &registry),
            "fetchDealsV"
        );
    }

    #[test]
    fn missing_id_and_summary_derives_from_route() {
        let op = op_with(None, None);
        let registry = NameRegistry::new();
        assert_eq!(
            resolve_method_name(&op, HttpVerb::Get, "/deals/{dealId}", &registry),
            "getDeal"
        );
    }

    #[test]
    fn route_names() {
        assert_eq!(route_to_name(HttpVerb::Get, "/deals"), "listDeals");
        assert_eq!(route_to_name(HttpVerb::Post, "/deals"), "createDeals");
        assert_eq!(route_to_name(HttpVerb::Delete, "/lists/{id}"), "deleteList");
        assert_eq!(
            route_to_name(HttpVerb::Get, "/users/{userId}/lists"),
            "listUsersLists"
        );
    }
}

//! Organizer attribution for feed entries.
//!
//! Entries are inconsistent about who arranges them. Some carry an
//! `ORGANIZER` property with a percent-encoded `CN`, most only mention a
//! nation somewhere in their text. [`resolve_organizer`] tries each source
//! in [`ORGANIZER_STRATEGIES`] order and stops at the first hit.

use studentlund_core::{Organizer, resolve_nation, title_case};
use tracing::trace;

use crate::error::{FeedError, FeedResult};
use crate::node::CalendarNode;

/// A single way of finding an organizer. `Ok(None)` passes to the next one.
pub type OrganizerStrategy = fn(&dyn CalendarNode) -> FeedResult<Option<Organizer>>;

/// Strategies in priority order. The last one always answers.
pub const ORGANIZER_STRATEGIES: &[(&str, OrganizerStrategy)] = &[
    ("organizer", from_organizer_property),
    ("summary", from_summary),
    ("description", from_description),
    ("location", from_location),
];

const MAILTO_PREFIX: &str = "MAILTO:";

/// Resolves the organizer of a calendar entry.
///
/// Returns an unresolved [`Organizer`] when nothing matches.
///
/// # Errors
///
/// Returns an `OrganizerDecode` error if the entry has an `ORGANIZER` whose
/// `CN` has a malformed `%` escape or does not decode to UTF-8.
pub fn resolve_organizer(entry: &dyn CalendarNode) -> FeedResult<Organizer> {
    for (source, strategy) in ORGANIZER_STRATEGIES {
        if let Some(organizer) = strategy(entry)? {
            trace!(source, name = %organizer.name, "resolved organizer");
            return Ok(organizer);
        }
    }
    Ok(Organizer::default())
}

/// Uses the `ORGANIZER` property when present, even if its name is empty.
fn from_organizer_property(entry: &dyn CalendarNode) -> FeedResult<Option<Organizer>> {
    let Some(property) = entry.child_by_name("ORGANIZER") else {
        return Ok(None);
    };

    let encoded = property.parameter("CN", "");
    if !has_valid_escapes(&encoded) {
        return Err(FeedError::organizer_decode(format!(
            "malformed escape in organizer name {encoded:?}"
        )));
    }
    let decoded = urlencoding::decode(&encoded).map_err(|e| {
        FeedError::organizer_decode(format!("invalid organizer name {encoded:?}")).with_source(e)
    })?;
    let unquoted = decoded
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(&*decoded);
    let name = title_case(unquoted);

    Ok(Some(Organizer::new(name, strip_mailto(property.value()))))
}

/// Every `%` must start a two-digit hex escape.
fn has_valid_escapes(encoded: &str) -> bool {
    let bytes = encoded.as_bytes();
    encoded.match_indices('%').all(|(i, _)| {
        bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

fn from_summary(entry: &dyn CalendarNode) -> FeedResult<Option<Organizer>> {
    Ok(nation_in(entry, "SUMMARY"))
}

fn from_description(entry: &dyn CalendarNode) -> FeedResult<Option<Organizer>> {
    Ok(nation_in(entry, "DESCRIPTION"))
}

fn from_location(entry: &dyn CalendarNode) -> FeedResult<Option<Organizer>> {
    let name = resolve_nation(&entry.prop_string("LOCATION", ""));
    Ok(Some(Organizer::named(name)))
}

fn nation_in(entry: &dyn CalendarNode, property: &str) -> Option<Organizer> {
    let name = resolve_nation(&entry.prop_string(property, ""));
    (!name.is_empty()).then(|| Organizer::named(name))
}

/// Strips a leading `MAILTO:` (exact case) from an organizer address.
pub fn strip_mailto(address: &str) -> &str {
    address.strip_prefix(MAILTO_PREFIX).unwrap_or(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedErrorCode;
    use crate::node::memory::MemoryNode;

    mod organizer_property {
        use super::*;

        #[test]
        fn decodes_and_title_cases_cn() {
            let entry = MemoryNode::new()
                .with("ORGANIZER", "MAILTO:info@lundsnation.se")
                .with_param("ORGANIZER", "CN", "lunds%20nation");

            assert_eq!(
                resolve_organizer(&entry).unwrap(),
                Organizer::new("Lunds Nation", "info@lundsnation.se")
            );
        }

        #[test]
        fn strips_surrounding_quotes() {
            let entry = MemoryNode::new()
                .with("ORGANIZER", "MAILTO:kurator@hallandsnation.se")
                .with_param("ORGANIZER", "CN", "%22Hallands%20Nation%22");

            assert_eq!(resolve_organizer(&entry).unwrap().name, "Hallands Nation");
        }

        #[test]
        fn wins_over_text_fields() {
            let entry = MemoryNode::new()
                .with("SUMMARY", "Pub på Kalmar nation")
                .with("ORGANIZER", "MAILTO:info@smalands.org")
                .with_param("ORGANIZER", "CN", "Smålands%20Nation");

            assert_eq!(resolve_organizer(&entry).unwrap().name, "Smålands Nation");
        }

        #[test]
        fn empty_cn_is_returned_without_fallback() {
            let entry = MemoryNode::new()
                .with("SUMMARY", "Pub på Kalmar nation")
                .with("ORGANIZER", "MAILTO:info@kalmarnation.se");

            assert_eq!(
                resolve_organizer(&entry).unwrap(),
                Organizer::new("", "info@kalmarnation.se")
            );
        }

        #[test]
        fn invalid_utf8_fails_to_decode() {
            let entry = MemoryNode::new()
                .with("ORGANIZER", "MAILTO:x@example.com")
                .with_param("ORGANIZER", "CN", "Lunds%FFNation");

            let err = resolve_organizer(&entry).unwrap_err();
            assert_eq!(err.code(), FeedErrorCode::OrganizerDecode);
        }

        #[test]
        fn malformed_escapes_fail_to_decode() {
            for cn in ["Lunds%ZZNation", "Lunds%", "Lunds%2", "%%20Lunds"] {
                let entry = MemoryNode::new()
                    .with("ORGANIZER", "MAILTO:x@example.com")
                    .with_param("ORGANIZER", "CN", cn);

                let err = resolve_organizer(&entry).unwrap_err();
                assert_eq!(err.code(), FeedErrorCode::OrganizerDecode, "CN {cn:?}");
            }
        }

        #[test]
        fn unbalanced_quote_is_kept() {
            let entry = MemoryNode::new()
                .with("ORGANIZER", "MAILTO:x@example.com")
                .with_param("ORGANIZER", "CN", "%22Lunds%20Nation");

            assert_eq!(resolve_organizer(&entry).unwrap().name, "\"Lunds Nation");
        }

        #[test]
        fn only_one_quote_layer_is_stripped() {
            let entry = MemoryNode::new()
                .with("ORGANIZER", "MAILTO:x@example.com")
                .with_param("ORGANIZER", "CN", "%22%22Lunds%22%22");

            assert_eq!(resolve_organizer(&entry).unwrap().name, "\"Lunds\"");
        }
    }

    mod text_fallbacks {
        use super::*;

        #[test]
        fn summary() {
            let entry = MemoryNode::new().with("SUMMARY", "Fest hos Lunds Nation");
            assert_eq!(
                resolve_organizer(&entry).unwrap(),
                Organizer::named("Lunds Nation")
            );
        }

        #[test]
        fn summary_before_description() {
            let entry = MemoryNode::new()
                .with("SUMMARY", "Lunch på Malmö nation")
                .with("DESCRIPTION", "Arrangeras av Göteborgs nation");
            assert_eq!(resolve_organizer(&entry).unwrap().name, "Malmö Nation");
        }

        #[test]
        fn description() {
            let entry = MemoryNode::new()
                .with("SUMMARY", "Sittning")
                .with("DESCRIPTION", "  Välkommen till Wermlands nation!  ");
            assert_eq!(resolve_organizer(&entry).unwrap().name, "Wermlands Nation");
        }

        #[test]
        fn location() {
            let entry = MemoryNode::new()
                .with("SUMMARY", "Sittning")
                .with("LOCATION", "Kristianstads Nation\\, Tornavägen 3");
            assert_eq!(
                resolve_organizer(&entry).unwrap().name,
                "Kristianstads Nation"
            );
        }

        #[test]
        fn unresolved_when_nothing_matches() {
            let entry = MemoryNode::new()
                .with("SUMMARY", "Föreläsning")
                .with("LOCATION", "AF-borgen");
            assert!(resolve_organizer(&entry).unwrap().is_unresolved());
        }
    }

    mod mailto {
        use super::*;

        #[test]
        fn strips_exact_prefix() {
            assert_eq!(strip_mailto("MAILTO:a@b.se"), "a@b.se");
        }

        #[test]
        fn keeps_other_casing() {
            assert_eq!(strip_mailto("mailto:a@b.se"), "mailto:a@b.se");
        }

        #[test]
        fn keeps_plain_address() {
            assert_eq!(strip_mailto("a@b.se"), "a@b.se");
            assert_eq!(strip_mailto(""), "");
        }
    }
}

//! Nation name extraction from free text.
//!
//! Feed entries rarely carry a structured organizer, so the organizing
//! nation is recovered from summaries, descriptions and locations:
//!
//! ```
//! use studentlund_core::nation::resolve_nation;
//!
//! assert_eq!(resolve_nation("Sittning på lunds nation"), "Lunds Nation");
//! assert_eq!(resolve_nation("Ingen match här"), "");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Matches `<Name> nation` or `<Name> nationen`, the inflection in any case.
static NATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\p{L}+) ((?i:nation(?:en)?))").expect("Invalid nation regex")
});

const BLEKINGSKA: &str = "Blekingska Nationen";
const VASTGOTA: &str = "Västgöta Nation";

/// Extracts the name of an organizing nation from `text`.
///
/// Returns an empty string when nothing matches. Blekingska and Västgöta
/// (often written "VG") don't follow the `<Name> Nation` pattern and are
/// checked first.
pub fn resolve_nation(text: &str) -> String {
    if text.contains("Blekingska") {
        return BLEKINGSKA.to_string();
    }
    if text.contains("VG") {
        return VASTGOTA.to_string();
    }

    NATION_REGEX
        .captures(text)
        .map(|caps| format!("{} {}", title_case(&caps[1]), title_case(&caps[2])))
        .unwrap_or_default()
}

/// Uppercases the first letter of every word and lowercases the rest.
///
/// A word starts at the beginning of the text or after any character that
/// is not alphanumeric.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }

    out
}

//! Sequential document number allocation.
//!
//! A number is `<prefix><integer>`. The next number is one above the
//! highest integer found among existing documents of the same kind.
//! Numbers whose remainder does not start with a digit are skipped.
//!
//! Under [`PrefixMatch::Configured`] the first occurrence of the prefix is
//! removed wherever it appears, so `2024RE-5` reads as 20245 under `RE-`.
//! [`PrefixMatch::LeadingNonDigits`] only removes a leading prefix and
//! otherwise drops everything before the first digit.

use billbook_shared::PrefixMatch;

use super::types::NumberedDocument;

/// Numbering rules for one document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numbering<'a> {
    prefix: &'a str,
    prefix_match: PrefixMatch,
}

impl<'a> Numbering<'a> {
    /// Creates numbering rules for the given prefix.
    #[must_use]
    pub const fn new(prefix: &'a str, prefix_match: PrefixMatch) -> Self {
        Self {
            prefix,
            prefix_match,
        }
    }

    /// Returns the configured prefix.
    #[must_use]
    pub const fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// Extracts the sequence integer from a document number.
    ///
    /// Returns `None` when the remainder after prefix removal has no
    /// leading digits. Such numbers take no part in allocation.
    #[must_use]
    pub fn sequence_of(&self, number: &str) -> Option<u64> {
        match self.prefix_match {
            PrefixMatch::Configured => leading_integer(&number.replacen(self.prefix, "", 1)),
            PrefixMatch::LeadingNonDigits => leading_integer(
                number
                    .strip_prefix(self.prefix)
                    .unwrap_or_else(|| number.trim_start_matches(|c: char| !c.is_ascii_digit())),
            ),
        }
    }

    /// Returns the highest sequence integer among `numbers`, or 0.
    #[must_use]
    pub fn highest<'n>(&self, numbers: impl IntoIterator<Item = &'n str>) -> u64 {
        numbers
            .into_iter()
            .filter_map(|number| self.sequence_of(number))
            .fold(0, u64::max)
    }

    /// Formats the number following the highest one in `numbers`.
    #[must_use]
    pub fn next<'n>(&self, numbers: impl IntoIterator<Item = &'n str>) -> String {
        self.format(self.highest(numbers).saturating_add(1))
    }

    /// Formats the number following the highest one among `documents`.
    #[must_use]
    pub fn next_for<D: NumberedDocument>(&self, documents: &[D]) -> String {
        self.next(documents.iter().map(|document| document.number()))
    }

    /// Formats `sequence` with the prefix.
    #[must_use]
    pub fn format(&self, sequence: u64) -> String {
        format!("{}{sequence}", self.prefix)
    }
}

/// Parses the run of ASCII digits at the start of `s`, after leading
/// whitespace. Trailing text is ignored.
fn leading_integer(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

//! Detected spans and the interval merge that turns raw matches into them.

use std::ops::Range;

use crate::pattern::{Category, CategorySet};

/// A region of text recognized as PII.
///
/// Offsets are byte indices into the scanned text and always fall on `char`
/// boundaries. `categories` lists every category whose matches contributed to
/// the region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    pub start: usize,
    pub end: usize,
    pub categories: CategorySet,
}

impl Detection {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The detected text, sliced out of the text that was scanned.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not the text this detection came from and the
    /// offsets are out of bounds.
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.range()]
    }
}

/// Collapses raw per-category matches into disjoint, ordered detections.
///
/// Matches are sorted by start offset; any match that overlaps or touches the
/// current detection extends it and adds its category.
pub(crate) fn merge(mut matches: Vec<(Range<usize>, Category)>) -> Vec<Detection> {
    matches.sort_by_key(|(range, _)| (range.start, range.end));

    let mut merged: Vec<Detection> = Vec::with_capacity(matches.len());
    for (range, category) in matches {
        match merged.last_mut() {
            Some(current) if range.start <= current.end => {
                current.end = current.end.max(range.end);
                current.categories.insert(category);
            }
            _ => merged.push(Detection {
                start: range.start,
                end: range.end,
                categories: category.into(),
            }),
        }
    }
    merged
}

//! Merging tagged tokens into display segments.

use serde::{Deserialize, Serialize};

use align::Tag;

/// A maximal run of same-tagged tokens from one side, merged into one span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub tag: Tag,
}

impl Segment {
    pub fn is_same(&self) -> bool {
        self.tag == Tag::Same
    }
}

/// Segments for both sides of a comparison.
///
/// The two lists are independent views of the same alignment: the N-th
/// segment of side A does not correspond to the N-th segment of side B.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegments {
    pub segments_a: Vec<Segment>,
    pub segments_b: Vec<Segment>,
}

/// Folds tagged tokens into segments.
///
/// Adjacent entries with the same tag are concatenated in order; a tag change
/// starts a new segment. No entries yield no segments.
///
/// ```
/// use variant_diff::{build_segments, Tag};
///
/// let segments = build_segments([
///     ("私は", Tag::Same),
///     (" ", Tag::Same),
///     ("Rust", Tag::Different),
/// ]);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].text, "私は ");
/// assert_eq!(segments[1].text, "Rust");
/// ```
pub fn build_segments<'a, I>(tagged: I) -> Vec<Segment>
where
    I: IntoIterator<Item = (&'a str, Tag)>,
{
    let mut segments: Vec<Segment> = Vec::new();
    for (text, tag) in tagged {
        match segments.last_mut() {
            Some(last) if last.tag == tag => last.text.push_str(text),
            _ => segments.push(Segment {
                text: text.to_string(),
                tag,
            }),
        }
    }
    segments
}

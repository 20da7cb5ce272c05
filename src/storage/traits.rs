//! Storage traits and record types

/// A fragment recorded in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRecord {
    /// Final URL of the first page the fragment was found on
    pub source_url: String,

    /// Serialized fragment markup, as found (not normalized)
    pub body: String,
}

/// Normalizes a serialized fragment for duplicate detection
///
/// Newlines are the only difference ignored: two fragments that differ only
/// in line breaks are the same fragment.
///
/// # Examples
///
/// ```
/// use svg_sweep::storage::normalize_fragment;
///
/// assert_eq!(normalize_fragment("<svg>\n<path></path>\n</svg>"), "<svg><path></path></svg>");
/// ```
pub fn normalize_fragment(body: &str) -> String {
    body.replace('\n', "")
}

/// Trait for fragment store implementations
///
/// A store holds at most one record per distinct normalized body. The first
/// insertion wins and later duplicates leave it untouched.
pub trait FragmentStore {
    /// Records a fragment unless one with the same normalized body exists
    ///
    /// # Arguments
    ///
    /// * `normalized` - The body after [`normalize_fragment`]
    /// * `source_url` - Final URL of the page the fragment was found on
    /// * `body` - The body as serialized, kept verbatim for the report
    ///
    /// # Returns
    ///
    /// * `true` - The fragment was new and has been recorded
    /// * `false` - An equal fragment was already recorded; nothing changed
    fn insert_if_new(&mut self, normalized: &str, source_url: &str, body: &str) -> bool;

    /// All records in insertion order
    fn snapshot(&self) -> Vec<FragmentRecord>;

    /// Number of records held
    fn len(&self) -> usize;

    /// Returns true if nothing has been recorded
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

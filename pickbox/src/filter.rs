//! Case-insensitive substring filtering.

/// An item that passed the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
}

/// Keep the labels containing `query`, ignoring case.
///
/// Matches come back in input order; there is no ranking. An empty query
/// matches everything.
///
/// # Example
///
/// ```
/// use pickbox::substring_filter;
///
/// let labels = ["Apple", "Banana", "Pineapple"];
/// let indices: Vec<usize> = substring_filter("APP", &labels)
///     .into_iter()
///     .map(|m| m.index)
///     .collect();
/// assert_eq!(indices, vec![0, 2]);
/// ```
pub fn substring_filter<S: AsRef<str>>(query: &str, labels: &[S]) -> Vec<FilterMatch> {
    let needle = query.to_lowercase();

    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| needle.is_empty() || label.as_ref().to_lowercase().contains(&needle))
        .map(|(index, _)| FilterMatch { index })
        .collect()
}

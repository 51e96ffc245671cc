/// Case-insensitive substring match against any of `fields`.
/// An empty (or whitespace-only) term matches everything.
pub fn matches_term<'a>(fields: impl IntoIterator<Item = &'a str>, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Returns the matching items as a new list; `items` is left untouched.
pub fn filter_by_term<T, F>(items: &[T], term: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<&str>,
{
    items
        .iter()
        .filter(|item| matches_term(fields(item), term))
        .cloned()
        .collect()
}

//! Safe contiguous windowing of parallel arrays.

/// Returns the sub-slice `[start, min(start + len, values.len()))`.
///
/// A start at or past the end yields an empty slice rather than a panic.
/// Slicing several parallel arrays with the same start and length keeps
/// them index-aligned.
pub fn window<T>(values: &[T], start: usize, len: usize) -> &[T] {
    if start >= values.len() {
        return &[];
    }
    let end = values.len().min(start.saturating_add(len));
    &values[start..end]
}

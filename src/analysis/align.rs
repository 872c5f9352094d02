//! Label-axis alignment across locations.

use std::collections::HashSet;

/// Merges several timestamp sequences into one shared label axis.
///
/// Sequences are concatenated in argument order, deduplicated keeping the
/// first occurrence, and truncated to `cap` entries. The result is not
/// re-sorted: when the inputs interleave differently the axis can be
/// non-monotonic. Downstream chart consumers expect exactly this order.
pub fn align_timestamps(sequences: &[&[String]], cap: usize) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::new();

    for seq in sequences {
        for raw in *seq {
            if seen.insert(raw.as_str()) {
                merged.push(raw.clone());
            }
        }
    }

    merged.truncate(cap);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(raws: &[&str]) -> Vec<String> {
        raws.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let a = seq(&["a", "b", "c"]);
        let b = seq(&["b", "d"]);
        let result = align_timestamps(&[&a, &b], 10);
        assert_eq!(result, seq(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_truncates_to_cap() {
        let a = seq(&["a", "b", "c"]);
        let b = seq(&["b", "d"]);
        let result = align_timestamps(&[&a, &b], 3);
        assert_eq!(result, seq(&["a", "b", "c"]));
    }

    #[test]
    fn test_duplicates_within_one_sequence() {
        let a = seq(&["a", "a", "b"]);
        let result = align_timestamps(&[&a], 10);
        assert_eq!(result, seq(&["a", "b"]));
    }

    #[test]
    fn test_order_is_concatenation_not_chronology() {
        // "b" leads because the first sequence leads, even though "a"
        // sorts earlier.
        let a = seq(&["b"]);
        let b = seq(&["a", "c"]);
        let result = align_timestamps(&[&a, &b], 10);
        assert_eq!(result, seq(&["b", "a", "c"]));
    }

    #[test]
    fn test_single_sequence_passthrough() {
        let a = seq(&["x", "y"]);
        assert_eq!(align_timestamps(&[&a], 10), seq(&["x", "y"]));
    }

    #[test]
    fn test_no_sequences() {
        assert!(align_timestamps(&[], 10).is_empty());
    }
}

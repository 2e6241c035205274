//! Levenshtein edit distance
//!
//! Insertions, deletions and substitutions all cost 1. Characters are
//! compared ordinally as Unicode scalar values, with no locale awareness.

/// Compute the edit distance between two strings.
///
/// Returns the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`. If either side is empty the
/// result is the other side's length.
///
/// Runs in O(len(a) * len(b)) time, keeping two rows of the cost table.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

fn distance_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // prev holds row i-1 of the table, curr is filled as row i
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity between two strings as a percentage in `[0, 100]`.
///
/// `100 - distance / max(len(a), len(b)) * 100`. Two empty strings are
/// identical and score 100.
pub fn similarity_score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 100.0;
    }

    let percentage_difference = (distance_chars(&a, &b) as f64 / max_len as f64) * 100.0;
    100.0 - percentage_difference
}

/// True when `similarity_score(a, b)` reaches `threshold`.
#[inline]
pub fn is_approximately_equal(a: &str, b: &str, threshold: f64) -> bool {
    similarity_score(a, b) >= threshold
}

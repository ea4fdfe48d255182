//! Counting utilities shared by the BLEU and ROUGE-L calculators.

use std::collections::HashMap;

pub type NgramCounts<'a> = HashMap<&'a [String], usize>;

/// Count every contiguous `n`-token window of `tokens`.
///
/// Empty when `n` is zero or longer than the token sequence.
pub fn count_ngrams(tokens: &[String], n: usize) -> NgramCounts<'_> {
    let mut counts = HashMap::new();
    if n == 0 || tokens.len() < n {
        return counts;
    }

    for window in tokens.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }
    counts
}

/// For each `n`-gram, the highest count it reaches in any single reference.
pub fn max_reference_counts<'a, R>(references: R, n: usize) -> NgramCounts<'a>
where
    R: IntoIterator<Item = &'a [String]>,
{
    let mut max_counts: NgramCounts<'a> = HashMap::new();
    for reference in references {
        for (ngram, count) in count_ngrams(reference, n) {
            let entry = max_counts.entry(ngram).or_insert(0);
            *entry = (*entry).max(count);
        }
    }
    max_counts
}

/// Clip hypothesis counts against reference maxima.
///
/// Returns `(clipped, total)` where `total` is the raw hypothesis n-gram count.
pub fn clipped_count(hypothesis: &NgramCounts<'_>, references: &NgramCounts<'_>) -> (u64, u64) {
    let mut clipped = 0u64;
    let mut total = 0u64;

    for (ngram, &count) in hypothesis {
        let max_ref = references.get(ngram).copied().unwrap_or(0);
        clipped += count.min(max_ref) as u64;
        total += count as u64;
    }

    (clipped, total)
}

/// Length of the longest common subsequence of `a` and `b`.
///
/// Keeps a single DP row sized to the shorter input.
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; short.len() + 1];
    for item in long {
        // dp[i-1][j-1]
        let mut diagonal = 0;
        for j in 1..=short.len() {
            let above = row[j];
            row[j] = if *item == short[j - 1] {
                diagonal + 1
            } else {
                above.max(row[j - 1])
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

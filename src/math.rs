use ahash::AHashMap;
use std::hash::Hash;

/// Counts how many times each distinct label occurs.
///
/// # Parameters
///
/// - `labels` - Any sequence of hashable labels (owned values or references)
///
/// # Returns
///
/// - `AHashMap<L, usize>` - Occurrence count per distinct label
///
/// # Examples
/// ```rust
/// use id3tree::math::label_counts;
///
/// let counts = label_counts(["a", "b", "a"]);
/// assert_eq!(counts[&"a"], 2);
/// assert_eq!(counts[&"b"], 1);
/// ```
pub fn label_counts<I>(labels: I) -> AHashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let labels = labels.into_iter();
    let mut counts = AHashMap::with_capacity(labels.size_hint().0.min(16));
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Calculates the Shannon entropy of a label set, in bits.
///
/// Entropy quantifies the impurity of a set of examples and is the quantity
/// ID3 minimises when choosing a splitting attribute. For each distinct label
/// with relative frequency `p` the term `-p * log2(p)` is accumulated.
///
/// # Parameters
///
/// - `labels` - Class labels of the examples; any hashable, comparable token
///
/// # Returns
///
/// - `f64` - Entropy of the label distribution (0.0 for empty or homogeneous data)
///
/// # Examples
/// ```rust
/// use id3tree::math::entropy;
///
/// let labels = vec!["yes", "no", "yes", "no"];
/// let ent = entropy(labels.iter());
/// // For two classes with equal frequency, entropy = 1.0
/// assert!((ent - 1.0).abs() < 1e-12);
/// ```
pub fn entropy<I>(labels: I) -> f64
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let class_counts = label_counts(labels);
    let total_samples = class_counts.values().sum::<usize>() as f64;
    if total_samples == 0.0 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for &count in class_counts.values() {
        let p = count as f64 / total_samples;
        entropy -= p * p.log2();
    }

    entropy
}

/// Calculates the size-weighted average entropy of a set of subsets.
///
/// Each subset contributes `entropy * size / total`, where `total` is the sum
/// of all subset sizes.
///
/// # Parameters
///
/// - `subsets` - `(size, entropy)` pairs, one per subset of a partition
///
/// # Returns
///
/// - `f64` - The weighted entropy (0.0 when every subset is empty)
///
/// # Examples
/// ```rust
/// use id3tree::math::weighted_entropy;
///
/// let w = weighted_entropy(&[(2, 1.0), (2, 0.0)]);
/// assert!((w - 0.5).abs() < 1e-12);
/// ```
pub fn weighted_entropy(subsets: &[(usize, f64)]) -> f64 {
    let total: usize = subsets.iter().map(|&(size, _)| size).sum();
    if total == 0 {
        return 0.0;
    }

    subsets
        .iter()
        .map(|&(size, e)| e * size as f64 / total as f64)
        .sum()
}

/// Calculates the information gain of a partition.
///
/// Information gain is the parent entropy minus the weighted entropy of the
/// subsets the parent was partitioned into.
///
/// # Parameters
///
/// - `parent_entropy` - Entropy of the unpartitioned set
/// - `subsets` - `(size, entropy)` pairs for each subset
///
/// # Returns
///
/// - `f64` - Entropy removed by the partition, in bits
///
/// # Examples
/// ```rust
/// use id3tree::math::information_gain;
///
/// // A parent with entropy 1.0 split into two pure halves
/// let ig = information_gain(1.0, &[(2, 0.0), (2, 0.0)]);
/// assert!((ig - 1.0).abs() < 1e-12);
/// ```
pub fn information_gain(parent_entropy: f64, subsets: &[(usize, f64)]) -> f64 {
    parent_entropy - weighted_entropy(subsets)
}

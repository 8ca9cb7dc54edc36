//! ID3 tree induction.
//!
//! Every function here accepts a slice of anything implementing [`AsExample`],
//! so callers may pass owned examples while the recursion works on borrowed
//! subsets without cloning records.

use super::{AsExample, Example, Node, TreeObserver};
use crate::error::ModelError;
use crate::machine_learning::Category;
use crate::machine_learning::helper_functions::{preliminary_check, validate_attribute_index};
use crate::math;
use ahash::AHashMap;

/// Smallest entropy reduction, in bits, that counts as information gain.
///
/// Weighted child entropies are sums of `entropy * n / total` terms and can
/// land a few ulps below the parent entropy even when a split separates
/// nothing. Gains at or below this threshold are treated as zero, so a
/// genuine gain of 1e-10 bits or less (only reachable on very large example
/// sets) does not produce a split.
pub const MIN_INFORMATION_GAIN: f64 = 1e-10;

/// Examples grouped by their value at one attribute index.
///
/// Every example of the partitioned set appears in exactly one subset, and
/// subsets keep the relative order of the input.
pub type Partition<'a, T> = AHashMap<&'a T, Vec<&'a Example<T>>>;

fn n_attributes_of<R: AsExample>(examples: &[R]) -> Option<usize> {
    examples.first().map(|record| record.example().n_attributes())
}

/// Partitions `examples` by their value at attribute `index`.
///
/// # Parameters
///
/// - `examples` - Example records of equal arity
/// - `index` - Attribute index in `0..n_attributes`
///
/// # Returns
///
/// - `Ok(Partition)` - One subset per distinct attribute value (empty for empty input)
/// - `Err(ModelError::IndexOutOfBounds)` - If `index` does not name an attribute column; the label column is not an attribute
///
/// # Examples
/// ```rust
/// use id3tree::machine_learning::{Example, split};
///
/// let examples = vec![
///     Example::new(vec!["S", "H", "N"]).unwrap(),
///     Example::new(vec!["S", "H", "Y"]).unwrap(),
///     Example::new(vec!["R", "C", "N"]).unwrap(),
/// ];
/// let partition = split(&examples, 0).unwrap();
/// assert_eq!(partition[&"S"].len(), 2);
/// assert_eq!(partition[&"R"].len(), 1);
/// assert!(split(&examples, 2).is_err());
/// ```
pub fn split<R: AsExample>(
    examples: &[R],
    index: usize,
) -> Result<Partition<'_, R::Value>, ModelError> {
    let mut partition: Partition<'_, R::Value> = AHashMap::new();
    let Some(n_attributes) = n_attributes_of(examples) else {
        return Ok(partition);
    };
    validate_attribute_index(index, n_attributes)?;

    for record in examples {
        let example = record.example();
        let value = example
            .attribute(index)
            .ok_or(ModelError::IndexOutOfBounds {
                index,
                n_attributes: example.n_attributes(),
            })?;
        partition.entry(value).or_default().push(example);
    }

    Ok(partition)
}

/// Shannon entropy, in bits, of the label distribution of `examples`.
///
/// Returns 0.0 for an empty slice.
pub fn entropy<R: AsExample>(examples: &[R]) -> f64 {
    math::entropy(examples.iter().map(|record| record.example().label()))
}

/// Returns `true` if `examples` is empty or every example shares the label of the first.
pub fn is_homogeneous<R: AsExample>(examples: &[R]) -> bool {
    match examples.split_first() {
        None => true,
        Some((first, rest)) => {
            let label = first.example().label();
            rest.iter().all(|record| record.example().label() == label)
        }
    }
}

/// Most frequent label of `examples`, ties resolved to the smallest label.
///
/// Returns `None` for an empty slice.
pub fn majority_label<R: AsExample>(examples: &[R]) -> Option<R::Value> {
    math::label_counts(examples.iter().map(|record| record.example().label()))
        .into_iter()
        .max_by(|(label_a, count_a), (label_b, count_b)| {
            count_a.cmp(count_b).then_with(|| label_b.cmp(label_a))
        })
        .map(|(label, _)| label.clone())
}

// (size, entropy) of every subset produced by splitting on `index`
fn subset_entropies<R: AsExample>(
    examples: &[R],
    index: usize,
) -> Result<Vec<(usize, f64)>, ModelError> {
    Ok(split(examples, index)?
        .values()
        .map(|subset| (subset.len(), entropy(subset)))
        .collect())
}

/// Size-weighted entropy of the subsets obtained by splitting on `index`.
///
/// Computes `sum(entropy(S) * |S| / |examples|)` over the subsets `S` of
/// [`split`]`(examples, index)`.
pub fn weighted_child_entropy<R: AsExample>(
    examples: &[R],
    index: usize,
) -> Result<f64, ModelError> {
    Ok(math::weighted_entropy(&subset_entropies(examples, index)?))
}

/// Selects the attribute whose split yields the largest information gain.
///
/// Every attribute index is scored by its weighted child entropy; the lowest
/// score wins and ties go to the lowest index. When even the best split does
/// not lower the entropy by more than [`MIN_INFORMATION_GAIN`], `None` is
/// returned to signal that the node should not be split.
///
/// # Parameters
///
/// * `examples` - Example records of equal arity
///
/// # Returns
///
/// - `Ok(Some(index))` - The attribute to split on
/// - `Ok(None)` - No attribute yields information gain, the input is empty, or there are no attribute columns
/// - `Err(ModelError)` - If the examples are ragged
///
/// # Examples
/// ```rust
/// use id3tree::machine_learning::{Example, select_attribute};
///
/// let examples = vec![
///     Example::new(vec!["x", "A", "yes"]).unwrap(),
///     Example::new(vec!["x", "B", "no"]).unwrap(),
/// ];
/// assert_eq!(select_attribute(&examples).unwrap(), Some(1));
/// ```
pub fn select_attribute<R: AsExample>(examples: &[R]) -> Result<Option<usize>, ModelError> {
    let Some(n_attributes) = n_attributes_of(examples) else {
        return Ok(None);
    };
    let parent_entropy = entropy(examples);

    let mut best: Option<(usize, f64)> = None;
    for index in 0..n_attributes {
        let gain = math::information_gain(parent_entropy, &subset_entropies(examples, index)?);
        if best.is_none_or(|(_, best_gain)| gain > best_gain) {
            best = Some((index, gain));
        }
    }

    Ok(best
        .filter(|&(_, gain)| gain > MIN_INFORMATION_GAIN)
        .map(|(index, _)| index))
}

/// Builds a decision tree from labeled examples.
///
/// The examples are validated (non-empty, equal arity) and then partitioned
/// recursively: a node becomes a leaf carrying its majority label when its
/// examples are homogeneous or [`select_attribute`] finds no informative
/// attribute, otherwise it branches once per observed value of the selected
/// attribute. `observer` sees every decision but cannot influence the tree.
///
/// # Parameters
///
/// - `examples` - Training records, label last
/// - `observer` - Receives one `node_split` or `node_collapsed` call per node
///
/// # Returns
///
/// - `Ok(Node)` - The root of the learned tree
/// - `Err(ModelError::InputValidationError)` - If `examples` is empty or ragged
///
/// # Examples
/// ```rust
/// use id3tree::machine_learning::{Example, Node, SilentObserver, build};
///
/// let examples = vec![
///     Example::new(vec!["A", "yes"]).unwrap(),
///     Example::new(vec!["B", "yes"]).unwrap(),
/// ];
/// let tree = build(&examples, &mut SilentObserver).unwrap();
/// assert_eq!(tree, Node::Leaf { label: "yes" });
/// ```
pub fn build<R: AsExample>(
    examples: &[R],
    observer: &mut dyn TreeObserver<R::Value>,
) -> Result<Node<R::Value>, ModelError> {
    preliminary_check(examples)?;

    let records: Vec<&Example<R::Value>> = examples.iter().map(AsExample::example).collect();
    build_node(&records, observer)
}

fn build_node<T: Category>(
    examples: &[&Example<T>],
    observer: &mut dyn TreeObserver<T>,
) -> Result<Node<T>, ModelError> {
    let selected_attribute = select_attribute(examples)?;
    let majority = majority_label(examples).ok_or(ModelError::TreeError(
        "cannot derive a label from an empty example set",
    ))?;

    let attribute_index = match selected_attribute {
        Some(index) if !is_homogeneous(examples) => index,
        _ => {
            observer.node_collapsed(examples, &majority);
            return Ok(Node::Leaf { label: majority });
        }
    };

    observer.node_split(examples, attribute_index);

    let partition = split(examples, attribute_index)?;
    let mut children = AHashMap::with_capacity(partition.len());
    for (value, subset) in partition {
        children.insert(value.clone(), build_node(&subset, observer)?);
    }

    Ok(Node::Internal {
        attribute_index,
        majority_label: majority,
        children,
    })
}

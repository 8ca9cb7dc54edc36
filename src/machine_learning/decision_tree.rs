use super::*;

/// Entropy, partitioning, attribute selection and recursive tree induction
pub mod id3;
/// Diagnostic observers notified while building and classifying
pub mod observer;

pub use id3::{
    MIN_INFORMATION_GAIN, Partition, build, entropy, is_homogeneous, majority_label,
    select_attribute, split, weighted_child_entropy,
};
pub use observer::{LogObserver, SilentObserver, TraceRecorder, TreeObserver};

/// A labeled training record.
///
/// An example is an ordered, fixed-width sequence of fields: every field but
/// the last is a categorical attribute value, the last field is the class label.
/// All examples of a dataset share the same arity.
///
/// # Example
/// ```rust
/// use id3tree::machine_learning::Example;
///
/// let example = Example::new(vec!["Sunny", "High", "No"]).unwrap();
/// assert_eq!(example.label(), &"No");
/// assert_eq!(example.attributes(), &["Sunny", "High"]);
/// assert_eq!(example.n_attributes(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Example<T> {
    fields: Vec<T>,
}

impl<T> Example<T> {
    /// Creates an example from its fields, the last of which is the label.
    ///
    /// # Parameters
    ///
    /// * `fields` - Attribute values followed by the class label
    ///
    /// # Returns
    ///
    /// - `Ok(Example<T>)` - The example record
    /// - `Err(ModelError::InvalidNodeKind)` - If `fields` is empty, since a value without a label field is not an example record
    pub fn new(fields: Vec<T>) -> Result<Self, ModelError> {
        if fields.is_empty() {
            return Err(ModelError::InvalidNodeKind(
                "a record without a label field is not an example",
            ));
        }

        Ok(Self { fields })
    }

    /// Creates an example from separate attribute values and label.
    pub fn from_parts(mut attributes: Vec<T>, label: T) -> Self {
        attributes.push(label);
        Self { fields: attributes }
    }

    /// Returns the class label (the last field).
    pub fn label(&self) -> &T {
        &self.fields[self.fields.len() - 1]
    }

    /// Returns the attribute values (every field but the label).
    pub fn attributes(&self) -> &[T] {
        &self.fields[..self.fields.len() - 1]
    }

    /// Returns the attribute value at `index`, or `None` past the last attribute column.
    pub fn attribute(&self, index: usize) -> Option<&T> {
        self.attributes().get(index)
    }

    /// Returns every field, label included.
    pub fn fields(&self) -> &[T] {
        &self.fields
    }

    pub fn n_attributes(&self) -> usize {
        self.fields.len() - 1
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

impl<T> TryFrom<Vec<T>> for Example<T> {
    type Error = ModelError;

    fn try_from(fields: Vec<T>) -> Result<Self, Self::Error> {
        Example::new(fields)
    }
}

/// Anything that can be viewed as an example record.
///
/// Implemented for `Example<T>` and for references to it, so the tree-building
/// functions accept both `&[Example<T>]` and `&[&Example<T>]`.
pub trait AsExample {
    type Value: Category;

    fn example(&self) -> &Example<Self::Value>;
}

impl<T: Category> AsExample for Example<T> {
    type Value = T;

    fn example(&self) -> &Example<T> {
        self
    }
}

impl<R: AsExample + ?Sized> AsExample for &R {
    type Value = R::Value;

    fn example(&self) -> &Example<R::Value> {
        R::example(*self)
    }
}

/// A node of the learned decision tree.
///
/// # Variants
///
/// - `Leaf` - A terminal node that predicts `label`.
/// - `Internal` - A decision node on the attribute at `attribute_index`.
///   - `majority_label`: most frequent label among the training examples that reached this node.
///   - `children`: one child per attribute value observed at this node during training.
#[derive(Debug, Clone)]
pub enum Node<T> {
    Leaf {
        label: T,
    },
    Internal {
        attribute_index: usize,
        majority_label: T,
        children: AHashMap<T, Node<T>>,
    },
}

impl<T: Eq + Hash> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Leaf { label: a }, Node::Leaf { label: b }) => a == b,
            (
                Node::Internal {
                    attribute_index: index_a,
                    majority_label: majority_a,
                    children: children_a,
                },
                Node::Internal {
                    attribute_index: index_b,
                    majority_label: majority_b,
                    children: children_b,
                },
            ) => index_a == index_b && majority_a == majority_b && children_a == children_b,
            _ => false,
        }
    }
}

impl<T: Eq + Hash> Eq for Node<T> {}

impl<T> Node<T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Returns the predicted label of a leaf, `None` for internal nodes.
    pub fn label(&self) -> Option<&T> {
        match self {
            Node::Leaf { label } => Some(label),
            Node::Internal { .. } => None,
        }
    }

    /// Returns the splitting attribute of an internal node, `None` for leaves.
    pub fn attribute_index(&self) -> Option<usize> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal {
                attribute_index, ..
            } => Some(*attribute_index),
        }
    }

    /// Returns the branches of an internal node, `None` for leaves.
    pub fn children(&self) -> Option<&AHashMap<T, Node<T>>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { children, .. } => Some(children),
        }
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { children, .. } => {
                1 + children.values().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => children.values().map(Node::n_leaves).sum(),
        }
    }
}

/// What classification does when an event carries an attribute value that no
/// training example carried at the current node.
///
/// # Variants
///
/// - `Error` - Fail with `ModelError::UnseenAttributeValue`.
/// - `MajorityLabel` - Answer with the majority label of the training examples that reached the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnseenValuePolicy {
    #[default]
    Error,
    MajorityLabel,
}

/// Classifies an event by walking `tree` from the root to a leaf.
///
/// Unseen attribute values fail with `ModelError::UnseenAttributeValue`; use
/// [`classify_with_policy`] to fall back to the node majority instead.
///
/// # Parameters
///
/// - `event` - Attribute values of the event, without a label field
/// - `tree` - A tree produced by [`build`]
/// - `observer` - Receives the classification decision
///
/// # Returns
///
/// - `Ok(&T)` - The label of the leaf the event reached
/// - `Err(ModelError::IndexOutOfBounds)` - If the event is shorter than a split attribute requires
/// - `Err(ModelError::UnseenAttributeValue)` - If a value has no matching branch
///
/// # Example
/// ```rust
/// use id3tree::machine_learning::*;
///
/// let examples = vec![
///     Example::new(vec!["A", "yes"]).unwrap(),
///     Example::new(vec!["B", "no"]).unwrap(),
/// ];
/// let tree = build(&examples, &mut SilentObserver).unwrap();
/// assert_eq!(classify(&["B"], &tree, &mut SilentObserver).unwrap(), &"no");
/// ```
pub fn classify<'t, T: Category>(
    event: &[T],
    tree: &'t Node<T>,
    observer: &mut dyn TreeObserver<T>,
) -> Result<&'t T, ModelError> {
    classify_with_policy(event, tree, UnseenValuePolicy::Error, observer)
}

/// Classifies an event, resolving unseen attribute values according to `policy`.
pub fn classify_with_policy<'t, T: Category>(
    event: &[T],
    tree: &'t Node<T>,
    policy: UnseenValuePolicy,
    observer: &mut dyn TreeObserver<T>,
) -> Result<&'t T, ModelError> {
    match tree {
        Node::Leaf { label } => {
            observer.event_classified(event, label);
            Ok(label)
        }
        Node::Internal {
            attribute_index,
            majority_label,
            children,
        } => {
            let value = event
                .get(*attribute_index)
                .ok_or(ModelError::IndexOutOfBounds {
                    index: *attribute_index,
                    n_attributes: event.len(),
                })?;

            match (children.get(value), policy) {
                (Some(child), _) => classify_with_policy(event, child, policy, observer),
                (None, UnseenValuePolicy::MajorityLabel) => {
                    observer.event_classified(event, majority_label);
                    Ok(majority_label)
                }
                (None, UnseenValuePolicy::Error) => Err(ModelError::UnseenAttributeValue {
                    attribute_index: *attribute_index,
                    value: format!("{:?}", value),
                }),
            }
        }
    }
}

/// Hyperparameters for the ID3 decision tree.
///
/// ID3 grows every branch until it is homogeneous or no attribute yields
/// information gain, so there are no growth limits to configure.
///
/// # Fields
///
/// - `unseen_value_policy` - Behaviour when prediction meets an attribute value never observed at a node.
/// - `verbose` - When `true`, every build and classification decision is written to the `log` facade via [`LogObserver`].
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeParams {
    pub unseen_value_policy: UnseenValuePolicy,
    pub verbose: bool,
}

/// ID3 decision tree classifier for categorical data.
///
/// Wraps [`build`] and [`classify_with_policy`] behind the `fit` / `predict`
/// interface shared with the other estimators. Attribute values and labels
/// can be any [`Category`] (strings, integers, enums, ...).
///
/// # Fields
///
/// - `root` - The root node of the trained tree, or `None` if not yet fitted.
/// - `n_attributes` - Number of attribute columns in the training data.
/// - `params` - Hyperparameters controlling prediction and diagnostics.
///
/// # Example
/// ```rust
/// use id3tree::machine_learning::{DecisionTree, DecisionTreeParams, UnseenValuePolicy};
/// use ndarray::array;
///
/// let x_train = array![
///     ["Sunny", "High"],
///     ["Sunny", "Normal"],
///     ["Rain", "High"],
///     ["Overcast", "High"],
/// ];
/// let y_train = array!["No", "Yes", "Yes", "Yes"];
///
/// let params = DecisionTreeParams {
///     unseen_value_policy: UnseenValuePolicy::MajorityLabel,
///     verbose: false,
/// };
/// let mut tree = DecisionTree::new(Some(params));
/// tree.fit_arrays(x_train.view(), y_train.view()).unwrap();
///
/// let x_test = array![["Sunny", "High"], ["Sunny", "Low"]];
/// let predictions = tree.predict(x_test.view()).unwrap();
/// assert_eq!(predictions[0], "No");
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree<T> {
    root: Option<Node<T>>,
    n_attributes: usize,
    params: DecisionTreeParams,
}

impl<T: Category> Default for DecisionTree<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T: Category> DecisionTree<T> {
    /// Creates a new, untrained decision tree.
    ///
    /// # Parameters
    ///
    /// * `params` - Optional hyperparameters. If `None`, default parameters are used.
    pub fn new(params: Option<DecisionTreeParams>) -> Self {
        Self {
            root: None,
            n_attributes: 0,
            params: params.unwrap_or_default(),
        }
    }

    // Getters
    get_field!(get_n_attributes, n_attributes, usize);
    get_field_as_ref!(get_root, root, Option<&Node<T>>);

    /// Gets the `params` field.
    ///
    /// # Returns
    ///
    /// * `&DecisionTreeParams` - The hyperparameters of the model
    pub fn get_parameters(&self) -> &DecisionTreeParams {
        &self.params
    }

    fn observer(&self) -> Box<dyn TreeObserver<T>> {
        if self.params.verbose {
            Box::new(LogObserver)
        } else {
            Box::new(SilentObserver)
        }
    }

    /// Trains the decision tree on labeled examples.
    ///
    /// # Parameters
    ///
    /// * `examples` - Training records, all of the same arity, label last
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to `self` for method chaining, or a `ModelError` if the examples are empty or ragged.
    pub fn fit(&mut self, examples: &[Example<T>]) -> Result<&mut Self, ModelError> {
        let mut observer = self.observer();
        let root = build(examples, observer.as_mut())?;

        self.n_attributes = examples[0].n_attributes();
        self.root = Some(root);

        Ok(self)
    }

    /// Trains the decision tree on an attribute matrix and a label vector.
    ///
    /// # Parameters
    ///
    /// - `x` - Attribute values with shape (n_samples, n_attributes)
    /// - `y` - Class labels with shape (n_samples,)
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to `self`, or a `ModelError` if the shapes disagree or the data is empty.
    pub fn fit_arrays(
        &mut self,
        x: ArrayView2<T>,
        y: ArrayView1<T>,
    ) -> Result<&mut Self, ModelError> {
        if x.nrows() != y.len() {
            return Err(ModelError::InputValidationError(format!(
                "Number of samples in x and y must match, x rows: {}, y length: {}",
                x.nrows(),
                y.len()
            )));
        }

        let examples: Vec<Example<T>> = x
            .axis_iter(Axis(0))
            .zip(y.iter())
            .map(|(row, label)| Example::from_parts(row.to_vec(), label.clone()))
            .collect();

        self.fit(&examples)
    }

    /// Predicts the label of a single event.
    ///
    /// # Parameters
    ///
    /// * `event` - Attribute values of length `n_attributes`, without a label field
    ///
    /// # Returns
    ///
    /// * `Result<T, ModelError>` - The predicted label, or a `ModelError` if the model is not fitted, the event has the wrong length, or (under `UnseenValuePolicy::Error`) an attribute value was never seen in training.
    pub fn predict_one(&self, event: &[T]) -> Result<T, ModelError> {
        let root = self.root.as_ref().ok_or(ModelError::NotFitted)?;
        super::helper_functions::validate_event(event, self.n_attributes)?;

        let mut observer = self.observer();
        classify_with_policy(
            event,
            root,
            self.params.unseen_value_policy,
            observer.as_mut(),
        )
        .cloned()
    }

    /// Predicts labels for every row of an attribute matrix.
    ///
    /// # Parameters
    ///
    /// * `x` - Attribute values with shape (n_samples, n_attributes)
    ///
    /// # Returns
    ///
    /// * `Result<Array1<T>, ModelError>` - One predicted label per row, or the first `ModelError` encountered.
    pub fn predict(&self, x: ArrayView2<T>) -> Result<Array1<T>, ModelError> {
        if self.root.is_none() {
            return Err(ModelError::NotFitted);
        }

        if x.ncols() != self.n_attributes {
            return Err(ModelError::InputValidationError(format!(
                "Expected {} attribute column(s), got {}",
                self.n_attributes,
                x.ncols()
            )));
        }

        let predictions: Result<Vec<T>, ModelError> = x
            .axis_iter(Axis(0))
            .map(|row| self.predict_one(&row.to_vec()))
            .collect();

        Ok(Array1::from_vec(predictions?))
    }

    /// Trains the tree on `examples` and immediately predicts `x_test`.
    pub fn fit_predict(
        &mut self,
        examples: &[Example<T>],
        x_test: ArrayView2<T>,
    ) -> Result<Array1<T>, ModelError> {
        self.fit(examples)?;
        self.predict(x_test)
    }

    /// Generates a human-readable string representation of the decision tree structure.
    ///
    /// Internal nodes show their splitting attribute, every edge shows the
    /// attribute value it matches, and leaves show their label. Branches are
    /// listed in ascending value order so the output is reproducible.
    ///
    /// # Returns
    ///
    /// * `Result<String, ModelError>` - The formatted tree, or `ModelError::NotFitted` if the model hasn't been trained yet.
    pub fn generate_tree_structure(&self) -> Result<String, ModelError> {
        let root = self.root.as_ref().ok_or(ModelError::NotFitted)?;

        let mut output = String::new();
        output.push_str("Decision Tree Structure:\n");
        print_node(root, &mut output, "", true, None);
        Ok(output)
    }
}

// Recursively print tree structure
fn print_node<T: Category>(
    node: &Node<T>,
    output: &mut String,
    prefix: &str,
    is_last: bool,
    edge: Option<(usize, &T)>,
) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(&format!("{}{}", prefix, connector));

    if let Some((attribute_index, value)) = edge {
        output.push_str(&format!("attribute[{}] = {:?} -> ", attribute_index, value));
    }

    match node {
        Node::Leaf { label } => {
            output.push_str(&format!("Leaf: label={:?}\n", label));
        }
        Node::Internal {
            attribute_index,
            majority_label,
            children,
        } => {
            output.push_str(&format!(
                "Split: attribute[{}] (majority={:?})\n",
                attribute_index, majority_label
            ));

            let new_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });

            let mut branches: Vec<(&T, &Node<T>)> = children.iter().collect();
            branches.sort_by(|(a, _), (b, _)| a.cmp(b));

            let n_branches = branches.len();
            for (i, (value, child)) in branches.into_iter().enumerate() {
                print_node(
                    child,
                    output,
                    &new_prefix,
                    i + 1 == n_branches,
                    Some((*attribute_index, value)),
                );
            }
        }
    }
}

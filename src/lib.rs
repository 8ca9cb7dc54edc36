/// Error types shared by every module of the crate
pub mod error;

pub use error::{IoError, ModelError};

/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value of the
/// specified field. The generated method includes documentation describing
/// the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_n_attributes)
/// - `$field_name` - The name of the field to access (e.g., n_attributes)
/// - `$return_type` - The return type of the getter method
#[cfg(feature = "machine_learning")]
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning a reference to a field.
///
/// The field must implement `as_ref` (typically an `Option`), so the generated
/// method hands out a borrowed view without cloning.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access
/// - `$return_type` - The type expression for the return value (e.g. `Option<&Node<T>>`)
#[cfg(feature = "machine_learning")]
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name.as_ref()
        }
    };
}

/// Module `math` contains the information-theoretic functions used by tree induction.
///
/// # Core Functions
///
/// - `entropy` - Shannon entropy (in bits) of any sequence of hashable labels
/// - `information_gain` - Reduction in entropy achieved by a partition
///
/// # Example
/// ```rust
/// use id3tree::math::entropy;
///
/// let labels = ["yes", "no", "yes", "no"];
/// let ent = entropy(labels.iter());
/// assert!((ent - 1.0).abs() < 1e-12);
/// ```
#[cfg(feature = "math")]
pub mod math;

/// Module `machine_learning` provides the ID3 decision tree classifier.
///
/// The tree is induced top-down: at every node the attribute whose partition
/// minimises the weighted child entropy is selected, and splitting stops once
/// the node is homogeneous or no attribute yields any information gain.
///
/// # Components
///
/// - **Example**: a fixed-arity record of categorical attribute values followed by a class label
/// - **Node**: the learned tree, either a `Leaf` label or an `Internal` branch per attribute value
/// - **DecisionTree**: model wrapper with `fit` / `predict` in the style of the other estimators
/// - **id3**: the free functions `split`, `entropy`, `is_homogeneous`, `select_attribute` and `build`
/// - **TreeObserver**: injectable sink for diagnostic trace lines
///
/// # Examples
/// ```rust
/// use id3tree::machine_learning::*;
///
/// let examples = vec![
///     Example::new(vec!["S", "H", "N"]).unwrap(),
///     Example::new(vec!["S", "H", "Y"]).unwrap(),
///     Example::new(vec!["R", "H", "Y"]).unwrap(),
///     Example::new(vec!["R", "C", "N"]).unwrap(),
/// ];
///
/// let mut model = DecisionTree::default();
/// model.fit(&examples).unwrap();
/// let label = model.predict_one(&["R", "C"]).unwrap();
/// assert_eq!(label, "N");
/// ```
#[cfg(feature = "machine_learning")]
pub mod machine_learning;

/// A convenience module that re-exports the most commonly used types from this crate.
///
/// # Examples
/// ```rust
/// use id3tree::prelude::*;
///
/// let (_, _, labels) = load_play_tennis();
/// assert_eq!(labels.len(), 14);
/// ```
pub mod prelude;

/// Access to categorical datasets and record loaders.
///
/// # Available Datasets
/// - **play_tennis**: Quinlan's weather dataset (14 samples, 4 categorical attributes, 2 classes)
///
/// # Loaders
/// - **csv_records**: reads comma-delimited files into `Example<String>` records
///
/// # Examples
/// ```rust
/// use id3tree::dataset::play_tennis::load_play_tennis_examples;
///
/// let examples = load_play_tennis_examples();
/// assert_eq!(examples.len(), 14);
/// assert_eq!(examples[0].arity(), 5);
/// ```
#[cfg(feature = "dataset")]
pub mod dataset;

use crate::error::ModelError;
use ahash::AHashMap;
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use std::fmt::Debug;
use std::hash::Hash;

/// Bound shared by every attribute value and class label the tree handles.
///
/// Values are opaque categorical tokens: they only need to be compared for
/// equality, hashed into partitions, ordered for deterministic tie-breaking,
/// and rendered for diagnostics.
pub trait Category: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Category for T {}

/// Decision Tree implementation for categorical classification using ID3
pub mod decision_tree;
/// This module provides helper functions for machine learning models
mod helper_functions;

pub use decision_tree::*;

pub use crate::error::{IoError, ModelError};

/// Prelude module for machine learning functionality.
#[cfg(feature = "machine_learning")]
pub mod machine_learning_prelude;
/// Prelude module for mathematical operations.
#[cfg(feature = "math")]
pub mod math_prelude;
/// Prelude module for datasets and record loaders.
#[cfg(feature = "dataset")]
pub mod dataset_prelude;

#[cfg(feature = "dataset")]
pub use dataset_prelude::*;
#[cfg(feature = "machine_learning")]
pub use machine_learning_prelude::*;
#[cfg(feature = "math")]
pub use math_prelude::*;

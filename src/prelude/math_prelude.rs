pub use crate::math::{entropy, information_gain, label_counts, weighted_entropy};

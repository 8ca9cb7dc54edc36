pub use crate::dataset::csv_records::{load_examples, read_examples, read_examples_with_headers};
pub use crate::dataset::play_tennis::{load_play_tennis, load_play_tennis_examples};

/// This module provides access to the raw data of the play tennis dataset
pub mod play_tennis_raw;

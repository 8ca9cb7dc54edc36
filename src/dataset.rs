/// This module reads example records from comma-delimited files
pub mod csv_records;
/// This module provides access to the play tennis dataset
pub mod play_tennis;
/// Internal module for raw dataset content
mod raw_data;

use super::raw_data::play_tennis_raw::*;
use crate::machine_learning::Example;
use ndarray::prelude::*;

const N_SAMPLES: usize = 14;
const N_ATTRIBUTES: usize = 4;

/// Loads the play tennis dataset
///
/// The play tennis dataset records 14 days of weather together with whether
/// tennis was played. Every attribute is categorical:
/// - Outlook: Sunny, Overcast, Rain
/// - Temperature: Hot, Mild, Cool
/// - Humidity: High, Normal
/// - Wind: Weak, Strong
///
/// # Returns
///
/// A tuple containing:
/// - `Array1<&'static str>`: The headers of the dataset (four attributes and the label)
/// - `Array2<&'static str>`: A 2D array of shape (14, 4) containing the attribute values
/// - `Array1<&'static str>`: A 1D array of length 14 containing the `Yes` / `No` labels
///
/// # Example
///
/// ```
/// use id3tree::dataset::play_tennis::load_play_tennis;
///
/// let (headers, attributes, labels) = load_play_tennis();
/// assert_eq!(headers.len(), 5);
/// assert_eq!(attributes.shape(), &[14, 4]);
/// assert_eq!(labels.len(), 14);
/// ```
pub fn load_play_tennis() -> (
    Array1<&'static str>,
    Array2<&'static str>,
    Array1<&'static str>,
) {
    let (play_tennis_data_headers_raw, play_tennis_data_raw) = load_play_tennis_raw_data();

    let headers = play_tennis_data_headers_raw
        .trim()
        .lines()
        .collect::<Vec<&str>>();
    let mut attributes = Vec::with_capacity(N_SAMPLES * N_ATTRIBUTES);
    let mut labels = Vec::with_capacity(N_SAMPLES);

    for line in play_tennis_data_raw.trim().lines() {
        let cols: Vec<&str> = line.split(',').collect();

        attributes.extend_from_slice(&cols[..N_ATTRIBUTES]);
        labels.push(cols[N_ATTRIBUTES]);
    }

    let headers_array = Array1::from_vec(headers);
    let attributes_array = Array2::from_shape_vec((N_SAMPLES, N_ATTRIBUTES), attributes)
        .expect("embedded play tennis data has 14 rows of 4 attributes");
    let labels_array = Array1::from_vec(labels);

    (headers_array, attributes_array, labels_array)
}

/// Loads the play tennis dataset as owned example records
///
/// Each record holds the four attribute values followed by the label, ready
/// to be passed to `build` or `DecisionTree::fit`.
///
/// # Example
///
/// ```
/// use id3tree::dataset::play_tennis::load_play_tennis_examples;
///
/// let examples = load_play_tennis_examples();
/// assert_eq!(examples[0].fields(), &["Sunny", "Hot", "High", "Weak", "No"]);
/// ```
pub fn load_play_tennis_examples() -> Vec<Example<String>> {
    let (_, attributes, labels) = load_play_tennis();

    attributes
        .outer_iter()
        .zip(labels.iter())
        .map(|(row, label)| {
            Example::from_parts(
                row.iter().map(|value| value.to_string()).collect(),
                label.to_string(),
            )
        })
        .collect()
}

use super::decision_tree::AsExample;
use crate::error::ModelError;

/// Performs validation checks on a set of training examples.
///
/// This function validates that:
/// - The example set is not empty
/// - Every example has the same arity (number of fields) as the first
///
/// # Parameters
///
/// * `examples` - The training records to validate
///
/// # Returns
///
/// - `Ok(usize)` - The shared arity, if all validation checks pass
/// - `Err(ModelError::InputValidationError)` - If any validation check fails, with an informative error message
pub fn preliminary_check<R: AsExample>(examples: &[R]) -> Result<usize, ModelError> {
    let first = examples.first().ok_or(ModelError::InputValidationError(
        "Input data is empty".to_string(),
    ))?;
    let arity = first.example().arity();

    for (i, record) in examples.iter().enumerate() {
        let row_arity = record.example().arity();
        if row_arity != arity {
            return Err(ModelError::InputValidationError(format!(
                "Example at row {} has {} field(s), expected {}",
                i, row_arity, arity
            )));
        }
    }

    Ok(arity)
}

/// Validates that an attribute index names one of the attribute columns.
///
/// # Parameters
///
/// - `index` - The attribute index to validate
/// - `n_attributes` - Number of attribute columns (arity minus the label column)
///
/// # Returns
///
/// - `Ok(())` - If `index < n_attributes`
/// - `Err(ModelError::IndexOutOfBounds)` - Otherwise
pub fn validate_attribute_index(index: usize, n_attributes: usize) -> Result<(), ModelError> {
    if index >= n_attributes {
        return Err(ModelError::IndexOutOfBounds {
            index,
            n_attributes,
        });
    }

    Ok(())
}

/// Validates that an event to classify carries one value per attribute column.
///
/// # Parameters
///
/// - `event` - Attribute values of the event, without a label field
/// - `n_attributes` - Number of attribute columns seen during training
///
/// # Returns
///
/// - `Ok(())` - If the lengths agree
/// - `Err(ModelError::InputValidationError)` - Otherwise
pub fn validate_event<T>(event: &[T], n_attributes: usize) -> Result<(), ModelError> {
    if event.len() != n_attributes {
        return Err(ModelError::InputValidationError(format!(
            "Event has {} attribute value(s), expected {}",
            event.len(),
            n_attributes
        )));
    }

    Ok(())
}

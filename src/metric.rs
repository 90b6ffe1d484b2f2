use crate::errors::TreeError;

/// Percentage of positions where the prediction equals the actual label.
///
/// * `actual` - Observed labels.
/// * `predicted` - Predicted labels, one per observed label.
pub fn accuracy<A, P>(actual: &[A], predicted: &[P]) -> Result<f64, TreeError>
where
    A: PartialEq<P>,
{
    if actual.len() != predicted.len() {
        return Err(TreeError::LengthMismatch(actual.len(), predicted.len()));
    }
    if actual.is_empty() {
        return Err(TreeError::EmptyDataset);
    }
    let matches = actual.iter().zip(predicted).filter(|(a, p)| a == p).count();
    Ok(100.0 * matches as f64 / actual.len() as f64)
}

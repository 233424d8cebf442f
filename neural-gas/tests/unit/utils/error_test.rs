use super::*;

#[test]
fn can_format_training_errors() {
    assert_eq!(
        TrainingError::invalid_configuration("amount of iterations must be positive").to_string(),
        "invalid configuration: amount of iterations must be positive"
    );
    assert_eq!(TrainingError::EmptyDataset.to_string(), "training dataset is empty");
    assert_eq!(
        TrainingError::DimensionMismatch { index: 2, expected: 3, actual: 4 }.to_string(),
        "vector at index 2 has dimension 4, expected 3"
    );
}

#[test]
fn can_convert_training_error_to_generic() {
    let error: GenericError = TrainingError::EmptyDataset.into();

    assert_eq!(error, GenericError::from("training dataset is empty"));
}

#[test]
fn can_join_many_generic_errors() {
    let errors = vec![GenericError::from("first"), GenericError::from("second".to_string())];

    assert_eq!(GenericError::join_many(errors.as_slice(), ", "), "first, second");
}

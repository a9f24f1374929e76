use validator::ValidationErrors;

/// The only failure the wheel knows about: it was handed something it
/// cannot draw from. Re-entrant draws and late completions are not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WheelError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<ValidationErrors> for WheelError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
                format!("{} ({})", field, codes.join(", "))
            })
            .collect();
        fields.sort();
        WheelError::InvalidConfiguration(fields.join("; "))
    }
}

use crate::domain::error::ContactError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Contact submission failed: {0}")]
    ContactError(#[from] ContactError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl SiteError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ContactError(e) => e.user_message(),
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::TomlError(e) => format!("The site config file is not valid TOML: {}", e),
            SiteError::ConfigError { message } => message.clone(),
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting `{}` is invalid: {}", field, reason)
            }
            SiteError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::ContactError(ContactError::Network { .. }) => {
                "Check that the backend is running and BACKEND_URL points at it"
            }
            SiteError::ContactError(_) => "Review the form values and try again",
            SiteError::IoError(_) => "Check the output path and file permissions",
            SiteError::TomlError(_) => "Fix the syntax of the site config file",
            SiteError::ConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "Check --backend-url, BACKEND_URL and the [backend] section of the config file"
            }
            SiteError::ValidationError { .. } => "Fill in every required field",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_suggests_checking_backend() {
        let err = SiteError::from(ContactError::network("error sending request"));

        assert_eq!(err.user_friendly_message(), "error sending request");
        assert_eq!(
            err.recovery_suggestion(),
            "Check that the backend is running and BACKEND_URL points at it"
        );
    }

    #[test]
    fn test_rejection_suggests_reviewing_form() {
        let err = SiteError::from(ContactError::Rejected {
            status: 400,
            detail: Some("Invalid email".to_string()),
        });

        assert_eq!(err.user_friendly_message(), "Invalid email");
        assert_eq!(err.recovery_suggestion(), "Review the form values and try again");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Unknown {family} variant: '{discriminator}'")]
    UnknownVariant {
        family: &'static str,
        discriminator: String,
    },

    #[error("Variant '{discriminator}' is already registered for {family}")]
    DuplicateVariant {
        family: &'static str,
        discriminator: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl LessonError {
    pub fn unknown_variant(family: &'static str, discriminator: impl Into<String>) -> Self {
        Self::UnknownVariant {
            family,
            discriminator: discriminator.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The offending token, if this is a resolution failure.
    pub fn discriminator(&self) -> Option<&str> {
        match self {
            Self::UnknownVariant { discriminator, .. }
            | Self::DuplicateVariant { discriminator, .. } => Some(discriminator.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

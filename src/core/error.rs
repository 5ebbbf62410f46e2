//! Error types for Black-Scholes pricing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BsError {
    #[error("Invalid domain input: {parameter} = {value}")]
    InvalidDomainInput { parameter: &'static str, value: f64 },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type BsResult<T> = Result<T, BsError>;

impl BsError {
    pub fn invalid_input(parameter: &'static str, value: f64) -> Self {
        Self::InvalidDomainInput { parameter, value }
    }

    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// True for the domain-violation variant
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDomainInput { .. })
    }
}

impl From<serde_json::Error> for BsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for BsError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

//! Error types for the conversion engine.
//!
//! Every variant signals a caller/data contract violation, not a transient
//! fault: nothing here is retried internally, and each failure aborts the
//! conversion call it occurred in. Variants carry the target bean type,
//! the operation, and the converter identity so the caller can diagnose
//! without a retry.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors that can occur while converting raw records into beans.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A record required for the requested operation was absent.
    #[error("no {record_category} supplied to {operation} while building {bean_type}")]
    MissingMetadataInstance {
        record_category: &'static str,
        operation: &'static str,
        bean_type: String,
    },

    /// A present entity failed structural validation.
    #[error("entity {guid} is unusable: {detail}")]
    BadEntity { guid: String, detail: String },

    /// A present relationship failed structural validation.
    #[error("relationship {guid} is unusable: {detail}")]
    BadRelationship { guid: String, detail: String },

    /// A record's declared type does not satisfy the expected type.
    #[error("instance {guid} of type {actual_type} is not a subtype of {expected_type}")]
    BadInstanceType {
        guid: String,
        actual_type: String,
        expected_type: String,
    },

    /// The target bean type could not be instantiated.
    #[error("bean type {bean_type} could not be instantiated: {detail}")]
    InvalidBeanClass { bean_type: String, detail: String },

    /// The instantiated bean is not of the family this converter handles.
    #[error("converter {converter} received a bean that is not a {bean_type}")]
    UnexpectedBeanClass {
        converter: &'static str,
        bean_type: String,
    },

    /// The requested dispatch operation is not supported by this
    /// converter's bean family.
    #[error("converter {converter} does not implement {operation} for bean type {bean_type}")]
    UnimplementedConverterMethod {
        converter: &'static str,
        operation: &'static str,
        bean_type: String,
    },
}

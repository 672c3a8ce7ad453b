//! XML codec for store resources.
//!
//! Serialization goes through `quick-xml`'s serde serializer with the root
//! element set per resource. The serializer writes no XML declaration, no
//! namespace or schema-instance attributes and no line breaks, which is the
//! exact shape the vendor accepts.

use serde::{Serialize, de::DeserializeOwned};

/// Errors that can occur while encoding or decoding resource XML.
#[derive(thiserror::Error, Debug, Clone)]
pub enum XmlError {
    /// The value could not be written as XML.
    #[error("failed to serialize XML: {0}")]
    Serialize(String),
    /// The document could not be read into the target type.
    #[error("failed to deserialize XML: {0}")]
    Deserialize(String),
}

/// A resource exchanged with the store API as a single root element.
pub trait XmlResource {
    /// Name of the root element, without namespace.
    const ROOT: &'static str;
}

/// Serialize a resource to its wire XML.
///
/// # Errors
///
/// Returns [`XmlError::Serialize`] if the value has no XML representation.
pub fn to_xml<T: XmlResource + Serialize>(value: &T) -> Result<String, XmlError> {
    quick_xml::se::to_string_with_root(T::ROOT, value)
        .map_err(|e| XmlError::Serialize(e.to_string()))
}

/// Deserialize a resource from response XML.
///
/// A leading XML declaration is accepted; unknown elements are ignored.
///
/// # Errors
///
/// Returns [`XmlError::Deserialize`] if the document is malformed or lacks a
/// required element.
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T, XmlError> {
    quick_xml::de::from_str(xml).map_err(|e| XmlError::Deserialize(e.to_string()))
}

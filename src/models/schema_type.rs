use crate::error::{CombinatorError, Result};

/// Expected type of a result column, declared by the caller for
/// client-side coercion of text cells.
///
/// This is not a server-enforced table schema. The gateway always returns
/// text fields; a schema only tells the decoder how to interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Number,
    Boolean,
}

impl SchemaType {
    /// Parse a caller-supplied tag.
    ///
    /// Recognized tags are exactly `"string"`, `"number"` and `"boolean"`.
    /// Anything else is an [`CombinatorError::InvalidSchema`] — a caller
    /// contract violation, raised before any network request.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "string" => Ok(SchemaType::String),
            "number" => Ok(SchemaType::Number),
            "boolean" => Ok(SchemaType::Boolean),
            other => Err(CombinatorError::InvalidSchema(format!(
                "unrecognized schema tag \"{}\" (expected string, number or boolean)",
                other
            ))),
        }
    }

    /// Validate a whole tag sequence, preserving order.
    pub fn parse_tags(tags: &[&str]) -> Result<Vec<SchemaType>> {
        tags.iter().map(|tag| Self::from_tag(tag)).collect()
    }
}

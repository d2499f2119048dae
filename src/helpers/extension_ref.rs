use crate::errors::{VscanError, VscanResult};

/// Parsed extension reference. Marketplace identifiers have the form
/// `publisher.name`; the publisher segment never contains a dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRef {
    pub publisher: String,
    pub name: String,
}

impl ExtensionRef {
    pub fn parse(raw: &str) -> VscanResult<Self> {
        match raw.trim().split_once('.') {
            Some((publisher, name)) if !publisher.is_empty() && !name.is_empty() => Ok(Self {
                publisher: publisher.to_string(),
                name: name.to_string(),
            }),
            _ => Err(VscanError::validation_error(
                "extension",
                raw,
                "expected the form publisher.name",
                Some("for example: vscan-cli scan ms-python.python"),
            )),
        }
    }

    pub fn extension_id(&self) -> String {
        format!("{}.{}", self.publisher, self.name)
    }
}

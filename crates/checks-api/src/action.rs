//! Follow-up actions a check run offers to the user.

use serde::Serialize;

use crate::error::{ChecksError, Result};

/// A button offered next to a check run; the identifier is echoed back to the
/// publisher when the user clicks it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChecksAction {
    label: String,
    identifier: String,
    description: String,
}

impl ChecksAction {
    pub fn new(
        label: impl Into<String>,
        identifier: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let label = label.into();
        let identifier = identifier.into();
        if label.trim().is_empty() {
            return Err(ChecksError::BlankField { field: "label" });
        }
        if identifier.trim().is_empty() {
            return Err(ChecksError::BlankField {
                field: "identifier",
            });
        }

        Ok(Self {
            label,
            identifier,
            description: description.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_triple() {
        let action = ChecksAction::new("Re-run", "rerun", "Run the build again").unwrap();
        assert_eq!(action.label(), "Re-run");
        assert_eq!(action.identifier(), "rerun");
        assert_eq!(action.description(), "Run the build again");
    }

    #[test]
    fn test_blank_label_or_identifier_rejected() {
        assert_eq!(
            ChecksAction::new(" ", "rerun", "").unwrap_err(),
            ChecksError::BlankField { field: "label" }
        );
        assert_eq!(
            ChecksAction::new("Re-run", "", "").unwrap_err(),
            ChecksError::BlankField {
                field: "identifier"
            }
        );
    }
}

use inquire::{InquireError, Text};
use serde::Serialize;

use crate::{DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME, DEFAULT_VERSION};

/// Metadata collected for the scaffolded project, later merged into its
/// manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("operation cancelled")]
    Cancelled,
    #[error(transparent)]
    Backend(#[from] InquireError),
}

/// Source of project metadata. The binary talks to the terminal through
/// [`InquirePrompter`]; tests substitute scripted implementations.
pub trait Prompter {
    /// Collects name, version and description, in that order. A
    /// `preset_name` skips the name prompt and is used verbatim.
    fn collect(&self, preset_name: Option<&str>) -> Result<ProjectMetadata, PromptError>;
}

pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn collect(&self, preset_name: Option<&str>) -> Result<ProjectMetadata, PromptError> {
        let name = match preset_name {
            Some(name) => name.to_string(),
            None => ask("Project name:", DEFAULT_PROJECT_NAME)?,
        };
        let version = ask("Version:", DEFAULT_VERSION)?;
        let description = ask("Description:", DEFAULT_DESCRIPTION)?;

        Ok(ProjectMetadata {
            name,
            version,
            description,
        })
    }
}

fn ask(message: &str, default: &str) -> Result<String, PromptError> {
    Text::new(message)
        .with_default(default)
        .prompt()
        .map_err(cancel_aware)
}

// Esc and Ctrl-C both mean "abort the whole run"; everything else is a
// terminal backend failure.
fn cancel_aware(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled
        }
        other => PromptError::Backend(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_interrupt_map_to_cancelled() {
        assert!(matches!(
            cancel_aware(InquireError::OperationCanceled),
            PromptError::Cancelled
        ));
        assert!(matches!(
            cancel_aware(InquireError::OperationInterrupted),
            PromptError::Cancelled
        ));
    }

    #[test]
    fn other_failures_stay_backend_errors() {
        let err = cancel_aware(InquireError::NotTTY);
        assert!(matches!(err, PromptError::Backend(_)));
    }
}

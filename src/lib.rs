pub mod app;
pub mod args;
pub mod banner;
pub mod fetch;
mod log;
pub mod manifest;
pub mod prompt;

/// Remote template source as an `owner/repo` GitHub slug. Fixed on purpose:
/// the tool scaffolds exactly one starter and is not a template registry.
pub const TEMPLATE_REPO: &str = "Demonjsj/vue-template";

/// The one file rewritten after the template lands in the destination.
pub const MANIFEST_FILE: &str = "package.json";

pub const DEFAULT_PROJECT_NAME: &str = "vue-project";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_DESCRIPTION: &str = "a web project template with vue3";

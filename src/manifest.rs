use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use crate::{prompt::ProjectMetadata, MANIFEST_FILE};

/// Overlays the collected metadata onto the scaffolded `package.json`.
///
/// `name`, `version` and `description` are overwritten in place; every other
/// key keeps its value and position. The file is rewritten tab-indented, so
/// a second patch with identical metadata is byte-identical.
///
/// # Errors
///
/// Returns an error if the manifest is missing, not a JSON object, or cannot
/// be written back. A project without a valid manifest is not a viable
/// scaffold result, so callers treat this as fatal.
pub fn patch(dest: &Path, meta: &ProjectMetadata) -> Result<()> {
    let path = dest.join(MANIFEST_FILE);

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read manifest at {}", path.display()))?;

    let mut manifest: Value = serde_json::from_str(&raw)
        .with_context(|| format!("manifest at {} is not valid JSON", path.display()))?;

    let fields = manifest
        .as_object_mut()
        .with_context(|| format!("manifest at {} is not a JSON object", path.display()))?;

    let overlay = serde_json::to_value(meta).context("failed to serialize project metadata")?;
    if let Value::Object(overlay) = overlay {
        for (key, value) in overlay {
            fields.insert(key, value);
        }
    }

    fs::write(&path, to_tab_indented(&manifest)?)
        .with_context(|| format!("failed to write manifest at {}", path.display()))
}

// Matches the upstream template's formatting: tabs, no trailing newline.
fn to_tab_indented(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));

    value
        .serialize(&mut ser)
        .context("failed to serialize manifest")?;

    Ok(buf)
}

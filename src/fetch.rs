use std::{path::Path, process::Command};

use anyhow::{bail, Context, Result};

use crate::TEMPLATE_REPO;

/// Retrieves and unpacks the template into a destination directory.
///
/// Exactly one outcome per call: on success the destination contains the
/// template's file tree, on failure the error describes the cause. Cleanup
/// of a partially written destination is not attempted.
pub trait Fetcher {
    fn fetch(&self, dest: &Path) -> Result<()>;
}

/// Fetches the fixed GitHub template repository with a shallow `git clone`.
pub struct GitFetcher;

impl GitFetcher {
    fn clone_url() -> String {
        format!("https://github.com/{TEMPLATE_REPO}.git")
    }
}

impl Fetcher for GitFetcher {
    fn fetch(&self, dest: &Path) -> Result<()> {
        let output = Command::new("git")
            .arg("clone")
            .arg("--depth=1")
            .arg(Self::clone_url())
            .arg(dest)
            .output()
            .context("failed to run git, is it installed?")?;

        if !output.status.success() {
            bail!(
                "cloning {} failed: {}",
                TEMPLATE_REPO,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        // Only the template tree belongs in the destination, not its history.
        let git_dir = dest.join(".git");
        if git_dir.exists() {
            fs_extra::dir::remove(&git_dir)
                .with_context(|| format!("failed to remove {}", git_dir.display()))?;
        }

        Ok(())
    }
}

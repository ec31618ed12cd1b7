use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use std::process::Command;

use crate::config::{Config, PathMapping};

/// Pick the editor command: explicit override first, then the configured
/// editor, then `$VISUAL`, then `$EDITOR`, then `vi`.
pub fn resolve_editor(override_command: Option<&str>, config: &Config) -> String {
    resolve_editor_with(override_command, config, |name| env::var(name).ok())
}

/// `resolve_editor` with the environment lookup injected, for tests.
pub fn resolve_editor_with<F>(override_command: Option<&str>, config: &Config, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    override_command
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            config
                .editor
                .clone()
                .filter(|value| !value.trim().is_empty())
        })
        .or_else(|| lookup("VISUAL").filter(|value| !value.trim().is_empty()))
        .or_else(|| lookup("EDITOR").filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_string())
}

/// Translate `path` for the editor process according to the configured
/// mapping strategy.
pub fn map_path(path: &Path, config: &Config) -> String {
    let path = path.display().to_string();
    match config.path_mapping {
        PathMapping::None => path,
        PathMapping::Wsl => map_wsl_path(&path, &config.wsl_distro),
    }
}

/// `/mnt/<drive>/rest` becomes `<DRIVE>:/rest`; everything else is reached
/// through the `//wsl.localhost/<distro>` network share.
fn map_wsl_path(path: &str, distro: &str) -> String {
    if let Some(rest) = path.strip_prefix("/mnt/") {
        let mut parts = rest.splitn(2, '/');
        if let Some(drive) = parts.next() {
            if drive.len() == 1 && drive.chars().all(|c| c.is_ascii_alphabetic()) {
                let tail = parts.next().unwrap_or("");
                return format!("{}:/{}", drive.to_ascii_uppercase(), tail);
            }
        }
    }
    format!("//wsl.localhost/{distro}{path}")
}

/// Launch `command` on `path` through the shell and block until it exits.
/// The path is single-quoted; the command is taken as-is so values like
/// `code --wait` keep working.
pub fn launch_editor(command: &str, path: &str) -> Result<()> {
    let status = Command::new("sh")
        .arg("-lc")
        .arg(format!("{command} {}", shell_single_quote(path)))
        .status()
        .with_context(|| format!("Failed to run editor command `{command}`"))?;
    if !status.success() {
        bail!("Editor command `{command}` exited with {status}");
    }
    Ok(())
}

fn shell_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::path::Path;
use walkdir::WalkDir;

/// One directory entry as reported by the listing facility.
///
/// `detail` is an opaque rendition of the entry's metadata (permissions,
/// size, modification time, name). It is only ever compared for equality;
/// repeated listings of an unchanged directory yield equal sequences, and
/// any add/remove/rename/content change alters the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub detail: String,
}

/// List the immediate entries of `directory`, sorted by name, with hidden
/// entries excluded. Does not recurse.
pub fn capture_listing(directory: &Path) -> Result<Vec<EntryInfo>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to list directory {}", directory.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to read metadata for {}", entry.path().display()))?;
        let detail = detail_string(&name, &metadata);
        entries.push(EntryInfo { name, detail });
    }

    Ok(entries)
}

fn detail_string(name: &str, metadata: &Metadata) -> String {
    let modified = metadata.modified().map_or_else(
        |_| "-".to_string(),
        |time| {
            DateTime::<Local>::from(time)
                .format("%Y-%m-%d %H:%M:%S%.3f")
                .to_string()
        },
    );
    format!(
        "{} {} {} {}",
        permissions_field(metadata),
        metadata.len(),
        modified,
        name
    )
}

#[cfg(unix)]
fn permissions_field(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    format!("{:06o}", metadata.permissions().mode())
}

#[cfg(not(unix))]
fn permissions_field(metadata: &Metadata) -> String {
    if metadata.permissions().readonly() {
        "ro".to_string()
    } else {
        "rw".to_string()
    }
}

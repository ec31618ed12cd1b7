use std::fs;
use std::path::Path;

use crate::plan::{ApplyReport, RenameOutcome, RenamePlan};

/// Execute a validated plan against `directory`: rename every changed entry
/// in snapshot order, best-effort. A failed entry is recorded and the batch
/// keeps going; nothing is rolled back.
///
/// The target name is checked before each rename so an occupied name is
/// reported as a collision instead of being clobbered, which `fs::rename`
/// would happily do on Unix.
pub fn execute_plan(directory: &Path, plan: &RenamePlan) -> ApplyReport {
    let mut outcomes = Vec::new();

    for entry in plan.changes() {
        let source = directory.join(&entry.old_name);
        let target = directory.join(&entry.new_name);

        let error = if target.exists() {
            Some(format!("target already exists: {}", entry.new_name))
        } else {
            fs::rename(&source, &target).err().map(|e| e.to_string())
        };

        outcomes.push(RenameOutcome {
            old_name: entry.old_name.clone(),
            new_name: entry.new_name.clone(),
            error,
        });
    }

    ApplyReport { outcomes }
}

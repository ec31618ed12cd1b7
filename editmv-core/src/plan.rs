/// One positional pairing of a snapshot name with its proposed replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub old_name: String,
    pub new_name: String,
}

impl PlanEntry {
    /// An entry whose proposed name equals the original is never renamed.
    pub fn is_noop(&self) -> bool {
        self.old_name == self.new_name
    }
}

/// The validated rename plan: snapshot names zipped positionally with the
/// lines of the edit file. Ordering follows the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub entries: Vec<PlanEntry>,
}

impl RenamePlan {
    /// Pair up old and new names by position. Callers guarantee equal
    /// lengths; validation rejects mismatched counts before a plan exists.
    pub fn from_names(old_names: &[String], new_names: &[String]) -> Self {
        let entries = old_names
            .iter()
            .zip(new_names)
            .map(|(old, new)| PlanEntry {
                old_name: old.clone(),
                new_name: new.clone(),
            })
            .collect();
        Self { entries }
    }

    /// The entries that actually rename something.
    pub fn changes(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|entry| !entry.is_noop())
    }

    pub fn change_count(&self) -> usize {
        self.changes().count()
    }
}

/// Outcome of one attempted rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub old_name: String,
    pub new_name: String,
    /// `None` on success, otherwise the reported failure.
    pub error: Option<String>,
}

impl RenameOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-entry results of a best-effort apply pass, in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcomes: Vec<RenameOutcome>,
}

impl ApplyReport {
    pub fn renamed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.renamed()
    }
}

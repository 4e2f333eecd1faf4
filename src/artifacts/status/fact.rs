use derive_new::new;
use std::path::PathBuf;

/// A fact record violating its stated invariants.
///
/// A wrong classification would mislead the user about repository safety
/// (e.g. mask an unresolved conflict), so malformed input is rejected early
/// instead of being coerced into some nearby valid record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("untracked file {0:?} cannot be in conflict or marked resolved")]
    UntrackedConflictState(PathBuf),
    #[error("tracked file {0:?} exists neither in the local repo nor in the working directory")]
    AbsentEverywhere(PathBuf),
    #[error("merge and rebase cannot both be in progress")]
    ConcurrentOperations,
}

/// Everything the provider knows about one path, for one invocation.
///
/// The provider is the sole authority on every flag here; the core only
/// classifies. Records are immutable for the duration of classification.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileFact {
    /// Repository-relative path, unique within one invocation.
    pub path: PathBuf,
    pub tracked: bool,
    /// Present in the last-committed snapshot.
    pub exists_in_repo: bool,
    pub exists_in_working_dir: bool,
    pub in_conflict: bool,
    /// Previously conflicting, explicitly marked resolved by the user.
    pub resolved: bool,
    /// Gates entry into the tracked-with-modifications bucket.
    pub modified: bool,
}

impl FileFact {
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if !self.tracked && (self.in_conflict || self.resolved) {
            return Err(InvariantViolation::UntrackedConflictState(self.path.clone()));
        }

        if self.tracked && !self.exists_in_repo && !self.exists_in_working_dir {
            return Err(InvariantViolation::AbsentEverywhere(self.path.clone()));
        }

        Ok(())
    }
}

/// Seam towards the fact-producing oracle.
///
/// An empty filter means "all paths". Each invocation must query its own
/// isolated snapshot; the core never caches facts across invocations.
pub trait FactSource {
    fn query_facts(&self, path_filter: &[PathBuf]) -> anyhow::Result<Vec<FileFact>>;
}

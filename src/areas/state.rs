use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const CONTROL_DIR: &str = ".glint";

const HEAD_FILE: &str = "HEAD";
const TRACKED_FILE: &str = "TRACKED";
const CONFLICTS_FILE: &str = "CONFLICTS";
const RESOLVED_FILE: &str = "RESOLVED";
const MERGE_MARKER: &str = "MERGE_IN_PROGRESS";
const REBASE_MARKER: &str = "REBASE_IN_PROGRESS";
const SNAPSHOT_DIR: &str = "snapshot";

/// Read-only view over the control directory maintained by the engine.
///
/// The engine owns this state; glint only reads the per-path booleans and
/// markers it exposes. Missing bookkeeping files mean "empty set", a missing
/// HEAD is an error.
#[derive(Debug)]
pub struct EngineState {
    path: Box<Path>,
}

impl EngineState {
    pub fn new(path: Box<Path>) -> Self {
        EngineState { path }
    }

    pub fn branch_name(&self) -> anyhow::Result<String> {
        let head_path = self.path.join(HEAD_FILE);
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read current branch from {:?}", head_path))?;

        let branch = content.trim();
        if branch.is_empty() {
            anyhow::bail!("no current branch recorded in {:?}", head_path);
        }

        Ok(branch.to_string())
    }

    pub fn tracked_paths(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        self.read_path_list(TRACKED_FILE)
    }

    pub fn conflict_paths(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        self.read_path_list(CONFLICTS_FILE)
    }

    pub fn resolved_paths(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        self.read_path_list(RESOLVED_FILE)
    }

    pub fn merge_in_progress(&self) -> bool {
        self.path.join(MERGE_MARKER).exists()
    }

    pub fn rebase_in_progress(&self) -> bool {
        self.path.join(REBASE_MARKER).exists()
    }

    /// All paths present in the last-committed snapshot.
    pub fn snapshot_paths(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        let snapshot_root = self.path.join(SNAPSHOT_DIR);
        if !snapshot_root.is_dir() {
            return Ok(BTreeSet::new());
        }

        let mut paths = BTreeSet::new();
        for entry in WalkDir::new(&snapshot_root) {
            let entry = entry?;
            if entry.file_type().is_file() {
                paths.insert(entry.path().strip_prefix(&snapshot_root)?.to_path_buf());
            }
        }

        Ok(paths)
    }

    pub fn read_snapshot_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let full_path = self.path.join(SNAPSHOT_DIR).join(file_path);

        std::fs::read(&full_path)
            .with_context(|| format!("failed to read snapshot copy of {:?}", file_path))
    }

    fn read_path_list(&self, file: &str) -> anyhow::Result<BTreeSet<PathBuf>> {
        let list_path = self.path.join(file);
        if !list_path.exists() {
            return Ok(BTreeSet::new());
        }

        let content = std::fs::read_to_string(&list_path)
            .with_context(|| format!("failed to read path list {:?}", list_path))?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}

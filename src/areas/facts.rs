use crate::areas::state::EngineState;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::fact::{FactSource, FileFact};
use derive_new::new;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Fact provider backed by the working copy and the engine's control
/// directory.
///
/// The fact universe is the union of tracked paths, snapshot paths and
/// working directory paths. Borrows its collaborators, so each invocation
/// gets a fresh, isolated snapshot of facts.
#[derive(new)]
pub struct WorkingCopyFacts<'r> {
    state: &'r EngineState,
    workspace: &'r Workspace,
}

impl WorkingCopyFacts<'_> {
    fn is_modified(
        &self,
        path: &Path,
        exists_in_repo: bool,
        exists_in_working_dir: bool,
        in_conflict: bool,
        resolved: bool,
    ) -> anyhow::Result<bool> {
        if !exists_in_repo || !exists_in_working_dir || in_conflict || resolved {
            return Ok(true);
        }

        // plain byte equality against the snapshot copy, not a diff
        Ok(self.workspace.read_file(path)? != self.state.read_snapshot_file(path)?)
    }
}

fn matches_filter(path: &Path, path_filter: &[PathBuf]) -> bool {
    path_filter.is_empty()
        || path_filter
            .iter()
            .any(|filter| path == filter || path.starts_with(filter))
}

impl FactSource for WorkingCopyFacts<'_> {
    fn query_facts(&self, path_filter: &[PathBuf]) -> anyhow::Result<Vec<FileFact>> {
        let tracked = self.state.tracked_paths()?;
        let conflicts = self.state.conflict_paths()?;
        let resolved = self.state.resolved_paths()?;
        let snapshot = self.state.snapshot_paths()?;
        let working = self
            .workspace
            .list_files()?
            .into_iter()
            .collect::<BTreeSet<_>>();

        let universe = tracked
            .iter()
            .chain(snapshot.iter())
            .chain(working.iter())
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut facts = Vec::new();

        for path in universe {
            if !matches_filter(&path, path_filter) {
                continue;
            }

            let exists_in_repo = snapshot.contains(&path);
            let exists_in_working_dir = working.contains(&path);

            // a stale tracked entry with no file on either side is not a fact
            if !exists_in_repo && !exists_in_working_dir {
                continue;
            }

            let is_tracked = tracked.contains(&path);
            let in_conflict = is_tracked && conflicts.contains(&path);
            let is_resolved = is_tracked && !in_conflict && resolved.contains(&path);
            let modified = is_tracked
                && self.is_modified(
                    &path,
                    exists_in_repo,
                    exists_in_working_dir,
                    in_conflict,
                    is_resolved,
                )?;

            facts.push(FileFact::new(
                path,
                is_tracked,
                exists_in_repo,
                exists_in_working_dir,
                in_conflict,
                is_resolved,
                modified,
            ));
        }

        Ok(facts)
    }
}

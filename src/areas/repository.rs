use crate::areas::facts::WorkingCopyFacts;
use crate::areas::state::{CONTROL_DIR, EngineState};
use crate::areas::workspace::Workspace;
use crate::artifacts::status::fact::InvariantViolation;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Repository {
    path: Box<Path>,
    relative_cwd: PathBuf,
    writer: RefCell<Box<dyn Write>>,
    state: EngineState,
    workspace: Workspace,
}

impl Repository {
    /// Walks up from `start` to the nearest ancestor holding a control
    /// directory.
    pub fn discover(start: &Path, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        let start = start.canonicalize()?;
        let mut current = start.as_path();

        loop {
            if current.join(CONTROL_DIR).is_dir() {
                return Self::open(current, &start, writer);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => anyhow::bail!(
                    "not in a glint repository (or any parent up to the filesystem root): {:?}",
                    start
                ),
            }
        }
    }

    fn open(root: &Path, cwd: &Path, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        let relative_cwd = cwd.strip_prefix(root)?.to_path_buf();
        let state = EngineState::new(root.join(CONTROL_DIR).into_boxed_path());
        let workspace = Workspace::new(root.to_path_buf().into_boxed_path());

        Ok(Repository {
            path: root.to_path_buf().into_boxed_path(),
            relative_cwd,
            writer: RefCell::new(writer),
            state,
            workspace,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn facts(&'_ self) -> WorkingCopyFacts<'_> {
        WorkingCopyFacts::new(&self.state, &self.workspace)
    }

    /// Fresh context snapshot for this invocation.
    pub fn context(&self) -> anyhow::Result<RepositoryContext> {
        RepositoryContext::try_new(
            self.state.branch_name()?,
            self.path.to_path_buf(),
            self.relative_cwd.clone(),
            self.state.merge_in_progress(),
            self.state.rebase_in_progress(),
        )
    }

    /// Rebase user-supplied paths onto the repository root.
    pub fn repo_relative(&self, paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
        paths
            .iter()
            .map(|path| {
                if path.is_absolute() {
                    match path.strip_prefix(self.path.as_ref()) {
                        Ok(relative) => Ok(relative.to_path_buf()),
                        Err(_) => anyhow::bail!(
                            "path {:?} is outside the repository at {:?}",
                            path,
                            self.path
                        ),
                    }
                } else {
                    Ok(self.relative_cwd.join(path))
                }
            })
            .collect()
    }
}

/// Read-only snapshot of the repository-wide state, constructed fresh per
/// invocation.
#[derive(Debug, Clone)]
pub struct RepositoryContext {
    branch_name: String,
    working_directory: PathBuf,
    relative_cwd: PathBuf,
    merge_in_progress: bool,
    rebase_in_progress: bool,
}

impl RepositoryContext {
    pub fn try_new(
        branch_name: String,
        working_directory: PathBuf,
        relative_cwd: PathBuf,
        merge_in_progress: bool,
        rebase_in_progress: bool,
    ) -> anyhow::Result<Self> {
        // the engine runs one history-changing operation at a time; both
        // markers at once means corrupted state, not a preamble choice
        if merge_in_progress && rebase_in_progress {
            return Err(InvariantViolation::ConcurrentOperations.into());
        }

        Ok(RepositoryContext {
            branch_name,
            working_directory,
            relative_cwd,
            merge_in_progress,
            rebase_in_progress,
        })
    }

    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Invocation directory relative to the repository root; empty at the
    /// root itself.
    pub fn relative_cwd(&self) -> &Path {
        &self.relative_cwd
    }

    /// Name of the conflict-producing operation currently in flight, if any.
    pub fn pending_operation(&self) -> Option<&'static str> {
        if self.merge_in_progress {
            Some("merge")
        } else if self.rebase_in_progress {
            Some("rebase")
        } else {
            None
        }
    }
}

use crate::common::file::{FileSpec, write_file};
use crate::common::{redirect_temp_dir, state};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn glint_repository_dir(repository_dir: TempDir) -> TempDir {
    state::init_engine(repository_dir.path(), "master");

    repository_dir
}

/// Repository with three clean, committed, tracked files:
/// `1.txt`, `a/2.txt` and `a/b/3.txt`.
#[fixture]
pub fn committed_repository_dir(glint_repository_dir: TempDir) -> TempDir {
    let root = glint_repository_dir.path();

    for (path, content) in [("1.txt", "one"), ("a/2.txt", "two"), ("a/b/3.txt", "three")] {
        write_file(FileSpec::new(root.join(path), content.to_string()));
        state::snapshot(root, path, content);
        state::track(root, path);
    }

    glint_repository_dir
}

pub fn run_glint_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("glint").expect("Failed to find glint binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn glint_status(dir: &Path) -> Command {
    run_glint_command(dir, &["status"])
}

pub fn stdout_of(command: &mut Command) -> String {
    let assertion = command.assert().success();
    let stdout = assertion.get_output().stdout.clone();

    String::from_utf8(stdout).expect("Command output was not valid UTF-8")
}

/// The report for a quiet repository on `master`, with both placeholder
/// sections.
pub fn empty_report() -> String {
    report_with(
        "#     There are no tracked files with modifications to list\n",
        "#     There are no untracked files to list\n",
    )
}

/// Assembles a full expected report from the item lines of each section.
pub fn report_with(tracked_items: &str, untracked_items: &str) -> String {
    format!(
        "\
# On branch master, repo-directory //
#
# Tracked files with modifications:
#   (these will be automatically considered for commit)
#   (use glint untrack <f> if you don't want to track changes to file f)
#   (if file f was committed before, use glint checkout <f> to discard local changes)
#
{tracked_items}\
#
#
# Untracked files:
#   (these won't be considered for commit)
#   (use glint track <f> if you want to track changes to file f)
#
{untracked_items}"
    )
}

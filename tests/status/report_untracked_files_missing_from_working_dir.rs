use crate::common::command::{committed_repository_dir, glint_status, report_with, stdout_of};
use crate::common::state;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_untracked_files_missing_from_working_dir(committed_repository_dir: TempDir) {
    let root = committed_repository_dir.path();
    state::snapshot(root, "ghost.txt", "committed once");

    let expected = report_with(
        "#     There are no tracked files with modifications to list\n",
        "#     ghost.txt (exists in local repo but not in working directory)\n",
    );
    let actual = stdout_of(&mut glint_status(root));

    assert_eq!(actual, expected);
}

use crate::common::command::{committed_repository_dir, glint_status, report_with, stdout_of};
use crate::common::state;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_conflicts(committed_repository_dir: TempDir) {
    let root = committed_repository_dir.path();
    state::mark_conflict(root, "a/2.txt");

    let expected = report_with(
        "#     a/2.txt (with conflicts)\n",
        "#     There are no untracked files to list\n",
    );
    let actual = stdout_of(&mut glint_status(root));

    assert_eq!(actual, expected);
}

use crate::common::command::{committed_repository_dir, empty_report, glint_status, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_placeholders_when_no_files_are_changed(committed_repository_dir: TempDir) {
    let root = committed_repository_dir.path();

    let actual = stdout_of(&mut glint_status(root));

    assert_eq!(actual, empty_report());
}

use crate::common::command::{committed_repository_dir, report_with, run_glint_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn filter_status_by_path(committed_repository_dir: TempDir) {
    let root = committed_repository_dir.path();
    write_file(FileSpec::new(root.join("1.txt"), "one, revised".to_string()));
    write_file(FileSpec::new(
        root.join("a").join("2.txt"),
        "two, revised".to_string(),
    ));

    // only changes under `a` are reported
    let expected = report_with(
        "#     a/2.txt\n",
        "#     There are no untracked files to list\n",
    );
    let actual = stdout_of(&mut run_glint_command(root, &["status", "a"]));

    assert_eq!(actual, expected);
}

use crate::common::command::{committed_repository_dir, glint_status, report_with, stdout_of};
use crate::common::file::{FileSpec, write_file};
use crate::common::state;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

// Existence beats conflict state: a file that is both new and in conflict
// reports as new.
#[rstest]
fn report_new_file_in_conflict_as_new(committed_repository_dir: TempDir) {
    let root = committed_repository_dir.path();
    write_file(FileSpec::new(root.join("fresh.txt"), "<<<<<<<".to_string()));
    state::track(root, "fresh.txt");
    state::mark_conflict(root, "fresh.txt");

    let expected = report_with(
        "#     fresh.txt (new file)\n",
        "#     There are no untracked files to list\n",
    );
    let actual = stdout_of(&mut glint_status(root));

    assert_eq!(actual, expected);
}

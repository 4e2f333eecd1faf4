use crate::common::command::{committed_repository_dir, glint_status, report_with, stdout_of};
use crate::common::file::write_generated_files;
use crate::common::state;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
fn list_files_in_name_order(committed_repository_dir: TempDir) {
    let root = committed_repository_dir.path();
    // generated names may repeat; the report lists each path once
    let names = write_generated_files(root, 5)
        .iter()
        .map(|spec| {
            spec.path
                .file_name()
                .expect("Generated file has no name")
                .to_string_lossy()
                .to_string()
        })
        .collect::<BTreeSet<_>>();
    for name in &names {
        state::track(root, name);
    }

    let tracked_items = names
        .iter()
        .map(|name| format!("#     {name} (new file)\n"))
        .collect::<String>();
    let expected = report_with(
        &tracked_items,
        "#     There are no untracked files to list\n",
    );
    let actual = stdout_of(&mut glint_status(root));

    assert_eq!(actual, expected);
}

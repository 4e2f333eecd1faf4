use crate::common::command::{committed_repository_dir, run_glint_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_when_path_is_outside_the_repository(committed_repository_dir: TempDir) {
    let root = committed_repository_dir.path();

    run_glint_command(root, &["status", "/somewhere/else/1.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the repository"));
}

use crate::artifacts::status::classifier::{ClassifiedFile, classify};
use crate::artifacts::status::fact::FileFact;

/// The two ordered sequences the renderer consumes.
///
/// Empty buckets are ordinary values; "nothing to list" is a rendering
/// concern, not an aggregation error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub tracked_modified: Vec<ClassifiedFile>,
    pub untracked: Vec<ClassifiedFile>,
}

/// Validates, partitions, classifies and orders the fact records.
///
/// Tracked files only enter the report when the provider flagged them as
/// modified; clean tracked files are dropped entirely.
pub fn aggregate(facts: &[FileFact]) -> anyhow::Result<StatusReport> {
    for fact in facts {
        fact.validate()?;
    }

    let mut report = StatusReport::default();

    for fact in facts {
        if fact.tracked {
            if fact.modified {
                report.tracked_modified.push(classify(fact));
            }
        } else {
            report.untracked.push(classify(fact));
        }
    }

    sort_by_path(&mut report.tracked_modified);
    sort_by_path(&mut report.untracked);

    Ok(report)
}

// Byte order on the path string, not component order: "a.txt" sorts before
// "a/b.txt" because '.' < '/'.
fn sort_by_path(bucket: &mut [ClassifiedFile]) {
    bucket.sort_by(|a, b| {
        a.path
            .as_os_str()
            .as_encoded_bytes()
            .cmp(b.path.as_os_str().as_encoded_bytes())
    });
}

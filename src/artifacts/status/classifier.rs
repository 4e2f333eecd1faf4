use crate::artifacts::status::fact::FileFact;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TrackedModified,
    Untracked,
}

/// Abstract visual weight of a report entry.
///
/// The classifier decides the tag; the rendering strategy decides what a tag
/// looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    New,
    Deleted,
    Conflict,
    Resolved,
    Plain,
    ExistsBoth,
    ExistsElsewhere,
    PlainUntracked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub category: Category,
    pub emphasis: Emphasis,
    pub label: &'static str,
}

type Predicate = fn(&FileFact) -> bool;

struct Rule {
    applies: Predicate,
    emphasis: Emphasis,
    label: &'static str,
}

// The rule order is part of the report's meaning and must not be touched:
// existence mismatches are more actionable than conflict state, so a file
// that is both new and in conflict reports as new.
const TRACKED_RULES: [Rule; 4] = [
    Rule {
        applies: |fact| !fact.exists_in_repo,
        emphasis: Emphasis::New,
        label: "(new file)",
    },
    Rule {
        applies: |fact| !fact.exists_in_working_dir,
        emphasis: Emphasis::Deleted,
        label: "(deleted)",
    },
    Rule {
        applies: |fact| fact.in_conflict,
        emphasis: Emphasis::Conflict,
        label: "(with conflicts)",
    },
    Rule {
        applies: |fact| fact.resolved,
        emphasis: Emphasis::Resolved,
        label: "(conflicts resolved)",
    },
];

const TRACKED_FALLBACK: (Emphasis, &str) = (Emphasis::Plain, "");

const UNTRACKED_RULES: [Rule; 2] = [
    Rule {
        applies: |fact| fact.exists_in_repo && fact.exists_in_working_dir,
        emphasis: Emphasis::ExistsBoth,
        label: "(exists in local repo)",
    },
    Rule {
        applies: |fact| fact.exists_in_repo && !fact.exists_in_working_dir,
        emphasis: Emphasis::ExistsElsewhere,
        label: "(exists in local repo but not in working directory)",
    },
];

const UNTRACKED_FALLBACK: (Emphasis, &str) = (Emphasis::PlainUntracked, "");

/// Maps one fact record to exactly one report entry.
///
/// Pure and total: every record yields an entry, and the first matching rule
/// of the relevant table wins.
pub fn classify(fact: &FileFact) -> ClassifiedFile {
    let (category, rules, fallback) = if fact.tracked {
        (Category::TrackedModified, &TRACKED_RULES[..], TRACKED_FALLBACK)
    } else {
        (Category::Untracked, &UNTRACKED_RULES[..], UNTRACKED_FALLBACK)
    };

    let (emphasis, label) = rules
        .iter()
        .find(|rule| (rule.applies)(fact))
        .map(|rule| (rule.emphasis, rule.label))
        .unwrap_or(fallback);

    ClassifiedFile {
        path: fact.path.clone(),
        category,
        emphasis,
        label,
    }
}

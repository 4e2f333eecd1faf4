use crate::areas::repository::RepositoryContext;
use crate::artifacts::status::aggregator::StatusReport;
use crate::artifacts::status::classifier::{ClassifiedFile, Emphasis};
use colored::Colorize;
use derive_new::new;
use std::io::Write;

/// Maps the classifier's abstract emphasis tags to presentation text.
///
/// Classification never touches colors; swapping the strategy swaps the whole
/// look of the report without going near the decision tables.
pub trait StyleStrategy {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String;

    /// Highlight for the branch name and repo directory in the header.
    fn accent(&self, text: &str) -> String;
}

pub struct TerminalStyle;

impl StyleStrategy for TerminalStyle {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String {
        let colored = match emphasis {
            Emphasis::New => text.green(),
            Emphasis::Deleted => text.red(),
            Emphasis::Conflict => text.cyan(),
            Emphasis::Resolved | Emphasis::Plain => text.yellow(),
            Emphasis::ExistsBoth | Emphasis::ExistsElsewhere => text.magenta(),
            Emphasis::PlainUntracked => text.blue(),
        };

        colored.to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.green().to_string()
    }
}

pub struct PlainStyle;

impl StyleStrategy for PlainStyle {
    fn paint(&self, _emphasis: Emphasis, text: &str) -> String {
        text.to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Prints the grouped report in commit-template style (every line starts
/// with `#`).
#[derive(new)]
pub struct Reporter<'s> {
    style: &'s dyn StyleStrategy,
}

impl Reporter<'_> {
    pub fn render(
        &self,
        writer: &mut dyn Write,
        context: &RepositoryContext,
        report: &StatusReport,
    ) -> anyhow::Result<()> {
        self.msg(
            writer,
            &format!(
                "On branch {}, repo-directory {}",
                self.style.accent(context.branch_name()),
                self.style
                    .accent(&format!("//{}", context.relative_cwd().display())),
            ),
        )?;

        if let Some(operation) = context.pending_operation() {
            self.blank(writer)?;
            self.conflict_exp(writer, operation)?;
        }

        self.blank(writer)?;
        self.tracked_section(writer, &report.tracked_modified)?;
        self.blank(writer)?;
        self.blank(writer)?;
        self.untracked_section(writer, &report.untracked)?;

        Ok(())
    }

    fn conflict_exp(&self, writer: &mut dyn Write, operation: &str) -> anyhow::Result<()> {
        self.msg(
            writer,
            &format!(
                "You are in the middle of a {operation}; all conflicts must be resolved before committing"
            ),
        )?;
        self.exp(
            writer,
            &format!("use glint {operation} --abort to go back to the state before the {operation}"),
        )?;
        self.exp(writer, "use glint resolve <f> to mark file f as resolved")?;
        self.exp(writer, "once you solved all conflicts do glint commit to continue")?;
        self.blank(writer)
    }

    fn tracked_section(&self, writer: &mut dyn Write, files: &[ClassifiedFile]) -> anyhow::Result<()> {
        self.msg(writer, "Tracked files with modifications:")?;
        self.exp(writer, "these will be automatically considered for commit")?;
        self.exp(
            writer,
            "use glint untrack <f> if you don't want to track changes to file f",
        )?;
        self.exp(
            writer,
            "if file f was committed before, use glint checkout <f> to discard local changes",
        )?;
        self.blank(writer)?;

        if files.is_empty() {
            self.item(writer, "There are no tracked files with modifications to list", "")?;
        } else {
            for file in files {
                self.file_item(writer, file)?;
            }
        }

        Ok(())
    }

    fn untracked_section(&self, writer: &mut dyn Write, files: &[ClassifiedFile]) -> anyhow::Result<()> {
        self.msg(writer, "Untracked files:")?;
        self.exp(writer, "these won't be considered for commit")?;
        self.exp(
            writer,
            "use glint track <f> if you want to track changes to file f",
        )?;
        self.blank(writer)?;

        if files.is_empty() {
            self.item(writer, "There are no untracked files to list", "")?;
        } else {
            for file in files {
                self.file_item(writer, file)?;
            }
        }

        Ok(())
    }

    fn file_item(&self, writer: &mut dyn Write, file: &ClassifiedFile) -> anyhow::Result<()> {
        let painted = self
            .style
            .paint(file.emphasis, &file.path.display().to_string());
        let opt_text = if file.label.is_empty() {
            String::new()
        } else {
            format!(" {}", file.label)
        };

        self.item(writer, &painted, &opt_text)
    }

    fn msg(&self, writer: &mut dyn Write, text: &str) -> anyhow::Result<()> {
        writeln!(writer, "# {text}")?;
        Ok(())
    }

    fn exp(&self, writer: &mut dyn Write, text: &str) -> anyhow::Result<()> {
        writeln!(writer, "#   ({text})")?;
        Ok(())
    }

    fn item(&self, writer: &mut dyn Write, text: &str, opt_text: &str) -> anyhow::Result<()> {
        writeln!(writer, "#     {text}{opt_text}")?;
        Ok(())
    }

    fn blank(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(writer, "#")?;
        Ok(())
    }
}

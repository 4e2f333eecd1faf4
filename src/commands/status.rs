use crate::areas::repository::Repository;
use crate::artifacts::status::aggregator::aggregate;
use crate::artifacts::status::fact::FactSource;
use crate::artifacts::status::report::{Reporter, StyleStrategy};
use std::path::PathBuf;

impl Repository {
    /// One context read, one fact query, one classify-and-sort pass, then
    /// rendering. No state survives the invocation.
    pub fn status(&mut self, paths: &[PathBuf], style: &dyn StyleStrategy) -> anyhow::Result<()> {
        let context = self.context()?;
        let path_filter = self.repo_relative(paths)?;
        let facts = self.facts().query_facts(&path_filter)?;
        let report = aggregate(&facts)?;

        let reporter = Reporter::new(style);
        let mut writer = self.writer();

        reporter.render(&mut **writer, &context, &report)
    }
}

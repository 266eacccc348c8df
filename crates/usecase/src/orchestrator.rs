use passphrase_checker_domain::Policy;
use passphrase_checker_ports::line_source::LineSource;
use passphrase_checker_shared_kernel::Result;

use crate::{counter::count_valid_passphrases, dto::PolicyReport};

pub struct CountValidPassphrases<'a> {
    source: &'a dyn LineSource,
}

impl<'a> CountValidPassphrases<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    /// Read the input and count it under `policy`.
    pub fn run(&self, policy: Policy) -> Result<PolicyReport> {
        let lines = self.source.read_lines()?;
        let valid = count_valid_passphrases(&lines, policy);
        log::info!("{policy}: {valid} of {} line(s) valid", lines.len());
        Ok(PolicyReport { policy, valid })
    }

    /// Run every policy in report order.
    ///
    /// Each policy reads the input on its own; the first failure stops the
    /// remaining policies from running.
    pub fn run_all(&self) -> Result<Vec<PolicyReport>> {
        Policy::ALL.into_iter().map(|policy| self.run(policy)).collect()
    }
}

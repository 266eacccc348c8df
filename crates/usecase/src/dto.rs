use passphrase_checker_domain::Policy;
use passphrase_checker_shared_kernel::PassphraseCount;
use serde::Serialize;

/// Result of counting one input under one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyReport {
    pub policy: Policy,
    pub valid: PassphraseCount,
}

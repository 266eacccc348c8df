// crates/domain/src/policy.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::{GeneralRules, PassphraseRules, VariantRules};

/// Selects which [`PassphraseRules`] implementation validates a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    General,
    Variant,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Self; 2] = [Self::General, Self::Variant];

    /// Heading printed above the policy's total.
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Variant => "VARIANT",
        }
    }

    /// Resolve the rule set once; callers keep the reference for a whole run.
    pub fn rules(self) -> &'static dyn PassphraseRules {
        match self {
            Self::General => &GeneralRules,
            Self::Variant => &VariantRules,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `line` is a valid passphrase under `policy`.
pub fn is_valid_passphrase(line: &str, policy: Policy) -> bool {
    policy.rules().validate(line)
}

use passphrase_checker_domain::{Policy, is_space};
use passphrase_checker_shared_kernel::PassphraseCount;

/// Count the lines that are valid passphrases under `policy`.
///
/// Each line is trimmed first; lines that are blank after trimming are
/// skipped. The rule set is resolved once for the whole sequence.
pub fn count_valid_passphrases<I, S>(lines: I, policy: Policy) -> PassphraseCount
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rules = policy.rules();
    let mut count = PassphraseCount::zero();
    for (index, raw) in lines.into_iter().enumerate() {
        let line = raw.as_ref().trim_matches(is_space);
        if line.is_empty() {
            continue;
        }
        match rules.diagnose(line) {
            None => count.increment(),
            Some(reason) => log::debug!("{policy}: line {} rejected ({reason}): {line:?}", index + 1),
        }
    }
    count
}

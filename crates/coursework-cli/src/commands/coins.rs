use std::io::Write;

use anyhow::Result;

use coursework_core::coins::OldCoinStash;

use crate::config::CoinConfig;

/// Apply the configured deposits and withdrawals, reporting rejected ones.
///
/// Returns the final stash.
pub fn run_coins<W: Write>(config: &CoinConfig, out: &mut W) -> Result<OldCoinStash> {
    let mut stash = OldCoinStash::new(config.owner.clone());
    writeln!(out, "{}", stash)?;

    for &(riksdaler, skilling) in &config.deposits {
        match stash.deposit(riksdaler, skilling) {
            Ok(()) => writeln!(out, "Deposited {} riksdaler and {} skilling.", riksdaler, skilling)?,
            Err(e) => {
                log::warn!("Deposit rejected: {}", e);
                writeln!(out, "Deposit rejected: {}.", e)?;
            }
        }
    }

    for &(riksdaler, skilling) in &config.withdrawals {
        match stash.withdraw(riksdaler, skilling) {
            Ok(()) => writeln!(out, "Withdrew {} riksdaler and {} skilling.", riksdaler, skilling)?,
            Err(e) => {
                log::warn!("Withdrawal rejected: {}", e);
                writeln!(out, "Withdrawal rejected: {}.", e)?;
            }
        }
    }

    writeln!(out, "{}", stash.check_balance())?;
    Ok(stash)
}

//! Fee Revenue Extraction
//!
//! The registry authority can withdraw accrued fee revenue — creation
//! payments and purchase overpayments. Withdrawals are bounded by
//! `fees_accrued`, so committed sale proceeds and the account's rent
//! reserve are out of reach.

use anchor_lang::prelude::*;

use crate::state::Config;
use crate::utils::transfer_lamports;

/// Event emitted when fee revenue is withdrawn
#[event]
pub struct FeesWithdrawn {
    pub authority: Pubkey,
    pub amount: u64,
}

/// Accounts for a fee withdrawal
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Registry authority
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Registry configuration; holds the fee treasury
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ WithdrawError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.config.fees_accrued,
            WithdrawError::InsufficientFees
        );

        self.config.fees_accrued -= amount;
        transfer_lamports(
            &self.config.to_account_info(),
            &self.authority.to_account_info(),
            amount,
        )?;

        emit!(FeesWithdrawn {
            authority: self.authority.key(),
            amount,
        });

        Ok(())
    }
}

#[error_code]
pub enum WithdrawError {
    #[msg("Only the registry authority can withdraw fees")]
    Unauthorized,
    #[msg("Amount exceeds accrued fee revenue")]
    InsufficientFees,
}

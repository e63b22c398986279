//! Registry Initialization
//!
//! Creates the singleton configuration account. The creation fee is fixed
//! here and cannot be changed afterwards.

use anchor_lang::prelude::*;

use crate::state::Config;

/// Accounts required for registry initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer (becomes the registry authority)
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Registry configuration account (created)
    #[account(
        init,
        payer = authority,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the registry configuration
    pub fn initialize(&mut self, creation_fee: u64, bumps: &InitializeBumps) -> Result<()> {
        self.config.set_inner(Config {
            authority: self.authority.key(),
            creation_fee,
            sale_count: 0,
            fees_accrued: 0,
            bump: bumps.config,
        });

        msg!("Registry initialized");
        msg!("Authority: {}", self.authority.key());
        msg!("Creation fee: {} lamports", creation_fee);

        Ok(())
    }
}

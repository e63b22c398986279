//! Closed-Sale Settlement
//!
//! Once a sale closes, anyone may trigger settlement. The registry's
//! entire remaining inventory of the token and the sale's accumulated
//! proceeds move to the creator in one instruction — there is no partial
//! payout, and a settled sale cannot pay out again.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::DECIMALS;
use crate::state::Sale;
use crate::utils::transfer_lamports;

/// Event emitted when a sale is settled
#[event]
pub struct SaleSettled {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub tokens_returned: u64,
    pub lamports_paid: u64,
}

/// Accounts for settlement
#[derive(Accounts)]
pub struct Settle<'info> {
    /// Anyone may trigger settlement; pays the rent for the creator's
    /// token account if it does not exist yet
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Sale being settled; holds the committed proceeds
    #[account(
        mut,
        seeds = [Sale::SEED, mint.key().as_ref()],
        bump = sale.bump,
    )]
    pub sale: Account<'info, Sale>,

    /// Mint of the token being sold
    pub mint: InterfaceAccount<'info, Mint>,

    /// Sale creator; receives the inventory and the proceeds
    #[account(
        mut,
        address = sale.creator @ SettleError::CreatorMismatch,
    )]
    pub creator: SystemAccount<'info>,

    /// Sale vault holding the unsold inventory
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = sale,
    )]
    pub sale_vault: InterfaceAccount<'info, TokenAccount>,

    /// Creator's token account
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = creator,
    )]
    pub creator_token: InterfaceAccount<'info, TokenAccount>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Settle<'info> {
    pub fn settle(&mut self) -> Result<()> {
        // Terminal transition first; a failed transfer below aborts the
        // whole instruction, so no partial payout can commit
        self.sale.mark_settled()?;

        // Sweep the remaining inventory to the creator
        let tokens_returned = self.sale_vault.amount;
        if tokens_returned > 0 {
            let mint_key = self.mint.key();
            let sale_seeds = &[Sale::SEED, mint_key.as_ref(), &[self.sale.bump]];
            let sale_signer = &[&sale_seeds[..]];

            transfer_checked(
                CpiContext::new_with_signer(
                    self.token_program.to_account_info(),
                    TransferChecked {
                        from: self.sale_vault.to_account_info(),
                        mint: self.mint.to_account_info(),
                        to: self.creator_token.to_account_info(),
                        authority: self.sale.to_account_info(),
                    },
                    sale_signer,
                ),
                tokens_returned,
                DECIMALS,
            )?;
        }

        // Release the proceeds
        let lamports_paid = self.sale.lamports_raised;
        if lamports_paid > 0 {
            transfer_lamports(
                &self.sale.to_account_info(),
                &self.creator.to_account_info(),
                lamports_paid,
            )?;
        }

        emit!(SaleSettled {
            mint: self.mint.key(),
            creator: self.creator.key(),
            tokens_returned,
            lamports_paid,
        });

        msg!(
            "Sale {} settled: {} base units and {} lamports to creator",
            self.mint.key(),
            tokens_returned,
            lamports_paid
        );

        Ok(())
    }
}

#[error_code]
pub enum SettleError {
    #[msg("Creator account does not match the sale record")]
    CreatorMismatch,
}

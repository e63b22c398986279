//! Primary-Sale Purchases
//!
//! Buys are priced by the staircase curve against the sale's cumulative
//! sold counter. The whole batch is charged at the pre-purchase step, and
//! a purchase that pushes the sale over the token limit or the funding
//! target closes it.
//!
//! Payment in excess of the computed cost is accepted and retained as fee
//! revenue — there are no refunds.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::{DECIMALS, MAX_PURCHASE, MIN_PURCHASE};
use crate::curve::StepCurve;
use crate::state::{Config, Sale};

/// Event emitted when tokens are purchased
#[event]
pub struct TokensPurchased {
    pub mint: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub cost: u64,
}

/// Accounts for a purchase
#[derive(Accounts)]
pub struct Buy<'info> {
    /// Buyer
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Registry configuration; receives any payment excess
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Sale being bought from; holds the committed proceeds
    #[account(
        mut,
        seeds = [Sale::SEED, mint.key().as_ref()],
        bump = sale.bump,
        constraint = sale.is_open() @ BuyError::SaleClosed,
    )]
    pub sale: Account<'info, Sale>,

    /// Mint of the token being sold
    pub mint: InterfaceAccount<'info, Mint>,

    /// Sale vault holding the unsold inventory
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = sale,
    )]
    pub sale_vault: InterfaceAccount<'info, TokenAccount>,

    /// Buyer's token account
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token: InterfaceAccount<'info, TokenAccount>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Buy<'info> {
    pub fn buy(&mut self, amount: u64, payment: u64) -> Result<()> {
        require!(amount >= MIN_PURCHASE, BuyError::BelowMinimumPurchase);
        require!(amount <= MAX_PURCHASE, BuyError::AboveMaximumPurchase);

        let cost = StepCurve::batch_cost(self.sale.tokens_sold, amount)?;
        require!(payment >= cost, BuyError::InsufficientPayment);

        // Committed proceeds stay on the sale until settlement
        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.buyer.to_account_info(),
                    to: self.sale.to_account_info(),
                },
            ),
            cost,
        )?;

        // Any excess is kept as fee revenue rather than refunded
        let excess = payment - cost;
        if excess > 0 {
            transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.buyer.to_account_info(),
                        to: self.config.to_account_info(),
                    },
                ),
                excess,
            )?;
            self.config.fees_accrued = self
                .config
                .fees_accrued
                .checked_add(excess)
                .ok_or(BuyError::Overflow)?;
        }

        // Hand the purchased units to the buyer
        let mint_key = self.mint.key();
        let sale_seeds = &[Sale::SEED, mint_key.as_ref(), &[self.sale.bump]];
        let sale_signer = &[&sale_seeds[..]];

        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.sale_vault.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.buyer_token.to_account_info(),
                    authority: self.sale.to_account_info(),
                },
                sale_signer,
            ),
            amount,
            DECIMALS,
        )?;

        // Ledger update last; closes the sale once a threshold is reached
        self.sale.record_purchase(amount, cost)?;

        emit!(TokensPurchased {
            mint: mint_key,
            buyer: self.buyer.key(),
            amount,
            cost,
        });

        Ok(())
    }
}

#[error_code]
pub enum BuyError {
    #[msg("Sale is closed")]
    SaleClosed,
    #[msg("Amount is below the minimum purchase")]
    BelowMinimumPurchase,
    #[msg("Amount is above the maximum purchase")]
    AboveMaximumPurchase,
    #[msg("Payment does not cover the purchase cost")]
    InsufficientPayment,
    #[msg("Arithmetic overflow")]
    Overflow,
}

//! Token Registration
//!
//! Anyone can launch a token by paying the registry's creation fee:
//! 1. A mint is created and the entire supply lands in the sale vault
//! 2. Minting is then locked for good, so the supply is provably fixed
//! 3. A sale ledger entry opens at the floor price
//!
//! The whole payment is retained as fee revenue — it is never part of the
//! sale proceeds.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::spl_token_2022::instruction::AuthorityType,
    token_interface::{
        mint_to, set_authority, Mint, MintTo, SetAuthority, TokenAccount, TokenInterface,
    },
};

use crate::constants::{DECIMALS, MAX_NAME_LEN, MAX_SYMBOL_LEN, TOTAL_SUPPLY};
use crate::state::{Config, Sale, SaleIndex, SaleStatus};

/// Event emitted when a new sale is created
#[event]
pub struct SaleCreated {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
}

/// Accounts for registering a new token
#[derive(Accounts)]
pub struct Create<'info> {
    /// Token creator (pays the fee and the account rent)
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Registry configuration; receives the fee payment
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Mint for the new token (created here)
    #[account(
        init,
        payer = creator,
        mint::decimals = DECIMALS,
        mint::authority = config,
        seeds = [b"mint", config.sale_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The new sale ledger entry
    #[account(
        init,
        payer = creator,
        space = 8 + Sale::INIT_SPACE,
        seeds = [Sale::SEED, mint.key().as_ref()],
        bump,
    )]
    pub sale: Account<'info, Sale>,

    /// Insertion-order index entry for this launch
    #[account(
        init,
        payer = creator,
        space = 8 + SaleIndex::INIT_SPACE,
        seeds = [SaleIndex::SEED, config.sale_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub sale_index: Account<'info, SaleIndex>,

    /// Sale vault holding the unsold inventory
    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = sale,
    )]
    pub sale_vault: InterfaceAccount<'info, TokenAccount>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Create<'info> {
    pub fn create(
        &mut self,
        name: String,
        symbol: String,
        payment: u64,
        bumps: &CreateBumps,
    ) -> Result<Pubkey> {
        require!(name.len() <= MAX_NAME_LEN, CreateError::NameTooLong);
        require!(symbol.len() <= MAX_SYMBOL_LEN, CreateError::SymbolTooLong);
        require!(
            payment >= self.config.creation_fee,
            CreateError::InsufficientFee
        );

        // The whole payment is fee revenue, overpayment included
        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.creator.to_account_info(),
                    to: self.config.to_account_info(),
                },
            ),
            payment,
        )?;
        self.config.fees_accrued = self
            .config
            .fees_accrued
            .checked_add(payment)
            .ok_or(CreateError::Overflow)?;

        // Mint the full supply into program custody, then revoke the mint
        // authority so the supply can never change again
        let config_seeds = &[Config::SEED, &[self.config.bump]];
        let signer_seeds = &[&config_seeds[..]];

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.sale_vault.to_account_info(),
                    authority: self.config.to_account_info(),
                },
                signer_seeds,
            ),
            TOTAL_SUPPLY,
        )?;

        set_authority(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                SetAuthority {
                    current_authority: self.config.to_account_info(),
                    account_or_mint: self.mint.to_account_info(),
                },
                signer_seeds,
            ),
            AuthorityType::MintTokens,
            None,
        )?;

        self.sale.set_inner(Sale {
            mint: self.mint.key(),
            name: name.clone(),
            symbol: symbol.clone(),
            creator: self.creator.key(),
            tokens_sold: 0,
            lamports_raised: 0,
            status: SaleStatus::Open,
            bump: bumps.sale,
        });
        self.sale_index.set_inner(SaleIndex {
            mint: self.mint.key(),
            bump: bumps.sale_index,
        });

        self.config.sale_count += 1;

        emit!(SaleCreated {
            mint: self.mint.key(),
            creator: self.creator.key(),
            name,
            symbol,
        });

        Ok(self.mint.key())
    }
}

#[error_code]
pub enum CreateError {
    #[msg("Payment does not cover the creation fee")]
    InsufficientFee,
    #[msg("Name exceeds maximum length")]
    NameTooLong,
    #[msg("Symbol exceeds maximum length")]
    SymbolTooLong,
    #[msg("Arithmetic overflow")]
    Overflow,
}

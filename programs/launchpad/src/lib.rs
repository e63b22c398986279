//! # Launchpad: Bonding-Curve Token Sales
//!
//! A factory program for primary token sales on Solana.
//!
//! ## Overview
//!
//! A creator registers a new token for a flat fee. The entire supply is
//! minted into program custody and sold to the public along a step-shaped
//! bonding curve. Once the sale has raised its funding target or reached
//! its sold-units cap, it closes; anyone may then trigger settlement, which
//! releases the unsold inventory and the raised lamports to the creator.
//!
//! ## How it works
//! - Pricing is a pure staircase function of cumulative units sold.
//! - Each sale is its own PDA ledger entry; contention is local to the
//!   sale being traded.
//! - The registry tracks fee revenue and the insertion-ordered list of
//!   launches.

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod instructions;
pub mod state;
pub mod utils;

pub use curve::*;
pub use instructions::*;

declare_id!("EoCLJyRr1SxYDyeeTue6ZwnG62QwpqZnBzL7Kyqp2AzJ");

/// Main launchpad program
#[program]
pub mod launchpad {
    use super::*;

    /// Set up the registry with its deployment-fixed creation fee
    pub fn initialize(ctx: Context<Initialize>, creation_fee: u64) -> Result<()> {
        ctx.accounts.initialize(creation_fee, &ctx.bumps)
    }

    /// Register a new token and open its sale (permissionless, fee-gated)
    pub fn create(
        ctx: Context<Create>,
        name: String,
        symbol: String,
        payment: u64,
    ) -> Result<Pubkey> {
        ctx.accounts.create(name, symbol, payment, &ctx.bumps)
    }

    /// Buy tokens from an open sale at the current curve price
    pub fn buy(ctx: Context<Buy>, amount: u64, payment: u64) -> Result<()> {
        ctx.accounts.buy(amount, payment)
    }

    /// Pay out a closed sale to its creator (permissionless)
    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        ctx.accounts.settle()
    }

    /// Extract accrued fee revenue (authority only)
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(amount)
    }
}

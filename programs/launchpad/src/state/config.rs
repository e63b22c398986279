//! Registry Configuration
//!
//! This account is the registry-wide ledger: fee settings, the launch
//! counter, and the withdrawable fee treasury.

use anchor_lang::prelude::*;

/// Registry configuration account (singleton PDA)
///
/// Seeds: ["config"]
///
/// The account's lamport balance is always its rent-exempt minimum plus
/// `fees_accrued`; `withdraw` is bounded by `fees_accrued` so the rent
/// reserve can never leave.
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Party allowed to withdraw accrued fee revenue
    pub authority: Pubkey,

    /// Lamports required to register a new token; fixed at initialization
    pub creation_fee: u64,

    /// Number of sales created; also the seed for the next mint and
    /// index entry, so it doubles as the length of the launch list
    pub sale_count: u64,

    /// Fee revenue (lamports) currently held for the authority
    pub fees_accrued: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";
}

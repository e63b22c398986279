//! Sale economics, fixed at compile time and exported through the IDL so
//! clients can validate and render without extra queries.
//!
//! All token quantities are in base units (`10^9` per whole token), all
//! prices and thresholds in lamports.

use anchor_lang::prelude::*;

/// Mint decimals for every launched token
pub const DECIMALS: u8 = 9;

/// Base units per whole token (`10^DECIMALS`)
#[constant]
pub const UNIT_SCALE: u64 = 1_000_000_000;

/// Supply minted to the sale vault at creation; never changes afterwards
#[constant]
pub const TOTAL_SUPPLY: u64 = 1_000_000 * UNIT_SCALE;

/// Sold-units threshold that closes a sale
#[constant]
pub const TOKEN_LIMIT: u64 = 500_000 * UNIT_SCALE;

/// Raised-lamports threshold that closes a sale (3 SOL)
#[constant]
pub const TARGET_LAMPORTS: u64 = 3_000_000_000;

/// Smallest purchase accepted (1 whole token)
#[constant]
pub const MIN_PURCHASE: u64 = UNIT_SCALE;

/// Largest purchase accepted (10,000 whole tokens)
#[constant]
pub const MAX_PURCHASE: u64 = 10_000 * UNIT_SCALE;

/// Curve floor: price of the first step, per whole token (0.0001 SOL)
#[constant]
pub const BASE_PRICE_LAMPORTS: u64 = 100_000;

/// Price increase per curve step (0.0001 SOL)
#[constant]
pub const PRICE_STEP_LAMPORTS: u64 = 100_000;

/// Units sold per curve step (10,000 whole tokens)
#[constant]
pub const PRICE_INCREMENT: u64 = 10_000 * UNIT_SCALE;

/// Display name bound on sale records
pub const MAX_NAME_LEN: usize = 32;

/// Ticker symbol bound on sale records
pub const MAX_SYMBOL_LEN: usize = 10;

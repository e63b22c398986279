//! Sale Ledger
//!
//! One `Sale` account per launched token, created together with its mint
//! and kept forever — settlement moves funds and inventory but never
//! deletes the record. `tokens_sold` and `lamports_raised` only grow, and
//! the status only moves forward: `Open -> Closed -> Settled`.

use anchor_lang::prelude::*;

use crate::constants::{TARGET_LAMPORTS, TOKEN_LIMIT};

/// Errors raised by the sale state machine
#[error_code]
pub enum SaleError {
    #[msg("Sale is not open")]
    SaleNotOpen,
    #[msg("Sale is still open")]
    SaleStillOpen,
    #[msg("Sale has already been settled")]
    AlreadySettled,
    #[msg("Arithmetic overflow")]
    Overflow,
}

/// Per-token sale ledger entry
///
/// Seeds: ["sale", mint]
#[account]
#[derive(InitSpace)]
pub struct Sale {
    /// Mint of the token being sold
    pub mint: Pubkey,

    /// Display name
    #[max_len(32)]
    pub name: String,

    /// Ticker symbol
    #[max_len(10)]
    pub symbol: String,

    /// Wallet that registered the token; receives the settlement payout
    pub creator: Pubkey,

    /// Base units sold so far (monotonically non-decreasing)
    pub tokens_sold: u64,

    /// Lamports committed by buyers so far (monotonically non-decreasing)
    pub lamports_raised: u64,

    /// Sale lifecycle status
    pub status: SaleStatus,

    /// PDA bump seed
    pub bump: u8,
}

impl Sale {
    pub const SEED: &'static [u8] = b"sale";

    pub fn is_open(&self) -> bool {
        self.status == SaleStatus::Open
    }

    /// Apply a purchase to the ledger and close the sale once either
    /// threshold is reached. `cost` is the batch price at the
    /// pre-purchase step; thresholds are evaluated after the increments,
    /// so the crossing purchase itself succeeds.
    pub fn record_purchase(&mut self, amount: u64, cost: u64) -> Result<()> {
        require!(self.is_open(), SaleError::SaleNotOpen);

        self.tokens_sold = self
            .tokens_sold
            .checked_add(amount)
            .ok_or(SaleError::Overflow)?;
        self.lamports_raised = self
            .lamports_raised
            .checked_add(cost)
            .ok_or(SaleError::Overflow)?;

        if self.tokens_sold >= TOKEN_LIMIT || self.lamports_raised >= TARGET_LAMPORTS {
            self.status = SaleStatus::Closed;
        }

        Ok(())
    }

    /// Move a closed sale to its terminal state. Settling an open sale is
    /// rejected, and so is settling twice — the second call must pay
    /// nothing.
    pub fn mark_settled(&mut self) -> Result<()> {
        match self.status {
            SaleStatus::Open => err!(SaleError::SaleStillOpen),
            SaleStatus::Settled => err!(SaleError::AlreadySettled),
            SaleStatus::Closed => {
                self.status = SaleStatus::Settled;
                Ok(())
            }
        }
    }
}

/// Sale lifecycle status
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default,
)]
pub enum SaleStatus {
    /// Accepting purchases
    #[default]
    Open,
    /// A closing threshold was reached; awaiting settlement
    Closed,
    /// Inventory and proceeds have been paid out to the creator
    Settled,
}

/// Insertion-order index entry mapping a launch position to its mint
///
/// Seeds: ["sale_index", position.to_le_bytes()]
///
/// Append-only: every position below `Config::sale_count` has exactly one
/// entry, and the entry's mint has exactly one `Sale`. Together they give
/// ordered enumeration and O(1) lookup by mint.
#[account]
#[derive(InitSpace)]
pub struct SaleIndex {
    /// Mint of the sale created at this position
    pub mint: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

impl SaleIndex {
    pub const SEED: &'static [u8] = b"sale_index";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{TOTAL_SUPPLY, UNIT_SCALE};
    use crate::curve::StepCurve;

    fn open_sale() -> Sale {
        Sale {
            mint: Pubkey::new_unique(),
            name: "Orbit".to_string(),
            symbol: "ORB".to_string(),
            creator: Pubkey::new_unique(),
            tokens_sold: 0,
            lamports_raised: 0,
            status: SaleStatus::Open,
            bump: 255,
        }
    }

    #[test]
    fn purchases_accumulate_monotonically() {
        let mut sale = open_sale();

        sale.record_purchase(5_000 * UNIT_SCALE, 500_000_000).unwrap();
        assert_eq!(sale.tokens_sold, 5_000 * UNIT_SCALE);
        assert_eq!(sale.lamports_raised, 500_000_000);
        assert!(sale.is_open());

        sale.record_purchase(2_500 * UNIT_SCALE, 250_000_000).unwrap();
        assert_eq!(sale.tokens_sold, 7_500 * UNIT_SCALE);
        assert_eq!(sale.lamports_raised, 750_000_000);
        assert!(sale.is_open());
    }

    #[test]
    fn closes_when_the_token_limit_is_reached() {
        let mut sale = open_sale();
        sale.tokens_sold = TOKEN_LIMIT - UNIT_SCALE;

        sale.record_purchase(UNIT_SCALE, 100_000).unwrap();
        assert_eq!(sale.status, SaleStatus::Closed);
    }

    #[test]
    fn closes_when_the_funding_target_is_reached() {
        let mut sale = open_sale();
        sale.lamports_raised = TARGET_LAMPORTS - 1;

        sale.record_purchase(UNIT_SCALE, 1).unwrap();
        assert_eq!(sale.status, SaleStatus::Closed);
    }

    #[test]
    fn a_closed_sale_rejects_further_purchases() {
        let mut sale = open_sale();
        sale.status = SaleStatus::Closed;

        assert!(sale.record_purchase(UNIT_SCALE, 100_000).is_err());
        assert_eq!(sale.tokens_sold, 0);
        assert_eq!(sale.lamports_raised, 0);
    }

    #[test]
    fn settlement_requires_a_closed_sale_and_happens_once() {
        let mut sale = open_sale();

        assert!(sale.mark_settled().is_err());
        assert!(sale.is_open());

        sale.status = SaleStatus::Closed;
        sale.mark_settled().unwrap();
        assert_eq!(sale.status, SaleStatus::Settled);

        // Second settlement rejected: nothing further can be paid out
        assert!(sale.mark_settled().is_err());
        assert_eq!(sale.status, SaleStatus::Settled);
    }

    #[test]
    fn funding_scenario_runs_to_settlement() {
        let mut sale = open_sale();
        let batch = 10_000 * UNIT_SCALE;

        // First batch at the floor price
        let cost = StepCurve::batch_cost(sale.tokens_sold, batch).unwrap();
        assert_eq!(cost, 1_000_000_000);
        sale.record_purchase(batch, cost).unwrap();
        assert!(sale.is_open());

        // Second batch one step up; raising 3 SOL total closes the sale
        let cost = StepCurve::batch_cost(sale.tokens_sold, batch).unwrap();
        assert_eq!(cost, 2_000_000_000);
        sale.record_purchase(batch, cost).unwrap();
        assert_eq!(sale.lamports_raised, 3_000_000_000);
        assert_eq!(sale.status, SaleStatus::Closed);

        // Settlement owes the creator the unsold inventory and the proceeds
        assert_eq!(TOTAL_SUPPLY - sale.tokens_sold, 980_000 * UNIT_SCALE);
        sale.mark_settled().unwrap();
    }
}

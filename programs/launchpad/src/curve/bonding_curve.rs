//! # Staircase Bonding Curve
//!
//! Maps cumulative units sold to a unit price:
//!
//! ```text
//! price(sold) = BASE_PRICE_LAMPORTS
//!             + PRICE_STEP_LAMPORTS * (sold / PRICE_INCREMENT)
//! ```
//!
//! The division is integer floor division and the boundary behavior
//! matters: at `sold == PRICE_INCREMENT` the price has already moved to
//! the next step. A whole batch is priced at the step in effect *before*
//! the purchase — no per-unit recomputation inside a batch.

use anchor_lang::prelude::*;

use crate::constants::{BASE_PRICE_LAMPORTS, PRICE_INCREMENT, PRICE_STEP_LAMPORTS, UNIT_SCALE};

/// Errors specific to curve arithmetic
#[error_code]
pub enum CurveError {
    #[msg("Arithmetic overflow")]
    Overflow,
}

/// Staircase pricing for primary sales
pub struct StepCurve;

impl StepCurve {
    /// Unit price in lamports per whole token at a given cumulative
    /// sold count (base units).
    ///
    /// Pure and total: `steps` is at most `u64::MAX / PRICE_INCREMENT`,
    /// so the lamport math below cannot overflow for any input.
    pub fn unit_price(units_sold: u64) -> u64 {
        let steps = units_sold / PRICE_INCREMENT;
        BASE_PRICE_LAMPORTS + PRICE_STEP_LAMPORTS * steps
    }

    /// Cost in lamports of buying `amount` base units when `units_sold`
    /// have been sold so far.
    ///
    /// The batch is priced at the pre-purchase step, and only whole
    /// tokens are charged: `amount / UNIT_SCALE` truncates, so a
    /// sub-token remainder contributes nothing to the cost.
    pub fn batch_cost(units_sold: u64, amount: u64) -> Result<u64> {
        let price = Self::unit_price(units_sold) as u128;
        let whole_tokens = (amount / UNIT_SCALE) as u128;

        let cost = price.checked_mul(whole_tokens).ok_or(CurveError::Overflow)?;
        require!(cost <= u64::MAX as u128, CurveError::Overflow);

        Ok(cost as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_starts_at_the_floor() {
        assert_eq!(StepCurve::unit_price(0), BASE_PRICE_LAMPORTS);
        assert_eq!(StepCurve::unit_price(1), BASE_PRICE_LAMPORTS);
    }

    #[test]
    fn price_steps_at_exact_increment_boundaries() {
        // Last base unit inside the first step
        assert_eq!(StepCurve::unit_price(PRICE_INCREMENT - 1), 100_000);
        // 9,999 whole tokens sold: still the floor price
        assert_eq!(StepCurve::unit_price(9_999 * UNIT_SCALE), 100_000);
        // Exactly 10,000 whole tokens sold: second step
        assert_eq!(StepCurve::unit_price(10_000 * UNIT_SCALE), 200_000);
        // 25,000 whole tokens sold: third step
        assert_eq!(StepCurve::unit_price(25_000 * UNIT_SCALE), 300_000);
    }

    #[test]
    fn price_is_monotonically_non_decreasing() {
        let mut last = 0;
        for whole_tokens in (0..500_000u64).step_by(1_000) {
            let price = StepCurve::unit_price(whole_tokens * UNIT_SCALE);
            assert!(price >= last);
            last = price;
        }
    }

    #[test]
    fn batch_cost_uses_the_pre_purchase_step() {
        let batch = 10_000 * UNIT_SCALE;
        // First batch at the floor: 10,000 tokens * 0.0001 SOL = 1 SOL
        assert_eq!(StepCurve::batch_cost(0, batch).unwrap(), 1_000_000_000);
        // Second batch priced entirely at the second step: 2 SOL
        assert_eq!(StepCurve::batch_cost(batch, batch).unwrap(), 2_000_000_000);
    }

    #[test]
    fn batch_cost_charges_whole_tokens_only() {
        // 1.5 tokens cost the same as 1 token
        let one_and_a_half = UNIT_SCALE + UNIT_SCALE / 2;
        assert_eq!(
            StepCurve::batch_cost(0, one_and_a_half).unwrap(),
            BASE_PRICE_LAMPORTS
        );
        // Below one whole token the cost truncates to zero
        assert_eq!(StepCurve::batch_cost(0, UNIT_SCALE - 1).unwrap(), 0);
    }

    #[test]
    fn batch_cost_rejects_amounts_that_overflow_lamports() {
        assert!(StepCurve::batch_cost(u64::MAX, u64::MAX).is_err());
    }
}

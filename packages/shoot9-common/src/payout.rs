use cosmwasm_std::Uint128;
use thiserror::Error;

use crate::types::WinnerPayout;

/// Protocol cut taken from every resolved pool, in percent.
pub const PROTOCOL_FEE_PERCENT: u128 = 10;

/// Maximum number of winners a single resolution may pay.
pub const MAX_WINNERS: usize = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayoutError {
    #[error("winner count {count} outside allowed range 1..={max}")]
    TooManyWinners { count: usize, max: usize },

    #[error("payouts {requested} exceed distributable pool {distributable}")]
    PayoutExceedsPool {
        requested: Uint128,
        distributable: Uint128,
    },

    #[error("arithmetic overflow summing payouts")]
    Overflow,
}

/// Outcome of validating a manifest against a pool. Nothing has moved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPlan {
    pub total_pool: Uint128,
    pub fee: Uint128,
    pub distributable: Uint128,
    pub total_payout: Uint128,
    /// Under-allocated part of the distributable pool. Stays in escrow.
    pub remainder: Uint128,
}

impl ResolutionPlan {
    /// Total amount leaving escrow if the plan is executed.
    pub fn outflow(&self) -> Uint128 {
        // fee + total_payout <= total_pool, cannot overflow
        self.fee + self.total_payout
    }
}

/// `floor(total_pool * PROTOCOL_FEE_PERCENT / 100)`.
pub fn protocol_fee(total_pool: Uint128) -> Uint128 {
    total_pool.multiply_ratio(PROTOCOL_FEE_PERCENT, 100u128)
}

/// Check the winner count bound. An empty manifest is out of range as well.
pub fn validate_winner_count(count: usize) -> Result<(), PayoutError> {
    if count == 0 || count > MAX_WINNERS {
        return Err(PayoutError::TooManyWinners {
            count,
            max: MAX_WINNERS,
        });
    }
    Ok(())
}

/// Validate `winners` against `total_pool` and compute the fee split.
///
/// The sum of payouts may be lower than the distributable pool; the
/// difference is reported as `remainder` and is not redistributed.
pub fn plan_resolution(
    total_pool: Uint128,
    winners: &[WinnerPayout],
) -> Result<ResolutionPlan, PayoutError> {
    validate_winner_count(winners.len())?;

    let fee = protocol_fee(total_pool);
    let distributable = total_pool - fee;

    let total_payout = winners
        .iter()
        .try_fold(Uint128::zero(), |acc, w| acc.checked_add(w.payout))
        .map_err(|_| PayoutError::Overflow)?;

    if total_payout > distributable {
        return Err(PayoutError::PayoutExceedsPool {
            requested: total_payout,
            distributable,
        });
    }

    Ok(ResolutionPlan {
        total_pool,
        fee,
        distributable,
        total_payout,
        remainder: distributable - total_payout,
    })
}

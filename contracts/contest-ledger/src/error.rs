use cosmwasm_std::{StdError, Uint128};
use shoot9_common::PayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("authorization store already initialized")]
    AlreadyInitialized,

    #[error("authorization store not initialized")]
    AuthNotInitialized,

    #[error("creator limit reached: at most {max} authorized creators")]
    CreatorLimitReached { max: usize },

    #[error("invalid denom: must be non-empty")]
    InvalidDenom,

    #[error("contest {contest_id} already exists for {authority}")]
    DuplicateContest { authority: String, contest_id: u64 },

    #[error("event {event_id} already exists for {authority}")]
    DuplicateEvent { authority: String, event_id: u64 },

    #[error("event {event_id} not found for {authority}")]
    EventNotFound { authority: String, event_id: u64 },

    #[error("entry fee must be greater than zero")]
    InvalidFee,

    #[error("invalid contest name: {reason}")]
    InvalidName { reason: String },

    #[error("contest {contest_id} not found for {authority}")]
    ContestNotFound { authority: String, contest_id: u64 },

    #[error("contest {contest_id} is closed for entry")]
    ContestClosed { contest_id: u64 },

    #[error("{participant} already entered contest {contest_id}")]
    AlreadyEntered { participant: String, contest_id: u64 },

    #[error("entry requires exactly {expected}{denom}")]
    IncorrectEntryFee { expected: Uint128, denom: String },

    #[error("this message does not accept funds")]
    UnexpectedFunds,

    #[error("contest {contest_id} is already resolved")]
    AlreadyResolved { contest_id: u64 },

    #[error("winner count {count} outside allowed range 1..={max}")]
    TooManyWinners { count: usize, max: usize },

    #[error("payouts {requested} exceed distributable pool {distributable}")]
    PayoutExceedsPool {
        requested: Uint128,
        distributable: Uint128,
    },

    #[error("transfer to {recipient} failed: {reason}")]
    TransferFailure { recipient: String, reason: String },

    #[error("arithmetic overflow")]
    Overflow,
}

impl From<PayoutError> for ContractError {
    fn from(err: PayoutError) -> Self {
        match err {
            PayoutError::TooManyWinners { count, max } => ContractError::TooManyWinners { count, max },
            PayoutError::PayoutExceedsPool {
                requested,
                distributable,
            } => ContractError::PayoutExceedsPool {
                requested,
                distributable,
            },
            PayoutError::Overflow => ContractError::Overflow,
        }
    }
}

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Lifecycle status of a contest. `Resolved` is terminal.
#[cw_serde]
pub enum ContestStatus {
    Open,
    Resolved,
}

impl ContestStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, ContestStatus::Open)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContestStatus::Open => "open",
            ContestStatus::Resolved => "resolved",
        }
    }
}

/// Lifecycle status of a sports event. New events start `Upcoming`.
#[cw_serde]
pub enum EventStatus {
    Upcoming,
    Live,
    Open,
    Cancelled,
    Suspended,
}

/// One leg of a resolution manifest: pay `payout` to `wallet`.
///
/// The wallet is a bech32 string as submitted by the contest authority.
/// It does not have to belong to a participant of the contest.
#[cw_serde]
pub struct WinnerPayout {
    pub wallet: String,
    pub payout: Uint128,
}

impl WinnerPayout {
    pub fn new(wallet: impl Into<String>, payout: impl Into<Uint128>) -> Self {
        Self {
            wallet: wallet.into(),
            payout: payout.into(),
        }
    }
}

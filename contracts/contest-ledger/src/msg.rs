use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use shoot9_common::{ContestStatus, WinnerPayout};

use crate::state::{Config, Contest, EventRecord, LedgerTotals};

#[cw_serde]
pub struct InstantiateMsg {
    /// Native denom used for entry fees and payouts
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Create the authorization store with the sender as admin. Once only.
    InitializeAuth {},
    /// Grant or revoke a creator's right to open contests. Admin only.
    SetCreatorAuthorization { creator: String, authorized: bool },
    /// Register a sports event under the sender's authority. Authorized creators only.
    CreateEvent { event_id: u64, name: String },
    /// Open a new contest under the sender's authority. Authorized creators only.
    CreateContest {
        contest_id: u64,
        entry_fee: Uint128,
        name: String,
        /// Defaults to the sender
        fee_receiver: Option<String>,
        /// Must name an event the sender registered
        event_id: Option<u64>,
    },
    /// Enter a contest. Must attach exactly the entry fee.
    EnterContest { authority: String, contest_id: u64 },
    /// Pay out the pool and close the contest. Contest authority only.
    ResolveContest {
        authority: String,
        contest_id: u64,
        winners: Vec<WinnerPayout>,
        /// Overrides the fee receiver stored on the contest
        fee_receiver: Option<String>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

/// Contest creation arguments after the message has been unpacked.
pub struct CreateContestParams {
    pub contest_id: u64,
    pub entry_fee: Uint128,
    pub name: String,
    pub fee_receiver: Option<String>,
    pub event_id: Option<u64>,
}

/// Resolution arguments after the message has been unpacked.
pub struct ResolveContestParams {
    pub authority: String,
    pub contest_id: u64,
    pub winners: Vec<WinnerPayout>,
    pub fee_receiver: Option<String>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(AuthorizedCreatorsResponse)]
    AuthorizedCreators {},
    #[returns(bool)]
    IsAuthorizedCreator { address: String },
    #[returns(Option<EventRecord>)]
    Event { authority: String, event_id: u64 },
    #[returns(EventsResponse)]
    EventsByAuthority {
        authority: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(Option<Contest>)]
    Contest { authority: String, contest_id: u64 },
    #[returns(ContestsResponse)]
    ContestsByAuthority {
        authority: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ParticipantsResponse)]
    Participants {
        authority: String,
        contest_id: u64,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(bool)]
    HasEntered {
        authority: String,
        contest_id: u64,
        address: String,
    },
    #[returns(PoolResponse)]
    Pool { authority: String, contest_id: u64 },
    #[returns(LedgerTotals)]
    Totals {},
    #[returns(bool)]
    VerifyManifest {
        authority: String,
        contest_id: u64,
        winners: Vec<WinnerPayout>,
    },
}

#[cw_serde]
pub struct AuthorizedCreatorsResponse {
    pub admin: String,
    pub creators: Vec<String>,
}

#[cw_serde]
pub struct EventsResponse {
    pub events: Vec<EventRecord>,
}

#[cw_serde]
pub struct ContestsResponse {
    pub contests: Vec<Contest>,
}

#[cw_serde]
pub struct ParticipantsResponse {
    pub participants: Vec<String>,
    pub total: u32,
}

#[cw_serde]
pub struct PoolResponse {
    pub entry_fee: Uint128,
    pub total_pool: Uint128,
    pub escrow_balance: Uint128,
    pub participant_count: u32,
    pub status: ContestStatus,
}

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use shoot9_common::{ContestStatus, EventStatus};

/// Upper bound on the authorized creator set.
pub const MAX_AUTHORIZED_CREATORS: usize = 100;
/// Upper bound on a contest or event name, in bytes.
pub const MAX_NAME_LEN: usize = 100;

pub const CONFIG: Item<Config> = Item::new("config");
pub const AUTH_STORE: Item<AuthStore> = Item::new("auth_store");
pub const TOTALS: Item<LedgerTotals> = Item::new("totals");

/// Contests keyed by (authority, contest_id). Ids are scoped per authority.
pub const CONTESTS: Map<(&Addr, u64), Contest> = Map::new("contests");

/// Events keyed by (authority, event_id). Ids are scoped per authority.
pub const EVENTS: Map<(&Addr, u64), EventRecord> = Map::new("events");

/// Entry order: (authority, contest_id, entry_index) -> participant
pub const PARTICIPANTS: Map<(&Addr, u64, u32), Addr> = Map::new("participants");
/// Reverse index: (authority, contest_id, participant) -> entry_index
pub const ENTRANTS: Map<(&Addr, u64, &Addr), u32> = Map::new("entrants");

#[cw_serde]
pub struct Config {
    /// Native denom accepted for entry fees and used for payouts
    pub denom: String,
}

#[cw_serde]
pub struct AuthStore {
    pub admin: Addr,
    pub authorized_creators: Vec<Addr>,
}

impl AuthStore {
    pub fn is_authorized(&self, addr: &Addr) -> bool {
        self.authorized_creators.contains(addr)
    }
}

#[cw_serde]
pub struct EventRecord {
    pub event_id: u64,
    pub authority: Addr,
    pub name: String,
    pub status: EventStatus,
    pub created_at: Timestamp,
}

#[cw_serde]
pub struct Contest {
    pub contest_id: u64,
    pub authority: Addr,
    pub name: String,
    /// Event under the same authority this contest is played on, if any
    pub event_id: Option<u64>,
    pub entry_fee: Uint128,
    pub fee_receiver: Addr,
    pub status: ContestStatus,
    /// Sum of all entry fees ever deposited. Never decreases.
    pub total_pool: Uint128,
    /// Amount still held in escrow for this contest. Equals `total_pool`
    /// while open, the unallocated remainder once resolved.
    pub escrow_balance: Uint128,
    pub participant_count: u32,
    pub created_at: Timestamp,
    pub resolution: Option<ResolutionSummary>,
}

#[cw_serde]
pub struct ResolutionSummary {
    pub fee: Uint128,
    pub fee_receiver: Addr,
    pub distributable: Uint128,
    pub total_payout: Uint128,
    pub remainder: Uint128,
    pub winners_count: u32,
    /// sha256 of the winners manifest, hex-encoded
    pub manifest_hash: String,
    pub resolved_at: Timestamp,
}

#[cw_serde]
#[derive(Default)]
pub struct LedgerTotals {
    pub total_events: u64,
    pub total_contests: u64,
    /// Funds currently held across all contests
    pub total_escrowed: Uint128,
    pub total_fees_paid: Uint128,
    pub total_payouts: Uint128,
}

use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;
use shoot9_common::{verify_manifest, WinnerPayout};

use crate::msg::{
    AuthorizedCreatorsResponse, ContestsResponse, EventsResponse, ParticipantsResponse,
    PoolResponse,
};
use crate::state::{AUTH_STORE, CONFIG, CONTESTS, ENTRANTS, EVENTS, PARTICIPANTS, TOTALS};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_authorized_creators(deps: Deps) -> StdResult<Binary> {
    let store = AUTH_STORE.load(deps.storage)?;
    to_json_binary(&AuthorizedCreatorsResponse {
        admin: store.admin.to_string(),
        creators: store
            .authorized_creators
            .iter()
            .map(|a| a.to_string())
            .collect(),
    })
}

pub fn query_is_authorized_creator(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let authorized = AUTH_STORE
        .may_load(deps.storage)?
        .map(|store| store.is_authorized(&addr))
        .unwrap_or(false);
    to_json_binary(&authorized)
}

pub fn query_event(deps: Deps, authority: String, event_id: u64) -> StdResult<Binary> {
    let authority = deps.api.addr_validate(&authority)?;
    let event = EVENTS.may_load(deps.storage, (&authority, event_id))?;
    to_json_binary(&event)
}

pub fn query_events_by_authority(
    deps: Deps,
    authority: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let authority = deps.api.addr_validate(&authority)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let events = EVENTS
        .prefix(&authority)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(_, event)| event))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&EventsResponse { events })
}

pub fn query_contest(deps: Deps, authority: String, contest_id: u64) -> StdResult<Binary> {
    let authority = deps.api.addr_validate(&authority)?;
    let contest = CONTESTS.may_load(deps.storage, (&authority, contest_id))?;
    to_json_binary(&contest)
}

pub fn query_contests_by_authority(
    deps: Deps,
    authority: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let authority = deps.api.addr_validate(&authority)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let contests = CONTESTS
        .prefix(&authority)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(_, contest)| contest))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&ContestsResponse { contests })
}

/// Participants in entry order.
pub fn query_participants(
    deps: Deps,
    authority: String,
    contest_id: u64,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let authority = deps.api.addr_validate(&authority)?;
    let contest = CONTESTS.load(deps.storage, (&authority, contest_id))?;
    let limit = limit.unwrap_or(MAX_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let participants = PARTICIPANTS
        .prefix((&authority, contest_id))
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(_, addr)| addr.to_string()))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&ParticipantsResponse {
        participants,
        total: contest.participant_count,
    })
}

pub fn query_has_entered(
    deps: Deps,
    authority: String,
    contest_id: u64,
    address: String,
) -> StdResult<Binary> {
    let authority = deps.api.addr_validate(&authority)?;
    let addr = deps.api.addr_validate(&address)?;
    let entered = ENTRANTS.has(deps.storage, (&authority, contest_id, &addr));
    to_json_binary(&entered)
}

pub fn query_pool(deps: Deps, authority: String, contest_id: u64) -> StdResult<Binary> {
    let authority = deps.api.addr_validate(&authority)?;
    let contest = CONTESTS.load(deps.storage, (&authority, contest_id))?;
    to_json_binary(&PoolResponse {
        entry_fee: contest.entry_fee,
        total_pool: contest.total_pool,
        escrow_balance: contest.escrow_balance,
        participant_count: contest.participant_count,
        status: contest.status,
    })
}

pub fn query_totals(deps: Deps) -> StdResult<Binary> {
    let totals = TOTALS.load(deps.storage)?;
    to_json_binary(&totals)
}

/// True only for a resolved contest whose stored manifest hash matches.
pub fn query_verify_manifest(
    deps: Deps,
    authority: String,
    contest_id: u64,
    winners: Vec<WinnerPayout>,
) -> StdResult<Binary> {
    let authority = deps.api.addr_validate(&authority)?;
    let valid = CONTESTS
        .may_load(deps.storage, (&authority, contest_id))?
        .and_then(|contest| contest.resolution)
        .map(|resolution| verify_manifest(&resolution.manifest_hash, &winners))
        .unwrap_or(false);
    to_json_binary(&valid)
}

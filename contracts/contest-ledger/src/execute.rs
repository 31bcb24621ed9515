use cosmwasm_std::{
    coins, Addr, Api, BankMsg, Coin, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128,
};
use shoot9_common::{manifest_hash_hex, plan_resolution, ContestStatus, EventStatus};

use crate::error::ContractError;
use crate::msg::{CreateContestParams, ResolveContestParams};
use crate::state::{
    AuthStore, Contest, EventRecord, ResolutionSummary, AUTH_STORE, CONFIG, CONTESTS, ENTRANTS,
    EVENTS, MAX_AUTHORIZED_CREATORS, MAX_NAME_LEN, PARTICIPANTS, TOTALS,
};

/// Create the authorization store. The sender becomes admin.
pub fn initialize_auth(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    if AUTH_STORE.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let store = AuthStore {
        admin: info.sender.clone(),
        authorized_creators: Vec::new(),
    };
    AUTH_STORE.save(deps.storage, &store)?;

    Ok(Response::new()
        .add_attribute("action", "initialize_auth")
        .add_attribute("admin", info.sender.to_string())
        .add_event(
            Event::new("shoot9_auth_initialized")
                .add_attribute("admin", info.sender.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Add or remove a creator. Admin only. Re-adding or re-removing is a no-op.
pub fn set_creator_authorization(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    creator: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    let mut store = load_auth_store(deps.storage)?;

    if info.sender != store.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update creator authorization".to_string(),
        });
    }

    let creator = deps.api.addr_validate(&creator)?;

    let changed = if authorized {
        if store.is_authorized(&creator) {
            false
        } else {
            if store.authorized_creators.len() >= MAX_AUTHORIZED_CREATORS {
                return Err(ContractError::CreatorLimitReached {
                    max: MAX_AUTHORIZED_CREATORS,
                });
            }
            store.authorized_creators.push(creator.clone());
            true
        }
    } else {
        let before = store.authorized_creators.len();
        store.authorized_creators.retain(|a| *a != creator);
        store.authorized_creators.len() != before
    };

    let mut response = Response::new()
        .add_attribute("action", "set_creator_authorization")
        .add_attribute("creator", creator.to_string())
        .add_attribute("authorized", authorized.to_string())
        .add_attribute("changed", changed.to_string());

    if changed {
        AUTH_STORE.save(deps.storage, &store)?;
        response = response.add_event(
            Event::new("shoot9_creator_authorization_updated")
                .add_attribute("creator", creator.to_string())
                .add_attribute("authorized", authorized.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        );
    }

    Ok(response)
}

/// Register a sports event under the sender's authority. Authorized creators only.
pub fn create_event(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    event_id: u64,
    name: String,
) -> Result<Response, ContractError> {
    ensure_creator(deps.storage, &info.sender)?;
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    validate_name(&name)?;

    let authority = info.sender;
    if EVENTS.has(deps.storage, (&authority, event_id)) {
        return Err(ContractError::DuplicateEvent {
            authority: authority.to_string(),
            event_id,
        });
    }

    let mut totals = TOTALS.load(deps.storage)?;
    totals.total_events = totals
        .total_events
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    let event = EventRecord {
        event_id,
        authority: authority.clone(),
        name,
        status: EventStatus::Upcoming,
        created_at: env.block.time,
    };
    EVENTS.save(deps.storage, (&authority, event_id), &event)?;
    TOTALS.save(deps.storage, &totals)?;

    Ok(Response::new()
        .add_attribute("action", "create_event")
        .add_attribute("authority", authority.to_string())
        .add_attribute("event_id", event_id.to_string())
        .add_event(
            Event::new("shoot9_event_created")
                .add_attribute("authority", authority.to_string())
                .add_attribute("event_id", event_id.to_string())
                .add_attribute("name", event.name)
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Open a contest under the sender's authority. Authorized creators only.
pub fn create_contest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: CreateContestParams,
) -> Result<Response, ContractError> {
    let CreateContestParams {
        contest_id,
        entry_fee,
        name,
        fee_receiver,
        event_id,
    } = params;

    ensure_creator(deps.storage, &info.sender)?;
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    if entry_fee.is_zero() {
        return Err(ContractError::InvalidFee);
    }
    validate_name(&name)?;

    let authority = info.sender;
    if CONTESTS.has(deps.storage, (&authority, contest_id)) {
        return Err(ContractError::DuplicateContest {
            authority: authority.to_string(),
            contest_id,
        });
    }

    if let Some(event_id) = event_id {
        if !EVENTS.has(deps.storage, (&authority, event_id)) {
            return Err(ContractError::EventNotFound {
                authority: authority.to_string(),
                event_id,
            });
        }
    }

    let fee_receiver = match fee_receiver {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => authority.clone(),
    };

    let mut totals = TOTALS.load(deps.storage)?;
    totals.total_contests = totals
        .total_contests
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    let contest = Contest {
        contest_id,
        authority: authority.clone(),
        name,
        event_id,
        entry_fee,
        fee_receiver,
        status: ContestStatus::Open,
        total_pool: Uint128::zero(),
        escrow_balance: Uint128::zero(),
        participant_count: 0,
        created_at: env.block.time,
        resolution: None,
    };
    CONTESTS.save(deps.storage, (&authority, contest_id), &contest)?;
    TOTALS.save(deps.storage, &totals)?;

    let event_label = event_id.map(|id| id.to_string()).unwrap_or_default();
    Ok(Response::new()
        .add_attribute("action", "create_contest")
        .add_attribute("authority", authority.to_string())
        .add_attribute("contest_id", contest_id.to_string())
        .add_event(
            Event::new("shoot9_contest_created")
                .add_attribute("authority", authority.to_string())
                .add_attribute("contest_id", contest_id.to_string())
                .add_attribute("event_id", event_label)
                .add_attribute("name", contest.name)
                .add_attribute("entry_fee", entry_fee.to_string())
                .add_attribute("fee_receiver", contest.fee_receiver.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Enter a contest by depositing exactly its entry fee.
///
/// The deposit travels with this message, so if anything below fails the
/// chain returns the funds and none of the writes persist.
pub fn enter_contest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    authority: String,
    contest_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let authority = deps.api.addr_validate(&authority)?;
    let mut contest = load_contest(deps.storage, &authority, contest_id)?;

    if !contest.status.is_open() {
        return Err(ContractError::ContestClosed { contest_id });
    }

    let participant = info.sender.clone();
    if ENTRANTS.has(deps.storage, (&authority, contest_id, &participant)) {
        return Err(ContractError::AlreadyEntered {
            participant: participant.to_string(),
            contest_id,
        });
    }

    check_entry_funds(&info.funds, &config.denom, contest.entry_fee)?;

    let index = contest.participant_count;
    let mut totals = TOTALS.load(deps.storage)?;
    contest.participant_count = index.checked_add(1).ok_or(ContractError::Overflow)?;
    contest.total_pool = contest
        .total_pool
        .checked_add(contest.entry_fee)
        .map_err(|_| ContractError::Overflow)?;
    contest.escrow_balance = contest
        .escrow_balance
        .checked_add(contest.entry_fee)
        .map_err(|_| ContractError::Overflow)?;
    totals.total_escrowed = totals
        .total_escrowed
        .checked_add(contest.entry_fee)
        .map_err(|_| ContractError::Overflow)?;

    PARTICIPANTS.save(deps.storage, (&authority, contest_id, index), &participant)?;
    ENTRANTS.save(deps.storage, (&authority, contest_id, &participant), &index)?;
    CONTESTS.save(deps.storage, (&authority, contest_id), &contest)?;
    TOTALS.save(deps.storage, &totals)?;

    Ok(Response::new()
        .add_attribute("action", "enter_contest")
        .add_attribute("contest_id", contest_id.to_string())
        .add_attribute("participant", participant.to_string())
        .add_event(
            Event::new("shoot9_contest_entered")
                .add_attribute("authority", authority.to_string())
                .add_attribute("contest_id", contest_id.to_string())
                .add_attribute("participant", participant.to_string())
                .add_attribute("amount", contest.entry_fee.to_string())
                .add_attribute("total_pool", contest.total_pool.to_string())
                .add_attribute("participant_count", contest.participant_count.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Resolve a contest: pay the protocol fee, then each winner in order.
///
/// Checks, first failure wins:
/// 1. contest is open
/// 2. sender is the contest authority
/// 3. winner count in range, payouts fit the distributable pool
/// 4. every destination is a valid address and escrow covers the outflow
///
/// Winners are taken from the authority's manifest as-is and are not matched
/// against the participant list.
///
/// All transfers are returned as bank messages in one response. If any leg
/// fails on chain the whole call reverts, including the status change below.
pub fn resolve_contest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: ResolveContestParams,
) -> Result<Response, ContractError> {
    let ResolveContestParams {
        authority,
        contest_id,
        winners,
        fee_receiver,
    } = params;

    let config = CONFIG.load(deps.storage)?;
    let authority = deps.api.addr_validate(&authority)?;
    let mut contest = load_contest(deps.storage, &authority, contest_id)?;

    if !contest.status.is_open() {
        return Err(ContractError::AlreadyResolved { contest_id });
    }

    // Authority alone gates resolution; a creator revoked after opening the
    // contest can still close it.
    if info.sender != contest.authority {
        return Err(ContractError::Unauthorized {
            reason: "only the contest authority can resolve".to_string(),
        });
    }

    let plan = plan_resolution(contest.total_pool, &winners)?;

    let fee_receiver = match fee_receiver {
        Some(addr) => validate_recipient(deps.api, &addr)?,
        None => contest.fee_receiver.clone(),
    };
    let mut recipients = Vec::with_capacity(winners.len());
    for leg in &winners {
        recipients.push(validate_recipient(deps.api, &leg.wallet)?);
    }

    let outflow = plan.outflow();
    let escrow = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?;
    if escrow.amount < outflow {
        return Err(ContractError::TransferFailure {
            recipient: env.contract.address.to_string(),
            reason: format!(
                "escrow holds {}{} but resolution needs {}",
                escrow.amount, config.denom, outflow
            ),
        });
    }

    // Zero-amount sends are rejected by the bank module; skip those legs
    let mut messages = Vec::with_capacity(winners.len() + 1);
    if !plan.fee.is_zero() {
        messages.push(BankMsg::Send {
            to_address: fee_receiver.to_string(),
            amount: coins(plan.fee.u128(), &config.denom),
        });
    }
    for (recipient, leg) in recipients.iter().zip(winners.iter()) {
        if leg.payout.is_zero() {
            continue;
        }
        messages.push(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(leg.payout.u128(), &config.denom),
        });
    }

    let manifest_hash = manifest_hash_hex(&winners);

    let mut totals = TOTALS.load(deps.storage)?;
    totals.total_escrowed = totals
        .total_escrowed
        .checked_sub(outflow)
        .map_err(|_| ContractError::Overflow)?;
    totals.total_fees_paid = totals
        .total_fees_paid
        .checked_add(plan.fee)
        .map_err(|_| ContractError::Overflow)?;
    totals.total_payouts = totals
        .total_payouts
        .checked_add(plan.total_payout)
        .map_err(|_| ContractError::Overflow)?;

    contest.escrow_balance = contest
        .escrow_balance
        .checked_sub(outflow)
        .map_err(|_| ContractError::Overflow)?;
    contest.status = ContestStatus::Resolved;
    contest.resolution = Some(ResolutionSummary {
        fee: plan.fee,
        fee_receiver: fee_receiver.clone(),
        distributable: plan.distributable,
        total_payout: plan.total_payout,
        remainder: plan.remainder,
        winners_count: winners.len() as u32,
        manifest_hash: manifest_hash.clone(),
        resolved_at: env.block.time,
    });

    CONTESTS.save(deps.storage, (&authority, contest_id), &contest)?;
    TOTALS.save(deps.storage, &totals)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "resolve_contest")
        .add_attribute("contest_id", contest_id.to_string())
        .add_attribute("status", contest.status.as_str())
        .add_attribute("winners_count", winners.len().to_string())
        .add_attribute("total_payout", plan.total_payout.to_string())
        .add_event(
            Event::new("shoot9_contest_resolved")
                .add_attribute("authority", authority.to_string())
                .add_attribute("contest_id", contest_id.to_string())
                .add_attribute("winners_count", winners.len().to_string())
                .add_attribute("total_pool", plan.total_pool.to_string())
                .add_attribute("fee", plan.fee.to_string())
                .add_attribute("fee_receiver", fee_receiver.to_string())
                .add_attribute("total_payout", plan.total_payout.to_string())
                .add_attribute("remainder", plan.remainder.to_string())
                .add_attribute("manifest_hash", manifest_hash)
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

fn load_auth_store(storage: &dyn Storage) -> Result<AuthStore, ContractError> {
    AUTH_STORE
        .may_load(storage)?
        .ok_or(ContractError::AuthNotInitialized)
}

/// The sender must be in the authorized creator set.
fn ensure_creator(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let store = load_auth_store(storage)?;
    if !store.is_authorized(sender) {
        return Err(ContractError::Unauthorized {
            reason: "only authorized creators can create events and contests".to_string(),
        });
    }
    Ok(())
}

fn load_contest(
    storage: &dyn Storage,
    authority: &Addr,
    contest_id: u64,
) -> Result<Contest, ContractError> {
    CONTESTS
        .may_load(storage, (authority, contest_id))?
        .ok_or_else(|| ContractError::ContestNotFound {
            authority: authority.to_string(),
            contest_id,
        })
}

/// Names are free-form display labels, bounded in length only.
fn validate_name(name: &str) -> Result<(), ContractError> {
    if name.len() > MAX_NAME_LEN {
        return Err(ContractError::InvalidName {
            reason: format!("name is {} bytes, max {}", name.len(), MAX_NAME_LEN),
        });
    }
    Ok(())
}

/// Exactly one coin, in the configured denom, for exactly the entry fee.
fn check_entry_funds(funds: &[Coin], denom: &str, entry_fee: Uint128) -> Result<(), ContractError> {
    match funds {
        [coin] if coin.denom == denom && coin.amount == entry_fee => Ok(()),
        _ => Err(ContractError::IncorrectEntryFee {
            expected: entry_fee,
            denom: denom.to_string(),
        }),
    }
}

fn validate_recipient(api: &dyn Api, addr: &str) -> Result<Addr, ContractError> {
    api.addr_validate(addr)
        .map_err(|e| ContractError::TransferFailure {
            recipient: addr.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{
    CreateContestParams, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ResolveContestParams,
};
use crate::query;
use crate::state::{Config, LedgerTotals, CONFIG, TOTALS};

const CONTRACT_NAME: &str = "crates.io:shoot9-contest-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.denom.trim().is_empty() {
        return Err(ContractError::InvalidDenom);
    }

    CONFIG.save(deps.storage, &Config { denom: msg.denom.clone() })?;
    TOTALS.save(deps.storage, &LedgerTotals::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "contest-ledger")
        .add_attribute("denom", msg.denom)
        .add_attribute("sender", info.sender.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::InitializeAuth {} => execute::initialize_auth(deps, env, info),
        ExecuteMsg::SetCreatorAuthorization {
            creator,
            authorized,
        } => execute::set_creator_authorization(deps, env, info, creator, authorized),
        ExecuteMsg::CreateEvent { event_id, name } => {
            execute::create_event(deps, env, info, event_id, name)
        }
        ExecuteMsg::CreateContest {
            contest_id,
            entry_fee,
            name,
            fee_receiver,
            event_id,
        } => execute::create_contest(
            deps,
            env,
            info,
            CreateContestParams {
                contest_id,
                entry_fee,
                name,
                fee_receiver,
                event_id,
            },
        ),
        ExecuteMsg::EnterContest {
            authority,
            contest_id,
        } => execute::enter_contest(deps, env, info, authority, contest_id),
        ExecuteMsg::ResolveContest {
            authority,
            contest_id,
            winners,
            fee_receiver,
        } => execute::resolve_contest(
            deps,
            env,
            info,
            ResolveContestParams {
                authority,
                contest_id,
                winners,
                fee_receiver,
            },
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::AuthorizedCreators {} => query::query_authorized_creators(deps),
        QueryMsg::IsAuthorizedCreator { address } => {
            query::query_is_authorized_creator(deps, address)
        }
        QueryMsg::Event {
            authority,
            event_id,
        } => query::query_event(deps, authority, event_id),
        QueryMsg::EventsByAuthority {
            authority,
            start_after,
            limit,
        } => query::query_events_by_authority(deps, authority, start_after, limit),
        QueryMsg::Contest {
            authority,
            contest_id,
        } => query::query_contest(deps, authority, contest_id),
        QueryMsg::ContestsByAuthority {
            authority,
            start_after,
            limit,
        } => query::query_contests_by_authority(deps, authority, start_after, limit),
        QueryMsg::Participants {
            authority,
            contest_id,
            start_after,
            limit,
        } => query::query_participants(deps, authority, contest_id, start_after, limit),
        QueryMsg::HasEntered {
            authority,
            contest_id,
            address,
        } => query::query_has_entered(deps, authority, contest_id, address),
        QueryMsg::Pool {
            authority,
            contest_id,
        } => query::query_pool(deps, authority, contest_id),
        QueryMsg::Totals {} => query::query_totals(deps),
        QueryMsg::VerifyManifest {
            authority,
            contest_id,
            winners,
        } => query::query_verify_manifest(deps, authority, contest_id, winners),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

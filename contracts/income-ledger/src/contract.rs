use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, UpdateConfigParams};
use crate::query;
use crate::state::{
    Config, LedgerState, CONFIG, LEDGER_STATE, MINTERS, OUTSTANDING_HOLDER_FUNDS, PAUSED,
    TOTAL_SUPPLY,
};

const CONTRACT_NAME: &str = "crates.io:estate-income-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    execute::validate_rates(msg.platform_fee_rate, msg.maintenance_reserve_rate)?;
    execute::validate_windows(
        msg.distribution_cooldown_seconds,
        msg.claim_window_seconds,
        msg.emergency_threshold_seconds,
    )?;
    if msg.supply_cap.is_zero() {
        return Err(ContractError::ZeroSupplyCap);
    }

    let distributor = msg
        .distributor
        .map(|d| deps.api.addr_validate(&d))
        .transpose()?;

    let config = Config {
        owner: info.sender.clone(),
        distributor,
        platform_wallet: deps.api.addr_validate(&msg.platform_wallet)?,
        income_denom: msg.income_denom,
        supply_cap: msg.supply_cap,
        platform_fee_rate: msg.platform_fee_rate,
        maintenance_reserve_rate: msg.maintenance_reserve_rate,
        distribution_cooldown_seconds: msg.distribution_cooldown_seconds,
        claim_window_seconds: msg.claim_window_seconds,
        emergency_threshold_seconds: msg.emergency_threshold_seconds,
    };
    CONFIG.save(deps.storage, &config)?;

    let state = LedgerState {
        distribution_count: 0,
        next_distribution_time: env
            .block
            .time
            .plus_seconds(msg.distribution_cooldown_seconds),
        total_minted: Uint128::zero(),
        total_revenue: Uint128::zero(),
        maintenance_added: Uint128::zero(),
        maintenance_withdrawn: Uint128::zero(),
    };
    LEDGER_STATE.save(deps.storage, &state)?;

    PAUSED.save(deps.storage, &false)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;
    OUTSTANDING_HOLDER_FUNDS.save(deps.storage, &Uint128::zero())?;

    // The owner can always mint; additional minters are added explicitly.
    MINTERS.save(deps.storage, &info.sender, &())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "income-ledger")
        .add_attribute("owner", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { recipient, amount } => execute::mint(deps, env, info, recipient, amount),
        ExecuteMsg::Burn { amount } => execute::burn(deps, env, info, amount),
        ExecuteMsg::Transfer { recipient, amount } => {
            execute::transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::AddMinter { address } => execute::add_minter(deps, info, address),
        ExecuteMsg::RemoveMinter { address } => execute::remove_minter(deps, info, address),
        ExecuteMsg::CreateDistribution { amount } => {
            execute::create_distribution(deps, env, info, amount)
        }
        ExecuteMsg::TriggerEmergencyDistribution { amount } => {
            execute::trigger_emergency_distribution(deps, env, info, amount)
        }
        ExecuteMsg::ClaimBatch { distribution_ids } => {
            execute::claim_batch(deps, env, info, distribution_ids)
        }
        ExecuteMsg::WithdrawMaintenance {
            amount,
            recipient,
            reason,
        } => execute::withdraw_maintenance(deps, env, info, amount, recipient, reason),
        ExecuteMsg::SweepUnclaimed { distribution_id } => {
            execute::sweep_unclaimed(deps, env, info, distribution_id)
        }
        ExecuteMsg::RecoverFunds {
            denom,
            amount,
            recipient,
        } => execute::recover_funds(deps, info, denom, amount, recipient),
        ExecuteMsg::Pause {} => execute::pause(deps, info),
        ExecuteMsg::Unpause {} => execute::unpause(deps, info),
        ExecuteMsg::SetPlatformFeeRate { rate } => {
            execute::set_platform_fee_rate(deps, info, rate)
        }
        ExecuteMsg::SetMaintenanceReserveRate { rate } => {
            execute::set_maintenance_reserve_rate(deps, info, rate)
        }
        ExecuteMsg::UpdateConfig {
            owner,
            platform_wallet,
            distributor,
        } => execute::update_config(
            deps,
            info,
            UpdateConfigParams {
                owner,
                platform_wallet,
                distributor,
            },
        ),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Metrics {} => query::query_metrics(deps),
        QueryMsg::Distribution { id } => query::query_distribution(deps, id),
        QueryMsg::Distributions { start_after, limit } => {
            query::query_distributions(deps, start_after, limit)
        }
        QueryMsg::Balance { address } => query::query_balance(deps, address),
        QueryMsg::BalanceAt {
            address,
            time_seconds,
        } => query::query_balance_at(deps, address, time_seconds),
        QueryMsg::ClaimableAmounts {
            address,
            distribution_ids,
        } => query::query_claimable_amounts(deps, env, address, distribution_ids),
        QueryMsg::Claim {
            distribution_id,
            address,
        } => query::query_claim(deps, distribution_id, address),
        QueryMsg::MaintenanceInfo {} => query::query_maintenance_info(deps),
        QueryMsg::Minters {} => query::query_minters(deps),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

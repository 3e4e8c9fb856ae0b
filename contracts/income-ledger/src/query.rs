use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use estate_common::payout::pro_rata_share;

use crate::msg::{
    BalanceResponse, ClaimableAmountsResponse, DistributionsResponse, MaintenanceInfoResponse,
    MetricsResponse, MintersResponse,
};
use crate::state::{
    balance_at, supply_at, BALANCES, CLAIMS, CONFIG, DISTRIBUTIONS, LEDGER_STATE, MINTERS,
    OUTSTANDING_HOLDER_FUNDS, PAUSED, TOTAL_SUPPLY,
};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

/// Aggregate dashboard view. Pure read, available while paused.
pub fn query_metrics(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let state = LEDGER_STATE.load(deps.storage)?;
    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;

    to_json_binary(&MetricsResponse {
        total_minted: state.total_minted,
        total_supply,
        remaining_mintable: config.supply_cap.checked_sub(total_supply).unwrap_or_default(),
        total_revenue: state.total_revenue,
        distribution_count: state.distribution_count,
        maintenance_reserve: state.maintenance_reserve(),
        total_maintenance_withdrawn: state.maintenance_withdrawn,
        outstanding_holder_funds: OUTSTANDING_HOLDER_FUNDS.load(deps.storage)?,
        platform_fee_rate: config.platform_fee_rate,
        maintenance_reserve_rate: config.maintenance_reserve_rate,
        paused: PAUSED.load(deps.storage)?,
        next_distribution_time: state.next_distribution_time,
    })
}

pub fn query_distribution(deps: Deps, id: u64) -> StdResult<Binary> {
    let distribution = DISTRIBUTIONS.load(deps.storage, id)?;
    to_json_binary(&distribution)
}

pub fn query_distributions(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let distributions: Vec<_> = DISTRIBUTIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, d)| d)
        .collect();

    to_json_binary(&DistributionsResponse { distributions })
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    to_json_binary(&BalanceResponse { address, balance })
}

pub fn query_balance_at(deps: Deps, address: String, time_seconds: u64) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = balance_at(deps.storage, &addr, time_seconds)?;
    to_json_binary(&BalanceResponse { address, balance })
}

/// What ClaimBatch would pay right now, per requested id. Mirrors the claim
/// computation exactly: claimed and expired entries project zero, unknown
/// ids error out like the execute path does.
pub fn query_claimable_amounts(
    deps: Deps,
    env: Env,
    address: String,
    distribution_ids: Vec<u64>,
) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let mut amounts = Vec::with_capacity(distribution_ids.len());
    let mut total = Uint128::zero();

    for id in &distribution_ids {
        let distribution = DISTRIBUTIONS.load(deps.storage, *id)?;

        let claimable = if CLAIMS.has(deps.storage, (*id, &addr))
            || env.block.time > distribution.expires_at
        {
            Uint128::zero()
        } else {
            let created = distribution.created_at.seconds();
            let snapshot_balance = balance_at(deps.storage, &addr, created)?;
            let snapshot_supply = supply_at(deps.storage, created)?;
            pro_rata_share(
                distribution.holder_amount,
                snapshot_balance,
                snapshot_supply,
            )
        };

        total += claimable;
        amounts.push(claimable);
    }

    to_json_binary(&ClaimableAmountsResponse {
        address,
        amounts,
        total,
    })
}

pub fn query_claim(deps: Deps, distribution_id: u64, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let claim = CLAIMS.may_load(deps.storage, (distribution_id, &addr))?;
    to_json_binary(&claim)
}

pub fn query_maintenance_info(deps: Deps) -> StdResult<Binary> {
    let state = LEDGER_STATE.load(deps.storage)?;
    to_json_binary(&MaintenanceInfoResponse {
        reserve_balance: state.maintenance_reserve(),
        total_added: state.maintenance_added,
        total_withdrawn: state.maintenance_withdrawn,
    })
}

pub fn query_minters(deps: Deps) -> StdResult<Binary> {
    let minters: Vec<String> = MINTERS
        .keys(deps.storage, None, None, Order::Ascending)
        .filter_map(|r| r.ok())
        .map(|addr| addr.to_string())
        .collect();
    to_json_binary(&MintersResponse { minters })
}

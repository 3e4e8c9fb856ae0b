use cosmwasm_std::{
    coins, Addr, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128,
};
use estate_common::payout::{
    pro_rata_share, split_deposit, MAX_MAINTENANCE_RESERVE_RATE, MAX_PLATFORM_FEE_RATE,
};

use crate::error::ContractError;
use crate::msg::UpdateConfigParams;
use crate::state::{
    balance_at, record_balance, record_supply, supply_at, ClaimRecord, Config, Distribution,
    BALANCES, CLAIMS, CONFIG, DISTRIBUTIONS, LEDGER_STATE, MINTERS, OUTSTANDING_HOLDER_FUNDS,
    PAUSED, TOTAL_SUPPLY,
};

/// Distribution cooldown and emergency threshold must be at least one day;
/// anything shorter makes the "anyone may trigger" valve a griefing vector.
pub const MIN_DISTRIBUTION_COOLDOWN_SECS: u64 = 24 * 60 * 60;
pub const MIN_EMERGENCY_THRESHOLD_SECS: u64 = 24 * 60 * 60;

/// Validate the fee/reserve rate pair against the per-rate bounds and the
/// combined-share invariant.
pub fn validate_rates(platform_rate: u8, maintenance_rate: u8) -> Result<(), ContractError> {
    if platform_rate > MAX_PLATFORM_FEE_RATE {
        return Err(ContractError::RateOutOfBounds {
            field: "platform_fee_rate".to_string(),
            value: platform_rate,
            max: MAX_PLATFORM_FEE_RATE,
        });
    }
    if maintenance_rate > MAX_MAINTENANCE_RESERVE_RATE {
        return Err(ContractError::RateOutOfBounds {
            field: "maintenance_reserve_rate".to_string(),
            value: maintenance_rate,
            max: MAX_MAINTENANCE_RESERVE_RATE,
        });
    }
    if platform_rate as u16 + maintenance_rate as u16 > 100 {
        return Err(ContractError::RateInvariantViolation {
            platform: platform_rate,
            maintenance: maintenance_rate,
        });
    }
    Ok(())
}

/// Validate the schedule windows at instantiation.
pub fn validate_windows(
    cooldown: u64,
    claim_window: u64,
    emergency_threshold: u64,
) -> Result<(), ContractError> {
    if cooldown < MIN_DISTRIBUTION_COOLDOWN_SECS {
        return Err(ContractError::WindowOutOfBounds {
            field: "distribution_cooldown_seconds".to_string(),
            value: cooldown,
            min: MIN_DISTRIBUTION_COOLDOWN_SECS,
        });
    }
    if claim_window < cooldown {
        return Err(ContractError::WindowOutOfBounds {
            field: "claim_window_seconds".to_string(),
            value: claim_window,
            min: cooldown,
        });
    }
    if emergency_threshold < MIN_EMERGENCY_THRESHOLD_SECS {
        return Err(ContractError::WindowOutOfBounds {
            field: "emergency_threshold_seconds".to_string(),
            value: emergency_threshold,
            min: MIN_EMERGENCY_THRESHOLD_SECS,
        });
    }
    Ok(())
}

fn ensure_not_paused(storage: &dyn Storage) -> Result<(), ContractError> {
    if PAUSED.load(storage)? {
        return Err(ContractError::Paused);
    }
    Ok(())
}

fn ensure_owner(config: &Config, sender: &Addr, action: &str) -> Result<(), ContractError> {
    if sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: format!("only owner can {action}"),
        });
    }
    Ok(())
}

fn nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    Ok(())
}

/// Mint share tokens to `recipient`. Authorized minters only; the hard
/// supply cap makes over-issuance fail rather than truncate.
pub fn mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    nonzero(amount)?;

    if !MINTERS.has(deps.storage, &info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "not an authorized minter".to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let supply = TOTAL_SUPPLY.load(deps.storage)?;
    if supply + amount > config.supply_cap {
        return Err(ContractError::CapExceeded {
            amount,
            supply,
            cap: config.supply_cap,
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    let balance = BALANCES
        .may_load(deps.storage, &recipient)?
        .unwrap_or_default();
    record_balance(deps.storage, &recipient, env.block.time, balance + amount)?;
    record_supply(deps.storage, env.block.time, supply + amount)?;

    let mut state = LEDGER_STATE.load(deps.storage)?;
    state.total_minted += amount;
    LEDGER_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("estate_balance_changed")
                .add_attribute("kind", "mint")
                .add_attribute("account", recipient.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("new_balance", (balance + amount).to_string())
                .add_attribute("total_supply", (supply + amount).to_string()),
        ))
}

/// Burn the caller's own tokens, shrinking total supply.
pub fn burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    nonzero(amount)?;

    let balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if amount > balance {
        return Err(ContractError::InsufficientBalance {
            available: balance,
            requested: amount,
        });
    }

    record_balance(deps.storage, &info.sender, env.block.time, balance - amount)?;
    let supply = TOTAL_SUPPLY.load(deps.storage)?;
    record_supply(deps.storage, env.block.time, supply - amount)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("account", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("estate_balance_changed")
                .add_attribute("kind", "burn")
                .add_attribute("account", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("new_balance", (balance - amount).to_string())
                .add_attribute("total_supply", (supply - amount).to_string()),
        ))
}

/// Transfer share tokens. Checkpoints are written for both sides, so
/// historical snapshots are never disturbed by later transfers.
pub fn transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    nonzero(amount)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let from_balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if amount > from_balance {
        return Err(ContractError::InsufficientBalance {
            available: from_balance,
            requested: amount,
        });
    }

    if recipient == info.sender {
        // Balance-neutral, but still a valid call; keep the checkpoint fresh.
        record_balance(deps.storage, &info.sender, env.block.time, from_balance)?;
    } else {
        let to_balance = BALANCES
            .may_load(deps.storage, &recipient)?
            .unwrap_or_default();
        record_balance(
            deps.storage,
            &info.sender,
            env.block.time,
            from_balance - amount,
        )?;
        record_balance(deps.storage, &recipient, env.block.time, to_balance + amount)?;
    }

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("to", recipient.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("estate_balance_changed")
                .add_attribute("kind", "transfer")
                .add_attribute("from", info.sender.to_string())
                .add_attribute("to", recipient.to_string())
                .add_attribute("amount", amount.to_string()),
        ))
}

/// Authorize a minter. Owner only.
pub fn add_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "add minters")?;

    let minter = deps.api.addr_validate(&address)?;
    MINTERS.save(deps.storage, &minter, &())?;

    Ok(Response::new()
        .add_attribute("action", "add_minter")
        .add_attribute("minter", minter.to_string()))
}

/// Revoke a minter. Owner only.
pub fn remove_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "remove minters")?;

    let minter = deps.api.addr_validate(&address)?;
    MINTERS.remove(deps.storage, &minter);

    Ok(Response::new()
        .add_attribute("action", "remove_minter")
        .add_attribute("minter", minter.to_string()))
}

/// Custody not yet promised to anyone: the contract's income-denom balance
/// minus unclaimed holder buckets and the maintenance reserve. Only this
/// portion may back a new distribution, so one distribution's shortfall can
/// never be masked by another's funds.
fn uncommitted_custody(deps: &DepsMut, env: &Env, config: &Config) -> Result<Uint128, ContractError> {
    let bank = deps
        .querier
        .query_balance(&env.contract.address, &config.income_denom)?
        .amount;
    let outstanding = OUTSTANDING_HOLDER_FUNDS.load(deps.storage)?;
    let reserve = LEDGER_STATE.load(deps.storage)?.maintenance_reserve();
    Ok(bank.saturating_sub(outstanding).saturating_sub(reserve))
}

/// Scheduled distribution path. Owner or the designated distributor only.
pub fn create_distribution(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let is_distributor = config
        .distributor
        .as_ref()
        .is_some_and(|d| *d == info.sender);
    if info.sender != config.owner && !is_distributor {
        return Err(ContractError::Unauthorized {
            reason: "only owner or distributor can create distributions".to_string(),
        });
    }

    let state = LEDGER_STATE.load(deps.storage)?;
    if env.block.time < state.next_distribution_time {
        return Err(ContractError::TooEarly {
            next_distribution_time: state.next_distribution_time.seconds(),
        });
    }

    open_distribution(deps, env, config, amount)
}

/// Recovery valve: anyone may force the distribution once it is overdue by
/// more than the emergency threshold. Same accounting path as the scheduled
/// call, not a separate one.
pub fn trigger_emergency_distribution(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = LEDGER_STATE.load(deps.storage)?;

    let eligible_at = state.next_distribution_time.seconds() + config.emergency_threshold_seconds;
    if env.block.time.seconds() <= eligible_at {
        return Err(ContractError::NotOverdue { eligible_at });
    }

    open_distribution(deps, env, config, amount)
}

/// Shared distribution bookkeeping: split the deposit, pay the platform cut,
/// book the maintenance reserve, and open the immutable record.
fn open_distribution(
    deps: DepsMut,
    env: Env,
    config: Config,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    nonzero(amount)?;

    let available = uncommitted_custody(&deps, &env, &config)?;
    if amount > available {
        return Err(ContractError::InsufficientCustody {
            available,
            requested: amount,
        });
    }

    let split = split_deposit(amount, config.platform_fee_rate, config.maintenance_reserve_rate);
    let eligible_supply = TOTAL_SUPPLY.load(deps.storage)?;

    let mut state = LEDGER_STATE.load(deps.storage)?;
    let id = state.distribution_count + 1;
    let expires_at = env.block.time.plus_seconds(config.claim_window_seconds);

    let distribution = Distribution {
        id,
        created_at: env.block.time,
        total_amount: amount,
        holder_amount: split.holder,
        maintenance_amount: split.maintenance,
        platform_amount: split.platform,
        eligible_supply,
        expires_at,
        swept: false,
        claimed_amount: Uint128::zero(),
    };
    DISTRIBUTIONS.save(deps.storage, id, &distribution)?;

    state.distribution_count = id;
    state.next_distribution_time = env
        .block
        .time
        .plus_seconds(config.distribution_cooldown_seconds);
    state.total_revenue += amount;
    state.maintenance_added += split.maintenance;
    LEDGER_STATE.save(deps.storage, &state)?;

    let outstanding = OUTSTANDING_HOLDER_FUNDS.load(deps.storage)?;
    OUTSTANDING_HOLDER_FUNDS.save(deps.storage, &(outstanding + split.holder))?;

    let mut response = Response::new()
        .add_attribute("action", "create_distribution")
        .add_attribute("distribution_id", id.to_string())
        .add_attribute("total_amount", amount.to_string())
        .add_event(
            Event::new("estate_distribution")
                .add_attribute("distribution_id", id.to_string())
                .add_attribute("total_amount", amount.to_string())
                .add_attribute("holder_amount", split.holder.to_string())
                .add_attribute("maintenance_amount", split.maintenance.to_string())
                .add_attribute("platform_amount", split.platform.to_string())
                .add_attribute("eligible_supply", eligible_supply.to_string())
                .add_attribute("expires_at", expires_at.seconds().to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        );

    // The platform cut leaves custody immediately; holder and maintenance
    // buckets stay until claimed / withdrawn.
    if !split.platform.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: config.platform_wallet.to_string(),
            amount: coins(split.platform.u128(), &config.income_denom),
        });
    }

    Ok(response)
}

/// Claim the caller's share of the listed distributions in one call.
///
/// Unknown ids fail the whole batch. Already-claimed and expired entries are
/// skipped so a mixed batch still pays out the live ones. Zero-entitlement
/// entries on live distributions are recorded as claimed with zero payout so
/// they are never recomputed. One outbound transfer for the whole batch.
pub fn claim_batch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    distribution_ids: Vec<u64>,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;

    // Validate the whole batch up front: an unknown id fails the call before
    // any claim record is written.
    for id in &distribution_ids {
        if !DISTRIBUTIONS.has(deps.storage, *id) {
            return Err(ContractError::InvalidDistribution { distribution_id: *id });
        }
    }

    let config = CONFIG.load(deps.storage)?;
    let mut total = Uint128::zero();
    let mut newly_claimed: u64 = 0;

    for id in &distribution_ids {
        let mut distribution = DISTRIBUTIONS.load(deps.storage, *id)?;

        // Skip, don't fail: repeated and expired entries contribute zero.
        if CLAIMS.has(deps.storage, (*id, &info.sender)) {
            continue;
        }
        if env.block.time > distribution.expires_at {
            continue;
        }

        // Numerator and denominator both come from the checkpoint history at
        // the same instant; a mint landing in the distribution's block can
        // therefore never pay out more than the holder bucket.
        let created = distribution.created_at.seconds();
        let snapshot_balance = balance_at(deps.storage, &info.sender, created)?;
        let snapshot_supply = supply_at(deps.storage, created)?;
        let claimable = pro_rata_share(
            distribution.holder_amount,
            snapshot_balance,
            snapshot_supply,
        );

        CLAIMS.save(
            deps.storage,
            (*id, &info.sender),
            &ClaimRecord {
                amount: claimable,
                claimed_at: env.block.time,
            },
        )?;
        newly_claimed += 1;

        if !claimable.is_zero() {
            distribution.claimed_amount += claimable;
            DISTRIBUTIONS.save(deps.storage, *id, &distribution)?;
            total += claimable;
        }
    }

    if total.is_zero() && newly_claimed == 0 {
        return Err(ContractError::NothingToClaim);
    }

    let outstanding = OUTSTANDING_HOLDER_FUNDS.load(deps.storage)?;
    OUTSTANDING_HOLDER_FUNDS.save(
        deps.storage,
        &outstanding.checked_sub(total).unwrap_or_default(),
    )?;

    let mut response = Response::new()
        .add_attribute("action", "claim_batch")
        .add_attribute("holder", info.sender.to_string())
        .add_attribute("total_claimed", total.to_string())
        .add_event(
            Event::new("estate_claim")
                .add_attribute("holder", info.sender.to_string())
                .add_attribute("distribution_ids", format!("{distribution_ids:?}"))
                .add_attribute("total_claimed", total.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        );

    if !total.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(total.u128(), &config.income_denom),
        });
    }

    Ok(response)
}

/// Draw from the maintenance reserve. Owner only; the justification reason
/// is mandatory and emitted verbatim for the audit trail.
pub fn withdraw_maintenance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    recipient: String,
    reason: String,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;
    nonzero(amount)?;

    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "withdraw maintenance funds")?;

    if reason.trim().is_empty() {
        return Err(ContractError::EmptyReason);
    }

    let mut state = LEDGER_STATE.load(deps.storage)?;
    let reserve = state.maintenance_reserve();
    if amount > reserve {
        return Err(ContractError::InsufficientReserve {
            available: reserve,
            requested: amount,
        });
    }

    state.maintenance_withdrawn += amount;
    LEDGER_STATE.save(deps.storage, &state)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let remaining = state.maintenance_reserve();
    // Alerting hook: flag when the reserve drops below 10% of all funds ever
    // set aside, so the operator's monitor can raise a low-reserve warning.
    let low_reserve = remaining
        .checked_mul(Uint128::new(10))
        .map(|scaled| scaled < state.maintenance_added)
        .unwrap_or(false);

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount.u128(), &config.income_denom),
        })
        .add_attribute("action", "withdraw_maintenance")
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", recipient.to_string())
        .add_event(
            Event::new("estate_maintenance_withdrawal")
                .add_attribute("amount", amount.to_string())
                .add_attribute("recipient", recipient.to_string())
                .add_attribute("reason", reason)
                .add_attribute("remaining_reserve", remaining.to_string())
                .add_attribute("low_reserve", low_reserve.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Reclaim a distribution's unclaimed holder funds after its claim window
/// has passed, sending them to the platform wallet.
pub fn sweep_unclaimed(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    distribution_id: u64,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "sweep unclaimed funds")?;

    let mut distribution = DISTRIBUTIONS
        .may_load(deps.storage, distribution_id)?
        .ok_or(ContractError::InvalidDistribution { distribution_id })?;

    if distribution.swept {
        return Err(ContractError::AlreadySwept { distribution_id });
    }
    if env.block.time <= distribution.expires_at {
        return Err(ContractError::NotYetExpired {
            distribution_id,
            expires_at: distribution.expires_at.seconds(),
        });
    }

    let remaining = distribution
        .holder_amount
        .checked_sub(distribution.claimed_amount)
        .unwrap_or_default();

    distribution.swept = true;
    DISTRIBUTIONS.save(deps.storage, distribution_id, &distribution)?;

    let outstanding = OUTSTANDING_HOLDER_FUNDS.load(deps.storage)?;
    OUTSTANDING_HOLDER_FUNDS.save(
        deps.storage,
        &outstanding.checked_sub(remaining).unwrap_or_default(),
    )?;

    let mut response = Response::new()
        .add_attribute("action", "sweep_unclaimed")
        .add_attribute("distribution_id", distribution_id.to_string())
        .add_attribute("swept_amount", remaining.to_string())
        .add_event(
            Event::new("estate_sweep")
                .add_attribute("distribution_id", distribution_id.to_string())
                .add_attribute("swept_amount", remaining.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        );

    if !remaining.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: config.platform_wallet.to_string(),
            amount: coins(remaining.u128(), &config.income_denom),
        });
    }

    Ok(response)
}

/// Recover tokens that were accidentally sent to the contract. The income
/// denom is categorically excluded: it backs holder buckets and the reserve.
pub fn recover_funds(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    nonzero(amount)?;

    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "recover funds")?;

    if denom == config.income_denom {
        return Err(ContractError::CannotRecoverIncomeDenom);
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount.u128(), &denom),
        })
        .add_attribute("action", "recover_funds")
        .add_attribute("denom", denom)
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", recipient.to_string()))
}

/// Halt all value-moving operations. Owner only. Queries stay available.
pub fn pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "pause")?;

    if PAUSED.load(deps.storage)? {
        return Err(ContractError::AlreadyPaused);
    }
    PAUSED.save(deps.storage, &true)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "unpause")?;

    if !PAUSED.load(deps.storage)? {
        return Err(ContractError::NotPaused);
    }
    PAUSED.save(deps.storage, &false)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

/// Update the platform fee rate. Applies to the next distribution only;
/// already-created records are immutable.
pub fn set_platform_fee_rate(
    deps: DepsMut,
    info: MessageInfo,
    rate: u8,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "set rates")?;

    validate_rates(rate, config.maintenance_reserve_rate)?;
    config.platform_fee_rate = rate;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_platform_fee_rate")
        .add_attribute("rate", rate.to_string()))
}

/// Update the maintenance reserve rate. Applies to the next distribution.
pub fn set_maintenance_reserve_rate(
    deps: DepsMut,
    info: MessageInfo,
    rate: u8,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "set rates")?;

    validate_rates(config.platform_fee_rate, rate)?;
    config.maintenance_reserve_rate = rate;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_maintenance_reserve_rate")
        .add_attribute("rate", rate.to_string()))
}

/// Update owner / platform wallet / distributor. Owner only.
pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    params: UpdateConfigParams,
) -> Result<Response, ContractError> {
    let UpdateConfigParams {
        owner,
        platform_wallet,
        distributor,
    } = params;

    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender, "update config")?;

    if let Some(new_owner) = owner {
        config.owner = deps.api.addr_validate(&new_owner)?;
    }
    if let Some(wallet) = platform_wallet {
        config.platform_wallet = deps.api.addr_validate(&wallet)?;
    }
    if let Some(dist) = distributor {
        config.distributor = Some(deps.api.addr_validate(&dist)?);
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_config"))
}

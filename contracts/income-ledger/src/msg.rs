use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};

use crate::state::{ClaimRecord, Config, Distribution};

#[cw_serde]
pub struct InstantiateMsg {
    /// Operating account receiving the platform cut and swept funds.
    pub platform_wallet: String,
    /// Optional dedicated distributor key (the scheduler). Owner can always
    /// distribute.
    pub distributor: Option<String>,
    /// Denom of the stable income currency (e.g. an IBC USDC denom).
    pub income_denom: String,
    /// Hard cap on share-token supply, in smallest units.
    pub supply_cap: Uint128,
    /// Whole percent, 0-20.
    pub platform_fee_rate: u8,
    /// Whole percent, 0-25.
    pub maintenance_reserve_rate: u8,
    pub distribution_cooldown_seconds: u64,
    pub claim_window_seconds: u64,
    pub emergency_threshold_seconds: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint share tokens. Authorized minters only; bounded by the supply cap.
    Mint { recipient: String, amount: Uint128 },
    /// Burn the caller's own share tokens.
    Burn { amount: Uint128 },
    /// Transfer share tokens to another account.
    Transfer { recipient: String, amount: Uint128 },
    /// Authorize an address to mint. Owner only.
    AddMinter { address: String },
    /// Revoke a minter. Owner only.
    RemoveMinter { address: String },
    /// Split a deposited income amount into holder / maintenance / platform
    /// buckets and open a new distribution. Owner or distributor only; the
    /// funds must already sit in the contract's custody.
    CreateDistribution { amount: Uint128 },
    /// Same accounting path as CreateDistribution, but callable by anyone
    /// once the scheduled distribution is overdue past the emergency
    /// threshold. Recovery valve for a missed scheduler run.
    TriggerEmergencyDistribution { amount: Uint128 },
    /// Claim the caller's pro-rata share of one or more distributions.
    /// Already-claimed and expired entries are skipped; unknown ids fail the
    /// whole call.
    ClaimBatch { distribution_ids: Vec<u64> },
    /// Draw from the maintenance reserve. Owner only; requires a
    /// justification reason which is emitted verbatim.
    WithdrawMaintenance {
        amount: Uint128,
        recipient: String,
        reason: String,
    },
    /// Reclaim a distribution's unclaimed holder funds after expiry,
    /// sending them to the platform wallet. Owner only.
    SweepUnclaimed { distribution_id: u64 },
    /// Recover tokens accidentally sent to the contract. Owner only; the
    /// income denom itself is never recoverable, it backs distributions and
    /// the reserve.
    RecoverFunds {
        denom: String,
        amount: Uint128,
        recipient: String,
    },
    /// Halt all value-moving operations. Owner only.
    Pause {},
    /// Resume operations. Owner only.
    Unpause {},
    /// Whole percent, 0-20. Takes effect on the next distribution.
    SetPlatformFeeRate { rate: u8 },
    /// Whole percent, 0-25. Takes effect on the next distribution.
    SetMaintenanceReserveRate { rate: u8 },
    /// Update owner / platform wallet / distributor. Owner only.
    UpdateConfig {
        owner: Option<String>,
        platform_wallet: Option<String>,
        distributor: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    /// Aggregate dashboard view: supply, revenue, reserve, rates, pause flag.
    #[returns(MetricsResponse)]
    Metrics {},
    #[returns(Distribution)]
    Distribution { id: u64 },
    #[returns(DistributionsResponse)]
    Distributions {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// Historical balance as of `time_seconds` (checkpoint lookup).
    #[returns(BalanceResponse)]
    BalanceAt { address: String, time_seconds: u64 },
    /// What ClaimBatch would pay right now, per id. Read-only projection of
    /// the claim computation; errors on unknown ids exactly like ClaimBatch.
    #[returns(ClaimableAmountsResponse)]
    ClaimableAmounts {
        address: String,
        distribution_ids: Vec<u64>,
    },
    #[returns(Option<ClaimRecord>)]
    Claim {
        distribution_id: u64,
        address: String,
    },
    #[returns(MaintenanceInfoResponse)]
    MaintenanceInfo {},
    #[returns(MintersResponse)]
    Minters {},
}

#[cw_serde]
pub struct MetricsResponse {
    pub total_minted: Uint128,
    pub total_supply: Uint128,
    pub remaining_mintable: Uint128,
    pub total_revenue: Uint128,
    pub distribution_count: u64,
    pub maintenance_reserve: Uint128,
    pub total_maintenance_withdrawn: Uint128,
    pub outstanding_holder_funds: Uint128,
    pub platform_fee_rate: u8,
    pub maintenance_reserve_rate: u8,
    pub paused: bool,
    pub next_distribution_time: Timestamp,
}

#[cw_serde]
pub struct DistributionsResponse {
    pub distributions: Vec<Distribution>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub address: String,
    pub balance: Uint128,
}

#[cw_serde]
pub struct ClaimableAmountsResponse {
    pub address: String,
    /// Parallel to the requested distribution ids.
    pub amounts: Vec<Uint128>,
    pub total: Uint128,
}

#[cw_serde]
pub struct MaintenanceInfoResponse {
    pub reserve_balance: Uint128,
    pub total_added: Uint128,
    pub total_withdrawn: Uint128,
}

#[cw_serde]
pub struct MintersResponse {
    pub minters: Vec<String>,
}

/// Bundled arguments for `execute::update_config`.
#[cw_serde]
pub struct UpdateConfigParams {
    pub owner: Option<String>,
    pub platform_wallet: Option<String>,
    pub distributor: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

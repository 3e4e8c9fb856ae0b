use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("operations are paused")]
    Paused,

    #[error("operations are not paused")]
    NotPaused,

    #[error("operations are already paused")]
    AlreadyPaused,

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("minting {amount} would exceed the supply cap (supply {supply}, cap {cap})")]
    CapExceeded {
        amount: Uint128,
        supply: Uint128,
        cap: Uint128,
    },

    #[error("insufficient balance: have {available}, need {requested}")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("insufficient maintenance reserve: have {available}, need {requested}")]
    InsufficientReserve {
        available: Uint128,
        requested: Uint128,
    },

    #[error("insufficient uncommitted custody: have {available}, need {requested}")]
    InsufficientCustody {
        available: Uint128,
        requested: Uint128,
    },

    #[error("too early: next distribution allowed at {next_distribution_time}")]
    TooEarly { next_distribution_time: u64 },

    #[error("distribution is not overdue: emergency trigger allowed after {eligible_at}")]
    NotOverdue { eligible_at: u64 },

    #[error("distribution {distribution_id} has not expired yet (expires at {expires_at})")]
    NotYetExpired {
        distribution_id: u64,
        expires_at: u64,
    },

    #[error("distribution {distribution_id} already swept")]
    AlreadySwept { distribution_id: u64 },

    #[error("unknown distribution id {distribution_id}")]
    InvalidDistribution { distribution_id: u64 },

    #[error("nothing to claim")]
    NothingToClaim,

    #[error("maintenance withdrawal requires a justification reason")]
    EmptyReason,

    #[error("cannot recover the income denom from custody")]
    CannotRecoverIncomeDenom,

    #[error("invalid rate: {field} = {value} (max {max})")]
    RateOutOfBounds { field: String, value: u8, max: u8 },

    #[error("combined rates exceed 100%: platform({platform}) + maintenance({maintenance})")]
    RateInvariantViolation { platform: u8, maintenance: u8 },

    #[error("invalid time window: {field} = {value} seconds (min {min})")]
    WindowOutOfBounds { field: String, value: u64, min: u64 },

    #[error("supply cap must be greater than zero")]
    ZeroSupplyCap,
}

pub mod payout;

pub use payout::{
    pro_rata_share, split_deposit, DepositSplit, MAX_MAINTENANCE_RESERVE_RATE,
    MAX_PLATFORM_FEE_RATE,
};

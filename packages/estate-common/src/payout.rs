use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Upper bound for the platform fee rate, in whole percent.
pub const MAX_PLATFORM_FEE_RATE: u8 = 20;

/// Upper bound for the maintenance reserve rate, in whole percent.
pub const MAX_MAINTENANCE_RESERVE_RATE: u8 = 25;

/// The three-way split of a single income deposit.
///
/// Invariant: `holder + maintenance + platform == total` exactly. Both
/// percentage cuts round down, so any remainder lands in the holder bucket.
#[cw_serde]
pub struct DepositSplit {
    pub holder: Uint128,
    pub maintenance: Uint128,
    pub platform: Uint128,
}

/// Split a deposited income amount into holder / maintenance / platform
/// buckets according to whole-percent rates.
///
/// The platform and maintenance cuts are `floor(total * rate / 100)`; the
/// holder bucket is the exact remainder, so no unit of value is ever created
/// or destroyed by rounding.
pub fn split_deposit(total: Uint128, platform_rate: u8, maintenance_rate: u8) -> DepositSplit {
    let platform = total.multiply_ratio(platform_rate as u128, 100u128);
    let maintenance = total.multiply_ratio(maintenance_rate as u128, 100u128);
    let holder = total - platform - maintenance;
    DepositSplit {
        holder,
        maintenance,
        platform,
    }
}

/// A holder's pro-rata share of a distribution's holder bucket:
/// `floor(holder_amount * balance / eligible_supply)`.
///
/// A zero eligible supply yields zero (a distribution created while no
/// tokens existed has no claimants; its bucket is recovered by the sweep).
pub fn pro_rata_share(
    holder_amount: Uint128,
    balance_at_snapshot: Uint128,
    eligible_supply: Uint128,
) -> Uint128 {
    if eligible_supply.is_zero() || balance_at_snapshot.is_zero() {
        return Uint128::zero();
    }
    holder_amount.multiply_ratio(balance_at_snapshot, eligible_supply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_conserves_total() {
        let split = split_deposit(Uint128::new(10_000), 10, 10);
        assert_eq!(split.platform, Uint128::new(1_000));
        assert_eq!(split.maintenance, Uint128::new(1_000));
        assert_eq!(split.holder, Uint128::new(8_000));
        assert_eq!(
            split.holder + split.maintenance + split.platform,
            Uint128::new(10_000)
        );
    }

    #[test]
    fn split_rounding_goes_to_holders() {
        // 7% of 101 = 7.07 -> 7, 13% of 101 = 13.13 -> 13, holders absorb the rest
        let split = split_deposit(Uint128::new(101), 7, 13);
        assert_eq!(split.platform, Uint128::new(7));
        assert_eq!(split.maintenance, Uint128::new(13));
        assert_eq!(split.holder, Uint128::new(81));
    }

    #[test]
    fn split_with_zero_rates() {
        let split = split_deposit(Uint128::new(500), 0, 0);
        assert_eq!(split.holder, Uint128::new(500));
        assert_eq!(split.maintenance, Uint128::zero());
        assert_eq!(split.platform, Uint128::zero());
    }

    #[test]
    fn pro_rata_floors() {
        // 8000 * 2000 / 6000 = 2666.67 -> 2666
        assert_eq!(
            pro_rata_share(Uint128::new(8_000), Uint128::new(2_000), Uint128::new(6_000)),
            Uint128::new(2_666)
        );
        // 8000 * 4000 / 6000 = 5333.33 -> 5333
        assert_eq!(
            pro_rata_share(Uint128::new(8_000), Uint128::new(4_000), Uint128::new(6_000)),
            Uint128::new(5_333)
        );
    }

    #[test]
    fn pro_rata_sum_never_exceeds_bucket() {
        let holder_amount = Uint128::new(8_000);
        let supply = Uint128::new(6_000);
        let a = pro_rata_share(holder_amount, Uint128::new(2_000), supply);
        let b = pro_rata_share(holder_amount, Uint128::new(4_000), supply);
        // 2666 + 5333 = 7999 <= 8000, one unit retained in custody
        assert_eq!(a + b, Uint128::new(7_999));
        assert!(a + b <= holder_amount);
    }

    #[test]
    fn pro_rata_zero_supply_is_zero() {
        assert_eq!(
            pro_rata_share(Uint128::new(8_000), Uint128::new(100), Uint128::zero()),
            Uint128::zero()
        );
    }

    #[test]
    fn pro_rata_full_supply_gets_full_bucket() {
        let supply = Uint128::new(6_000);
        assert_eq!(
            pro_rata_share(Uint128::new(8_000), supply, supply),
            Uint128::new(8_000)
        );
    }
}

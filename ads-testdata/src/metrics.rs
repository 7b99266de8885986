//! Derived advertising metrics. Every value is rounded half-to-even to
//! [`NUM_DECIMAL_PLACES`] and rescaled so it always renders with two digits.

use rust_decimal::prelude::*;

pub const NUM_DECIMAL_PLACES: u32 = 2;

#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(NUM_DECIMAL_PLACES);
    rounded.rescale(NUM_DECIMAL_PLACES);
    rounded
}

/// Click-through rate in percent, `clicks / impressions * 100`.
#[must_use]
pub fn ctr(clicks: u32, impressions: u32) -> Decimal {
    if impressions == 0 {
        return round_money(Decimal::ZERO);
    }
    round_money(Decimal::from(clicks) * Decimal::from(100) / Decimal::from(impressions))
}

/// Cost per click.
#[must_use]
pub fn cpc(cost: Decimal, clicks: u32) -> Decimal {
    if clicks == 0 {
        return round_money(Decimal::ZERO);
    }
    round_money(cost / Decimal::from(clicks))
}

/// Return on ad spend.
#[must_use]
pub fn roas(revenue: Decimal, cost: Decimal) -> Decimal {
    if cost.is_zero() {
        return round_money(Decimal::ZERO);
    }
    round_money(revenue / cost)
}

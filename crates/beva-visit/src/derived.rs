//! Values derived from the draft on read.
//!
//! Pure functions over a draft snapshot, recomputed whenever the UI needs
//! them. Nothing here is stored back on the draft, so they can never go
//! stale when an upstream field changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Days ahead within which an expiration date triggers the warning banner.
const EXPIRY_WARNING_DAYS: i64 = 7;

/// Whether `expiration` falls within the warning window from `today`.
///
/// True iff the date is between today and seven days out, inclusive. Already
/// expired dates do not warn (the expired-product incident type covers
/// those), and `None` never warns.
#[must_use]
pub fn is_expiration_near(expiration: Option<NaiveDate>, today: NaiveDate) -> bool {
    let Some(expiration) = expiration else {
        return false;
    };
    let days = (expiration - today).num_days();
    (0..=EXPIRY_WARNING_DAYS).contains(&days)
}

/// Percent difference of the current price against the suggested price,
/// rounded to one decimal.
///
/// `(current − suggested) / suggested × 100`; negative means the shelf price
/// is below the suggested one. Returns zero unless both entries parse as
/// decimals and the suggested price is non-zero.
#[must_use]
pub fn price_variation_percent(current: &str, suggested: &str) -> Decimal {
    let Ok(current) = current.trim().parse::<Decimal>() else {
        return Decimal::ZERO;
    };
    let Ok(suggested) = suggested.trim().parse::<Decimal>() else {
        return Decimal::ZERO;
    };
    if suggested.is_zero() {
        return Decimal::ZERO;
    }
    ((current - suggested) / suggested * Decimal::ONE_HUNDRED).round_dp(1)
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::models::booking::PaymentFrequency;

/// One-time fee due at reservation, independent of room and duration.
pub const SERVICE_FEE: u32 = 50;
/// Deposit is always this many weeks of rent.
pub const DEPOSIT_WEEKS: u32 = 4;
/// Billing month used for "monthly" amounts (flat, not calendar-accurate).
pub const WEEKS_PER_BILLING_MONTH: u32 = 4;

/// How the total rent for a stay is derived from the duration in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayPricing {
    /// `weekly * round(months * 365.25 / 12 / 7)`
    #[default]
    AverageMonth,
    /// `weekly * 4 * months`
    FlatFourWeek,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stay pricing: {0}")]
pub struct UnknownStayPricing(pub String);

impl FromStr for StayPricing {
    type Err = UnknownStayPricing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average_month" => Ok(StayPricing::AverageMonth),
            "flat_four_week" => Ok(StayPricing::FlatFourWeek),
            other => Err(UnknownStayPricing(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub weekly: u32,
    pub biweekly: u32,
    pub monthly: u32,
    pub weeks: u32,
    pub total_rent: u32,
    pub monthly_equivalent: u32,
    pub deposit: u32,
    pub service_fee: u32,
}

/// Amounts saturate at `u32::MAX` instead of overflowing on out-of-range input.
pub struct PricingService;

impl PricingService {
    pub fn biweekly(weekly_price: u32) -> u32 {
        weekly_price.saturating_mul(2)
    }

    pub fn monthly(weekly_price: u32) -> u32 {
        weekly_price.saturating_mul(WEEKS_PER_BILLING_MONTH)
    }

    pub fn amount_for_frequency(weekly_price: u32, frequency: PaymentFrequency) -> u32 {
        match frequency {
            PaymentFrequency::Biweekly => Self::biweekly(weekly_price),
            PaymentFrequency::Monthly => Self::monthly(weekly_price),
        }
    }

    /// Weeks in a stay using the 365.25-day average month, rounded half up.
    ///
    /// `months * 365.25 / 12 / 7` is `months * 1461 / 336`, so the rounding is done
    /// in integers to match `Math.round` on the float value exactly.
    pub fn weeks_in_stay(duration_months: u32) -> u32 {
        let weeks = (u64::from(duration_months) * 1461 + 168) / 336;
        u32::try_from(weeks).unwrap_or(u32::MAX)
    }

    pub fn stay_weeks(duration_months: u32, pricing: StayPricing) -> u32 {
        match pricing {
            StayPricing::AverageMonth => Self::weeks_in_stay(duration_months),
            StayPricing::FlatFourWeek => duration_months.saturating_mul(WEEKS_PER_BILLING_MONTH),
        }
    }

    pub fn total_rent(weekly_price: u32, duration_months: u32, pricing: StayPricing) -> u32 {
        weekly_price.saturating_mul(Self::stay_weeks(duration_months, pricing))
    }

    pub fn deposit(weekly_price: u32) -> u32 {
        weekly_price.saturating_mul(DEPOSIT_WEEKS)
    }

    pub fn service_fee() -> u32 {
        SERVICE_FEE
    }

    /// `round(total_rent / months)`, zero when there is no duration yet.
    pub fn monthly_equivalent(total_rent: u32, duration_months: u32) -> u32 {
        if duration_months == 0 {
            return 0;
        }
        let rounded = (u64::from(total_rent) * 2 + u64::from(duration_months))
            / (u64::from(duration_months) * 2);
        u32::try_from(rounded).unwrap_or(u32::MAX)
    }

    pub fn quote(weekly_price: u32, duration_months: u32, pricing: StayPricing) -> PriceQuote {
        let weeks = Self::stay_weeks(duration_months, pricing);
        let total_rent = Self::total_rent(weekly_price, duration_months, pricing);

        PriceQuote {
            weekly: weekly_price,
            biweekly: Self::biweekly(weekly_price),
            monthly: Self::monthly(weekly_price),
            weeks,
            total_rent,
            monthly_equivalent: Self::monthly_equivalent(total_rent, duration_months),
            deposit: Self::deposit(weekly_price),
            service_fee: Self::service_fee(),
        }
    }
}

//! Rental pricing and the extension decision rule.
//!
//! Rates are quoted per period (hour, day, week, month) and converted to a
//! per-day cost using fixed canonical period lengths: a week is 7 days and a
//! month is 30. The 30-day month is an approximation the marketplace has
//! always used; changing it to calendar-accurate month lengths would change
//! every quoted price, so it is kept exactly as is.
//!
//! All costs round up to the whole rupee ([`money::ceil_to_rupee_div`]), so
//! a renter never underpays by a fraction of the daily rate.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::{ceil_to_rupee_div, Money};
use crate::types::Date;

/// Canonical length of a week in billable days.
pub const DAYS_PER_WEEK: i64 = 7;

/// Canonical length of a month in billable days.
pub const DAYS_PER_MONTH: i64 = 30;

/// Billable hours per day for hourly-rated products.
pub const HOURS_PER_DAY: i64 = 24;

/// Extensions ending within this many days of "today" apply immediately
/// without owner sign-off. Fixed policy, not user-configurable.
pub const AUTO_APPROVE_THRESHOLD_DAYS: i64 = 7;

/// The period a product's rate is quoted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePeriod {
    Hour,
    Day,
    Week,
    Month,
}

impl RatePeriod {
    /// The database/string representation of this period.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Parse a stored period string.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(CoreError::Internal(format!(
                "Unknown rate period '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole days between two calendar dates (`end - start`).
pub fn span_days(start: Date, end: Date) -> i64 {
    (end - start).num_days()
}

/// Cost of renting at `price` per `period` for `days` days, rounded up to
/// the whole rupee.
///
/// An hourly rate bills 24 hours per day; weekly and monthly rates are
/// prorated against their canonical day counts.
pub fn rental_cost(price: Money, period: RatePeriod, days: i64) -> Money {
    debug_assert!(days > 0, "rental span must be positive");
    match period {
        RatePeriod::Hour => ceil_to_rupee_div(price * HOURS_PER_DAY * days, 1),
        RatePeriod::Day => ceil_to_rupee_div(price * days, 1),
        RatePeriod::Week => ceil_to_rupee_div(price * days, DAYS_PER_WEEK),
        RatePeriod::Month => ceil_to_rupee_div(price * days, DAYS_PER_MONTH),
    }
}

/// How an admissible extension request is to be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionRoute {
    /// The rental ends soon; apply the new end date immediately.
    AutoApprove,
    /// The rental runs for a while yet; record a request for the owner.
    RequiresOwnerApproval,
}

/// Outcome of evaluating an extension request against the pricing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionEvaluation {
    pub additional_days: i64,
    pub additional_cost: Money,
    pub route: ExtensionRoute,
}

/// Evaluate a borrower's request to move an active rental's end date out to
/// `new_end`.
///
/// A rental whose current end date has already passed cannot be extended
/// ([`CoreError::RentalExpired`]); it lapsed unattended and needs a fresh
/// booking. A `new_end` that does not move the end date forward is a
/// [`CoreError::Validation`] failure. Otherwise the additional cost is the
/// prorated daily rate over the added days, and the request auto-approves
/// exactly when the current end date is within
/// [`AUTO_APPROVE_THRESHOLD_DAYS`] of `today`.
pub fn evaluate_extension(
    today: Date,
    current_end: Date,
    new_end: Date,
    price: Money,
    period: RatePeriod,
) -> Result<ExtensionEvaluation, CoreError> {
    if current_end < today {
        return Err(CoreError::RentalExpired);
    }
    if new_end <= current_end {
        return Err(CoreError::Validation(
            "New end date must be after the current end date".to_string(),
        ));
    }

    let additional_days = span_days(current_end, new_end);
    let additional_cost = rental_cost(price, period, additional_days);

    let days_till_end = span_days(today, current_end);
    let route = if days_till_end <= AUTO_APPROVE_THRESHOLD_DAYS {
        ExtensionRoute::AutoApprove
    } else {
        ExtensionRoute::RequiresOwnerApproval
    };

    Ok(ExtensionEvaluation {
        additional_days,
        additional_cost,
        route,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::rupees;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -----------------------------------------------------------------------
    // rental_cost
    // -----------------------------------------------------------------------

    #[test]
    fn weekly_rate_for_exactly_one_week() {
        // 300/week for 7 days is exactly 300.
        assert_eq!(rental_cost(rupees(300), RatePeriod::Week, 7), rupees(300));
    }

    #[test]
    fn monthly_rate_rounds_up_to_rupee() {
        // 100/month -> 3.33/day; 2 days = 6.67 -> 7, not 6.
        assert_eq!(rental_cost(rupees(100), RatePeriod::Month, 2), rupees(7));
    }

    #[test]
    fn daily_rate_multiplies_exactly() {
        assert_eq!(rental_cost(rupees(50), RatePeriod::Day, 3), rupees(150));
    }

    #[test]
    fn hourly_rate_bills_full_days() {
        assert_eq!(rental_cost(rupees(10), RatePeriod::Hour, 2), rupees(480));
    }

    #[test]
    fn weekly_rate_partial_week_rounds_up() {
        // 1999/week -> 285.57/day; 3 days = 856.71 -> 857.
        assert_eq!(rental_cost(rupees(1999), RatePeriod::Week, 3), rupees(857));
    }

    // -----------------------------------------------------------------------
    // evaluate_extension: guards
    // -----------------------------------------------------------------------

    #[test]
    fn lapsed_rental_cannot_extend() {
        let today = date(2025, 6, 10);
        let result = evaluate_extension(
            today,
            date(2025, 6, 9), // ended yesterday
            date(2025, 6, 20),
            rupees(100),
            RatePeriod::Day,
        );
        assert!(matches!(result, Err(CoreError::RentalExpired)));
    }

    #[test]
    fn non_forward_end_date_rejected() {
        let today = date(2025, 6, 10);
        let result = evaluate_extension(
            today,
            date(2025, 6, 12),
            date(2025, 6, 12),
            rupees(100),
            RatePeriod::Day,
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    // -----------------------------------------------------------------------
    // evaluate_extension: the 7-day threshold boundary
    // -----------------------------------------------------------------------

    #[test]
    fn ends_in_exactly_seven_days_auto_approves() {
        let today = date(2025, 6, 10);
        let eval = evaluate_extension(
            today,
            date(2025, 6, 17), // 7 days out
            date(2025, 6, 24),
            rupees(70),
            RatePeriod::Week,
        )
        .unwrap();
        assert_eq!(eval.route, ExtensionRoute::AutoApprove);
    }

    #[test]
    fn ends_in_eight_days_requires_owner_approval() {
        let today = date(2025, 6, 10);
        let eval = evaluate_extension(
            today,
            date(2025, 6, 18), // 8 days out
            date(2025, 6, 25),
            rupees(70),
            RatePeriod::Week,
        )
        .unwrap();
        assert_eq!(eval.route, ExtensionRoute::RequiresOwnerApproval);
    }

    #[test]
    fn ends_today_still_auto_approves() {
        let today = date(2025, 6, 10);
        let eval = evaluate_extension(
            today,
            today,
            date(2025, 6, 13),
            rupees(30),
            RatePeriod::Day,
        )
        .unwrap();
        assert_eq!(eval.route, ExtensionRoute::AutoApprove);
        assert_eq!(eval.additional_days, 3);
        assert_eq!(eval.additional_cost, rupees(90));
    }

    // -----------------------------------------------------------------------
    // evaluate_extension: computed amounts
    // -----------------------------------------------------------------------

    #[test]
    fn extension_inside_threshold_prices_added_days() {
        // Ends in 3 days, extended by 7: auto-approved with a week's worth
        // of daily rate.
        let today = date(2025, 6, 10);
        let eval = evaluate_extension(
            today,
            date(2025, 6, 13),
            date(2025, 6, 20),
            rupees(300),
            RatePeriod::Week,
        )
        .unwrap();
        assert_eq!(eval.route, ExtensionRoute::AutoApprove);
        assert_eq!(eval.additional_days, 7);
        assert_eq!(eval.additional_cost, rupees(300));
    }

    #[test]
    fn extension_outside_threshold_carries_precomputed_cost() {
        // Ends in 20 days, extended by 5 on a 100/month rate:
        // 5 * 100/30 = 16.67 -> 17.
        let today = date(2025, 6, 1);
        let eval = evaluate_extension(
            today,
            date(2025, 6, 21),
            date(2025, 6, 26),
            rupees(100),
            RatePeriod::Month,
        )
        .unwrap();
        assert_eq!(eval.route, ExtensionRoute::RequiresOwnerApproval);
        assert_eq!(eval.additional_days, 5);
        assert_eq!(eval.additional_cost, rupees(17));
    }

    // -----------------------------------------------------------------------
    // span_days
    // -----------------------------------------------------------------------

    #[test]
    fn span_counts_whole_days() {
        assert_eq!(span_days(date(2025, 6, 10), date(2025, 6, 17)), 7);
        assert_eq!(span_days(date(2025, 6, 10), date(2025, 6, 10)), 0);
    }

    #[test]
    fn period_strings_round_trip() {
        for period in [
            RatePeriod::Hour,
            RatePeriod::Day,
            RatePeriod::Week,
            RatePeriod::Month,
        ] {
            assert_eq!(RatePeriod::parse(period.as_str()).unwrap(), period);
        }
        assert!(RatePeriod::parse("fortnight").is_err());
    }
}

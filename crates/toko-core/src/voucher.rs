//! # Voucher Evaluation
//!
//! The voucher catalog record and the discount evaluator.
//!
//! ## Evaluation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Voucher Evaluation (ordered checks)                   │
//! │                                                                         │
//! │  evaluate_at(catalog, code, subtotal, now)                             │
//! │       │                                                                 │
//! │       ├── 1. lookup by UPPERCASED code ──── miss ──► VoucherNotFound   │
//! │       ├── 2. is_active?               ──── no ────► VoucherInactive   │
//! │       ├── 3. now ∈ [from, until]?     ──── no ────► VoucherExpired    │
//! │       ├── 4. subtotal ≥ min_purchase? ──── no ────► MinPurchaseNotMet │
//! │       ├── 5. quota left?              ──── no ────► VoucherExhausted  │
//! │       │                                                                 │
//! │       └── 6. compute discount                                           │
//! │              FIXED         → discount_value verbatim                    │
//! │              PERCENTAGE    → floor(subtotal × value / 100), clamped     │
//! │                              to max_discount when set                   │
//! │              FREE_SHIPPING → Rp0, free_shipping = true                  │
//! │                                                                         │
//! │  First failing check short-circuits. The evaluator is PURE: it never   │
//! │  reads a clock, never mutates used_count, never touches the network.   │
//! │  Redeeming (incrementing used_count) belongs to order placement.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Voucher Record
// =============================================================================

/// The discount mechanism of a voucher.
///
/// Exactly one mechanism is active per voucher; `discount_value` and
/// `max_discount` are interpreted according to this kind and never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherKind {
    /// `discount_value` is a flat rupiah amount, not capped, not scaled.
    Fixed,
    /// `discount_value` is a percentage (0–100); result may be capped
    /// by `max_discount`.
    Percentage,
    /// No subtotal discount; shipping cost is zeroed instead.
    FreeShipping,
}

/// A redeemable voucher as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    /// Unique code, matched case-insensitively.
    pub code: String,

    /// Marketing copy shown next to the code.
    pub description: Option<String>,

    /// Discount mechanism.
    #[serde(rename = "type")]
    pub kind: VoucherKind,

    /// Rupiah amount for `Fixed`, percentage (0–100) for `Percentage`,
    /// ignored for `FreeShipping`.
    pub discount_value: i64,

    /// Minimum subtotal required to apply. `None` or `Some(0)` means
    /// no minimum.
    pub min_purchase: Option<i64>,

    /// Cap on the computed discount, `Percentage` only.
    pub max_discount: Option<i64>,

    /// Start of the inclusive validity window.
    #[ts(as = "String")]
    pub valid_from: DateTime<Utc>,

    /// End of the inclusive validity window.
    #[ts(as = "String")]
    pub valid_until: DateTime<Utc>,

    /// Redemption quota. `None` means unlimited.
    pub usage_limit: Option<i64>,

    /// How many times the voucher has been redeemed.
    pub used_count: i64,

    /// Explicit kill switch, independent of the validity window.
    pub is_active: bool,
}

impl Voucher {
    /// Minimum purchase as Money, treating zero as "no minimum".
    pub fn min_purchase(&self) -> Option<Money> {
        match self.min_purchase {
            Some(min) if min > 0 => Some(Money::from_rupiah(min)),
            _ => None,
        }
    }

    /// True when the redemption quota is used up.
    ///
    /// The service layer re-checks this on top of the evaluator's own
    /// check; both must hold before an order is placed.
    pub fn is_exhausted(&self) -> bool {
        match self.usage_limit {
            Some(limit) => self.used_count >= limit,
            None => false,
        }
    }

    /// True when `at` lies within the inclusive validity window.
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.valid_from && at <= self.valid_until
    }
}

// =============================================================================
// Evaluation Outcome
// =============================================================================

/// A successfully applied voucher.
///
/// Carries everything the caller needs to render the result and to pass
/// the code along to order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedVoucher {
    /// Computed discount amount (zero for free-shipping vouchers).
    pub discount_amount: Money,

    /// Whether shipping cost is zeroed instead of discounting the subtotal.
    pub free_shipping: bool,

    /// Informational message for display.
    pub message: String,

    /// The matched voucher record.
    pub voucher: Voucher,
}

// =============================================================================
// Evaluator
// =============================================================================

/// Evaluates `code` against `catalog` for an order `subtotal` at instant `now`.
///
/// Ordered checks; the first failure short-circuits with a [`CoreError`]
/// whose Display string is the user-facing reason. See the module docs for
/// the full pipeline.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use toko_core::money::Money;
/// use toko_core::voucher::{evaluate_at, Voucher, VoucherKind};
///
/// let catalog = vec![Voucher {
///     code: "HELOBRO".to_string(),
///     description: None,
///     kind: VoucherKind::Fixed,
///     discount_value: 100_000,
///     min_purchase: Some(200_000),
///     max_discount: None,
///     valid_from: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
///     valid_until: Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap(),
///     usage_limit: None,
///     used_count: 0,
///     is_active: true,
/// }];
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
/// let applied = evaluate_at(&catalog, "helobro", Money::from_rupiah(250_000), now).unwrap();
/// assert_eq!(applied.discount_amount, Money::from_rupiah(100_000));
/// ```
pub fn evaluate_at(
    catalog: &[Voucher],
    code: &str,
    subtotal: Money,
    now: DateTime<Utc>,
) -> CoreResult<AppliedVoucher> {
    // 1. Case-insensitive lookup. Empty or malformed codes simply miss.
    let normalized = code.trim().to_uppercase();
    let voucher = catalog
        .iter()
        .find(|v| v.code.to_uppercase() == normalized)
        .ok_or(CoreError::VoucherNotFound)?;

    // 2. Kill switch.
    if !voucher.is_active {
        return Err(CoreError::VoucherInactive);
    }

    // 3. Inclusive validity window.
    if !voucher.is_valid_at(now) {
        return Err(CoreError::VoucherExpired);
    }

    // 4. Minimum purchase.
    if let Some(min) = voucher.min_purchase() {
        if subtotal < min {
            return Err(CoreError::MinPurchaseNotMet { min });
        }
    }

    // 5. Redemption quota.
    if voucher.is_exhausted() {
        return Err(CoreError::VoucherExhausted);
    }

    // 6. Discount computation.
    let (discount_amount, free_shipping) = match voucher.kind {
        VoucherKind::Fixed => (Money::from_rupiah(voucher.discount_value), false),
        VoucherKind::Percentage => {
            let raw = subtotal.percentage(voucher.discount_value);
            let capped = match voucher.max_discount {
                Some(max) => raw.min(Money::from_rupiah(max)),
                None => raw,
            };
            (capped, false)
        }
        VoucherKind::FreeShipping => (Money::zero(), true),
    };

    Ok(AppliedVoucher {
        discount_amount,
        free_shipping,
        message: format!("Voucher {} applied", voucher.code),
        voucher: voucher.clone(),
    })
}

/// Evaluates against the current wall clock.
///
/// Thin convenience over [`evaluate_at`]; tests and the API service pass an
/// explicit instant instead.
pub fn evaluate(catalog: &[Voucher], code: &str, subtotal: Money) -> CoreResult<AppliedVoucher> {
    evaluate_at(catalog, code, subtotal, Utc::now())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window_2025() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap(),
        )
    }

    fn mid_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn voucher(code: &str, kind: VoucherKind, value: i64) -> Voucher {
        let (from, until) = window_2025();
        Voucher {
            code: code.to_string(),
            description: None,
            kind,
            discount_value: value,
            min_purchase: None,
            max_discount: None,
            valid_from: from,
            valid_until: until,
            usage_limit: None,
            used_count: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_unknown_code_fails_regardless_of_subtotal() {
        let catalog = vec![voucher("HELOBRO", VoucherKind::Fixed, 100_000)];

        for subtotal in [0, 1, 150_000, 10_000_000] {
            let err = evaluate_at(&catalog, "NOPE", Money::from_rupiah(subtotal), mid_2025())
                .unwrap_err();
            assert_eq!(err, CoreError::VoucherNotFound);
        }
    }

    #[test]
    fn test_empty_code_is_not_found() {
        let catalog = vec![voucher("HELOBRO", VoucherKind::Fixed, 100_000)];

        assert_eq!(
            evaluate_at(&catalog, "", Money::from_rupiah(500_000), mid_2025()).unwrap_err(),
            CoreError::VoucherNotFound
        );
        assert_eq!(
            evaluate_at(&catalog, "   ", Money::from_rupiah(500_000), mid_2025()).unwrap_err(),
            CoreError::VoucherNotFound
        );
    }

    #[test]
    fn test_code_match_is_case_insensitive() {
        let catalog = vec![voucher("HELOBRO", VoucherKind::Fixed, 100_000)];

        for code in ["HELOBRO", "helobro", "HeLoBro", "  helobro  "] {
            let applied =
                evaluate_at(&catalog, code, Money::from_rupiah(500_000), mid_2025()).unwrap();
            assert_eq!(applied.voucher.code, "HELOBRO");
        }
    }

    #[test]
    fn test_inactive_voucher_rejected() {
        let mut v = voucher("DEAD", VoucherKind::Fixed, 10_000);
        v.is_active = false;

        let err = evaluate_at(&[v], "DEAD", Money::from_rupiah(500_000), mid_2025()).unwrap_err();
        assert_eq!(err, CoreError::VoucherInactive);
    }

    #[test]
    fn test_validity_window_is_inclusive() {
        let v = voucher("EDGE", VoucherKind::Fixed, 10_000);
        let (from, until) = window_2025();
        let catalog = vec![v];
        let subtotal = Money::from_rupiah(500_000);

        // Both endpoints apply
        assert!(evaluate_at(&catalog, "EDGE", subtotal, from).is_ok());
        assert!(evaluate_at(&catalog, "EDGE", subtotal, until).is_ok());

        // One second outside either endpoint does not
        let before = from - chrono::Duration::seconds(1);
        let after = until + chrono::Duration::seconds(1);
        assert_eq!(
            evaluate_at(&catalog, "EDGE", subtotal, before).unwrap_err(),
            CoreError::VoucherExpired
        );
        assert_eq!(
            evaluate_at(&catalog, "EDGE", subtotal, after).unwrap_err(),
            CoreError::VoucherExpired
        );
    }

    #[test]
    fn test_fixed_discount_ignores_subtotal_scale() {
        // Property 2: FIXED discount = discount_value regardless of subtotal
        let catalog = vec![voucher("FLAT50", VoucherKind::Fixed, 50_000)];

        for subtotal in [50_000, 500_000, 5_000_000] {
            let applied =
                evaluate_at(&catalog, "FLAT50", Money::from_rupiah(subtotal), mid_2025()).unwrap();
            assert_eq!(applied.discount_amount, Money::from_rupiah(50_000));
            assert!(!applied.free_shipping);
        }
    }

    #[test]
    fn test_percentage_discount_floor_and_cap() {
        // Property 1: discount = min(floor(s*d/100), m)
        let mut v = voucher("PCT15", VoucherKind::Percentage, 15);
        v.max_discount = Some(100_000);
        let catalog = vec![v];

        // Below cap: floor(333333 * 15 / 100) = 49999 (floored, never rounded up)
        let applied =
            evaluate_at(&catalog, "PCT15", Money::from_rupiah(333_333), mid_2025()).unwrap();
        assert_eq!(applied.discount_amount, Money::from_rupiah(49_999));

        // Above cap: clamped
        let applied =
            evaluate_at(&catalog, "PCT15", Money::from_rupiah(10_000_000), mid_2025()).unwrap();
        assert_eq!(applied.discount_amount, Money::from_rupiah(100_000));
    }

    #[test]
    fn test_percentage_without_cap_is_uncapped() {
        let catalog = vec![voucher("PCT50", VoucherKind::Percentage, 50)];

        let applied =
            evaluate_at(&catalog, "PCT50", Money::from_rupiah(10_000_000), mid_2025()).unwrap();
        assert_eq!(applied.discount_amount, Money::from_rupiah(5_000_000));
    }

    #[test]
    fn test_free_shipping_sets_flag_and_zero_discount() {
        // Property 3
        let catalog = vec![voucher("ONGKIR", VoucherKind::FreeShipping, 0)];

        let applied =
            evaluate_at(&catalog, "ongkir", Money::from_rupiah(100_000), mid_2025()).unwrap();
        assert!(applied.free_shipping);
        assert!(applied.discount_amount.is_zero());
    }

    #[test]
    fn test_quota_exhausted_rejected_even_if_otherwise_valid() {
        // Property 5
        let mut v = voucher("LIMITED", VoucherKind::Fixed, 10_000);
        v.usage_limit = Some(100);
        v.used_count = 100;
        let catalog = vec![v];

        let err =
            evaluate_at(&catalog, "LIMITED", Money::from_rupiah(500_000), mid_2025()).unwrap_err();
        assert_eq!(err, CoreError::VoucherExhausted);
    }

    #[test]
    fn test_quota_with_room_left_applies() {
        let mut v = voucher("LIMITED", VoucherKind::Fixed, 10_000);
        v.usage_limit = Some(100);
        v.used_count = 99;
        let catalog = vec![v];

        assert!(evaluate_at(&catalog, "LIMITED", Money::from_rupiah(500_000), mid_2025()).is_ok());
    }

    #[test]
    fn test_zero_min_purchase_means_no_minimum() {
        let mut v = voucher("ANY", VoucherKind::Fixed, 5_000);
        v.min_purchase = Some(0);
        let catalog = vec![v];

        assert!(evaluate_at(&catalog, "ANY", Money::zero(), mid_2025()).is_ok());
    }

    #[test]
    fn test_scenario_helobro() {
        // Property 7: HELOBRO (FIXED 100000, min_purchase 200000)
        let mut v = voucher("HELOBRO", VoucherKind::Fixed, 100_000);
        v.min_purchase = Some(200_000);
        let catalog = vec![v];

        // Subtotal 150000 → minimum-purchase rejection
        let err =
            evaluate_at(&catalog, "HELOBRO", Money::from_rupiah(150_000), mid_2025()).unwrap_err();
        assert_eq!(
            err,
            CoreError::MinPurchaseNotMet {
                min: Money::from_rupiah(200_000)
            }
        );
        assert!(err.to_string().contains("Rp200.000"));

        // Subtotal 250000 → discount 100000
        let applied =
            evaluate_at(&catalog, "HELOBRO", Money::from_rupiah(250_000), mid_2025()).unwrap();
        assert_eq!(applied.discount_amount, Money::from_rupiah(100_000));
        assert!(!applied.free_shipping);
    }

    #[test]
    fn test_scenario_diskon20() {
        // Property 8: DISKON20 (PERCENTAGE 20, max_discount 200000,
        // min_purchase 500000) on subtotal 2.000.000 → raw 400.000, capped
        let mut v = voucher("DISKON20", VoucherKind::Percentage, 20);
        v.max_discount = Some(200_000);
        v.min_purchase = Some(500_000);
        let catalog = vec![v];

        let applied =
            evaluate_at(&catalog, "DISKON20", Money::from_rupiah(2_000_000), mid_2025()).unwrap();
        assert_eq!(applied.discount_amount, Money::from_rupiah(200_000));

        // And below the minimum it never gets that far
        let err =
            evaluate_at(&catalog, "DISKON20", Money::from_rupiah(400_000), mid_2025()).unwrap_err();
        assert!(matches!(err, CoreError::MinPurchaseNotMet { .. }));
    }

    #[test]
    fn test_min_purchase_checked_before_quota() {
        // Ordered checks: a voucher that fails both reports the minimum first
        let mut v = voucher("BOTH", VoucherKind::Fixed, 10_000);
        v.min_purchase = Some(500_000);
        v.usage_limit = Some(1);
        v.used_count = 1;
        let catalog = vec![v];

        let err =
            evaluate_at(&catalog, "BOTH", Money::from_rupiah(100_000), mid_2025()).unwrap_err();
        assert!(matches!(err, CoreError::MinPurchaseNotMet { .. }));
    }

    #[test]
    fn test_voucher_wire_format() {
        let (from, until) = window_2025();
        let v = Voucher {
            code: "DISKON20".to_string(),
            description: Some("20% off".to_string()),
            kind: VoucherKind::Percentage,
            discount_value: 20,
            min_purchase: Some(500_000),
            max_discount: Some(200_000),
            valid_from: from,
            valid_until: until,
            usage_limit: Some(100),
            used_count: 3,
            is_active: true,
        };

        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "PERCENTAGE");
        assert_eq!(json["discountValue"], 20);
        assert_eq!(json["minPurchase"], 500_000);

        let back: Voucher = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}

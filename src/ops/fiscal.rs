use crate::core::stocks::Stocks;
use serde::{Deserialize, Serialize};

/// Default level the auto-targeting controller steers the TGA towards,
/// in the same currency unit as all stocks.
pub const DEFAULT_TGA_TARGET: f64 = 200.0;

fn default_tga_target() -> f64 {
    DEFAULT_TGA_TARGET
}

/// The flow legs of one fiscal operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiscalFlows {
    /// Government spending credited to the private sector.
    pub fiscal_spend: f64,
    /// Taxes requested; the amount collected may be clamped.
    pub taxes: f64,
}

/// Parameters of the Treasury's reserve-account policy.
///
/// Injected explicitly at each call site; there is no process-wide
/// default state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiscalPolicy {
    /// The TGA level that bond auto-issuance/redemption steers towards.
    #[serde(default = "default_tga_target")]
    pub tga_target: f64,
}

impl Default for FiscalPolicy {
    fn default() -> Self {
        Self {
            tga_target: DEFAULT_TGA_TARGET,
        }
    }
}

/// Side-effect-free dry run of a fiscal operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiscalPreview {
    /// Tax that would actually be collected after clamping.
    pub tax: f64,
    /// TGA level after spend and tax, before auto-targeting.
    pub tga_after: f64,
    /// Bonds that auto-issuance would place with households.
    pub auto_issue: f64,
    /// Bonds that auto-redemption would retire.
    pub auto_redeem: f64,
}

/// Result of applying a fiscal operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiscalOutcome {
    /// The snapshot after spend, tax, and auto-targeting.
    pub stocks: Stocks,
    /// Tax actually collected after clamping.
    pub tax_applied: f64,
    /// Bonds auto-issued to lift the TGA back to target.
    pub auto_issue: f64,
    /// Bonds auto-redeemed to drain the TGA back to target.
    pub auto_redeem: f64,
}

/// The full settlement sequence: spend, tax, then TGA auto-targeting.
/// One routine backs both the preview and the applier so the dry run
/// cannot drift from the mutating path.
struct Settlement {
    stocks: Stocks,
    tax: f64,
    tga_after_tax: f64,
    auto_issue: f64,
    auto_redeem: f64,
}

fn settle(stocks: &Stocks, flows: FiscalFlows, policy: &FiscalPolicy) -> Settlement {
    // Spending is never clamped.
    let mut deposits = stocks.deposits + flows.fiscal_spend;
    let mut reserves = stocks.reserves + flows.fiscal_spend;

    // Tax feasibility is judged against post-spend deposits AND reserves;
    // the auto-targeting arithmetic below relies on both legs having
    // moved in lockstep.
    let tax = flows.taxes.min(deposits).min(reserves);
    deposits -= tax;
    reserves -= tax;

    // The TGA mirrors the opposite of the private-sector flow.
    let tga_after_tax = stocks.tga - flows.fiscal_spend + tax;
    let mut tga = tga_after_tax;
    let mut bonds_households = stocks.bonds_households;

    let gap = policy.tga_target - tga;
    let mut auto_issue = 0.0;
    let mut auto_redeem = 0.0;

    if gap > 0.0 {
        auto_issue = gap.min(deposits).min(reserves);
        deposits -= auto_issue;
        reserves -= auto_issue;
        tga += auto_issue;
        bonds_households += auto_issue;
    } else if gap < 0.0 {
        auto_redeem = (-gap).min(bonds_households);
        deposits += auto_redeem;
        reserves += auto_redeem;
        tga -= auto_redeem;
        bonds_households -= auto_redeem;
    }

    Settlement {
        tax,
        tga_after_tax,
        auto_issue,
        auto_redeem,
        stocks: Stocks {
            deposits,
            reserves,
            tga,
            bonds_households,
            ..*stocks
        },
    }
}

/// Preview a fiscal operation without producing a new snapshot.
///
/// Numerically identical to [`apply_fiscal`] with the same inputs.
/// `tga_after` is the TGA level after spend and tax, before the
/// auto-targeting swap — the level the controller compares against its
/// target.
pub fn preview_fiscal(stocks: Stocks, flows: FiscalFlows, policy: &FiscalPolicy) -> FiscalPreview {
    let settlement = settle(&stocks, flows, policy);
    FiscalPreview {
        tax: settlement.tax,
        tga_after: settlement.tga_after_tax,
        auto_issue: settlement.auto_issue,
        auto_redeem: settlement.auto_redeem,
    }
}

/// Apply a fiscal operation: vertical money creation plus TGA targeting.
///
/// The sequence is fixed and load-bearing:
///
/// 1. Spend is credited to deposits and reserves, unconditionally.
/// 2. Tax is clamped to `min(taxes, deposits, reserves)` against the
///    post-spend stocks and debited from both; the TGA moves by
///    `-spend + tax`.
/// 3. If the TGA landed below `policy.tga_target`, bonds are auto-issued
///    (`min(target - tga, deposits, reserves)`); if above, auto-redeemed
///    (`min(tga - target, bonds_households)`). At most one of the two is
///    non-zero.
///
/// The net financial-asset effect on the private sector is
/// `fiscal_spend - tax_applied`; the auto-targeting step is a pure
/// composition swap and never changes `private_nfw`.
///
/// # Examples
///
/// ```
/// use sfc_engine::core::stocks::Stocks;
/// use sfc_engine::ops::fiscal::{apply_fiscal, FiscalFlows, FiscalPolicy};
///
/// let stocks = Stocks {
///     deposits: 4000.0,
///     loans: 3500.0,
///     reserves: 800.0,
///     bonds_households: 2600.0,
///     bonds_cb: 500.0,
///     tga: 200.0,
/// };
///
/// let outcome = apply_fiscal(
///     stocks,
///     FiscalFlows { fiscal_spend: 250.0, taxes: 160.0 },
///     &FiscalPolicy::default(),
/// );
/// assert_eq!(outcome.tax_applied, 160.0);
/// assert_eq!(outcome.auto_issue, 90.0);
/// ```
pub fn apply_fiscal(stocks: Stocks, flows: FiscalFlows, policy: &FiscalPolicy) -> FiscalOutcome {
    let settlement = settle(&stocks, flows, policy);
    FiscalOutcome {
        stocks: settlement.stocks,
        tax_applied: settlement.tax,
        auto_issue: settlement.auto_issue,
        auto_redeem: settlement.auto_redeem,
    }
}

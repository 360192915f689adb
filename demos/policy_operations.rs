//! Walkthrough of the five ledger operations.
//!
//! Demonstrates how each operation moves money between sectors while
//! the consolidated balance sheets stay consistent.

use sfc_engine::core::metrics::compute_derived;
use sfc_engine::core::stocks::Stocks;
use sfc_engine::ops::bank_credit::apply_bank_credit;
use sfc_engine::ops::fiscal::{apply_fiscal, FiscalFlows, FiscalPolicy};
use sfc_engine::ops::open_market::{apply_bond_issuance, apply_qe_swap, apply_qt_swap};

fn report(label: &str, stocks: &Stocks) {
    let derived = compute_derived(stocks);
    println!("{}", label);
    println!(
        "  deposits {:.0}  loans {:.0}  reserves {:.0}  bonds(HH) {:.0}  bonds(CB) {:.0}  tga {:.0}",
        stocks.deposits,
        stocks.loans,
        stocks.reserves,
        stocks.bonds_households,
        stocks.bonds_cb,
        stocks.tga
    );
    println!(
        "  private NFW {:.0}  public net worth {:.0}  identity gap {:.2e}\n",
        derived.private_nfw, derived.public_net_worth, derived.identity_gap
    );
}

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  sfc-engine: Policy Operations Walkthrough ║");
    println!("╚═══════════════════════════════════════════╝\n");

    let initial = Stocks {
        deposits: 4000.0,
        loans: 3500.0,
        reserves: 800.0,
        bonds_households: 2600.0,
        bonds_cb: 500.0,
        tga: 200.0,
    };
    report("Initial position:", &initial);

    // --- Scenario 1: Bank credit ---
    println!("━━━ Scenario 1: Bank Credit (+200) ━━━\n");
    let credit = apply_bank_credit(initial, 200.0);
    println!("Delta applied: {:.0}", credit.delta_applied);
    report("After bank credit:", &credit.stocks);

    // --- Scenario 2: Fiscal deficit with TGA targeting ---
    println!("━━━ Scenario 2: Fiscal (spend 250, tax 160) ━━━\n");
    let fiscal = apply_fiscal(
        initial,
        FiscalFlows {
            fiscal_spend: 250.0,
            taxes: 160.0,
        },
        &FiscalPolicy::default(),
    );
    println!(
        "Tax applied: {:.0}   Auto-issue: {:.0}   Auto-redeem: {:.0}",
        fiscal.tax_applied, fiscal.auto_issue, fiscal.auto_redeem
    );
    report("After fiscal operation:", &fiscal.stocks);

    // --- Scenario 3: Bond issuance ---
    println!("━━━ Scenario 3: Bond Issuance (120) ━━━\n");
    let issuance = apply_bond_issuance(initial, 120.0);
    println!("Amount applied: {:.0}", issuance.amount_applied);
    report("After bond issuance:", &issuance.stocks);

    // --- Scenario 4: QE, then QT reverses it ---
    println!("━━━ Scenario 4: QE then QT (100 each) ━━━\n");
    let qe = apply_qe_swap(initial, 100.0);
    report("After QE:", &qe.stocks);
    let qt = apply_qt_swap(qe.stocks, 100.0);
    report("After QT (back to start):", &qt.stocks);
    assert_eq!(qt.stocks, initial);

    // --- Scenario 5: Clamping ---
    println!("━━━ Scenario 5: Oversized repayment is clamped ━━━\n");
    let repay = apply_bank_credit(initial, -10_000.0);
    println!(
        "Requested -10000, applied {:.0} (loans exhausted)",
        repay.delta_applied
    );
    report("After maximal repayment:", &repay.stocks);
}

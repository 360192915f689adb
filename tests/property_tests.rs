use proptest::prelude::*;
use sfc_engine::core::metrics::compute_derived;
use sfc_engine::core::stocks::Stocks;
use sfc_engine::ops::bank_credit::apply_bank_credit;
use sfc_engine::ops::fiscal::{apply_fiscal, preview_fiscal, FiscalFlows, FiscalPolicy};
use sfc_engine::ops::open_market::{apply_bond_issuance, apply_qe_swap, apply_qt_swap};
use sfc_engine::simulation::multi_period::{run_multi_period_simulation, SimulationConfig};

const TOLERANCE: f64 = 1e-6;

/// Generate a non-negative snapshot with stocks up to 10,000.
fn arb_stocks() -> impl Strategy<Value = Stocks> {
    (
        0.0..10_000.0f64,
        0.0..10_000.0f64,
        0.0..10_000.0f64,
        0.0..10_000.0f64,
        0.0..10_000.0f64,
        0.0..10_000.0f64,
    )
        .prop_map(
            |(deposits, loans, reserves, bonds_households, bonds_cb, tga)| Stocks {
                deposits,
                loans,
                reserves,
                bonds_households,
                bonds_cb,
                tga,
            },
        )
}

/// One ledger operation with a random amount.
#[derive(Debug, Clone)]
enum Op {
    BankCredit(f64),
    Fiscal { spend: f64, taxes: f64 },
    BondIssuance(f64),
    Qe(f64),
    Qt(f64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-5_000.0..5_000.0f64).prop_map(Op::BankCredit),
        (0.0..2_000.0f64, 0.0..2_000.0f64)
            .prop_map(|(spend, taxes)| Op::Fiscal { spend, taxes }),
        (0.0..5_000.0f64).prop_map(Op::BondIssuance),
        (0.0..5_000.0f64).prop_map(Op::Qe),
        (0.0..5_000.0f64).prop_map(Op::Qt),
    ]
}

fn apply_op(stocks: Stocks, op: &Op) -> Stocks {
    match op {
        Op::BankCredit(delta) => apply_bank_credit(stocks, *delta).stocks,
        Op::Fiscal { spend, taxes } => apply_fiscal(
            stocks,
            FiscalFlows {
                fiscal_spend: *spend,
                taxes: *taxes,
            },
            &FiscalPolicy::default(),
        )
        .stocks,
        Op::BondIssuance(amount) => apply_bond_issuance(stocks, *amount).stocks,
        Op::Qe(amount) => apply_qe_swap(stocks, *amount).stocks,
        Op::Qt(amount) => apply_qt_swap(stocks, *amount).stocks,
    }
}

proptest! {
    // ===================================================================
    // INVARIANT 1: The sectoral balance identity holds everywhere.
    //
    // For any snapshot, private NFW plus public net worth is zero, and
    // the four sector net worths consolidate to zero.
    // ===================================================================
    #[test]
    fn identity_gap_is_always_zero(stocks in arb_stocks()) {
        let derived = compute_derived(&stocks);
        prop_assert!(
            derived.identity_gap.abs() < TOLERANCE,
            "identity gap {} must be ≈ 0",
            derived.identity_gap
        );
        let system = derived.household_net_worth + derived.bank_equity
            + derived.treasury_net_worth + derived.cb_equity;
        prop_assert!(system.abs() < TOLERANCE);
    }

    // ===================================================================
    // INVARIANT 2: No operation drives any stock negative.
    //
    // Clamping is the engine's only failure-avoidance mechanism; it must
    // hold for every operation from every non-negative snapshot.
    // ===================================================================
    #[test]
    fn operations_preserve_non_negativity(stocks in arb_stocks(), op in arb_op()) {
        let next = apply_op(stocks, &op);
        prop_assert!(
            next.is_non_negative(),
            "operation {:?} produced a negative stock: {:?}",
            op,
            next
        );
    }

    // ===================================================================
    // INVARIANT 3: Operation sequences keep the identity gap closed.
    //
    // The identity must survive arbitrary compositions, not just single
    // steps.
    // ===================================================================
    #[test]
    fn sequences_preserve_identity(
        stocks in arb_stocks(),
        ops in prop::collection::vec(arb_op(), 1..12),
    ) {
        let mut current = stocks;
        for op in &ops {
            current = apply_op(current, op);
            let derived = compute_derived(&current);
            prop_assert!(
                derived.identity_gap.abs() < TOLERANCE,
                "identity gap {} after {:?}",
                derived.identity_gap,
                op
            );
        }
    }

    // ===================================================================
    // INVARIANT 4: Bank credit never changes private net financial
    // assets — the loan and the deposit cancel by construction.
    // ===================================================================
    #[test]
    fn bank_credit_is_nfa_neutral(stocks in arb_stocks(), delta in -5_000.0..5_000.0f64) {
        let before = compute_derived(&stocks);
        let outcome = apply_bank_credit(stocks, delta);
        let after = compute_derived(&outcome.stocks);
        prop_assert!((after.private_nfw - before.private_nfw).abs() < TOLERANCE);
    }

    // ===================================================================
    // INVARIANT 5: An oversized repayment applies exactly
    // -min(loans, deposits).
    // ===================================================================
    #[test]
    fn oversized_repayment_clamps_to_limit(stocks in arb_stocks()) {
        let outcome = apply_bank_credit(stocks, -1e12);
        prop_assert_eq!(outcome.delta_applied, -stocks.loans.min(stocks.deposits));
    }

    // ===================================================================
    // INVARIANT 6: The fiscal NFA delta is spend minus applied tax.
    //
    // Auto-targeting is a pure composition swap and contributes nothing.
    // ===================================================================
    #[test]
    fn fiscal_nfa_delta_is_spend_minus_tax(
        stocks in arb_stocks(),
        spend in 0.0..2_000.0f64,
        taxes in 0.0..2_000.0f64,
    ) {
        let before = compute_derived(&stocks);
        let outcome = apply_fiscal(
            stocks,
            FiscalFlows { fiscal_spend: spend, taxes },
            &FiscalPolicy::default(),
        );
        let after = compute_derived(&outcome.stocks);
        prop_assert!(
            ((after.private_nfw - before.private_nfw) - (spend - outcome.tax_applied)).abs()
                < TOLERANCE,
            "NFA delta {} must equal spend {} - tax {}",
            after.private_nfw - before.private_nfw,
            spend,
            outcome.tax_applied
        );
    }

    // ===================================================================
    // INVARIANT 7: Preview and apply never disagree.
    //
    // The dry run and the mutating path share inputs, so any divergence
    // is duplicated-logic drift.
    // ===================================================================
    #[test]
    fn preview_matches_apply(
        stocks in arb_stocks(),
        spend in 0.0..2_000.0f64,
        taxes in 0.0..2_000.0f64,
        target in 0.0..1_000.0f64,
    ) {
        let flows = FiscalFlows { fiscal_spend: spend, taxes };
        let policy = FiscalPolicy { tga_target: target };
        let preview = preview_fiscal(stocks, flows, &policy);
        let outcome = apply_fiscal(stocks, flows, &policy);

        prop_assert_eq!(preview.tax, outcome.tax_applied);
        prop_assert_eq!(preview.auto_issue, outcome.auto_issue);
        prop_assert_eq!(preview.auto_redeem, outcome.auto_redeem);
    }

    // ===================================================================
    // INVARIANT 8: At most one auto-targeting branch fires.
    // ===================================================================
    #[test]
    fn auto_targeting_branches_are_exclusive(
        stocks in arb_stocks(),
        spend in 0.0..2_000.0f64,
        taxes in 0.0..2_000.0f64,
    ) {
        let outcome = apply_fiscal(
            stocks,
            FiscalFlows { fiscal_spend: spend, taxes },
            &FiscalPolicy::default(),
        );
        prop_assert!(outcome.auto_issue == 0.0 || outcome.auto_redeem == 0.0);
        prop_assert!(outcome.auto_issue >= 0.0 && outcome.auto_redeem >= 0.0);
    }

    // ===================================================================
    // INVARIANT 9: Portfolio swaps leave private NFW unchanged.
    // ===================================================================
    #[test]
    fn swaps_are_nfa_neutral(stocks in arb_stocks(), amount in 0.0..5_000.0f64) {
        for next in [
            apply_bond_issuance(stocks, amount).stocks,
            apply_qe_swap(stocks, amount).stocks,
            apply_qt_swap(stocks, amount).stocks,
        ] {
            let before = compute_derived(&stocks);
            let after = compute_derived(&next);
            prop_assert!((after.private_nfw - before.private_nfw).abs() < TOLERANCE);
        }
    }

    // ===================================================================
    // INVARIANT 10: QT exactly reverses QE within feasibility limits.
    //
    // An amount that clears QE's clamp also clears QT's afterwards
    // (QE adds to deposits, reserves, and the CB portfolio), so the
    // round trip restores the snapshot.
    // ===================================================================
    #[test]
    fn qe_qt_round_trip(stocks in arb_stocks(), amount in 0.0..5_000.0f64) {
        let amount = amount.min(stocks.bonds_households);
        let qe = apply_qe_swap(stocks, amount);
        prop_assert_eq!(qe.amount_applied, amount);
        let qt = apply_qt_swap(qe.stocks, amount);
        prop_assert_eq!(qt.amount_applied, amount);

        prop_assert!((qt.stocks.deposits - stocks.deposits).abs() < TOLERANCE);
        prop_assert!((qt.stocks.reserves - stocks.reserves).abs() < TOLERANCE);
        prop_assert!((qt.stocks.bonds_households - stocks.bonds_households).abs() < TOLERANCE);
        prop_assert!((qt.stocks.bonds_cb - stocks.bonds_cb).abs() < TOLERANCE);
    }

    // ===================================================================
    // INVARIANT 11: The simulator is deterministic and shape-stable.
    // ===================================================================
    #[test]
    fn simulation_is_deterministic(
        num_periods in 1usize..30,
        rate in 0.0..0.2f64,
        elasticity in 0.0..1.0f64,
    ) {
        let config = SimulationConfig {
            num_periods,
            interest_rate: rate,
            inflation_elasticity: elasticity,
            ..SimulationConfig::default()
        };
        let a = run_multi_period_simulation(&config);
        let b = run_multi_period_simulation(&config);
        prop_assert_eq!(a.len(), num_periods + 1);
        prop_assert_eq!(a, b);
    }

    // ===================================================================
    // INVARIANT 12: Inflation respects the floor in every flow period,
    // and GDP never shrinks because of it.
    // ===================================================================
    #[test]
    fn inflation_never_below_floor(
        num_periods in 1usize..30,
        rate in 0.0..0.2f64,
        elasticity in 0.0..1.0f64,
    ) {
        let config = SimulationConfig {
            num_periods,
            interest_rate: rate,
            inflation_elasticity: elasticity,
            ..SimulationConfig::default()
        };
        let results = run_multi_period_simulation(&config);
        for pair in results.windows(2) {
            prop_assert!(pair[1].inflation >= config.inflation_floor);
            prop_assert!(pair[1].nominal_gdp >= pair[0].nominal_gdp);
        }
    }
}

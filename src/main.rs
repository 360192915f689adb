//! sfc-engine CLI
//!
//! Inspect and drive the monetary ledger from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Derived metrics for a snapshot
//! sfc-engine derive --input stocks.json
//!
//! # Dry-run a fiscal operation
//! sfc-engine preview --input stocks.json --spend 250 --taxes 160
//!
//! # Apply one operation and print the new snapshot
//! sfc-engine apply --input stocks.json --op fiscal --spend 250 --taxes 160
//! sfc-engine apply --input stocks.json --op qe --amount 100 --format json
//!
//! # Run a multi-period scenario
//! sfc-engine simulate --scenario extreme --periods 20 --format csv
//!
//! # Random parameter sweep
//! sfc-engine sweep --count 50
//! ```

use sfc_engine::core::metrics::compute_derived;
use sfc_engine::core::stocks::Stocks;
use sfc_engine::ops::bank_credit::apply_bank_credit;
use sfc_engine::ops::fiscal::{apply_fiscal, preview_fiscal, FiscalFlows, FiscalPolicy};
use sfc_engine::ops::open_market::{apply_bond_issuance, apply_qe_swap, apply_qt_swap};
use sfc_engine::simulation::multi_period::{
    run_multi_period_simulation, PeriodRecord, SimulationConfig,
};
use sfc_engine::simulation::stress::{generate_random_configs, SweepConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"sfc-engine — stock-flow consistent monetary ledger and simulation

USAGE:
    sfc-engine <COMMAND> [OPTIONS]

COMMANDS:
    derive      Compute derived solvency metrics for a snapshot
    preview     Dry-run a fiscal operation (no new snapshot)
    apply       Apply one ledger operation to a snapshot
    simulate    Run the multi-period interest/inflation/debt projection
    sweep       Run randomized simulation configs and report summary stats
    help        Show this message

OPTIONS (derive, preview, apply):
    --input <FILE>      Path to a JSON stocks snapshot
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (preview, apply --op fiscal):
    --spend <X>         Fiscal spending
    --taxes <X>         Taxes requested
    --tga-target <X>    TGA target (default: 200)

OPTIONS (apply):
    --op <OP>           bank-credit | fiscal | bond-issuance | qe | qt
    --amount <X>        Amount for bank-credit / bond-issuance / qe / qt

OPTIONS (simulate):
    --scenario <S>      baseline | hike | cut | extreme (default: baseline)
    --periods <N>       Override the period count
    --rate <X>          Override the interest rate
    --elasticity <X>    Override the inflation elasticity
    --format <FORMAT>   text (default), json, or csv

OPTIONS (sweep):
    --count <N>         Number of random configs to run (default: 50)
    --periods <N>       Periods per run (default: 20)

EXAMPLES:
    sfc-engine derive --input stocks.json
    sfc-engine apply --input stocks.json --op bank-credit --amount 200
    sfc-engine simulate --scenario cut --format csv
    sfc-engine sweep --count 100 --periods 30"#
    );
}

fn load_stocks(path: &str) -> Stocks {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "deposits": 4000.0,
  "loans": 3500.0,
  "reserves": 800.0,
  "bonds_households": 2600.0,
  "bonds_cb": 500.0,
  "tga": 200.0
}}"#
        );
        process::exit(1);
    })
}

fn parse_f64(args: &[String], i: usize, flag: &str) -> f64 {
    args.get(i)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("{} requires a number", flag);
            process::exit(1);
        })
}

/// JSON output schema for the apply command.
#[derive(serde::Serialize)]
struct ApplyOutput {
    operation: String,
    amount_applied: f64,
    tax_applied: Option<f64>,
    auto_issue: Option<f64>,
    auto_redeem: Option<f64>,
    stocks: Stocks,
    identity_gap: f64,
}

fn cmd_derive(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let stocks = load_stocks(&path);
    let derived = compute_derived(&stocks);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&derived).unwrap());
    } else {
        print!("{}", stocks);
        println!();
        print!("{}", derived);
    }
}

fn cmd_preview(args: &[String]) {
    let mut input_path = None;
    let mut spend = 0.0;
    let mut taxes = 0.0;
    let mut policy = FiscalPolicy::default();
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--spend" => {
                i += 1;
                spend = parse_f64(args, i, "--spend");
            }
            "--taxes" => {
                i += 1;
                taxes = parse_f64(args, i, "--taxes");
            }
            "--tga-target" => {
                i += 1;
                policy.tga_target = parse_f64(args, i, "--tga-target");
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let stocks = load_stocks(&path);
    let preview = preview_fiscal(
        stocks,
        FiscalFlows {
            fiscal_spend: spend,
            taxes,
        },
        &policy,
    );

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&preview).unwrap());
    } else {
        println!("=== Fiscal Preview ===");
        println!("Tax collected:    {:.2}", preview.tax);
        println!("TGA after tax:    {:.2}", preview.tga_after);
        println!("Auto-issue:       {:.2}", preview.auto_issue);
        println!("Auto-redeem:      {:.2}", preview.auto_redeem);
    }
}

fn cmd_apply(args: &[String]) {
    let mut input_path = None;
    let mut op = None;
    let mut amount = 0.0;
    let mut spend = 0.0;
    let mut taxes = 0.0;
    let mut policy = FiscalPolicy::default();
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--op" => {
                i += 1;
                op = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--op requires an operation name");
                    process::exit(1);
                }));
            }
            "--amount" => {
                i += 1;
                amount = parse_f64(args, i, "--amount");
            }
            "--spend" => {
                i += 1;
                spend = parse_f64(args, i, "--spend");
            }
            "--taxes" => {
                i += 1;
                taxes = parse_f64(args, i, "--taxes");
            }
            "--tga-target" => {
                i += 1;
                policy.tga_target = parse_f64(args, i, "--tga-target");
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });
    let op = op.unwrap_or_else(|| {
        eprintln!("Error: --op <OP> is required");
        process::exit(1);
    });

    let stocks = load_stocks(&path);

    let output = match op.as_str() {
        "bank-credit" => {
            let outcome = apply_bank_credit(stocks, amount);
            log::info!("bank credit applied: {}", outcome.delta_applied);
            ApplyOutput {
                operation: op,
                amount_applied: outcome.delta_applied,
                tax_applied: None,
                auto_issue: None,
                auto_redeem: None,
                identity_gap: compute_derived(&outcome.stocks).identity_gap,
                stocks: outcome.stocks,
            }
        }
        "fiscal" => {
            let outcome = apply_fiscal(
                stocks,
                FiscalFlows {
                    fiscal_spend: spend,
                    taxes,
                },
                &policy,
            );
            log::info!(
                "fiscal applied: spend {}, tax {}, auto-issue {}, auto-redeem {}",
                spend,
                outcome.tax_applied,
                outcome.auto_issue,
                outcome.auto_redeem
            );
            ApplyOutput {
                operation: op,
                amount_applied: spend - outcome.tax_applied,
                tax_applied: Some(outcome.tax_applied),
                auto_issue: Some(outcome.auto_issue),
                auto_redeem: Some(outcome.auto_redeem),
                identity_gap: compute_derived(&outcome.stocks).identity_gap,
                stocks: outcome.stocks,
            }
        }
        "bond-issuance" | "qe" | "qt" => {
            let outcome = match op.as_str() {
                "bond-issuance" => apply_bond_issuance(stocks, amount),
                "qe" => apply_qe_swap(stocks, amount),
                _ => apply_qt_swap(stocks, amount),
            };
            log::info!("{} applied: {}", op, outcome.amount_applied);
            ApplyOutput {
                operation: op,
                amount_applied: outcome.amount_applied,
                tax_applied: None,
                auto_issue: None,
                auto_redeem: None,
                identity_gap: compute_derived(&outcome.stocks).identity_gap,
                stocks: outcome.stocks,
            }
        }
        other => {
            eprintln!(
                "Unknown operation '{}': expected bank-credit | fiscal | bond-issuance | qe | qt",
                other
            );
            process::exit(1);
        }
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("Operation:        {}", output.operation);
        println!("Amount applied:   {:.2}", output.amount_applied);
        if let Some(tax) = output.tax_applied {
            println!("Tax applied:      {:.2}", tax);
        }
        if let Some(issue) = output.auto_issue {
            println!("Auto-issue:       {:.2}", issue);
        }
        if let Some(redeem) = output.auto_redeem {
            println!("Auto-redeem:      {:.2}", redeem);
        }
        println!();
        print!("{}", output.stocks);
        println!();
        print!("{}", compute_derived(&output.stocks));
    }
}

fn print_trajectory_text(results: &[PeriodRecord]) {
    println!(
        "{:>3} {:>12} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "t", "total debt", "nom GDP", "debt/GDP", "interest", "deficit", "inflation", "real def"
    );
    for row in results {
        println!(
            "{:>3} {:>12.1} {:>12.1} {:>10.3} {:>10.1} {:>10.1} {:>10.4} {:>10.1}",
            row.period,
            row.total_debt,
            row.nominal_gdp,
            row.debt_gdp_ratio,
            row.interest_payments,
            row.nominal_deficit,
            row.inflation,
            row.real_deficit
        );
    }
}

fn print_trajectory_csv(results: &[PeriodRecord]) {
    println!(
        "period,reserves,bonds_households,bonds_cb,total_debt,nominal_gdp,debt_gdp_ratio,interest_payments,nominal_deficit,inflation,real_deficit"
    );
    for row in results {
        println!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            row.period,
            row.reserves,
            row.bonds_households,
            row.bonds_cb,
            row.total_debt,
            row.nominal_gdp,
            row.debt_gdp_ratio,
            row.interest_payments,
            row.nominal_deficit,
            row.inflation,
            row.real_deficit
        );
    }
}

fn cmd_simulate(args: &[String]) {
    let mut config = SimulationConfig::default();
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--scenario" => {
                i += 1;
                let name = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--scenario requires a scenario name");
                    process::exit(1);
                });
                config = match name.as_str() {
                    "baseline" | "hike" => SimulationConfig::rate_hike(),
                    "cut" => SimulationConfig::rate_cut(),
                    "extreme" => SimulationConfig::extreme_debt(),
                    other => {
                        eprintln!(
                            "Unknown scenario '{}': expected baseline | hike | cut | extreme",
                            other
                        );
                        process::exit(1);
                    }
                };
            }
            "--periods" => {
                i += 1;
                config.num_periods = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--periods requires a number");
                        process::exit(1);
                    });
            }
            "--rate" => {
                i += 1;
                config.interest_rate = parse_f64(args, i, "--rate");
            }
            "--elasticity" => {
                i += 1;
                config.inflation_elasticity = parse_f64(args, i, "--elasticity");
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text', 'json', or 'csv'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    log::info!(
        "simulating {} periods at rate {} / elasticity {}",
        config.num_periods,
        config.interest_rate,
        config.inflation_elasticity
    );
    let results = run_multi_period_simulation(&config);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&results).unwrap()),
        "csv" => print_trajectory_csv(&results),
        _ => print_trajectory_text(&results),
    }
}

fn cmd_sweep(args: &[String]) {
    let mut count = 50usize;
    let mut sweep = SweepConfig::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--count requires a number");
                        process::exit(1);
                    });
            }
            "--periods" => {
                i += 1;
                sweep.num_periods = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--periods requires a number");
                        process::exit(1);
                    });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let configs = generate_random_configs(&sweep, count);
    let mut min_ratio = f64::INFINITY;
    let mut max_ratio = f64::NEG_INFINITY;
    let mut rising = 0usize;

    for config in &configs {
        let results = run_multi_period_simulation(config);
        let first = results.first().expect("trajectory is never empty");
        let last = results.last().expect("trajectory is never empty");
        min_ratio = min_ratio.min(last.debt_gdp_ratio);
        max_ratio = max_ratio.max(last.debt_gdp_ratio);
        if last.debt_gdp_ratio > first.debt_gdp_ratio {
            rising += 1;
        }
    }

    println!("=== Sweep Summary ===");
    println!("Runs:                   {}", count);
    println!("Periods per run:        {}", sweep.num_periods);
    println!("Final debt/GDP range:   {:.3} – {:.3}", min_ratio, max_ratio);
    println!(
        "Debt ratio rose in:     {} of {} runs",
        rising, count
    );
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "derive" => cmd_derive(rest),
        "preview" => cmd_preview(rest),
        "apply" => cmd_apply(rest),
        "simulate" => cmd_simulate(rest),
        "sweep" => cmd_sweep(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}

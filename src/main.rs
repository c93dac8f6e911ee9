//! Financial CLI
//!
//! Command-line front end for the time value of money functions.
//! Solver settings can also be supplied through the environment:
//!   FINANCIAL_GUESS, FINANCIAL_TOL, FINANCIAL_MAX_ITER
//! Set RUST_LOG=debug to see solver diagnostics.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use financial::cashflow::{analyze_batch, load_cash_flows, load_cash_flows_from_reader};
use financial::solver::{DEFAULT_GUESS, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use financial::{
    fv, ipmt, irr_with, mirr, npv, nper, pmt, ppmt, pv, rate_with, AmortizationSchedule,
    AnalysisConfig, PaymentDueTime, ScheduleSummary, SolverOptions,
};

#[derive(Debug, Parser)]
#[command(name = "financial", version, about = "Time value of money calculations")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, Args)]
struct SolverArgs {
    /// Starting guess for the rate
    #[arg(long, env = "FINANCIAL_GUESS", default_value_t = DEFAULT_GUESS, allow_negative_numbers = true)]
    guess: f64,

    /// Required tolerance for the solution
    #[arg(long, env = "FINANCIAL_TOL", default_value_t = DEFAULT_TOLERANCE)]
    tol: f64,

    /// Maximum iterations before giving up
    #[arg(long, env = "FINANCIAL_MAX_ITER", default_value_t = DEFAULT_MAX_ITER)]
    max_iter: u32,
}

impl From<SolverArgs> for SolverOptions {
    fn from(args: SolverArgs) -> Self {
        SolverOptions {
            guess: args.guess,
            tol: args.tol,
            max_iter: args.max_iter,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Future value
    Fv {
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        nper: f64,
        #[arg(long, allow_negative_numbers = true)]
        pmt: f64,
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, default_value_t = PaymentDueTime::End)]
        when: PaymentDueTime,
    },
    /// Periodic payment
    Pmt {
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        nper: f64,
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        fv: f64,
        #[arg(long, default_value_t = PaymentDueTime::End)]
        when: PaymentDueTime,
    },
    /// Number of periods
    Nper {
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        pmt: f64,
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        fv: f64,
        #[arg(long, default_value_t = PaymentDueTime::End)]
        when: PaymentDueTime,
    },
    /// Present value
    Pv {
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        nper: f64,
        #[arg(long, allow_negative_numbers = true)]
        pmt: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        fv: f64,
        #[arg(long, default_value_t = PaymentDueTime::End)]
        when: PaymentDueTime,
    },
    /// Interest portion of the payment for one period
    Ipmt {
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        per: f64,
        #[arg(long, allow_negative_numbers = true)]
        nper: f64,
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        fv: f64,
        #[arg(long, default_value_t = PaymentDueTime::End)]
        when: PaymentDueTime,
    },
    /// Principal portion of the payment for one period
    Ppmt {
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        per: f64,
        #[arg(long, allow_negative_numbers = true)]
        nper: f64,
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        fv: f64,
        #[arg(long, default_value_t = PaymentDueTime::End)]
        when: PaymentDueTime,
    },
    /// Periodic interest rate (Newton-Raphson)
    Rate {
        #[arg(long, allow_negative_numbers = true)]
        nper: f64,
        #[arg(long, allow_negative_numbers = true)]
        pmt: f64,
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, allow_negative_numbers = true)]
        fv: f64,
        #[arg(long, default_value_t = PaymentDueTime::End)]
        when: PaymentDueTime,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Internal rate of return of a cash flow series
    Irr {
        /// Comma-separated cash flows, e.g. --values=-100,39,59,55,20
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        values: Vec<f64>,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Net present value of a cash flow series
    Npv {
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        /// Comma-separated cash flows
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        values: Vec<f64>,
    },
    /// Modified internal rate of return of a cash flow series
    Mirr {
        /// Comma-separated cash flows
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        values: Vec<f64>,
        #[arg(long, allow_negative_numbers = true)]
        finance_rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        reinvest_rate: f64,
    },
    /// Amortization schedule (CSV, or JSON with --json)
    Schedule {
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long)]
        nper: u32,
        #[arg(long, allow_negative_numbers = true)]
        pv: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        fv: f64,
        #[arg(long, default_value_t = PaymentDueTime::End)]
        when: PaymentDueTime,
    },
    /// Analyze every series in a cash flow CSV (`label,v0,v1,...` per line)
    Analyze {
        /// CSV file, or `-` for stdin
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
        discount_rate: f64,
        #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
        finance_rate: f64,
        #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
        reinvest_rate: f64,
        #[command(flatten)]
        solver: SolverArgs,
    },
}

#[derive(Serialize)]
struct ScalarOutput {
    function: &'static str,
    result: f64,
}

#[derive(Serialize)]
struct ScheduleOutput<'a> {
    schedule: &'a AmortizationSchedule,
    summary: ScheduleSummary,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let json = cli.json;

    let (function, result) = match cli.command {
        Command::Fv { rate, nper, pmt: payment, pv: present, when } => {
            ("fv", fv(rate, nper, payment, present, when))
        }
        Command::Pmt { rate, nper, pv: present, fv: future, when } => {
            ("pmt", pmt(rate, nper, present, future, when))
        }
        Command::Nper { rate, pmt: payment, pv: present, fv: future, when } => {
            ("nper", nper(rate, payment, present, future, when))
        }
        Command::Pv { rate, nper, pmt: payment, fv: future, when } => {
            ("pv", pv(rate, nper, payment, future, when))
        }
        Command::Ipmt { rate, per, nper, pv: present, fv: future, when } => {
            ("ipmt", ipmt(rate, per, nper, present, future, when))
        }
        Command::Ppmt { rate, per, nper, pv: present, fv: future, when } => {
            ("ppmt", ppmt(rate, per, nper, present, future, when))
        }
        Command::Rate { nper, pmt: payment, pv: present, fv: future, when, solver } => {
            ("rate", rate_with(nper, payment, present, future, when, &solver.into()))
        }
        Command::Irr { values, solver } => ("irr", irr_with(&values, &solver.into())),
        Command::Npv { rate, values } => ("npv", npv(rate, &values)),
        Command::Mirr { values, finance_rate, reinvest_rate } => {
            ("mirr", mirr(&values, finance_rate, reinvest_rate))
        }
        Command::Schedule { rate, nper, pv: present, fv: future, when } => {
            let schedule = AmortizationSchedule::new(rate, nper, present, future, when);
            return print_schedule(&schedule, json);
        }
        Command::Analyze { file, discount_rate, finance_rate, reinvest_rate, solver } => {
            let config = AnalysisConfig {
                discount_rate,
                finance_rate,
                reinvest_rate,
                solver: solver.into(),
            };
            return run_analysis(&file, &config, json);
        }
    };

    if json {
        println!("{}", serde_json::to_string(&ScalarOutput { function, result })?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn print_schedule(schedule: &AmortizationSchedule, json: bool) -> Result<()> {
    if json {
        let output = ScheduleOutput {
            schedule,
            summary: schedule.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        schedule
            .write_csv(io::stdout().lock())
            .context("Failed to write schedule")?;
    }
    Ok(())
}

fn run_analysis(file: &Path, config: &AnalysisConfig, json: bool) -> Result<()> {
    let series = if file.as_os_str() == "-" {
        load_cash_flows_from_reader(io::stdin().lock()).context("Failed to read cash flows from stdin")?
    } else {
        load_cash_flows(file).with_context(|| format!("Failed to load cash flows from {}", file.display()))?
    };

    let reports = analyze_batch(&series, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("{:<20} {:>7} {:>16} {:>12} {:>12}", "Series", "Periods", "NPV", "IRR", "MIRR");
    println!("{}", "-".repeat(71));
    for report in &reports {
        println!(
            "{:<20} {:>7} {:>16.2} {:>12.6} {:>12.6}",
            report.label, report.periods, report.npv, report.irr, report.mirr
        );
    }
    Ok(())
}

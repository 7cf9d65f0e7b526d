use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use primekit::api::{FactorEngine, HcnTable, PrimeOracle};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Number-theory toolbox: primes, factorization, anti-primes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the first primes by discovery rank
    Primes {
        #[arg(long, default_value_t = 10)]
        count: u64,
    },
    /// Deterministic primality verdict for a 64-bit value
    IsPrime { value: i64 },
    /// Prime-power factorization of a value
    Factor {
        value: i64,
        /// One of: exhaustive, blended, rho
        #[arg(long, default_value = "blended")]
        strategy: String,
    },
    /// Largest prime factor of a value
    LargestFactor { value: i64 },
    /// Smallest number every integer up to the limit divides
    Lcm { limit: i64 },
    /// Print the first highly composite numbers in ascending order
    Hcn {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

#[derive(Serialize)]
struct FactorRow {
    base: i64,
    exponent: u32,
}

#[derive(Serialize)]
struct FactorReport {
    value: i64,
    strategy: String,
    factors: Vec<FactorRow>,
    divisor_count: u32,
}

#[derive(Serialize)]
struct HcnRow {
    rank: usize,
    value: i64,
    divisor_count: u32,
    exponents: Vec<u32>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let oracle = Arc::new(PrimeOracle::new());
    match cmd.action {
        Action::Primes { count } => primes(&oracle, count),
        Action::IsPrime { value } => is_prime(value),
        Action::Factor { value, strategy } => factor(oracle, value, strategy),
        Action::LargestFactor { value } => largest_factor(&oracle, value),
        Action::Lcm { limit } => lcm(&oracle, limit),
        Action::Hcn { count } => hcn(oracle, count),
    }
}

fn primes(oracle: &PrimeOracle, count: u64) -> Result<()> {
    tracing::info!(count, "primes");
    let values: Vec<u64> = (0..count).map(|rank| oracle.prime_at(rank)).collect();
    println!("{}", serde_json::to_string(&values)?);
    Ok(())
}

fn is_prime(value: i64) -> Result<()> {
    tracing::info!(value, "is_prime");
    println!(
        "{}",
        serde_json::json!({ "value": value, "prime": primekit::api::is_prime(value) })
    );
    Ok(())
}

fn factor(oracle: Arc<PrimeOracle>, value: i64, strategy: String) -> Result<()> {
    tracing::info!(value, strategy, "factor");
    let engine = FactorEngine::new(oracle);
    let factorization = match strategy.as_str() {
        "exhaustive" => engine.factorize(value)?,
        "blended" => engine.factorize_blended(value)?,
        "rho" => engine.factorize_rho(value)?,
        other => bail!("unknown strategy {other:?}; expected exhaustive, blended, or rho"),
    };
    let report = FactorReport {
        value,
        strategy,
        divisor_count: factorization.divisor_count(),
        factors: factorization
            .factors()
            .iter()
            .map(|f| FactorRow {
                base: f.base,
                exponent: f.exponent,
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn largest_factor(oracle: &PrimeOracle, value: i64) -> Result<()> {
    tracing::info!(value, "largest_factor");
    let factor = oracle.largest_prime_factor(value)?;
    println!(
        "{}",
        serde_json::json!({ "value": value, "largest_prime_factor": factor })
    );
    Ok(())
}

fn lcm(oracle: &PrimeOracle, limit: i64) -> Result<()> {
    tracing::info!(limit, "lcm");
    let multiple = oracle.smallest_common_multiple_up_to(limit)?;
    println!(
        "{}",
        serde_json::json!({ "limit": limit, "smallest_common_multiple": multiple })
    );
    Ok(())
}

fn hcn(oracle: Arc<PrimeOracle>, count: usize) -> Result<()> {
    tracing::info!(count, "hcn");
    let table = HcnTable::new(oracle);
    let rows: Vec<HcnRow> = (0..count)
        .map(|rank| {
            let entry = table.at(rank);
            HcnRow {
                rank,
                value: entry.value,
                divisor_count: entry.divisor_count,
                exponents: entry.exponents,
            }
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

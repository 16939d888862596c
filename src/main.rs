//! BerapaNanti CLI
//!
//! Command-line front end for the calculators: validates input, runs one
//! calculation and prints a report (or JSON with `--json`).

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use serde::Serialize;

use berapa_nanti::calculators::{
    CostCategory, GoalProjection, LifeGoal, LivingCosts, ScenarioProjection, WageSource,
};
use berapa_nanti::format::{
    format_percentage, format_rupiah, format_year_difference, parse_grouped_amount,
};
use berapa_nanti::rates::loader::load_monthly_inflation_file;
use berapa_nanti::validation::{
    parse_amount, parse_rate, validate_custom_rate, validate_non_negative, validate_past_year,
    validate_years,
};
use berapa_nanti::{AssetClass, Calculator, RateBook};

#[derive(Debug, Parser)]
#[command(name = "berapa_nanti", version, about = "Inflation and investment calculators")]
struct Cli {
    /// Directory holding inflation.csv, asset_returns.csv and minimum_wage.csv
    #[arg(long, global = true)]
    rates_dir: Option<PathBuf>,

    /// Monthly inflation export (Periode;Inflasi) replacing the annual inflation table
    #[arg(long, global = true)]
    monthly_inflation: Option<PathBuf>,

    /// Collapse the monthly export to one rate per year (latest month)
    #[arg(long, global = true, requires = "monthly_inflation")]
    annualize_monthly: bool,

    /// Year treated as "now" (defaults to the current calendar year)
    #[arg(long, global = true)]
    reference_year: Option<i32>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project today's price into the future
    Future {
        /// Current price in Rupiah (thousands dots allowed)
        #[arg(long, default_value = "100000")]
        price: String,
        #[arg(long, default_value_t = 5)]
        years: u32,
        /// Custom annual inflation in percent; omit to show the preset scenarios
        #[arg(long)]
        rate: Option<String>,
    },
    /// Future cost of a savings goal
    Goal {
        /// wedding, car, motorcycle, education, house, travel or custom
        #[arg(long, default_value = "wedding")]
        goal: String,
        /// Name for a custom goal
        #[arg(long)]
        description: Option<String>,
        /// Cost today; defaults to the goal's typical cost
        #[arg(long)]
        cost: Option<String>,
        #[arg(long, default_value_t = 5)]
        years: u32,
    },
    /// What a past amount is worth today
    Historical {
        #[arg(long, default_value = "1000000")]
        value: String,
        #[arg(long, default_value_t = 2015)]
        year: i32,
    },
    /// Compare historical investment growth across asset classes
    Invest {
        #[arg(long, default_value = "10000000")]
        amount: String,
        #[arg(long, default_value_t = 2015)]
        start_year: i32,
        /// Comma-separated: stocks, crypto, commodity
        #[arg(long = "asset", value_delimiter = ',', default_value = "stocks")]
        assets: Vec<AssetClass>,
    },
    /// Compare monthly living costs with the regional minimum wage
    LivingCost {
        #[arg(long, default_value = "Jakarta")]
        region: String,
        /// Custom monthly wage instead of the regional figure
        #[arg(long)]
        wage: Option<String>,
        /// Override a category, e.g. --cost food=1500000
        #[arg(long = "cost", value_parser = parse_cost)]
        costs: Vec<(CostCategory, f64)>,
    },
    /// Show the loaded rate tables
    Rates {
        /// Show one asset class instead of inflation
        #[arg(long)]
        asset: Option<AssetClass>,
    },
}

fn parse_cost(raw: &str) -> Result<(CostCategory, f64), String> {
    let (category, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=AMOUNT, got {raw:?}"))?;
    let category: CostCategory = category.parse()?;
    let amount = parse_grouped_amount(amount)
        .ok_or_else(|| format!("invalid amount {amount:?}"))?;
    let amount = validate_non_negative("cost", amount).map_err(|e| e.to_string())?;
    Ok((category, amount))
}

fn build_calculator(cli: &Cli) -> Result<Calculator> {
    let mut book = match &cli.rates_dir {
        Some(dir) => RateBook::from_csv_path(dir)
            .with_context(|| format!("loading rate tables from {}", dir.display()))?,
        None => RateBook::builtin(),
    };

    if let Some(path) = &cli.monthly_inflation {
        let monthly = load_monthly_inflation_file(path)
            .with_context(|| format!("loading monthly inflation from {}", path.display()))?;
        let table = if cli.annualize_monthly {
            monthly.collapse_to_annual()
        } else {
            monthly
        };
        book = book.with_inflation(table);
    }

    let calc = Calculator::new(book);
    Ok(match cli.reference_year {
        Some(year) => calc.with_reference_year(year),
        None => calc,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_scenarios(projection: &ScenarioProjection) {
    for outcome in &projection.outcomes {
        println!(
            "  {:<14} {:>22}  (+{})",
            outcome.scenario.to_string(),
            format_rupiah(outcome.future_value),
            format_rupiah(outcome.future_value - projection.present_value),
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let calc = build_calculator(&cli)?;
    info!("reference year {}", calc.reference_year());

    match &cli.command {
        Command::Future { price, years, rate } => {
            let price = parse_amount("price", price)?;
            let years = validate_years(*years)?;

            match rate {
                Some(rate) => {
                    let rate = validate_custom_rate(parse_rate("rate", rate)?)?;
                    let value = calc.future_value(price, years, rate);
                    if cli.json {
                        return print_json(&serde_json::json!({
                            "present_value": price,
                            "years": years,
                            "rate": rate,
                            "future_value": value,
                        }));
                    }
                    let horizon = calc.reference_year() + years as i32;
                    println!(
                        "Harga {} {} dengan inflasi {}%:",
                        format_rupiah(price),
                        format_year_difference(horizon, calc.reference_year()),
                        rate
                    );
                    println!("  {}", format_rupiah(value));
                }
                None => {
                    let projection = calc.scenario_projection(price, years);
                    if cli.json {
                        return print_json(&projection);
                    }
                    println!("Harga {} dalam {} tahun:", format_rupiah(price), years);
                    print_scenarios(&projection);
                }
            }
        }

        Command::Goal { goal, description, cost, years } => {
            let years = validate_years(*years)?;
            let (name, default_cost) = if goal.eq_ignore_ascii_case("custom") {
                let Some(description) = description else {
                    bail!("a custom goal needs --description");
                };
                (description.clone(), None)
            } else {
                let preset: LifeGoal = goal.parse()?;
                (preset.label().to_string(), Some(preset.default_cost()))
            };
            let current_cost = match (cost, default_cost) {
                (Some(raw), _) => parse_amount("cost", raw)?,
                (None, Some(default)) => default,
                (None, None) => bail!("a custom goal needs --cost"),
            };

            let projection: GoalProjection = calc.goal_cost(&name, current_cost, years);
            if cli.json {
                return print_json(&projection);
            }
            println!(
                "{}: {} hari ini, dalam {} tahun:",
                projection.goal,
                format_rupiah(projection.current_cost),
                projection.years
            );
            print_scenarios(&projection.scenarios);
        }

        Command::Historical { value, year } => {
            let value = parse_amount("value", value)?;
            let first_year = calc
                .rates()
                .inflation
                .earliest_period()
                .map(|p| p.year)
                .context("inflation table is empty")?;
            let year = validate_past_year(*year, first_year, calc.reference_year())?;

            let report = calc.historical_value(value, year)?;
            if cli.json {
                return print_json(&report);
            }
            for step in &report.applied.periods_applied {
                println!(
                    "  {:>7}  {:>6.2}%  {:>22}",
                    step.period.to_string(),
                    step.rate,
                    format_rupiah(step.value_after)
                );
            }
            println!(
                "{} di tahun {} ({}) setara dengan {} di tahun {} karena inflasi.",
                format_rupiah(report.original_value),
                report.from_year,
                format_year_difference(report.from_year, report.to_year),
                format_rupiah(report.current_value),
                report.to_year,
            );
            println!(
                "Selisih {} (+{} dalam {} tahun)",
                format_rupiah(report.value_difference()),
                format_percentage(report.percentage_change / 100.0, 1),
                report.year_difference,
            );
        }

        Command::Invest { amount, start_year, assets } => {
            let amount = parse_amount("amount", amount)?;
            let returns = &calc.rates().asset_returns;
            let mut first_year = i32::MAX;
            for asset in assets {
                let earliest = returns
                    .require(*asset)?
                    .earliest_period()
                    .map(|p| p.year)
                    .with_context(|| format!("no return data for {asset}"))?;
                if *start_year < earliest {
                    warn!("{asset} data starts in {earliest}; earlier years contribute no return");
                }
                first_year = first_year.min(earliest);
            }
            let start_year = validate_past_year(*start_year, first_year, calc.reference_year())?;

            let comparison = calc.compare_investments(amount, assets, start_year)?;
            if cli.json {
                return print_json(&comparison);
            }

            println!("Jika investasi {} di {}:", format_rupiah(amount), start_year);
            for outcome in &comparison.outcomes {
                let sign = if outcome.percentage_return >= 0.0 { "+" } else { "" };
                println!(
                    "  {:<10} {:<20} {:>26}  {}{}",
                    outcome.asset.label(),
                    outcome.asset.description(),
                    format_rupiah(outcome.final_value),
                    sign,
                    format_percentage(outcome.percentage_return / 100.0, 0),
                );
            }
            if let Some(best) = comparison.best() {
                println!(
                    "Dalam {} tahun, investasi terbaik adalah {} dengan return {}.",
                    comparison.year_difference,
                    best.asset.label(),
                    format_percentage(best.percentage_return / 100.0, 0),
                );
            }

            println!("\nReturn tahunan:");
            for row in calc.yearly_returns(assets, start_year)? {
                let cells: Vec<String> = row
                    .returns
                    .iter()
                    .map(|r| match r.rate {
                        Some(rate) => format!("{}: {:+}%", r.asset.label(), rate),
                        None => format!("{}: -", r.asset.label()),
                    })
                    .collect();
                println!("  {}  {}", row.year, cells.join("  "));
            }
        }

        Command::LivingCost { region, wage, costs } => {
            let source = match wage {
                Some(raw) => {
                    let amount = parse_grouped_amount(raw)
                        .with_context(|| format!("invalid wage {raw:?}"))?;
                    WageSource::Custom(validate_non_negative("wage", amount)?)
                }
                None => WageSource::Region(region.clone()),
            };
            let mut monthly = LivingCosts::default();
            for (category, amount) in costs {
                monthly.set(*category, *amount);
            }

            let result = calc.living_cost(&source, &monthly)?;
            if cli.json {
                return print_json(&result);
            }

            let place = result.region.clone().unwrap_or_else(|| "daerahmu".to_string());
            for (category, amount) in monthly.iter() {
                println!("  {:<14} {:>16}", category.label(), format_rupiah(amount));
            }
            println!("  {:<14} {:>16}", "Total", format_rupiah(result.total_cost));
            println!("  {:<14} {:>16}", "UMR", format_rupiah(result.minimum_wage));
            if result.is_covered() {
                println!(
                    "UMR di {} cukup untuk menutupi biaya hidup bulananmu dengan sisa {}.",
                    place,
                    format_rupiah(result.surplus)
                );
            } else {
                println!(
                    "UMR di {} tidak cukup untuk menutupi biaya hidupmu. Ada selisih kekurangan {}.",
                    place,
                    format_rupiah(result.surplus.abs())
                );
            }
            println!(
                "Pemakaian UMR: {}  Estimasi inflasi pribadi: {}",
                format_percentage(result.coverage_percent / 100.0, 0),
                format_percentage(result.personal_inflation / 100.0, 1),
            );
        }

        Command::Rates { asset } => {
            let (title, table) = match asset {
                Some(asset) => (asset.label().to_string(), calc.rates().asset_returns.require(*asset)?),
                None => ("Inflasi".to_string(), &calc.rates().inflation),
            };
            if cli.json {
                return print_json(&table.entries().collect::<Vec<_>>());
            }
            println!("{} ({} periode):", title, table.len());
            for entry in table.entries() {
                println!("  {:>7}  {:>8.2}%", entry.period.to_string(), entry.rate);
            }
            if asset.is_none() {
                println!(
                    "Inflasi saat ini: {}",
                    format_percentage(calc.current_inflation_rate()? / 100.0, 2)
                );
            }
        }
    }

    Ok(())
}

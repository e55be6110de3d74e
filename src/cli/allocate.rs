//! Allocation CLI commands
//!
//! Implements `waterfall allocate` and `waterfall demo`, plus the helpers
//! that parse `--bill` / `--goal` flags and write results.

use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::settings::{OutputFormat, Settings};
use crate::display::format_allocation_table;
use crate::error::{WaterfallError, WaterfallResult};
use crate::export::{write_csv, write_json, write_yaml};
use crate::models::{AllocationResult, Bill, Goal, GoalKind, Money, PaycheckPlan, PercentBasis};
use crate::services::AllocationService;

/// Arguments for `waterfall allocate`
#[derive(Args, Debug, Default)]
pub struct AllocateArgs {
    /// Plan file (JSON, or YAML by .yaml/.yml extension). Use "-" for JSON on stdin
    pub plan: Option<PathBuf>,

    /// Paycheck amount (e.g., "2000" or "2,000.00"); overrides the plan's
    #[arg(short, long)]
    pub paycheck: Option<String>,

    /// Bill as NAME=AMOUNT, funded in the order given (repeatable)
    #[arg(short, long = "bill", value_parser = parse_bill_arg)]
    pub bills: Vec<Bill>,

    /// Goal as NAME:percent:VALUE, NAME:fixed:AMOUNT, or NAME:VALUE for a percent (repeatable)
    #[arg(short, long = "goal", value_parser = parse_goal_arg)]
    pub goals: Vec<Goal>,

    /// What percentage goals are measured against: gross or remainder
    #[arg(long)]
    pub basis: Option<PercentBasis>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by `allocate` and `demo`
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Output format: json, yaml, csv, or table (defaults to the configured format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse a `--bill` value of the form `NAME=AMOUNT`
pub fn parse_bill_arg(s: &str) -> WaterfallResult<Bill> {
    let (name, amount) = s
        .rsplit_once('=')
        .ok_or_else(|| WaterfallError::Parse(format!("Bill must be NAME=AMOUNT, got '{}'", s)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(WaterfallError::Parse(format!("Bill name is empty in '{}'", s)));
    }

    Ok(Bill::new(name, Money::parse(amount)?))
}

/// Parse a `--goal` value of the form `NAME:KIND:VALUE` or `NAME:VALUE`
pub fn parse_goal_arg(s: &str) -> WaterfallResult<Goal> {
    let parts: Vec<&str> = s.rsplitn(3, ':').collect();

    let (name, kind, value) = match parts.as_slice() {
        [value, kind, name] => (*name, kind.parse::<GoalKind>()?, *value),
        [value, name] => (*name, GoalKind::Percent, *value),
        _ => {
            return Err(WaterfallError::Parse(format!(
                "Goal must be NAME:KIND:VALUE or NAME:VALUE, got '{}'",
                s
            )))
        }
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(WaterfallError::Parse(format!("Goal name is empty in '{}'", s)));
    }

    let value = value
        .trim()
        .trim_end_matches('%')
        .trim_start_matches('$')
        .replace(',', "");
    let value: f64 = value
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| WaterfallError::Parse(format!("Invalid goal value in '{}'", s)))?;

    Ok(Goal::new(name, kind, value))
}

impl AllocateArgs {
    /// Assemble the plan from the plan file and flags
    pub fn build_plan(&self) -> WaterfallResult<PaycheckPlan> {
        let mut plan = match &self.plan {
            Some(path) => read_plan(path)?,
            None => {
                let paycheck = self.paycheck.as_deref().ok_or_else(|| {
                    WaterfallError::Parse("Provide a plan file or --paycheck".into())
                })?;
                PaycheckPlan::new(Money::parse(paycheck)?)
            }
        };

        if let Some(paycheck) = &self.paycheck {
            plan.paycheck = Money::parse(paycheck)?;
        }
        plan.bills.extend(self.bills.iter().cloned());
        plan.goals.extend(self.goals.iter().cloned());
        if let Some(basis) = self.basis {
            plan.percent_apply = Some(basis);
        }

        Ok(plan)
    }
}

fn read_plan(path: &Path) -> WaterfallResult<PaycheckPlan> {
    if path == Path::new("-") {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| WaterfallError::Io(format!("Failed to read plan from stdin: {}", e)))?;
        info!("Read plan from stdin");
        return PaycheckPlan::from_json_str(&contents);
    }

    let plan = PaycheckPlan::load(path)?;
    info!(
        path = %path.display(),
        bills = plan.bills.len(),
        goals = plan.goals.len(),
        "Loaded plan"
    );
    Ok(plan)
}

/// Write `result` in `format`
pub fn write_result<W: Write>(
    result: &AllocationResult,
    format: OutputFormat,
    currency_symbol: &str,
    writer: &mut W,
) -> WaterfallResult<()> {
    match format {
        OutputFormat::Json => write_json(result, writer),
        OutputFormat::Yaml => write_yaml(result, writer),
        OutputFormat::Csv => write_csv(result, writer),
        OutputFormat::Table => writer
            .write_all(format_allocation_table(result, currency_symbol).as_bytes())
            .map_err(|e| WaterfallError::Export(e.to_string())),
    }
}

fn emit(
    result: &AllocationResult,
    settings: &Settings,
    output: &OutputArgs,
) -> WaterfallResult<()> {
    let format = output.format.unwrap_or(settings.output_format);
    debug!(%format, "Writing allocation");

    match &output.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                WaterfallError::Io(format!("Failed to create '{}': {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_result(result, format, &settings.currency_symbol, &mut writer)?;
            writer.flush()?;
            println!("Wrote allocation to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_result(result, format, &settings.currency_symbol, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// Handle `waterfall allocate`
pub fn handle_allocate_command(settings: &Settings, args: AllocateArgs) -> WaterfallResult<()> {
    let plan = args.build_plan()?;
    let result = AllocationService::new(settings).allocate_plan(&plan)?;
    emit(&result, settings, &args.output)
}

/// Handle `waterfall demo`
pub fn handle_demo_command(settings: &Settings, output: OutputArgs) -> WaterfallResult<()> {
    let result = AllocationService::new(settings).allocate_plan(&PaycheckPlan::demo())?;
    emit(&result, settings, &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bill_arg() {
        let bill = parse_bill_arg("Rent=1,200.00").unwrap();
        assert_eq!(bill.name, "Rent");
        assert_eq!(bill.amount.cents(), 120000);

        let bill = parse_bill_arg("Car = Insurance=85.5").unwrap();
        assert_eq!(bill.name, "Car = Insurance");
        assert_eq!(bill.amount.cents(), 8550);
    }

    #[test]
    fn test_parse_bill_arg_invalid() {
        assert!(parse_bill_arg("Rent").unwrap_err().is_parse());
        assert!(parse_bill_arg("=100").is_err());
        assert!(parse_bill_arg("Rent=abc").is_err());
    }

    #[test]
    fn test_parse_goal_arg() {
        let goal = parse_goal_arg("Invest:percent:10").unwrap();
        assert_eq!(goal, Goal::percent("Invest", 10.0));

        let goal = parse_goal_arg("Emergency:fixed:$1,000").unwrap();
        assert_eq!(goal, Goal::fixed("Emergency", 1000.0));

        let goal = parse_goal_arg("Travel:12.5%").unwrap();
        assert_eq!(goal, Goal::percent("Travel", 12.5));
    }

    #[test]
    fn test_parse_goal_arg_invalid() {
        assert!(parse_goal_arg("Invest").is_err());
        assert!(parse_goal_arg("Invest:weekly:10").is_err());
        assert!(parse_goal_arg(":10").is_err());
        assert!(parse_goal_arg("Invest:percent:lots").is_err());
    }

    #[test]
    fn test_build_plan_from_flags() {
        let args = AllocateArgs {
            paycheck: Some("1000".into()),
            bills: vec![parse_bill_arg("Rent=400").unwrap()],
            goals: vec![parse_goal_arg("Invest:10").unwrap()],
            basis: Some(PercentBasis::Remainder),
            ..AllocateArgs::default()
        };

        let plan = args.build_plan().unwrap();
        assert_eq!(plan.paycheck.cents(), 100000);
        assert_eq!(plan.bills.len(), 1);
        assert_eq!(plan.percent_apply, Some(PercentBasis::Remainder));
    }

    #[test]
    fn test_build_plan_requires_paycheck() {
        let err = AllocateArgs::default().build_plan().unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_build_plan_flags_extend_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.json");
        std::fs::write(&path, r#"{"paycheck": 500, "bills": [{"name": "Rent", "amount": 200}]}"#)
            .unwrap();

        let args = AllocateArgs {
            plan: Some(path),
            paycheck: Some("600".into()),
            bills: vec![parse_bill_arg("Phone=50").unwrap()],
            ..AllocateArgs::default()
        };

        let plan = args.build_plan().unwrap();
        assert_eq!(plan.paycheck.cents(), 60000);
        let names: Vec<_> = plan.bills.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Phone"]);
        assert_eq!(plan.percent_apply, None);
    }

    #[test]
    fn test_write_result_formats() {
        let settings = Settings::default();
        let result = AllocationService::new(&settings)
            .allocate_plan(&PaycheckPlan::demo())
            .unwrap();

        let mut json = Vec::new();
        write_result(&result, OutputFormat::Json, "$", &mut json).unwrap();
        assert!(String::from_utf8(json).unwrap().contains("\"guilt_free\": 300.0"));

        let mut table = Vec::new();
        write_result(&result, OutputFormat::Table, "$", &mut table).unwrap();
        assert!(String::from_utf8(table).unwrap().contains("Emergency"));

        let mut csv = Vec::new();
        write_result(&result, OutputFormat::Csv, "$", &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().starts_with("Section,Name"));
    }

    #[test]
    fn test_demo_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.yaml");

        let output = OutputArgs {
            format: Some(OutputFormat::Yaml),
            output: Some(path.clone()),
        };
        handle_demo_command(&Settings::default(), output).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("name: Rent"));
    }
}

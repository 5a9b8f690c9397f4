//! mcal
//!
//! Command-line maintenance calorie calculator. Run without arguments to see
//! the built-in example profile.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mcal::build_info;
use mcal::tools::activities::write_activity_table;
use mcal::tools::report::{maintenance_report, write_text_report, ErrorResponse, ReportRequest};

#[derive(Parser)]
#[command(name = "mcal", version, about = "Maintenance calorie calculator (Mifflin-St Jeor)")]
struct Cli {
    /// Weight in kilograms
    #[arg(long, default_value_t = 53.0, allow_negative_numbers = true)]
    weight: f64,

    /// Height in centimeters
    #[arg(long, default_value_t = 165.0, allow_negative_numbers = true)]
    height: f64,

    /// Age in years
    #[arg(long, default_value_t = 20)]
    age: u32,

    /// "male" or "female"
    #[arg(long, default_value = "male")]
    gender: String,

    /// sedentary, lightly_active, moderately_active, very_active or super_active
    #[arg(long, default_value = "lightly_active")]
    activity: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Reject implausible weight, height or age
    #[arg(long)]
    strict: bool,

    /// List activity levels and their multipliers
    #[arg(long)]
    list_activities: bool,

    /// Print the build banner to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn request(&self) -> ReportRequest {
        ReportRequest {
            weight_kg: self.weight,
            height_cm: self.height,
            age: self.age,
            gender: self.gender.clone(),
            activity_level: self.activity.clone(),
            strict: self.strict,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging goes to stderr so stdout only carries the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcal=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.verbose {
        build_info::print_startup_banner();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_activities {
        write_activity_table(&mut out)?;
        return Ok(ExitCode::SUCCESS);
    }

    let request = cli.request();
    tracing::debug!(?request, "Running calculation");

    if cli.json {
        return match maintenance_report(&request) {
            Ok(report) => {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                serde_json::to_writer_pretty(&mut out, &ErrorResponse::from(&e))?;
                writeln!(out)?;
                Ok(ExitCode::FAILURE)
            }
        };
    }

    match write_text_report(&mut out, &request)? {
        None => Ok(ExitCode::SUCCESS),
        Some(_) => Ok(ExitCode::FAILURE),
    }
}

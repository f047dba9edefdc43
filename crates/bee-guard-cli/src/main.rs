//! Evaluates one five-axis hazard reading plus a voc reading against a guard
//! config and prints the actuation directive for the downstream controller.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bee_core::state::State5D;
use bee_polytope_guards::{ActuationReport, GuardConfig};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const READINGS: [(&str, &str); 6] = [
    ("pm25", "PM2.5 concentration [ug/m3]"),
    ("nox", "NOx as NO2 [ppb]"),
    ("o3", "O3 [ppb]"),
    ("temp", "Air temperature [C]"),
    ("floral", "Floral density [m2/ha]"),
    ("voc", "VOC concentration [ug/m3]"),
];

fn command() -> Command {
    let mut cmd = Command::new("bee-guard")
        .about("Bee hazard index, polytope region and actuation limit for one reading")
        .arg(
            Arg::new("config")
                .long("config")
                .required(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Guard config JSON (hazard, forage_polytope, retreat_polytope, limits)"),
        )
        .arg(
            Arg::new("guard-id")
                .long("guard-id")
                .value_name("ID")
                .default_value("bee-guard")
                .help("Identifier stamped on the output"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print a JSON report instead of CSV"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Refuse configs with sanity issues instead of warning"),
        );

    for (name, help) in READINGS {
        cmd = cmd.arg(
            Arg::new(name)
                .long(name)
                .required(true)
                .allow_negative_numbers(true)
                .value_name("VALUE")
                .value_parser(value_parser!(f64))
                .help(help),
        );
    }
    cmd
}

fn reading(matches: &ArgMatches, name: &str) -> Result<f64> {
    let value = *matches
        .get_one::<f64>(name)
        .with_context(|| format!("missing --{name}"))?;
    if !value.is_finite() {
        bail!("--{name} must be finite, got {value}");
    }
    Ok(value)
}

fn print_csv(report: &ActuationReport) {
    println!("guard_id,region,tier,duty_scale,allow_foraging,risk_index,pm25_eq,within_viability");
    println!(
        "{},{},{},{:.3},{},{:.4},{:.3},{}",
        report.guard_id,
        report.directive.region,
        report.directive.tier,
        report.directive.duty_scale,
        report.directive.allow_foraging,
        report.hazard.risk_index,
        report.hazard.pm25_eq,
        report.hazard.within_viability
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();

    let config_path = matches
        .get_one::<PathBuf>("config")
        .context("missing --config")?;
    let config = GuardConfig::from_json_file(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let guard = if matches.get_flag("strict") {
        config
            .into_validated_guard()
            .context("strict mode refused the guard config")?
    } else {
        for issue in config.validate() {
            warn!(%issue, "guard config issue");
        }
        config.into_guard()
    };
    info!(
        forage_rows = guard.forage_polytope().len(),
        retreat_rows = guard.retreat_polytope().len(),
        soft = guard.limits().soft,
        hard = guard.limits().hard,
        "guard loaded"
    );

    let state = State5D::new(
        reading(&matches, "pm25")?,
        reading(&matches, "nox")?,
        reading(&matches, "o3")?,
        reading(&matches, "temp")?,
        reading(&matches, "floral")?,
    );
    let voc = reading(&matches, "voc")?;

    let guard_id = matches
        .get_one::<String>("guard-id")
        .context("missing --guard-id")?;
    let report = guard.report(guard_id.as_str(), &state, voc);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_csv(&report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn parses_negative_readings() {
        let matches = command()
            .try_get_matches_from([
                "bee-guard", "--config", "guard.json", "--pm25", "5", "--nox", "20", "--o3", "10",
                "--temp", "-4.5", "--floral", "10", "--voc", "50",
            ])
            .unwrap();
        assert_eq!(reading(&matches, "temp").unwrap(), -4.5);
        assert!(!matches.get_flag("strict"));
        assert_eq!(matches.get_one::<String>("guard-id").unwrap(), "bee-guard");
    }

    #[test]
    fn rejects_non_finite_reading() {
        let matches = command()
            .try_get_matches_from([
                "bee-guard", "--config", "guard.json", "--pm25", "NaN", "--nox", "20", "--o3", "10",
                "--temp", "25", "--floral", "10", "--voc", "50",
            ])
            .unwrap();
        assert!(reading(&matches, "pm25").is_err());
    }
}

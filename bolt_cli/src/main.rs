//! # Bolt CLI Application
//!
//! Command-line report for EN1993-1-8 bolt properties, spacing rules and
//! resistances.
//!
//! ```text
//! bolt_cli table
//! bolt_cli bolt --diameter 24 --class 8.8 --thickness 20 --fv 50 --ft 30
//! bolt_cli --gamma-m2 1.1 bolt --diameter 24 --class S245 --custom S245:230:360:0.5 --json
//! ```

use std::process::ExitCode;

use bolt_core::equations::en1993_ref;
use bolt_core::prelude::*;
use bolt_core::resistance::{standard_table, ResistanceRow};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "bolt_cli", version, about = "EN1993-1-8 bolt calculator")]
struct Cli {
    /// Partial safety factor γM2
    #[arg(long, global = true, default_value_t = bolt_core::equations::GAMMA_M2)]
    gamma_m2: f64,

    /// Register a custom class: NAME:FYB_MPA:FUB_MPA:ALPHA (repeatable)
    #[arg(long = "custom", global = true, value_name = "NAME:FYB:FUB:ALPHA")]
    custom: Vec<String>,

    /// Print JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tension and shear resistance of every standard diameter and class
    Table,
    /// Properties, distances and checks of a single bolt
    Bolt(BoltArgs),
}

#[derive(Args, Debug)]
struct BoltArgs {
    /// Nominal diameter in mm (e.g. 24)
    #[arg(long)]
    diameter: f64,

    /// Property class (e.g. 8.8)
    #[arg(long)]
    class: String,

    /// Plate thickness in mm for the spacing rules
    #[arg(long)]
    thickness: Option<f64>,

    /// Design shear force per bolt in kN
    #[arg(long, default_value_t = 0.0)]
    fv: f64,

    /// Design tensile force per bolt in kN
    #[arg(long, default_value_t = 0.0)]
    ft: f64,

    /// Shear plane passes through the unthreaded shank
    #[arg(long)]
    unthreaded: bool,

    /// Countersunk head
    #[arg(long)]
    countersunk: bool,
}

/// Full single-bolt report, as printed with `--json`.
#[derive(Debug, Serialize)]
struct BoltReport {
    bolt: Bolt,
    settings: DesignSettings,
    distances: Option<Distances>,
    check: BoltCheckResult,
    trace: Option<InteractionTrace>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> BoltResult<()> {
    let settings = DesignSettings::with_gamma_m2(cli.gamma_m2);
    settings.validate()?;

    let registry = GradeRegistry::standard();
    for spec in &cli.custom {
        register_custom(&registry, spec)?;
    }

    match &cli.command {
        Command::Table => {
            let rows = standard_table(&registry, &settings)?;
            if cli.json {
                print_json(&rows);
            } else {
                print_table(&rows, &registry.classes(), &settings);
            }
        }
        Command::Bolt(args) => {
            let report = bolt_report(args, &registry, &settings)?;
            if cli.json {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }
    }
    Ok(())
}

/// Parse `NAME:FYB_MPA:FUB_MPA:ALPHA` and add it to the registry.
fn register_custom(registry: &GradeRegistry, spec: &str) -> BoltResult<()> {
    let parts: Vec<&str> = spec.split(':').collect();
    let [name, fyb, fub, alpha] = parts.as_slice() else {
        return Err(BoltError::invalid_input(
            "custom",
            spec,
            "Expected NAME:FYB_MPA:FUB_MPA:ALPHA",
        ));
    };

    let number = |field: &str, text: &str| -> BoltResult<f64> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| BoltError::invalid_input(field, text, "Not a number"))
    };

    registry.add_class(
        name.trim(),
        Megapascals(number("fyb", *fyb)?).into(),
        Megapascals(number("fub", *fub)?).into(),
        number("alpha_v", *alpha)?,
    )
}

fn bolt_report(
    args: &BoltArgs,
    registry: &GradeRegistry,
    settings: &DesignSettings,
) -> BoltResult<BoltReport> {
    let input = BoltCheckInput {
        label: format!("M{} Cl{}", args.diameter, args.class),
        diameter: BoltDiameter::from_mm(args.diameter)?,
        class: BoltClass::from(args.class.as_str()),
        shear_plane: if args.unthreaded {
            ShearPlane::Unthreaded
        } else {
            ShearPlane::Threaded
        },
        head: if args.countersunk {
            HeadType::Countersunk
        } else {
            HeadType::Ordinary
        },
        fv_ed: Kilonewtons(args.fv).into(),
        ft_ed: Kilonewtons(args.ft).into(),
    };
    let bolt = input.bolt(registry)?;

    let distances = match args.thickness {
        Some(t) => Some(Distances::new(&bolt, Millimeters(t).into())?),
        None => None,
    };

    let check = calculate(&input, registry, settings)?;
    let trace = combined_utilization_with(
        &bolt,
        input.fv_ed,
        input.ft_ed,
        input.shear_plane,
        input.head,
        Detail::WithTrace,
        settings,
    )?
    .trace;

    Ok(BoltReport {
        bolt,
        settings: settings.clone(),
        distances,
        check,
        trace,
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn print_table(rows: &[ResistanceRow], classes: &[BoltClass], settings: &DesignSettings) {
    println!("{}", design_basis(settings));
    println!(
        "Resistances in kN per bolt ({}), tension / shear through thread",
        en1993_ref::TABLE_3_4
    );
    println!();

    print!("{:<6}", "");
    for class in classes {
        print!("{:>16}", class.as_str());
    }
    println!();

    for chunk in rows.chunks(classes.len().max(1)) {
        if let Some(first) = chunk.first() {
            print!("{:<6}", first.diameter.to_string());
        }
        for row in chunk {
            let cell = format!(
                "{:.1}/{:.1}",
                Kilonewtons::from(row.tension).0,
                Kilonewtons::from(row.shear).0
            );
            print!("{:>16}", cell);
        }
        println!();
    }
}

fn print_report(report: &BoltReport) {
    let bolt = &report.bolt;

    println!("═══════════════════════════════════════");
    println!("  BOLT {}", bolt);
    println!("═══════════════════════════════════════");
    println!("  {}", design_basis(&report.settings));
    println!();
    println!("Properties ({}):", en1993_ref::TABLE_3_1);
    if let Ok(d0) = bolt.hole_diameter() {
        println!("  d0  = {:.1} mm", Millimeters::from(d0).0);
    }
    if let Ok(p) = bolt.pitch() {
        println!("  p   = {:.2} mm", Millimeters::from(p).0);
    }
    println!("  A   = {:.1} mm²", SquareMillimeters::from(bolt.gross_area()).0);
    if let Ok(a_s) = bolt.tensile_stress_area() {
        println!("  As  = {:.1} mm²", SquareMillimeters::from(a_s).0);
    }
    println!("  fyb = {:.0} MPa", Megapascals::from(bolt.fyb()).0);
    println!("  fub = {:.0} MPa", Megapascals::from(bolt.fub()).0);

    if let Some(distances) = &report.distances {
        println!();
        println!(
            "Distances for t = {:.1} mm ({}):",
            Millimeters::from(distances.thickness).0,
            en1993_ref::TABLE_3_3
        );
        for (name, value) in distances.entries() {
            println!("  {:<9}= {:.1} mm", name, Millimeters::from(value).0);
        }
    }

    if let Some(trace) = &report.trace {
        println!();
        println!("{}", trace);
    }

    let check = &report.check;
    println!();
    println!("Capacity Checks:");
    println!(
        "  Shear:       {:.3} {}",
        check.shear_unity,
        status_icon(check.shear_unity <= 1.0)
    );
    println!(
        "  Tension:     {:.3} {}",
        check.tension_unity,
        status_icon(check.tension_unity <= 1.0)
    );
    println!(
        "  Interaction: {:.3} {}",
        check.interaction_unity,
        status_icon(check.interaction_unity <= 1.0)
    );
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} (governs: {})",
        if check.passes() { "PASS" } else { "FAIL" },
        check.governing_condition()
    );
    println!("═══════════════════════════════════════");
}

/// Design code and partial factor line shared by both reports
fn design_basis(settings: &DesignSettings) -> String {
    format!(
        "Design code: {}, γM2 = {} ({})",
        settings.code,
        settings.gamma_m2,
        en1993_ref::TABLE_2_1
    )
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_custom() {
        let registry = GradeRegistry::standard();
        register_custom(&registry, "S245:230:360:0.5").unwrap();
        let grade = registry.lookup(&BoltClass::from("S245")).unwrap();
        assert_eq!(grade.fub, Pascals(360.0e6));
        assert_eq!(grade.alpha_v_thread, 0.5);
    }

    #[test]
    fn test_register_custom_malformed() {
        let registry = GradeRegistry::standard();
        assert!(register_custom(&registry, "S245:230:360").is_err());
        assert!(register_custom(&registry, "S245:abc:360:0.5").is_err());
        assert!(register_custom(&registry, "S245:400:360:0.5").is_err());
    }

    #[test]
    fn test_cli_parses_bolt_command() {
        let cli = Cli::try_parse_from([
            "bolt_cli", "bolt", "--diameter", "24", "--class", "5.8", "--fv", "50", "--countersunk",
        ])
        .unwrap();
        assert_eq!(cli.gamma_m2, 1.25);
        let Command::Bolt(args) = cli.command else {
            panic!("expected bolt command");
        };
        assert_eq!(args.diameter, 24.0);
        assert!(args.countersunk);
        assert!(!args.unthreaded);
    }

    #[test]
    fn test_bolt_report() {
        let registry = GradeRegistry::standard();
        let args = BoltArgs {
            diameter: 24.0,
            class: "5.8".to_string(),
            thickness: Some(40.0),
            fv: 0.0,
            ft: 0.0,
            unthreaded: false,
            countersunk: false,
        };
        let report = bolt_report(&args, &registry, &DesignSettings::default()).unwrap();
        assert!((Kilonewtons::from(report.check.fv_rd).0 - 70.6).abs() < 0.05);
        assert_eq!(report.check.utilization, 0.0);
        let distances = report.distances.unwrap();
        assert!((Millimeters::from(distances.p2_min).0 - 62.4).abs() < 1e-6);
        assert!(report.trace.is_some());
    }

    #[test]
    fn test_design_basis() {
        let line = design_basis(&DesignSettings::with_gamma_m2(1.1));
        assert_eq!(line, "Design code: EN1993-1-8, γM2 = 1.1 (EN1993-1-8 Table 2.1)");
    }

    #[test]
    fn test_bolt_report_unknown_class() {
        let registry = GradeRegistry::standard();
        let args = BoltArgs {
            diameter: 24.0,
            class: "12.9".to_string(),
            thickness: None,
            fv: 0.0,
            ft: 0.0,
            unthreaded: false,
            countersunk: false,
        };
        let err = bolt_report(&args, &registry, &DesignSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
    }
}

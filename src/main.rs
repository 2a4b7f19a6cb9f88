use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate emissions and credit requirements (default if no subcommand)
    Report,
    /// Predict ecosystem sequestration from the scenario's ecosystem section
    Predict,
    /// Ask the scripted carbon-management advisor a question
    Ask {
        /// The question text
        question: Vec<String>,
    },
    /// Write a starter scenario file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "offsetkit")]
#[command(about = "Carbon emission estimation and offset credit CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to scenario file (defaults to ~/.config/offsetkit/scenario.yaml)
    #[arg(short, long, global = true)]
    scenario: Option<String>,

    /// Emit results as JSON instead of formatted text
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Report);
    let scenario_path = cli.scenario.map(PathBuf::from);

    // Subcommands that don't need a scenario file
    match &command {
        Commands::Init => {
            if let Err(e) = offsetkit::scenario::write_starter_scenario(scenario_path) {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Ask { question } => {
            let question = question.join(" ");
            println!("{}", offsetkit::advisor::reply_for(&question));
            std::process::exit(EXIT_SUCCESS);
        }
        _ => {}
    }

    let scenario = match offsetkit::scenario::load_scenario(scenario_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Scenario error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded scenario: fuel={:?} shipping={:?} ecosystem={}",
            scenario.transport.fuel_type,
            scenario.logistics.shipping_mode,
            if scenario.ecosystem.is_some() {
                "present"
            } else {
                "absent"
            }
        );
    }

    let use_colors = offsetkit::output::should_use_colors();

    match command {
        Commands::Report => {
            let result = offsetkit::calculator::calculate_emissions(
                &scenario.transport,
                &scenario.manufacturing,
                &scenario.operations,
                &scenario.logistics,
            );

            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                }
            } else {
                print!("{}", offsetkit::output::format_report(&result, use_colors));
            }
        }
        Commands::Predict => {
            let Some(ecosystem) = scenario.ecosystem else {
                eprintln!("Scenario has no ecosystem section. Add one:");
                eprintln!("  ecosystem:");
                eprintln!("    soil_type: alluvial");
                eprintln!("    trees_count: 12500");
                eprintln!("    area_size: 450");
                eprintln!("    rainfall: 1200");
                std::process::exit(EXIT_CONFIG);
            };

            match offsetkit::sequestration::predict_sequestration(&ecosystem) {
                Ok(result) => {
                    if cli.json {
                        match serde_json::to_string_pretty(&result) {
                            Ok(json) => println!("{}", json),
                            Err(e) => {
                                eprintln!("Failed to serialize result: {}", e);
                                std::process::exit(EXIT_CONFIG);
                            }
                        }
                    } else {
                        print!(
                            "{}",
                            offsetkit::output::format_prediction(&result, use_colors)
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Validation error: {}", e);
                    std::process::exit(EXIT_VALIDATION);
                }
            }
        }
        Commands::Init | Commands::Ask { .. } => unreachable!("handled above"),
    }

    std::process::exit(EXIT_SUCCESS);
}

//! # Beamline CLI
//!
//! Terminal front end for beam_core. Runs one analysis and prints a short
//! summary followed by the full JSON response.
//!
//! ```text
//! beam_cli                 # interactive prompts with defaults
//! beam_cli request.json    # read an AnalysisRequest from a file
//! ```
//!
//! Set `RUST_LOG=debug` to see dispatch and reaction logging.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use beam_core::{
    load_request, Analysis, Beam, BeamResponse, CalcResult, Material, Quantity, SupportCondition,
};
use log::info;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn interactive() -> CalcResult<BeamResponse> {
    println!("Conditions: {}", condition_list());
    let condition = prompt_line("Enter condition [simply-supported]: ")
        .unwrap_or_else(|| SupportCondition::SimplySupported.key().to_string());
    let condition: SupportCondition = condition.parse()?;

    let primary = prompt_f64("Enter primary span (m) [6.0]: ", 6.0);
    let secondary = if condition == SupportCondition::TwoSpanUnequal {
        prompt_f64("Enter secondary span (m) [6.0]: ", 6.0)
    } else {
        0.0
    };
    let j2 = prompt_f64("Enter inertia factor j2 [1.0]: ", 1.0);
    let ei = prompt_f64("Enter EI [210000.0]: ", 210_000.0);
    let load = prompt_f64("Enter uniform load (kN/m) [10.0]: ", 10.0);

    let beam = Beam::new(primary, secondary, j2, Arc::new(Material::new("CLI", ei)));
    Analysis::shared().analyze_for(&beam, load, condition)
}

fn condition_list() -> String {
    SupportCondition::ALL
        .iter()
        .map(|c| c.key())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_summary(response: &BeamResponse) {
    let beam = &response.beam;
    println!("═══════════════════════════════════════");
    println!("  BEAM RESPONSE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Condition: {} ({} supports)",
        response.condition.display_name(),
        response.condition.support_count()
    );
    match response.condition {
        SupportCondition::SimplySupported => {
            println!("  Span:      {:.2} m", beam.primary_span);
        }
        SupportCondition::TwoSpanUnequal => {
            println!("  Spans:     {:.2} m + {:.2} m", beam.primary_span, beam.secondary_span);
        }
    }
    println!("  Material:  {} (EI = {})", beam.material.name, beam.ei());
    println!("  j2:        {}", beam.j2);
    println!("  Load:      {:.2} kN/m", response.load);
    println!();
    println!("Reactions:");
    debug_assert_eq!(response.reactions.len(), response.condition.support_count());
    for (i, reaction) in response.reactions.iter().enumerate() {
        println!("  R{} = {:.3} kN at x = {:.2} m", i + 1, reaction.force, reaction.position);
    }
    println!();
    println!("Governing values:");
    for quantity in Quantity::ALL {
        if let Some(point) = response.governing(quantity) {
            println!(
                "  {:<15} {:>12.4} {:<3} at x = {:.2} m",
                quantity.display_name(),
                point.value,
                quantity.unit(),
                point.position
            );
        }
    }
    println!();
    println!("═══════════════════════════════════════");
}

fn main() -> ExitCode {
    env_logger::init();

    println!("Beamline CLI - Beam Response Calculator");
    println!("=======================================");
    println!();

    let result = match std::env::args().nth(1) {
        Some(path) => {
            info!("running request file {}", path);
            load_request(&path).and_then(|request| request.run(Analysis::shared()))
        }
        None => interactive(),
    };

    match result {
        Ok(response) => {
            println!();
            print_summary(&response);

            println!();
            println!("JSON Output:");
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Could not serialize response: {}", e),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

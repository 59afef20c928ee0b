use super::cli::Cli;
use super::error::CliError;
use super::io::{self, Report};
use aziz::{CalculatorOptions, HeliumCalculator, UnitSystem};
use indicatif::{ProgressBar, ProgressStyle};

pub fn run(args: Cli) -> Result<(), CliError> {
    let units = UnitSystem {
        length: args.units.length_unit.into(),
        energy: args.units.energy_unit.into(),
    };
    let options = CalculatorOptions {
        units,
        check_geometry: !args.calculation.no_geometry_check,
        ..Default::default()
    };
    let calculator = HeliumCalculator::new().with_options(options);

    let frames = io::read_frames(&args.input)?;

    let source_name = if args.input == "-" {
        "stdin".to_string()
    } else {
        args.input.clone()
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!(
        "Computing energies and forces for {} frame(s)...",
        frames.comments.len()
    ));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = calculator.compute(frames.positions.view());

    pb.finish_and_clear();
    let result = result?;

    log::info!(
        "Computed {} energies (mean {:.6e} {})",
        result.energies.len(),
        result.energies.mean().unwrap_or(0.0),
        units.energy.symbol()
    );

    let writer = io::get_writer(&args.output.output)?;
    io::write_results(
        writer,
        &Report {
            frames: &frames,
            result: &result,
            units,
            precision: args.output.precision,
            source_name: &source_name,
        },
        &args.output.format,
    )?;

    Ok(())
}

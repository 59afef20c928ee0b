use aziz::{EnergyUnit, LengthUnit};
use clap::{ArgAction, Args, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str =
    "A command-line tool for computing energies and forces of helium clusters with the HFDHE2 (Aziz) pair potential.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Input file containing one or more helium configurations in XYZ format.
    ///
    /// Use '-' to read from standard input. Frames are concatenated: each starts with the
    /// number of atoms, then a comment line, then one line per atom with the element symbol
    /// (He, or atomic number 2) and x, y, z coordinates. All frames must have the same
    /// number of atoms.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub units: UnitOptions,

    #[command(flatten)]
    pub calculation: CalculationOptions,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places to display for floating-point values.
    #[arg(short, long, default_value_t = 8)]
    pub precision: usize,
}

/// Options for choosing the units of input coordinates and of reported results.
#[derive(Args)]
#[command(next_help_heading = "Unit Options")]
pub struct UnitOptions {
    /// Unit of the input coordinates (forces are reported per this unit).
    #[arg(short = 'L', long, value_enum, default_value_t = LengthArg::Angstrom)]
    pub length_unit: LengthArg,

    /// Unit of the reported energies.
    #[arg(short = 'E', long, value_enum, default_value_t = EnergyArg::Rydberg)]
    pub energy_unit: EnergyArg,
}

/// Options for controlling the calculation.
#[derive(Args)]
#[command(next_help_heading = "Calculation Options")]
pub struct CalculationOptions {
    /// Skip the check for non-finite coordinates and coincident atoms.
    ///
    /// Invalid frames then yield non-finite energies and forces instead of an error.
    #[arg(long)]
    pub no_geometry_check: bool,
}

/// Output format for the calculation results.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed tables with per-frame energies and per-atom forces.
    Pretty,
    /// Extended XYZ with forces appended to each atom line and the energy in the comment.
    Xyz,
    /// Comma-separated values with columns: frame, index, element, x, y, z, fx, fy, fz, energy.
    Csv,
    /// JSON object containing a frames array and unit metadata.
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LengthArg {
    Bohr,
    Angstrom,
}

impl From<LengthArg> for LengthUnit {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Bohr => LengthUnit::Bohr,
            LengthArg::Angstrom => LengthUnit::Angstrom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EnergyArg {
    Hartree,
    Rydberg,
    Kelvin,
}

impl From<EnergyArg> for EnergyUnit {
    fn from(arg: EnergyArg) -> Self {
        match arg {
            EnergyArg::Hartree => EnergyUnit::Hartree,
            EnergyArg::Rydberg => EnergyUnit::Rydberg,
            EnergyArg::Kelvin => EnergyUnit::Kelvin,
        }
    }
}

use super::cli::OutputFormat;
use super::error::CliError;
use aziz::{EnsembleResult, UnitSystem};
use ndarray::{Array3, ArrayView2};
use prettytable::*;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Configurations read from a (multi-frame) XYZ file.
#[derive(Debug)]
pub struct Frames {
    /// Coordinates with shape `(n_configs, n_atoms, 3)`.
    pub positions: Array3<f64>,
    /// The comment line of each frame.
    pub comments: Vec<String>,
}

pub fn read_frames(input_spec: &str) -> Result<Frames, CliError> {
    let reader: Box<dyn BufRead> = if input_spec == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = std::fs::File::open(input_spec).map_err(|e| CliError::Io {
            path: PathBuf::from(input_spec),
            source: e,
        })?;
        Box::new(BufReader::new(file))
    };

    parse_frames(reader, input_spec)
}

pub fn parse_frames(reader: impl BufRead, source_name: &str) -> Result<Frames, CliError> {
    let parse_error = |details: String| CliError::XyzParse {
        source_name: source_name.to_string(),
        details,
    };

    let mut lines = reader.lines();
    let mut coordinates = Vec::new();
    let mut comments = Vec::new();
    let mut atoms_per_frame = None;

    while let Some(line) = lines.next() {
        let line = line?;
        let count_line = line.trim();
        if count_line.is_empty() {
            continue;
        }

        let frame = comments.len();
        let num_atoms: usize = count_line.parse().map_err(|_| {
            parse_error(format!(
                "Invalid atom count in frame {}: {}",
                frame, count_line
            ))
        })?;

        match atoms_per_frame {
            None => atoms_per_frame = Some(num_atoms),
            Some(expected) if expected != num_atoms => {
                return Err(parse_error(format!(
                    "Frame {} has {} atoms, expected {} as in the first frame",
                    frame, num_atoms, expected
                )));
            }
            Some(_) => {}
        }

        let comment = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(parse_error(format!(
                    "Missing comment line in frame {}",
                    frame
                )));
            }
        };
        comments.push(comment);

        for atom in 0..num_atoms {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(parse_error(format!(
                        "Expected {} atoms in frame {}, got {}",
                        num_atoms, frame, atom
                    )));
                }
            };
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return Err(parse_error(format!(
                    "Invalid atom line in frame {}: {}",
                    frame, line
                )));
            }
            if !is_helium(parts[0]) {
                return Err(parse_error(format!(
                    "Unsupported element in frame {}: {} (only helium is supported)",
                    frame, parts[0]
                )));
            }
            for value in &parts[1..4] {
                let x: f64 = value
                    .parse()
                    .map_err(|_| parse_error(format!("Invalid coordinate: {}", value)))?;
                coordinates.push(x);
            }
        }
    }

    let num_atoms = atoms_per_frame.ok_or_else(|| parse_error("No frames found".to_string()))?;
    let positions = Array3::from_shape_vec((comments.len(), num_atoms, 3), coordinates)
        .map_err(|e| parse_error(e.to_string()))?;

    log::info!(
        "Read {} frame(s) of {} atoms from {}",
        comments.len(),
        num_atoms,
        source_name
    );

    Ok(Frames {
        positions,
        comments,
    })
}

fn is_helium(symbol: &str) -> bool {
    symbol.eq_ignore_ascii_case("He") || symbol == "2"
}

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Everything needed to render the results of one run.
pub struct Report<'a> {
    pub frames: &'a Frames,
    pub result: &'a EnsembleResult,
    pub units: UnitSystem,
    pub precision: usize,
    pub source_name: &'a str,
}

impl Report<'_> {
    fn positions(&self, frame: usize) -> ArrayView2<'_, f64> {
        self.frames.positions.index_axis(ndarray::Axis(0), frame)
    }

    fn forces(&self, frame: usize) -> ArrayView2<'_, f64> {
        self.result.forces.index_axis(ndarray::Axis(0), frame)
    }

    fn force_unit(&self) -> String {
        format!(
            "{}/{}",
            self.units.energy.symbol(),
            self.units.length.symbol()
        )
    }
}

pub fn write_results(
    mut writer: Box<dyn Write>,
    report: &Report<'_>,
    format: &OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, report),
        OutputFormat::Xyz => write_xyz_forces(&mut writer, report),
        OutputFormat::Csv => write_csv(&mut writer, report),
        OutputFormat::Json => write_json(&mut writer, report),
    }?;
    writer.flush()?;
    Ok(())
}

fn write_pretty_table(writer: &mut dyn Write, report: &Report<'_>) -> Result<(), CliError> {
    let precision = report.precision;
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let no_intern_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let energy_unit = report.units.energy.symbol();
    let length_unit = report.units.length.symbol();
    let force_unit = report.force_unit();
    let (n_frames, n_atoms, _) = report.frames.positions.dim();

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->"HFDHE2 Helium Energies and Forces"]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let mut summary_table = Table::new();
    summary_table.set_format(no_intern_format);
    summary_table.add_row(row![b->"Source File:", report.source_name]);
    summary_table.add_row(row![b->"Frames:", n_frames]);
    summary_table.add_row(row![b->"Atoms per Frame:", n_atoms]);
    summary_table.add_row(row![b->"Mean Energy:", format!("{:.prec$} {}", report.result.energies.mean().unwrap_or(0.0), energy_unit, prec = precision)]);
    summary_table.print(writer)?;
    writeln!(writer)?;

    for frame in 0..n_frames {
        writeln!(
            writer,
            "Frame {} │ Energy: {:.prec$} {}",
            frame,
            report.result.energies[frame],
            energy_unit,
            prec = precision
        )?;

        let mut data_table = Table::new();
        data_table.set_format(box_format);
        data_table.set_titles(row![
            bc->"Index",
            bc->format!("X ({})", length_unit),
            bc->format!("Y ({})", length_unit),
            bc->format!("Z ({})", length_unit),
            bc->format!("Fx ({})", force_unit),
            bc->format!("Fy ({})", force_unit),
            bc->format!("Fz ({})", force_unit)
        ]);

        let positions = report.positions(frame);
        let forces = report.forces(frame);
        for (i, (position, force)) in positions.outer_iter().zip(forces.outer_iter()).enumerate() {
            data_table.add_row(row![
                r->i,
                r->format!("{:.prec$}", position[0], prec = precision),
                r->format!("{:.prec$}", position[1], prec = precision),
                r->format!("{:.prec$}", position[2], prec = precision),
                r->format!("{:.prec$e}", force[0], prec = precision),
                r->format!("{:.prec$e}", force[1], prec = precision),
                r->format!("{:.prec$e}", force[2], prec = precision)
            ]);
        }

        data_table.print(writer)?;
        writeln!(writer)?;
    }

    Ok(())
}

fn write_xyz_forces(writer: &mut dyn Write, report: &Report<'_>) -> Result<(), CliError> {
    let precision = report.precision;
    for (frame, comment) in report.frames.comments.iter().enumerate() {
        let positions = report.positions(frame);
        let forces = report.forces(frame);

        writeln!(writer, "{}", positions.nrows())?;
        writeln!(
            writer,
            "{} | HFDHE2 | energy: {:.*e} {} | forces: {}",
            comment.trim(),
            precision,
            report.result.energies[frame],
            report.units.energy.symbol(),
            report.force_unit()
        )?;
        for (position, force) in positions.outer_iter().zip(forces.outer_iter()) {
            writeln!(
                writer,
                "He {:.*} {:.*} {:.*} {:.*e} {:.*e} {:.*e}",
                precision,
                position[0],
                precision,
                position[1],
                precision,
                position[2],
                precision,
                force[0],
                precision,
                force[1],
                precision,
                force[2]
            )?;
        }
    }
    Ok(())
}

fn write_csv(writer: &mut dyn Write, report: &Report<'_>) -> Result<(), CliError> {
    let precision = report.precision;
    writeln!(writer, "frame,index,element,x,y,z,fx,fy,fz,energy")?;
    for frame in 0..report.frames.comments.len() {
        let energy = report.result.energies[frame];
        let positions = report.positions(frame);
        let forces = report.forces(frame);
        for (i, (position, force)) in positions.outer_iter().zip(forces.outer_iter()).enumerate() {
            writeln!(
                writer,
                "{},{},He,{:.*},{:.*},{:.*},{:.*e},{:.*e},{:.*e},{:.*e}",
                frame,
                i,
                precision,
                position[0],
                precision,
                position[1],
                precision,
                position[2],
                precision,
                force[0],
                precision,
                force[1],
                precision,
                force[2],
                precision,
                energy
            )?;
        }
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, report: &Report<'_>) -> Result<(), CliError> {
    let precision = report.precision;
    let n_frames = report.frames.comments.len();
    let fixed = |value: f64| json_number(value, format!("{:.*}", precision, value));
    let scientific = |value: f64| json_number(value, format!("{:.*e}", precision, value));

    writeln!(writer, "{{")?;
    writeln!(
        writer,
        "  \"units\": {{ \"length\": \"{}\", \"energy\": \"{}\", \"force\": \"{}\" }},",
        report.units.length.symbol(),
        report.units.energy.symbol(),
        report.force_unit()
    )?;
    writeln!(writer, "  \"frames\": [")?;
    for frame in 0..n_frames {
        let positions = report.positions(frame);
        let forces = report.forces(frame);
        let n_atoms = positions.nrows();

        writeln!(writer, "    {{")?;
        writeln!(writer, "      \"index\": {},", frame)?;
        writeln!(
            writer,
            "      \"energy\": {},",
            scientific(report.result.energies[frame])
        )?;
        writeln!(writer, "      \"atoms\": [")?;
        for (i, (position, force)) in positions.outer_iter().zip(forces.outer_iter()).enumerate() {
            let comma = if i + 1 < n_atoms { "," } else { "" };
            writeln!(
                writer,
                "        {{ \"index\": {}, \"position\": [{}, {}, {}], \"force\": [{}, {}, {}] }}{}",
                i,
                fixed(position[0]),
                fixed(position[1]),
                fixed(position[2]),
                scientific(force[0]),
                scientific(force[1]),
                scientific(force[2]),
                comma
            )?;
        }
        writeln!(writer, "      ]")?;
        let comma = if frame + 1 < n_frames { "," } else { "" };
        writeln!(writer, "    }}{}", comma)?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// JSON has no NaN or infinity literals; such values are written as `null`.
fn json_number(value: f64, formatted: String) -> String {
    if value.is_finite() {
        formatted
    } else {
        "null".to_string()
    }
}

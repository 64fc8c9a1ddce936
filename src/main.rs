//! CLI for generating delimited synthetic data from a field schema.
//!
//! Usage:
//!   datagen -s schema.txt -n 100 --with-header out.txt
//!   datagen -s schema.txt -n 5 -d ,            # CSV to stdout

use anyhow::{bail, Context};
use clap::Parser;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use datagen::writer::DelimitedWriter;
use datagen::{compile, parse_schema, CompiledField, Registry, RowGenerator};

#[derive(Parser, Debug)]
#[command(name = "datagen")]
#[command(version)]
#[command(about = "Generate delimited synthetic data from a field schema", long_about = None)]
struct Args {
    /// Schema file: one `name type[argument]` declaration per line,
    /// `#` starts a comment
    #[arg(short, long)]
    schema: PathBuf,

    /// Number of rows to generate
    #[arg(short = 'n', long = "rows", default_value = "10")]
    rows: usize,

    /// Field delimiter
    #[arg(short, long, default_value = "|")]
    delimiter: char,

    /// Emit a header line with the field names
    #[arg(long)]
    with_header: bool,

    /// Seed the random source for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (default: stdout)
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.schema)
        .with_context(|| format!("failed to read schema file {}", args.schema.display()))?;
    let fields = parse_schema(&text)?;
    if fields.is_empty() {
        bail!(
            "schema file {} contains no field declarations",
            args.schema.display()
        );
    }

    // Compile before opening the output: a bad schema produces no file.
    let registry = Registry::builtin();
    let compiled = compile(&registry, &fields)?;
    let mut gen = match args.seed {
        Some(seed) => RowGenerator::with_seed(&compiled, seed),
        None => RowGenerator::new(&compiled),
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let writer = DelimitedWriter::new(file, args.delimiter);
            write_rows(writer, &compiled, &mut gen, &args)?;
            eprintln!("Generated {} rows to {}", args.rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            let writer = DelimitedWriter::new(stdout.lock(), args.delimiter);
            write_rows(writer, &compiled, &mut gen, &args)?;
        }
    }

    Ok(())
}

fn write_rows<W: Write>(
    mut writer: DelimitedWriter<W>,
    compiled: &[CompiledField],
    gen: &mut RowGenerator,
    args: &Args,
) -> anyhow::Result<()> {
    if args.with_header {
        writer.write_header(compiled)?;
    }
    for _ in 0..args.rows {
        let row = gen.next_row()?;
        writer.write_row(&row)?;
    }
    writer.flush()?;
    Ok(())
}

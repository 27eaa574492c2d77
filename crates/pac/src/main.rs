use std::{fs::File, io::Write, path::Path};

use clap::Parser;
use pac::{die, load, output::Report, run::Engine};

const INPUT_HELP: &str = "INPUT FORMAT:
    Coordinates          # comments may follow on any line
    C 0.0 0.0 0.0
    O 1.2 0.0 0.0
    H -0.63 0.63 0.0
    H -0.63 -0.63 0.0

    Dipole
    1.6 0.0 0.0

    Isotopologues
    12 16 1 1 h2co
    12 16 2 1 hdco
    12 16 2 2 d2co

Section keywords must start a line but are case insensitive, and every
section ends with a blank line. Mass numbers are given in the same order as
the atoms in the Coordinates section, and each row ends with a label naming
that isotopologue in the output.";

/// principal axes calculator
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, after_help = INPUT_HELP)]
struct Args {
    /// input file
    infile: String,

    /// Number of decimal places in the text output. The csv and json
    /// outputs always use full precision. Defaults to 6.
    #[arg(value_parser, default_value_t = 6)]
    decimals: usize,

    /// Overwrite existing output from a previous run. Defaults to false.
    #[arg(short, long, default_value_t = false)]
    overwrite: bool,

    /// Set the maximum number of threads to use. Defaults to 0, which means
    /// to use as many threads as there are CPUS.
    #[arg(short, long, default_value_t = 0)]
    threads: usize,
}

fn main() -> Result<(), std::io::Error> {
    env_logger::init();
    let args = Args::parse();
    let infile = Path::new(&args.infile);
    let Some(stem) = infile.file_stem() else {
        die!("invalid input file `{}`", args.infile)
    };
    let stem = stem.to_string_lossy();
    let dir = infile.parent().unwrap_or(Path::new("."));
    let csv_name = format!("{stem}_pac.csv");
    let out_path = dir.join(format!("{stem}_pac.out"));
    if out_path.exists() && !args.overwrite {
        die!("existing pac output. overwrite with -o/--overwrite");
    }
    let text = match std::fs::read_to_string(infile) {
        Ok(text) => text,
        Err(e) => die!("failed to read `{}` with {e}", args.infile),
    };
    let input = match load::parse(&text) {
        Ok(input) => input,
        Err(e) => die!("{e}"),
    };
    pac::max_threads(args.threads);
    let results = match Engine::new(&*isomass::TABLE).run(&input) {
        Ok(results) => results,
        Err(e) => die!("{e}"),
    };
    let report = Report {
        raw_input: &text,
        molecule: &input.molecule,
        results: &results,
        decimals: args.decimals,
    };
    report.write_text(File::create(&out_path)?, &csv_name)?;
    report.write_csv(File::create(dir.join(&csv_name))?)?;
    let mut f = File::create(dir.join(format!("{stem}_pac.json")))?;
    match report.to_json_pretty() {
        Ok(s) => writeln!(f, "{s}")?,
        Err(e) => die!("failed to serialize results with {e}"),
    }
    println!("normal termination of pac");
    Ok(())
}

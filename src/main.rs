use clap::{Arg, Command};
use std::path::PathBuf;
use wkt_symdiff::process_file;

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Command::new("WKT Symmetric Difference")
        .version("1.0")
        .about("Reduces a file of WKT geometries to their combined symmetric difference")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .num_args(1)
                .required(true)
                .help("Input text file with one WKT geometry per line"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .num_args(1)
                .help("Output file for the result (default: result.txt)"),
        )
        .get_matches();

    let input = PathBuf::from(matches.get_one::<String>("input").unwrap());
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("result.txt"));

    // Validate that the input file exists
    if !input.exists() {
        eprintln!("Error: File not found: {}", input.display());
        std::process::exit(1);
    }

    match process_file(&input, &output) {
        Ok(report) => {
            if !report.skipped.is_empty() {
                println!(
                    "Skipped {} lines that could not be decoded as WKT",
                    report.skipped.len()
                );
            }
            if report.unsupported > 0 {
                println!(
                    "Ignored {} geometries outside the point/line/polygon set",
                    report.unsupported
                );
            }
            for kind in &report.cancelled {
                println!("The {} geometries cancelled out to an empty set", kind);
            }
            println!("Symmetric difference of {} geometries:", report.decoded);
            for line in &report.output_lines {
                println!("{}", line);
            }
            println!("Result written to: {}", output.display());
        }
        Err(e) => {
            eprintln!("Error processing file: {}", e);
            std::process::exit(1);
        }
    }
}

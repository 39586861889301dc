use std::fs;
use std::path::Path;
use tracing::{info, warn};

use geo::Geometry;
use wkt::ToWkt;

pub mod engine;
pub mod error;
pub mod loader;
pub mod reducer;

pub use error::{PipelineError, PipelineResult, ReduceError};
pub use loader::{GeometryBatch, SkippedLine};
pub use reducer::{GeometryKind, Reduction};

/// What a run did, for the presentation layer to report.
#[derive(Debug)]
pub struct RunReport {
    pub decoded: usize,
    pub skipped: Vec<SkippedLine>,
    pub cancelled: Vec<GeometryKind>,
    pub unsupported: usize,
    pub output_lines: Vec<String>,
}

// Full pipeline: read the input file, decode, reduce, encode, write the
// result file. No output artifact is produced when nothing decodes.
pub fn process_file(input: &Path, output: &Path) -> PipelineResult<RunReport> {
    info!("Loading file: {}", input.display());
    let text = fs::read_to_string(input)?;
    let batch = loader::load_geometries(&text);

    for skipped in &batch.skipped {
        warn!(
            "Skipping line {} ({}): {}",
            skipped.line_number, skipped.content, skipped.reason
        );
    }

    if batch.line_count == 0 {
        return Err(PipelineError::EmptyFile);
    }
    if batch.is_empty() {
        return Err(PipelineError::NothingDecoded {
            line_count: batch.line_count,
        });
    }
    info!("Loaded {} geometries from file", batch.geometries.len());

    let reduction = reducer::reduce(&batch.geometries)?;
    let output_lines = wkt_lines(&reduction.geometry);
    fs::write(output, output_lines.join("\n") + "\n")?;
    info!("Result written to: {}", output.display());

    Ok(RunReport {
        decoded: batch.geometries.len(),
        skipped: batch.skipped,
        cancelled: reduction.cancelled,
        unsupported: reduction.unsupported,
        output_lines,
    })
}

/// One WKT line per geometry in the result's top-level decomposition:
/// members of a non-empty collection each get their own line, anything
/// else (including the deliberately-empty collection) is a single line.
pub fn wkt_lines(geometry: &Geometry<f64>) -> Vec<String> {
    match geometry {
        Geometry::GeometryCollection(collection) if !collection.0.is_empty() => {
            collection.0.iter().map(|member| member.wkt_string()).collect()
        }
        other => vec![other.wkt_string()],
    }
}

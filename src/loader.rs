use geo::Geometry;
use wkt::TryFromWkt;

/// A line that could not be decoded as WKT. Kept as data so the caller
/// decides how to present it.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

/// Geometries decoded from input text, in input order, together with the
/// lines that had to be skipped.
#[derive(Debug)]
pub struct GeometryBatch {
    pub geometries: Vec<Geometry<f64>>,
    pub skipped: Vec<SkippedLine>,
    /// Number of non-blank lines seen. Lets the caller tell "no lines"
    /// apart from "lines present but none decoded".
    pub line_count: usize,
}

impl GeometryBatch {
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

// Function to decode geometries from text, one WKT geometry per line.
// A bad line is never fatal: it is recorded and the rest keep loading.
pub fn load_geometries(text: &str) -> GeometryBatch {
    let mut geometries = Vec::new();
    let mut skipped = Vec::new();
    let mut line_count = 0;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;

        match Geometry::<f64>::try_from_wkt_str(line) {
            Ok(geometry) => geometries.push(geometry),
            Err(reason) => skipped.push(SkippedLine {
                line_number: index + 1,
                content: line.to_string(),
                reason: reason.to_string(),
            }),
        }
    }

    GeometryBatch {
        geometries,
        skipped,
        line_count,
    }
}

use geo::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use std::fmt;

use crate::engine;
use crate::error::ReduceError;

/// The three geometry categories the reduction operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Polygon,
    Line,
    Point,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryKind::Polygon => write!(f, "polygon"),
            GeometryKind::Line => write!(f, "line"),
            GeometryKind::Point => write!(f, "point"),
        }
    }
}

/// Batch split into the supported categories by exact variant match.
/// Anything else (multi-geometries, collections, rects...) is counted and
/// left out of the computation.
#[derive(Debug, Default)]
pub struct PartitionedBatch {
    pub polygons: Vec<Polygon<f64>>,
    pub lines: Vec<LineString<f64>>,
    pub points: Vec<Point<f64>>,
    pub unsupported: usize,
}

pub fn partition_geometries(batch: &[Geometry<f64>]) -> PartitionedBatch {
    let mut parts = PartitionedBatch::default();
    for geometry in batch {
        match geometry {
            Geometry::Polygon(polygon) => parts.polygons.push(polygon.clone()),
            Geometry::LineString(line) => parts.lines.push(line.clone()),
            Geometry::Point(point) => parts.points.push(*point),
            _ => parts.unsupported += 1,
        }
    }
    parts
}

/// Result of reducing a batch: the combined geometry plus what happened to
/// the inputs that left no trace in it.
#[derive(Debug)]
pub struct Reduction {
    pub geometry: Geometry<f64>,
    /// Categories whose fold cancelled down to the empty set.
    pub cancelled: Vec<GeometryKind>,
    /// Inputs outside the three supported categories.
    pub unsupported: usize,
}

// Folds each category through pairwise symmetric difference and combines
// the per-category results. Fold order is input order; the floating-point
// kernel is not exactly associative, so the order is observable.
pub fn reduce(batch: &[Geometry<f64>]) -> Result<Reduction, ReduceError> {
    if batch.is_empty() {
        return Err(ReduceError::EmptyBatch);
    }

    let parts = partition_geometries(batch);

    let outcomes = [
        (GeometryKind::Polygon, fold_polygons(&parts.polygons)),
        (GeometryKind::Line, fold_lines(&parts.lines)),
        (GeometryKind::Point, fold_points(&parts.points)),
    ];

    let mut folded = Vec::new();
    let mut cancelled = Vec::new();
    for (kind, outcome) in outcomes {
        match outcome {
            Some(geometry) if is_empty(&geometry) => cancelled.push(kind),
            Some(geometry) => folded.push(geometry),
            None => {}
        }
    }

    Ok(Reduction {
        geometry: build_result(folded),
        cancelled,
        unsupported: parts.unsupported,
    })
}

// A singleton folds to itself, untouched. Longer sequences accumulate in
// the category's multi-form.
fn fold_polygons(polygons: &[Polygon<f64>]) -> Option<Geometry<f64>> {
    let (first, rest) = polygons.split_first()?;
    if rest.is_empty() {
        return Some(Geometry::Polygon(first.clone()));
    }
    let mut acc = MultiPolygon::new(vec![first.clone()]);
    for polygon in rest {
        acc = engine::polygons_xor(&acc, &MultiPolygon::new(vec![polygon.clone()]));
    }
    Some(Geometry::MultiPolygon(acc))
}

fn fold_lines(lines: &[LineString<f64>]) -> Option<Geometry<f64>> {
    let (first, rest) = lines.split_first()?;
    if rest.is_empty() {
        return Some(Geometry::LineString(first.clone()));
    }
    let mut acc = MultiLineString::new(vec![first.clone()]);
    for line in rest {
        acc = engine::lines_xor(&acc, &MultiLineString::new(vec![line.clone()]));
    }
    Some(Geometry::MultiLineString(acc))
}

fn fold_points(points: &[Point<f64>]) -> Option<Geometry<f64>> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return Some(Geometry::Point(*first));
    }
    let mut acc = MultiPoint::new(vec![*first]);
    for point in rest {
        acc = engine::points_xor(&acc, &MultiPoint::new(vec![*point]));
    }
    Some(Geometry::MultiPoint(acc))
}

// Only multi-form results can be empty; singletons pass through unchanged.
fn is_empty(geometry: &Geometry<f64>) -> bool {
    match geometry {
        Geometry::MultiPolygon(mp) => mp.0.is_empty(),
        Geometry::MultiLineString(ml) => ml.0.is_empty(),
        Geometry::MultiPoint(mp) => mp.0.is_empty(),
        _ => false,
    }
}

// Mirrors the geometry-factory convention: one result stays unwrapped,
// anything else becomes a collection (possibly empty).
fn build_result(mut folded: Vec<Geometry<f64>>) -> Geometry<f64> {
    match folded.len() {
        1 => folded.remove(0),
        _ => Geometry::GeometryCollection(GeometryCollection::new_from(folded)),
    }
}

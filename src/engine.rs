use geo::{BooleanOps, Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point};

// Pairwise symmetric difference, one function per supported category.
// Inputs and outputs stay in the category's multi-form so the reducer can
// chain calls without re-wrapping.

pub fn polygons_xor(a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    a.xor(b)
}

// Point symmetric difference is plain set difference over coordinates:
// a point survives when exactly one operand contains it. Survivor order is
// left operand first, then right, each in original order.
pub fn points_xor(a: &MultiPoint<f64>, b: &MultiPoint<f64>) -> MultiPoint<f64> {
    let left = dedup_points(a);
    let right = dedup_points(b);

    let mut survivors: Vec<Point<f64>> = left
        .iter()
        .filter(|point| !right.contains(point))
        .copied()
        .collect();
    survivors.extend(right.iter().filter(|point| !left.contains(point)));

    MultiPoint::new(survivors)
}

// Line symmetric difference works at segment granularity: both operands are
// decomposed into canonical segments, segments present in both cancel, and
// the survivors are stitched back into chains.
pub fn lines_xor(a: &MultiLineString<f64>, b: &MultiLineString<f64>) -> MultiLineString<f64> {
    let left = canonical_segments(a);
    let right = canonical_segments(b);

    let mut survivors: Vec<Segment> = left
        .iter()
        .filter(|segment| !right.contains(segment))
        .copied()
        .collect();
    survivors.extend(right.iter().filter(|segment| !left.contains(segment)));

    stitch(survivors)
}

type Segment = (Coord<f64>, Coord<f64>);

fn dedup_points(points: &MultiPoint<f64>) -> Vec<Point<f64>> {
    let mut unique: Vec<Point<f64>> = Vec::new();
    for point in &points.0 {
        if !unique.contains(point) {
            unique.push(*point);
        }
    }
    unique
}

// Endpoints are ordered lexicographically by (x, y) so that direction does
// not matter, and zero-length segments are dropped.
fn canonical_segments(lines: &MultiLineString<f64>) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for line in &lines.0 {
        for pair in line.0.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a == b {
                continue;
            }
            let segment = if (b.x, b.y) < (a.x, a.y) { (b, a) } else { (a, b) };
            if !segments.contains(&segment) {
                segments.push(segment);
            }
        }
    }
    segments
}

// Rebuild polylines by appending each segment to the first chain whose tail
// touches one of its endpoints. Insertion order keeps the result stable.
fn stitch(segments: Vec<Segment>) -> MultiLineString<f64> {
    let mut chains: Vec<Vec<Coord<f64>>> = Vec::new();

    'segments: for (start, end) in segments {
        for chain in chains.iter_mut() {
            let tail = *chain.last().unwrap();
            if tail == start {
                chain.push(end);
                continue 'segments;
            }
            if tail == end {
                chain.push(start);
                continue 'segments;
            }
        }
        chains.push(vec![start, end]);
    }

    MultiLineString::new(chains.into_iter().map(LineString::new).collect())
}

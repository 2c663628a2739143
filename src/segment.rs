use geo::{Coordinate, GeoFloat, Line};

/// Lower bound below which lengths and determinants are treated as
/// zero. Independent of the caller-supplied touch tolerance.
pub(crate) const EPS: f64 = 1e-12;

/// Scalar z-component of the cross product of two 2-d vectors. The x-
/// and y-components are zero.
#[inline]
pub(crate) fn cross<T: GeoFloat>(u: Coordinate<T>, v: Coordinate<T>) -> T {
    u.x * v.y - u.y * v.x
}

/// Dot product of two 2-d vectors.
#[inline]
pub(crate) fn dot<T: GeoFloat>(u: Coordinate<T>, v: Coordinate<T>) -> T {
    u.x * v.x + u.y * v.y
}

#[inline]
pub(crate) fn distance<T: GeoFloat>(p: Coordinate<T>, q: Coordinate<T>) -> T {
    let d = q - p;
    dot(d, d).sqrt()
}

/// A 2-d line segment tagged with an id unique within its collection.
///
/// Degenerate segments (start == end) are allowed and behave as
/// points throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: GeoFloat> {
    line: Line<T>,
    id: usize,
}

impl<T: GeoFloat> Segment<T> {
    pub fn new(start: Coordinate<T>, end: Coordinate<T>, id: usize) -> Self {
        Segment {
            line: Line::new(start, end),
            id,
        }
    }

    pub fn from_line(line: Line<T>, id: usize) -> Self {
        Segment { line, id }
    }

    #[inline]
    pub fn start(&self) -> Coordinate<T> {
        self.line.start
    }

    #[inline]
    pub fn end(&self) -> Coordinate<T> {
        self.line.end
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn line(&self) -> Line<T> {
        self.line
    }

    /// Displacement from start to end.
    #[inline]
    pub(crate) fn delta(&self) -> Coordinate<T> {
        self.line.end - self.line.start
    }

    pub fn length_sq(&self) -> T {
        dot(self.delta(), self.delta())
    }

    pub fn length(&self) -> T {
        self.length_sq().sqrt()
    }

    /// Minimum of the endpoint distances and the perpendicular
    /// distance from `point` to the carrying line.
    ///
    /// A segment shorter than the numerical length floor collapses to
    /// a point and the endpoint distance is returned as is. The
    /// perpendicular foot may fall outside the segment's span; the
    /// endpoint distances always participate in the minimum.
    pub fn distance_to(&self, point: Coordinate<T>) -> T {
        let min_ends = distance(self.line.start, point).min(distance(self.line.end, point));
        let len = self.length();
        if len < T::from(EPS).unwrap() {
            return min_ends;
        }
        let perp = cross(point - self.line.start, self.delta()).abs() / len;
        min_ends.min(perp)
    }
}

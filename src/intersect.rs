use geo::GeoFloat;
use log::trace;

use crate::segment::{cross, Segment, EPS};

/// Result of exactly intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<T: GeoFloat> {
    /// The segments stay farther than the tolerance apart.
    Disjoint,
    /// The segments come within the tolerance of each other without a
    /// strict interior crossing: endpoint-to-endpoint,
    /// endpoint-to-interior and overlapping collinear cases.
    Touch,
    /// The segments cross at a single interior point
    /// `start1 + alpha * (end1 - start1) == start2 + beta * (end2 - start2)`
    /// with both parameters strictly inside `(0, 1)`.
    Transverse { alpha: T, beta: T },
}

impl<T: GeoFloat> SegmentIntersection<T> {
    /// `true` unless the segments are disjoint.
    #[inline]
    pub fn is_intersection(&self) -> bool {
        !matches!(self, SegmentIntersection::Disjoint)
    }
}

/// Exact intersection test of two segments within `tol`.
///
/// Non-parallel pairs are solved via Cramer's rule; a solution with
/// both parameters strictly inside `(0, 1)` is a transverse crossing.
/// Everything else (parallel or degenerate pairs, and solutions on the
/// parameter boundary, which coincide with an endpoint) falls back to
/// the minimum of the four endpoint-to-other-segment distances
/// compared against `tol`.
pub fn segment_intersection<T: GeoFloat>(
    l1: &Segment<T>,
    l2: &Segment<T>,
    tol: T,
) -> SegmentIntersection<T> {
    let d1 = l1.delta();
    let d2 = l2.delta();

    // Scale-normalized parallel / degeneracy gate.
    let det = cross(d1, d2);
    if det.abs() > T::from(EPS).unwrap() * l1.length() * l2.length() {
        let pp = l2.start() - l1.start();
        let alpha = cross(pp, d2) / det;
        let beta = cross(pp, d1) / det;
        trace!("det = {:?}, alpha = {:?}, beta = {:?}", det, alpha, beta);
        if alpha > T::zero() && alpha < T::one() && beta > T::zero() && beta < T::one() {
            return SegmentIntersection::Transverse { alpha, beta };
        }
    }

    let min_dist = l1
        .distance_to(l2.start())
        .min(l1.distance_to(l2.end()))
        .min(l2.distance_to(l1.start()))
        .min(l2.distance_to(l1.end()));
    trace!("min endpoint distance = {:?}", min_dist);
    if min_dist < tol {
        SegmentIntersection::Touch
    } else {
        SegmentIntersection::Disjoint
    }
}

//! Detects every intersecting or overlapping pair in a collection of
//! 2-d line segments.
//!
//! The pipeline has two phases. A broad phase projects each segment
//! onto the x-axis, the y-axis and the two ±45° diagonals as
//! tolerance-expanded intervals, reports candidate pairs by sweeping
//! the sorted x-interval endpoints ([`Sweep`]), and re-checks each
//! candidate along the other three axes; the four projections bound
//! every segment by an octagon, so the broad phase never drops a truly
//! intersecting pair. A narrow phase ([`segment_intersection`])
//! exact-tests each survivor, distinguishing transverse interior
//! crossings from tolerance touches. The combination runs in
//! O(n log(n) + k) for k candidate pairs, in the spirit of the
//! [Bentley-Ottman] family of sweeps, and is typically much faster
//! than exact-testing all pairs; the brute-force path is kept as a
//! correctness oracle.
//!
//! # Usage
//!
//! Construct an [`Intersector`], append [`Segment`]s with ids matching
//! their positions, and query either path.
//!
//! ```rust
//! use seg_crossings::{Intersector, Segment};
//!
//! let mut engine = Intersector::new();
//! engine.add_segment(Segment::new((0., 0.).into(), (2., 2.).into(), 0));
//! engine.add_segment(Segment::new((0., 2.).into(), (2., 0.).into(), 1));
//! engine.add_segment(Segment::new((5., 1.).into(), (6., 1.).into(), 2));
//!
//! let (count, _stats) = engine.count_filtered();
//! assert_eq!(count, 1);
//! assert_eq!(count, engine.count_brute_force());
//! ```
//!
//! [Bentley-Ottman]: //en.wikipedia.org/wiki/Bentley%E2%80%93Ottmann_algorithm
mod events;

mod segment;
pub use segment::Segment;

mod interval;
pub use interval::{Axis, Interval};

mod sweep;
pub use sweep::Sweep;

mod intersect;
pub use intersect::{segment_intersection, SegmentIntersection};

mod intersector;
pub use intersector::{Config, FilterStats, Intersector, DEFAULT_TOLERANCE};

mod error;
pub use error::Error;

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;

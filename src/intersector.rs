use geo::GeoFloat;
use itertools::Itertools;
use log::{log, Level};

use crate::{
    error::Error, intersect::segment_intersection, interval::Axis, segment::Segment, sweep::Sweep,
};

/// Default overlap/touch tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Configuration for an [`Intersector`].
#[derive(Debug, Clone, Copy)]
pub struct Config<T: GeoFloat> {
    /// Overlap/touch threshold. Expands the filter intervals on every
    /// axis and serves as the touch distance of the exact test.
    pub tolerance: T,
    /// Emit the per-stage candidate counts at `info` level instead of
    /// `debug`.
    pub verbose: bool,
}

impl<T: GeoFloat> Default for Config<T> {
    fn default() -> Self {
        Config {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap(),
            verbose: false,
        }
    }
}

/// Candidate-pair counts after each stage of a filtered query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Pairs reported by the x-axis interval sweep.
    pub sweep_pairs: usize,
    /// Pairs that also overlap along the y-axis and both diagonals.
    pub axis_pairs: usize,
}

/// Detects all intersecting or overlapping pairs in a collection of
/// segments.
///
/// The collection is append-only and queries never mutate it; repeated
/// queries against an unmodified engine return identical results.
#[derive(Debug, Clone)]
pub struct Intersector<T: GeoFloat> {
    segments: Vec<Segment<T>>,
    config: Config<T>,
}

impl<T: GeoFloat> Default for Intersector<T> {
    fn default() -> Self {
        Intersector {
            segments: Vec::new(),
            config: Config::default(),
        }
    }
}

impl<T: GeoFloat> Intersector<T> {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: Config<T>) -> Result<Self, Error> {
        check_tolerance(config.tolerance)?;
        Ok(Intersector {
            segments: Vec::new(),
            config,
        })
    }

    /// Append a segment and return the new collection size.
    ///
    /// Id assignment is left to the caller. Filtered queries look
    /// candidate pairs up by id, so every id must equal the segment's
    /// position in the collection; an id outside the collection makes
    /// a filtered query panic.
    pub fn add_segment(&mut self, segment: Segment<T>) -> usize {
        self.segments.push(segment);
        self.segments.len()
    }

    /// The segments added so far.
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Tolerance used by subsequent queries.
    pub fn tolerance(&self) -> T {
        self.config.tolerance
    }

    /// Replace the tolerance used by subsequent queries.
    pub fn set_tolerance(&mut self, tolerance: T) -> Result<(), Error> {
        check_tolerance(tolerance)?;
        self.config.tolerance = tolerance;
        Ok(())
    }

    /// Count intersecting pairs by exact-testing every pair.
    ///
    /// O(n²) in the number of segments; retained as a correctness
    /// oracle for [`count_filtered`](Intersector::count_filtered), not
    /// for production-scale input.
    pub fn count_brute_force(&self) -> usize {
        let tol = self.config.tolerance;
        self.segments
            .iter()
            .tuple_combinations()
            .filter(|(l1, l2)| segment_intersection(l1, l2, tol).is_intersection())
            .count()
    }

    /// Count intersecting pairs through the multi-axis filter.
    ///
    /// Sweeps the tolerance-expanded x-axis projections for candidate
    /// pairs, re-checks each candidate along the y-axis and both
    /// diagonals as it is emitted, and exact-tests only the survivors.
    /// Returns the count together with the candidate-pair counts after
    /// each filter stage.
    pub fn count_filtered(&self) -> (usize, FilterStats) {
        let tol = self.config.tolerance;
        let sweep: Sweep<T> = self
            .segments
            .iter()
            .map(|seg| Axis::X.project(seg, tol))
            .collect();

        let mut stats = FilterStats::default();
        let mut count = 0;
        sweep.run(|id1, id2| {
            stats.sweep_pairs += 1;
            if !self.overlap_along(Axis::Y, id1, id2)
                || !self.overlap_along(Axis::DiagPos, id1, id2)
                || !self.overlap_along(Axis::DiagNeg, id1, id2)
            {
                return;
            }
            stats.axis_pairs += 1;
            if segment_intersection(&self.segments[id1], &self.segments[id2], tol)
                .is_intersection()
            {
                count += 1;
            }
        });

        let level = if self.config.verbose {
            Level::Info
        } else {
            Level::Debug
        };
        log!(
            level,
            "{} segments: {} sweep candidates, {} after axis checks, {} intersections",
            self.segments.len(),
            stats.sweep_pairs,
            stats.axis_pairs,
            count
        );
        (count, stats)
    }

    /// Closed-interval overlap check of a candidate pair along one
    /// axis.
    fn overlap_along(&self, axis: Axis, id1: usize, id2: usize) -> bool {
        let tol = self.config.tolerance;
        axis.project(&self.segments[id1], tol)
            .overlaps(&axis.project(&self.segments[id2], tol))
    }
}

fn check_tolerance<T: GeoFloat>(tolerance: T) -> Result<(), Error> {
    if tolerance.is_finite() && tolerance >= T::zero() {
        Ok(())
    } else {
        Err(Error::InvalidTolerance)
    }
}

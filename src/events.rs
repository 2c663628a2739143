use std::cmp::Ordering;

use geo::GeoFloat;

/// An interval-endpoint event for the 1-d sweep.
#[derive(Debug, Clone)]
pub(crate) struct Event<T: GeoFloat> {
    pub(crate) coord: T,
    pub(crate) ty: EventType,
    pub(crate) interval_key: usize,
}

/// Equality check for usage in ordered collections. Note that it
/// ignores interval_key.
impl<T: GeoFloat> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord && self.ty == other.ty
    }
}

/// Assert total equality
impl<T: GeoFloat> Eq for Event<T> {}

/// Ordering for use with a max-heap (`BinaryHeap`). Note that it
/// ignores the interval_key. This suffices for heap usage, where
/// repeated items are allowed.
impl<T: GeoFloat> PartialOrd for Event<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(
            self.coord
                .partial_cmp(&other.coord)?
                .then_with(|| self.ty.cmp(&other.ty))
                .reverse(),
        )
    }
}

/// Derive `Ord` from `PartialOrd` and expect to not fail. Intervals
/// assert finite bounds on construction, so coordinates always compare.
impl<T: GeoFloat> Ord for Event<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}

/// Event type to associate with event.
///
/// The ordering of the variants is important for the algorithm. We
/// require a closing endpoint to be ordered before any opening
/// endpoint at the same coordinate, so the active set sheds an
/// interval before a touching one opens. Intervals that exactly touch
/// are therefore never reported as overlapping by the sweep.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone)]
pub(crate) enum EventType {
    Close,
    Open,
}

use std::{
    collections::{BTreeSet, BinaryHeap},
    iter::FromIterator,
};

use geo::GeoFloat;
use log::trace;
use slab::Slab;

use crate::{
    events::{Event, EventType},
    interval::Interval,
};

/// Sweep over sorted interval endpoints, reporting all pairs of owner
/// ids whose intervals overlap.
///
/// Two endpoint events are queued per interval and processed in
/// ascending coordinate order, closing endpoints first at equal
/// coordinates. The sweep maintains the set of currently open
/// intervals; a pair is emitted exactly once, when the later-starting
/// interval opens while the earlier one is still open. Runs in
/// O(n log(n) + k) time for n intervals and k emitted pairs.
///
/// The close-before-open tie-break means intervals that exactly touch
/// are not reported. Callers that need touching intervals reported
/// must expand them beforehand.
pub struct Sweep<T: GeoFloat> {
    intervals: Slab<Interval<T>>,
    events: BinaryHeap<Event<T>>,
    open: BTreeSet<usize>,
}

impl<T: GeoFloat> FromIterator<Interval<T>> for Sweep<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let size = {
            let (min_size, max_size) = iter.size_hint();
            max_size.unwrap_or(min_size)
        };

        let mut sweep = Sweep {
            intervals: Slab::with_capacity(size),
            events: BinaryHeap::with_capacity(2 * size),
            open: Default::default(),
        };
        for interval in iter {
            sweep.add_interval(interval);
        }

        sweep
    }
}

impl<T: GeoFloat> Sweep<T> {
    /// Store an interval in the arena and queue its endpoint events.
    fn add_interval(&mut self, interval: Interval<T>) -> usize {
        let key = self.intervals.insert(interval);
        self.events.push(Event {
            coord: interval.lo(),
            ty: EventType::Open,
            interval_key: key,
        });
        self.events.push(Event {
            coord: interval.hi(),
            ty: EventType::Close,
            interval_key: key,
        });
        key
    }

    /// Run the sweep to completion, passing each overlapping pair of
    /// owner ids to `pair_cb`. The first argument is the id of the
    /// interval that was already open.
    pub fn run<F: FnMut(usize, usize)>(mut self, mut pair_cb: F) {
        while let Some(event) = self.events.pop() {
            self.handle_event(event, &mut pair_cb);
        }
    }

    fn handle_event<F: FnMut(usize, usize)>(&mut self, event: Event<T>, pair_cb: &mut F) {
        trace!("handling event: {:?}", event);
        match event.ty {
            EventType::Open => {
                let id = self.intervals[event.interval_key].id();
                for &open_key in self.open.iter() {
                    pair_cb(self.intervals[open_key].id(), id);
                }
                self.open.insert(event.interval_key);
            }
            EventType::Close => {
                // A zero-width interval pops its close before its own
                // open; the removal is a no-op then and the interval
                // stays open for the rest of the sweep.
                self.open.remove(&event.interval_key);
            }
        }
    }
}

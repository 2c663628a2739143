use geo::{Coordinate, Line};

use rand::Rng;
use rand_distr::Standard;

/// Uniform coordinate in the square `[0, scale] x [0, scale]`.
#[inline]
pub fn uniform_coord<R: Rng>(rng: &mut R, scale: f64) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    Coordinate {
        x: coords[0] * scale,
        y: coords[1] * scale,
    }
}

/// Random segment with its start in the unit square and a length
/// between `max_len / 2` and `max_len`. The lower bound avoids
/// generating many very short segments.
pub fn uniform_segment<R: Rng>(rng: &mut R, max_len: f64) -> Line<f64> {
    let start = uniform_coord(rng, 1.);
    loop {
        let delta: [f64; 2] = rng.sample(Standard);
        let end = Coordinate {
            x: start.x + delta[0] * max_len,
            y: start.y + delta[1] * max_len,
        };
        let len = (end.x - start.x).hypot(end.y - start.y);
        if len >= 0.5 * max_len && len <= max_len {
            return Line::new(start, end);
        }
    }
}

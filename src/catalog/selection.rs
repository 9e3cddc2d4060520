//! Nearest regional map selection

use crate::models::{GeoCoordinate, MapDefinition};
use tracing::debug;

/// Index of the map closest to `here` by squared coordinate difference.
///
/// Candidates are scanned in order and only a strictly smaller distance
/// replaces the current best, so ties go to the lowest index. A NaN
/// distance never wins against a finite one.
pub fn select_nearest(maps: &[MapDefinition], here: &GeoCoordinate) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, map) in maps.iter().enumerate() {
        let distance = map.position.squared_distance(here);
        debug!(
            "Map candidate {} '{}': squared distance {}",
            index, map.filename, distance
        );

        let closer = match best {
            None => !distance.is_nan(),
            Some((_, best_distance)) => distance < best_distance,
        };
        if closer {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

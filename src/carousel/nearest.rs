use std::f32::consts::TAU;

/// Map an unbounded angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Index of the slot nearest the front of the ring for a carousel rotated by
/// `rotation`, or `None` for an empty ring.
///
/// Informational only (captions, progress); input never resolves through it.
#[must_use]
pub fn nearest_index(rotation: f32, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let step = TAU / count as f32;
    let steps = (normalize_angle(rotation) / step).round() as usize;
    Some(steps % count)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((normalize_angle(-0.5) - (TAU - 0.5)).abs() < 1e-5);
        assert_eq!(normalize_angle(0.0), 0.0);
        let tiny = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn nearest_rounds_to_closest_slot() {
        assert_eq!(nearest_index(0.0, 4), Some(0));
        assert_eq!(nearest_index(PI / 2.0 + 0.1, 4), Some(1));
        assert_eq!(nearest_index(PI / 2.0 - 0.1, 4), Some(1));
        assert_eq!(nearest_index(PI / 4.0 - 0.01, 4), Some(0));
    }

    #[test]
    fn nearest_wraps_past_last_slot() {
        // Just below a full turn rounds up to slot n, which wraps to 0.
        assert_eq!(nearest_index(TAU - 0.05, 4), Some(0));
        assert_eq!(nearest_index(-PI / 2.0, 4), Some(3));
        assert_eq!(nearest_index(5.0 * TAU + PI, 2), Some(1));
    }

    #[test]
    fn empty_ring_has_no_nearest() {
        assert_eq!(nearest_index(1.0, 0), None);
    }
}

//! Cross-camera matching by frame-number alignment.
//!
//! An image of an earlier camera (in sorted camera-id order) is paired with
//! every image of a later camera whose frame number lies in
//! `[frame, frame + window_size]`. With loop closure, frame differences that
//! fall outside the window are re-tested after wrapping by a camera's image
//! count, so frames near the end of a cyclic capture align with frames near
//! its start.
//!
//! The wrap period is the image *count* of a camera, not the span of its frame
//! numbers. This only matches a true wrap when frame numbers are dense and
//! start near zero; output compatibility depends on keeping it that way.

use crate::grouping::{CameraGroup, Frame};
use crate::window::WindowConfig;

/// Frame difference after wrapping by `period`, if the wrap test passes.
///
/// When `current > other` the other frame is moved one period forward and the
/// test is `current - (other + period) <= window_size`; the result is
/// `(other + period) - current`. When `current < other` the current frame is
/// moved forward instead: the test is `other - (current + period) <=
/// window_size` and the result is `other - (current + period)`. Equal frames
/// need no correction and yield `None`.
pub fn circular_frame_diff(current: i64, other: i64, period: i64, window_size: i64) -> Option<i64> {
    use std::cmp::Ordering;

    match current.cmp(&other) {
        Ordering::Greater => {
            let wrapped = other.saturating_add(period);
            (current - wrapped <= window_size).then(|| wrapped - current)
        }
        Ordering::Less => {
            let wrapped = current.saturating_add(period);
            (other - wrapped <= window_size).then(|| other - wrapped)
        }
        Ordering::Equal => None,
    }
}

/// Signed frame difference `other - current`, corrected for wraparound when
/// loop closure is on.
///
/// The correction is only attempted when the raw difference is outside the
/// window. The current camera's image count is tried first, then the other
/// camera's; the first passing test wins.
pub fn frame_diff(
    current: i64,
    other: i64,
    current_count: usize,
    other_count: usize,
    config: &WindowConfig,
) -> i64 {
    let raw = other - current;
    if !config.loop_closure {
        return raw;
    }

    let window = config.window_i64();
    if raw.abs() <= window {
        return raw;
    }

    let period = |count: usize| i64::try_from(count).unwrap_or(i64::MAX);
    circular_frame_diff(current, other, period(current_count), window)
        .or_else(|| circular_frame_diff(current, other, period(other_count), window))
        .unwrap_or(raw)
}

/// Whether frame `current` pairs with frame `other`, given the image counts of
/// their cameras.
pub fn frames_match(
    current: i64,
    other: i64,
    current_count: usize,
    other_count: usize,
    config: &WindowConfig,
) -> bool {
    let diff = frame_diff(current, other, current_count, other_count, config);
    (0..=config.window_i64()).contains(&diff)
}

/// Images of `other` that pair with `current`, in `other`'s sorted order.
pub fn cross_partners<'c, 'a>(
    current: &'c Frame<'a>,
    current_count: usize,
    other: &'c CameraGroup<'a>,
    config: &'c WindowConfig,
) -> impl Iterator<Item = &'c Frame<'a>> + 'c {
    let other_count = other.len();
    other.frames.iter().filter(move |candidate| {
        frames_match(
            current.frame_number,
            candidate.frame_number,
            current_count,
            other_count,
            config,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group<'a>(camera_id: &'a str, frames: &[(&'a str, i64)]) -> CameraGroup<'a> {
        CameraGroup {
            camera_id,
            frames: frames
                .iter()
                .map(|&(name, frame_number)| Frame { name, frame_number })
                .collect(),
        }
    }

    #[test]
    fn forward_window_only_accepts_non_negative_diffs() {
        let cfg = WindowConfig::new(2, false);
        assert!(frames_match(5, 5, 1, 4, &cfg));
        assert!(frames_match(5, 7, 1, 4, &cfg));
        assert!(!frames_match(5, 8, 1, 4, &cfg));
        assert!(!frames_match(5, 4, 1, 4, &cfg));
    }

    #[test]
    fn partners_keep_other_camera_order() {
        let cfg = WindowConfig::new(2, false);
        let a = Frame {
            name: "A/5.jpg",
            frame_number: 5,
        };
        let b = group(
            "B",
            &[("B/5.jpg", 5), ("B/6.jpg", 6), ("B/7.jpg", 7), ("B/8.jpg", 8)],
        );
        let names: Vec<&str> = cross_partners(&a, 1, &b, &cfg).map(|f| f.name).collect();
        assert_eq!(names, vec!["B/5.jpg", "B/6.jpg", "B/7.jpg"]);
    }

    #[test]
    fn circular_diff_wraps_other_forward() {
        // Frame 9 of a 10-image camera is one step before frame 0.
        assert_eq!(circular_frame_diff(9, 0, 10, 2), Some(1));
    }

    #[test]
    fn circular_diff_wraps_current_forward() {
        // Frame 0 against frame 9: the wrapped difference is negative.
        assert_eq!(circular_frame_diff(0, 9, 10, 2), Some(-1));
    }

    #[test]
    fn circular_diff_with_zero_period() {
        assert_eq!(circular_frame_diff(10, 3, 0, 2), None);
        assert_eq!(circular_frame_diff(3, 10, 0, 2), None);
        assert_eq!(circular_frame_diff(4, 3, 0, 2), Some(-1));
    }

    #[test]
    fn circular_diff_with_period_equal_to_window() {
        assert_eq!(circular_frame_diff(4, 0, 2, 2), Some(-2));
        assert_eq!(circular_frame_diff(5, 0, 2, 2), None);
    }

    #[test]
    fn circular_diff_test_is_one_sided() {
        // A large period passes the test but leaves the difference outside
        // the window.
        assert_eq!(circular_frame_diff(9, 0, 20, 2), Some(11));
    }

    #[test]
    fn circular_diff_of_equal_frames_is_none() {
        assert_eq!(circular_frame_diff(3, 3, 10, 2), None);
    }

    #[test]
    fn loop_mode_keeps_in_window_negative_raw_diff() {
        let cfg = WindowConfig::new(2, true);
        assert_eq!(frame_diff(5, 4, 10, 10, &cfg), -1);
        assert!(!frames_match(5, 4, 10, 10, &cfg));
    }

    #[test]
    fn loop_mode_pairs_tail_with_head() {
        let cfg = WindowConfig::new(2, true);
        assert_eq!(frame_diff(9, 0, 10, 10, &cfg), 1);
        assert!(frames_match(9, 0, 10, 10, &cfg));
        assert!(frames_match(8, 0, 10, 10, &cfg));
        assert!(!frames_match(7, 0, 10, 10, &cfg));
        // The reverse direction wraps to a negative difference.
        assert!(!frames_match(0, 9, 10, 10, &cfg));
    }

    #[test]
    fn loop_mode_wraps_current_forward_into_window() {
        let cfg = WindowConfig::new(2, true);
        // 5 - (0 + 4) = 1 passes the test and lands inside the window.
        assert_eq!(frame_diff(0, 5, 4, 4, &cfg), 1);
        assert!(frames_match(0, 5, 4, 4, &cfg));
        assert!(!frames_match(0, 5, 4, 4, &WindowConfig::new(2, false)));
    }

    #[test]
    fn loop_mode_first_passing_period_wins() {
        let cfg = WindowConfig::new(2, true);
        // Current camera count 20 passes the test (9 - 20 <= 2) and gives 11,
        // so the other camera's count of 10 (which would give 1) is not tried.
        assert_eq!(frame_diff(9, 0, 20, 10, &cfg), 11);
        assert!(!frames_match(9, 0, 20, 10, &cfg));
        // Current count 5 fails (9 - 5 > 2), other count 10 passes.
        assert_eq!(frame_diff(9, 0, 5, 10, &cfg), 1);
        assert!(frames_match(9, 0, 5, 10, &cfg));
    }

    #[test]
    fn loop_mode_leaves_raw_diff_when_no_wrap_applies() {
        let cfg = WindowConfig::new(1, true);
        assert_eq!(frame_diff(50, 10, 3, 3, &cfg), -40);
    }

    #[test]
    fn loop_off_ignores_counts() {
        let cfg = WindowConfig::new(2, false);
        assert_eq!(frame_diff(9, 0, 10, 10, &cfg), -9);
        assert!(!frames_match(9, 0, 10, 10, &cfg));
    }
}

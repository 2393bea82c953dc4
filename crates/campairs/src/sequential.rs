//! Intra-camera sliding-window matching.

use crate::window::WindowConfig;

/// Partner indices of image `j` in a camera with `n` images, in ascending
/// offset order.
///
/// Offsets run over `1..=window_size`. Without loop closure only genuine
/// forward neighbors (`j + o < n`) are produced, so the range stops at the
/// last image. With loop closure the index wraps modulo `n`, so tail frames
/// pair with head frames and offsets that are multiples of `n` land on `j`
/// itself. A camera with a single image has no partners.
pub fn window_partners(j: usize, n: usize, config: &WindowConfig) -> impl Iterator<Item = usize> {
    let last_offset = if n <= 1 {
        0
    } else if config.loop_closure {
        config.window_size
    } else {
        config.window_size.min(n.saturating_sub(j + 1))
    };
    (1..=last_offset).map(move |o| (j + o % n) % n)
}

/// All intra-camera index pairs for a camera with `n` images, in emission order.
pub fn sequential_index_pairs(n: usize, config: &WindowConfig) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|j| window_partners(j, n, config).map(move |k| (j, k)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_window_never_wraps() {
        let cfg = WindowConfig::new(2, false);
        assert_eq!(
            sequential_index_pairs(4, &cfg),
            vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn circular_window_pairs_tail_with_head() {
        let cfg = WindowConfig::new(1, true);
        assert_eq!(sequential_index_pairs(3, &cfg), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn circular_window_larger_than_sequence_repeats_collisions() {
        // n = 3, offsets 1..=4: offset 3 lands back on j, offset 4 repeats
        // offset 1.
        let cfg = WindowConfig::new(4, true);
        let partners: Vec<usize> = window_partners(0, 3, &cfg).collect();
        assert_eq!(partners, vec![1, 2, 0, 1]);
    }

    #[test]
    fn circular_window_over_two_images_keeps_same_index_pairs() {
        let cfg = WindowConfig::new(2, true);
        assert_eq!(
            sequential_index_pairs(2, &cfg),
            vec![(0, 1), (0, 0), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn forward_window_stops_at_last_image() {
        let cfg = WindowConfig::new(usize::MAX, false);
        assert_eq!(window_partners(0, 3, &cfg).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(window_partners(2, 3, &cfg).count(), 0);
        assert_eq!(sequential_index_pairs(3, &cfg), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn huge_circular_window_wraps_without_overflow() {
        let cfg = WindowConfig::new(usize::MAX, true);
        let partners: Vec<usize> = window_partners(2, 3, &cfg).take(4).collect();
        assert_eq!(partners, vec![0, 1, 2, 0]);
        assert_eq!(window_partners(0, 1, &cfg).count(), 0);
    }

    #[test]
    fn single_image_never_pairs_with_itself() {
        assert!(sequential_index_pairs(1, &WindowConfig::new(3, true)).is_empty());
        assert!(sequential_index_pairs(1, &WindowConfig::new(3, false)).is_empty());
    }

    #[test]
    fn zero_window_emits_nothing() {
        assert!(sequential_index_pairs(5, &WindowConfig::new(0, true)).is_empty());
    }

    #[test]
    fn empty_camera_emits_nothing() {
        assert!(window_partners(0, 0, &WindowConfig::new(2, true))
            .next()
            .is_none());
    }
}

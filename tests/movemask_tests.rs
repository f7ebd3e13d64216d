// Tests for the move-mask helpers in `colscan::movemask`.
// Every input is an all-ones/all-zeros-per-lane register, built from the
// expected bitmask, so extraction must give the bitmask back.
use colscan::movemask::*;

fn lanes_from_mask<T: Copy, const N: usize>(mask: u16, on: T, off: T) -> [T; N] {
    std::array::from_fn(|i| if mask >> i & 1 == 1 { on } else { off })
}

#[cfg(test)]
mod integer_lane_tests {
    use super::*;

    // ==============================
    // 16-bit lanes: exhaustive
    // ==============================

    #[test]
    fn test_epi16_exhaustive() {
        for mask in 0..=0xFFu16 {
            let lanes: [i16; 8] = lanes_from_mask(mask, -1, 0);
            assert_eq!(movemask_epi16(words(lanes)), mask, "mask {mask:#010b}");
        }
    }

    // ==============================
    // 8-bit lanes: sampled
    // ==============================

    #[test]
    fn test_epi8_sampled() {
        let mut samples: Vec<u16> = (0..20_000).map(|_| rand::random::<u16>()).collect();
        samples.extend([0x0000, 0xFFFF, 0x00FF, 0xFF00, 0x8001, 0x5555, 0xAAAA]);
        for mask in samples {
            let lanes: [i8; 16] = lanes_from_mask(mask, -1, 0);
            assert_eq!(movemask_epi8(words(lanes)), mask, "mask {mask:#018b}");
        }
    }

    #[test]
    fn test_epi8_single_lanes() {
        for lane in 0..16 {
            let lanes: [u8; 16] = lanes_from_mask(1 << lane, 0xFF, 0x00);
            assert_eq!(movemask_epi8(words(lanes)), 1 << lane);
        }
    }

    // ==============================
    // 32/64-bit lanes: exhaustive
    // ==============================

    #[test]
    fn test_epi32_exhaustive() {
        for mask in 0..16u16 {
            let lanes: [u32; 4] = lanes_from_mask(mask, u32::MAX, 0);
            assert_eq!(movemask_epi32(words(lanes)), mask);
        }
    }

    #[test]
    fn test_epi64_exhaustive() {
        for mask in 0..4u16 {
            let lanes: [i64; 2] = lanes_from_mask(mask, -1, 0);
            assert_eq!(movemask_epi64(words(lanes)), mask);
        }
    }
}

#[cfg(test)]
mod float_lane_tests {
    use super::*;

    #[test]
    fn test_ps_exhaustive() {
        for mask in 0..16u16 {
            let lanes: [u32; 4] = lanes_from_mask(mask, u32::MAX, 0);
            assert_eq!(movemask_ps(words(lanes)), mask);
        }
    }

    #[test]
    fn test_pd_exhaustive() {
        for mask in 0..4u16 {
            let lanes: [u64; 2] = lanes_from_mask(mask, u64::MAX, 0);
            assert_eq!(movemask_pd(words(lanes)), mask);
        }
    }

    #[test]
    fn test_ps_matches_epi32() {
        // The two 32-bit extractors must agree on every canonical input.
        for mask in 0..16u16 {
            let lanes: [i32; 4] = lanes_from_mask(mask, -1, 0);
            assert_eq!(movemask_ps(words(lanes)), movemask_epi32(words(lanes)));
        }
    }

    #[test]
    fn test_ps_reads_sign_bit_of_negative_floats() {
        let lanes = [-1.0f32, 2.0, -0.0, 3.5];
        assert_eq!(movemask_ps(words(lanes)), 0b0101);
    }
}

// Tests for the predicated processors in `colscan::scalable`.
// Lane counts are taken from `step_length()`; the emulated vector length is
// per thread, so each test installs the widths it needs.
use colscan::scalable::*;
use colscan::sentinel::*;
use colscan::types::Lane;
use colscan::vector_length::VectorLength;

fn all_lengths() -> impl Iterator<Item = VectorLength> {
    (1..=16).filter_map(|k| VectorLength::from_bits(k * 128).ok())
}

fn check_single_predication<P: ScalableFilter>(p: P) {
    let step = p.step_length();
    for i in 0..step {
        let pg = p.get_single_predication(i);
        assert_eq!(pg.iter_active().collect::<Vec<_>>(), vec![i], "lane {i} of {step}");
        assert_eq!(p.count_elements(&pg), 1);
    }
}

#[cfg(test)]
mod predication_tests {
    use super::*;

    #[test]
    fn test_single_predication_every_lane() {
        for vl in all_lengths() {
            vl.install();
            check_single_predication(ScalableFilterProcessor::<u8>::default());
            check_single_predication(ScalableFilterProcessor::<i16>::default());
            check_single_predication(ScalableFilterProcessor::<f32>::default());
            check_single_predication(ScalableFilterProcessor::<u64>::default());
            check_single_predication(Int128ScalableProcessor);
        }
    }

    #[test]
    fn test_range_predication() {
        VectorLength::from_bits(512).unwrap().install();
        let p = ScalableFilterProcessor::<i32>::default();
        let step = p.step_length();

        assert_eq!(p.count_elements(&p.get_range_predication(10, 13)), 3);
        assert_eq!(p.count_elements(&p.get_range_predication(0, 1000)), step);
        assert_eq!(p.count_elements(&p.get_range_predication(13, 10)), 0);
        assert_eq!(p.get_range_predication(0, 0), ActiveLanes::all_false());
        assert_eq!(p.get_range_predication(40, 10_000), ActiveLanes::all_true());

        let tail = p.get_range_predication(7, 9);
        assert_eq!(tail.iter_active().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_single_predication_past_last_lane() {
        VectorLength::from_bits(256).unwrap().install();
        let p = ScalableFilterProcessor::<u8>::default();
        let step = p.step_length();
        assert_eq!(p.get_single_predication(step).count(), 0);
        assert_eq!(p.get_single_predication(usize::MAX).count(), 0);
        assert_eq!(Int128ScalableProcessor.get_single_predication(usize::MAX), ActiveLanes::none());
    }

    // Hardware vector length ignores the emulated setting.
    #[cfg(not(all(target_arch = "aarch64", target_feature = "sve")))]
    #[test]
    fn test_step_length_follows_vector_length() {
        for vl in all_lengths() {
            vl.install();
            assert_eq!(ScalableFilterProcessor::<u8>::default().step_length(), vl.bytes());
            assert_eq!(ScalableFilterProcessor::<f64>::default().step_length(), vl.bytes() / 8);
            assert_eq!(Int128ScalableProcessor.step_length(), vl.bytes() / 8);
        }
    }
}

#[cfg(test)]
mod load_store_tests {
    use super::*;

    #[test]
    fn test_load_from_partial() {
        VectorLength::from_bits(256).unwrap().install();
        let p = ScalableFilterProcessor::<i64>::default();
        // Only three values exist; the predicate keeps the load in bounds.
        let src = [11i64, 22, 33];
        let pg = p.get_range_predication(0, src.len());
        let v = p.load_from(&pg, &src);
        assert_eq!(&v.lanes()[..4], &[11, 22, 33, 0]);
    }

    #[test]
    fn test_load_value_inactive_zero() {
        let p = ScalableFilterProcessor::<u16>::default();
        let pg = p.get_range_predication(0, 2);
        let v = p.load_value(&pg, 9);
        assert_eq!(v.lane(0), 9);
        assert_eq!(v.lane(1), 9);
        assert!(v.lanes()[2..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_load_from_index() {
        VectorLength::from_bits(128).unwrap().install();
        let p = ScalableFilterProcessor::<i32>::default();
        let base = [100, 101, 102, 103, 104, 105, 106, 107];
        let indices = [7u16, 0, 3];
        let pg = p.get_range_predication(0, indices.len());
        let v = p.load_from_index(&pg, &base, &indices);
        assert_eq!(&v.lanes()[..4], &[107, 100, 103, 0]);
    }

    #[test]
    fn test_store_only_active() {
        VectorLength::from_bits(256).unwrap().install();
        let p = ScalableFilterProcessor::<u32>::default();
        let step = p.step_length();
        let src: Vec<u32> = (1..=step as u32).collect();
        let all = p.get_range_predication(0, step);
        let v = p.load_from(&all, &src);

        let mut dst = vec![UINT_NULL; step];
        let pg = p.get_single_predication(2).or(&p.get_single_predication(5), &all);
        p.store(&pg, &mut dst, &v);
        for (i, d) in dst.iter().enumerate() {
            let expected = if i == 2 || i == 5 { src[i] } else { UINT_NULL };
            assert_eq!(*d, expected, "lane {i}");
        }
    }
}

#[cfg(test)]
mod compare_tests {
    use super::*;

    #[test]
    fn test_inactive_lanes_never_satisfy() {
        VectorLength::from_bits(256).unwrap().install();
        let p = ScalableFilterProcessor::<i32>::default();
        let src = [0i32; 8];
        let all = p.get_range_predication(0, 8);
        let x = p.load_from(&all, &src);
        let pg = p.get_range_predication(0, 3);

        // Every lane holds 0, so every comparison below is true where active.
        assert_eq!(p.cmp_eq(&pg, &x, 0), pg);
        assert_eq!(p.cmp_le(&pg, &x, 0), pg);
        assert_eq!(p.cmp_ge(&pg, &x, 0), pg);
        assert_eq!(p.cmp_lt(&pg, &x, 1), pg);
        assert_eq!(p.cmp_gt(&pg, &x, -1), pg);
        assert_eq!(p.cmp_ne(&pg, &x, 5), pg);
    }

    #[test]
    fn test_trichotomy_with_tail() {
        VectorLength::from_bits(384).unwrap().install();
        let p = ScalableFilterProcessor::<i16>::default();
        let step = p.step_length();
        for _ in 0..500 {
            let live = rand::random_range(0..=step);
            let src: Vec<i16> = (0..live).map(|_| rand::random_range(-4..4)).collect();
            let threshold = rand::random_range(-4..4);
            let pg = p.get_range_predication(0, live);
            let x = p.load_from(&pg, &src);

            let lt = p.cmp_lt(&pg, &x, threshold);
            let eq = p.cmp_eq(&pg, &x, threshold);
            let gt = p.cmp_gt(&pg, &x, threshold);
            assert_eq!(lt.or(&eq, &pg).or(&gt, &pg), pg);
            assert!(!p.test_any(&pg, &lt.and(&eq, &pg)));
            assert!(!p.test_any(&pg, &gt.and(&eq, &pg)));
            assert_eq!(p.cmp_ne(&pg, &x, threshold), eq.eor(&pg, &pg));

            for (i, v) in src.iter().enumerate() {
                assert_eq!(gt.is_active(i), *v > threshold);
            }
        }
    }

    #[test]
    fn test_float_compares() {
        let p = ScalableFilterProcessor::<f64>::default();
        let src = [1.5, -2.0, f64::NAN];
        let pg = p.get_range_predication(0, src.len());
        let x = p.load_from(&pg, &src);
        assert_eq!(p.cmp_gt(&pg, &x, 0.0).iter_active().collect::<Vec<_>>(), vec![0]);
        // NaN is unordered: not equal, neither smaller nor larger.
        assert_eq!(p.cmp_ne(&pg, &x, 1.5).iter_active().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(p.cmp_le(&pg, &x, 100.0).count(), 2);
    }

    #[test]
    fn test_always() {
        let p = ScalableFilterProcessor::<u8>::default();
        let pg = p.get_range_predication(0, 5);
        let x = p.load_value(&pg, 1);
        assert_eq!(p.cmp_always_true(&pg, &x, 0), pg);
        assert_eq!(p.cmp_always_false(&pg, &x, 0), ActiveLanes::none());
        assert!(!p.test_any(&pg, &p.cmp_always_false(&pg, &x, 0)));
        assert!(p.test_any(&pg, &p.cmp_always_true(&pg, &x, 0)));
    }

    #[test]
    fn test_test_any_ignores_inactive() {
        let p = ScalableFilterProcessor::<i8>::default();
        let pg = p.get_range_predication(0, 2);
        let outside = p.get_single_predication(3);
        assert!(!p.test_any(&pg, &outside));
        assert!(p.test_any(&pg, &p.get_single_predication(1)));
    }
}

#[cfg(test)]
mod sentinel_tests {
    use super::*;

    #[test]
    fn test_float_nan_sentinels() {
        let p = ScalableFilterProcessor::<f32>::default();
        let src = [f32::null(), 2.0, f32::empty(), f32::null()];
        let pg = p.get_range_predication(0, src.len());
        let x = p.load_from(&pg, &src);

        let not_null = p.null_empty_cmp_ne(&pg, &x, f32::null());
        assert_eq!(not_null.iter_active().collect::<Vec<_>>(), vec![1, 2]);
        // Value comparison would let every NaN through.
        assert_eq!(p.cmp_ne(&pg, &x, f32::null()).count(), 4);
    }

    #[test]
    fn test_integer_sentinel_matches_cmp_ne() {
        let p = ScalableFilterProcessor::<u64>::default();
        let src = [UBIGINT_NULL, 3, UBIGINT_EMPTY];
        let pg = p.get_range_predication(0, src.len());
        let x = p.load_from(&pg, &src);
        assert_eq!(
            p.null_empty_cmp_ne(&pg, &x, UBIGINT_EMPTY),
            p.cmp_ne(&pg, &x, UBIGINT_EMPTY)
        );
        assert_eq!(UBIGINT_EMPTY.bit_pattern(), u64::MAX);
    }
}

#[cfg(test)]
mod int128_tests {
    use super::*;

    #[test]
    fn test_relational_returns_predicate() {
        let p = Int128ScalableProcessor;
        let src = [1i64, 2, 3];
        let pg = p.get_range_predication(0, src.len());
        let x = p.load_from(&pg, &src);
        assert_eq!(p.cmp_eq(&pg, &x, 99), pg);
        assert_eq!(p.cmp_ne(&pg, &x, 1), pg);
        assert_eq!(p.cmp_gt(&pg, &x, 99), pg);
        assert_eq!(p.cmp_ge(&pg, &x, 99), pg);
        assert_eq!(p.cmp_lt(&pg, &x, -99), pg);
        assert_eq!(p.cmp_le(&pg, &x, -99), pg);
        assert_eq!(p.cmp_always_false(&pg, &x, 0), ActiveLanes::none());
    }

    #[test]
    fn test_proxy_sentinel_check() {
        let p = Int128ScalableProcessor;
        let src = [BIGINT_NULL, 5];
        let pg = p.get_range_predication(0, src.len());
        let x = p.load_from(&pg, &src);
        let valid = p.null_empty_cmp_ne(&pg, &x, BIGINT_NULL);
        assert_eq!(valid.iter_active().collect::<Vec<_>>(), vec![1]);
    }
}

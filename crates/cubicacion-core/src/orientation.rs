use crate::types::Dims;

/// Returns the six axis-aligned permutations of `dims`.
///
/// Equal axes are not collapsed, so callers always see six candidates in the
/// order (L,W,H) (L,H,W) (W,L,H) (W,H,L) (H,L,W) (H,W,L).
pub fn orientations(dims: &Dims) -> [Dims; 6] {
    let Dims {
        length: l,
        width: w,
        height: h,
    } = *dims;

    [
        Dims::new(l, w, h),
        Dims::new(l, h, w),
        Dims::new(w, l, h),
        Dims::new(w, h, l),
        Dims::new(h, l, w),
        Dims::new(h, w, l),
    ]
}

/// True if at least one orientation of `item` fits inside `cavity`.
pub fn fits_any_orientation(item: &Dims, cavity: &Dims) -> bool {
    orientations(item).iter().any(|o| o.fits_within(cavity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(d: &Dims) -> [f64; 3] {
        let mut axes = [d.length, d.width, d.height];
        axes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        axes
    }

    #[test]
    fn test_six_permutations_of_same_axes() {
        let dims = Dims::new(200.0, 150.0, 250.0);
        let all = orientations(&dims);

        assert_eq!(all.len(), 6);
        for o in &all {
            assert_eq!(sorted(o), sorted(&dims));
        }
        assert_eq!(all[0], dims);
        assert_eq!(all[5], Dims::new(250.0, 150.0, 200.0));
    }

    #[test]
    fn test_duplicates_are_kept_for_cubes() {
        let cube = Dims::new(10.0, 10.0, 10.0);
        let all = orientations(&cube);

        assert!(all.iter().all(|o| *o == cube));
    }

    #[test]
    fn test_fits_only_when_rotated() {
        let item = Dims::new(500.0, 100.0, 100.0);
        let cavity = Dims::new(200.0, 200.0, 600.0);

        assert!(!item.fits_within(&cavity));
        assert!(fits_any_orientation(&item, &cavity));
        assert!(!fits_any_orientation(&item, &Dims::new(400.0, 400.0, 400.0)));
    }
}

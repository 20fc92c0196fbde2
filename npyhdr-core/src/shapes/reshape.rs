use super::{shape::checked_product, Shape, MAX_DIMS};
use crate::error::HeaderError;
use std::vec::Vec;

impl Shape {
    /// Number of elements left to traverse once the leading coordinates in
    /// `prefix` are fixed.
    ///
    /// Negative entries are unfixed. All fixed entries must come first:
    /// `[2, 1, -1]` is fine, `[2, -1, 1]` is [HeaderError::InvalidCoordinatePrefix].
    /// ```rust
    /// # use npyhdr_core::shapes::Shape;
    /// let s = Shape::from([10, 4, 3]);
    /// assert_eq!(s.item_size_at(&[]).unwrap(), 120);
    /// assert_eq!(s.item_size_at(&[2]).unwrap(), 12);
    /// assert_eq!(s.item_size_at(&[2, 1, -1]).unwrap(), 3);
    /// assert!(s.item_size_at(&[2, -1, 1]).is_err());
    /// ```
    pub fn item_size_at(&self, prefix: &[isize]) -> Result<usize, HeaderError> {
        let invalid = || HeaderError::InvalidCoordinatePrefix {
            prefix: prefix.to_vec(),
        };
        if prefix.len() > MAX_DIMS {
            return Err(invalid());
        }

        let fixed = prefix.iter().take_while(|&&c| c >= 0).count();
        if prefix[fixed..].iter().any(|&c| c >= 0) {
            return Err(invalid());
        }

        checked_product(self.dims.iter().skip(fixed).copied()).ok_or_else(|| {
            HeaderError::ShapeOverflow {
                dims: self.dims.clone(),
            }
        })
    }

    /// Reshapes to `new_extents`, keeping the number of elements.
    ///
    /// At most one entry may be negative ([UNSPECIFIED](super::UNSPECIFIED));
    /// it is filled with whatever makes the sizes match. A reshape that would
    /// drop or invent elements is [HeaderError::IncompatibleReshape], as is
    /// any reshape of a shape whose element count does not fit in a `usize`.
    pub fn change(&self, new_extents: &[isize]) -> Result<Shape, HeaderError> {
        let incompatible = || HeaderError::IncompatibleReshape {
            from: self.dims.clone(),
            to: new_extents.to_vec(),
        };

        let old_size = self.checked_size().ok_or_else(incompatible)?;
        let mut unspecified = None;
        let mut partial: usize = 1;
        for (i, &e) in new_extents.iter().enumerate() {
            if e < 0 {
                if unspecified.replace(i).is_some() {
                    return Err(incompatible());
                }
            } else {
                partial = partial.checked_mul(e as usize).ok_or_else(incompatible)?;
            }
        }

        let mut dims: Vec<usize> = new_extents
            .iter()
            .map(|&e| if e < 0 { 0 } else { e as usize })
            .collect();

        match unspecified {
            None if partial == old_size => {}
            Some(i) if partial != 0 && old_size % partial == 0 => dims[i] = old_size / partial,
            _ => return Err(incompatible()),
        }

        debug_assert_eq!(dims.iter().product::<usize>(), old_size);
        Ok(Shape { dims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::UNSPECIFIED;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_change_fills_unspecified() {
        let s = Shape::from([10, 4]);
        assert_eq!(s.change(&[UNSPECIFIED, 5]).unwrap(), Shape::from([8, 5]));
        assert_eq!(s.change(&[2, UNSPECIFIED, 2]).unwrap(), Shape::from([2, 10, 2]));
        assert_eq!(s.change(&[40, UNSPECIFIED]).unwrap(), Shape::from([40, 1]));
        assert_eq!(s.change(&[UNSPECIFIED]).unwrap(), Shape::from([40]));
        assert_eq!(s.change(&[5, 8]).unwrap(), Shape::from([5, 8]));
    }

    #[test]
    fn test_change_rejects_size_change() {
        let s = Shape::from([10, 4]);
        assert_eq!(
            s.change(&[3, 5]),
            Err(HeaderError::IncompatibleReshape {
                from: vec![10, 4],
                to: vec![3, 5]
            })
        );
        assert!(s.change(&[UNSPECIFIED, 3]).is_err());
        assert!(s.change(&[UNSPECIFIED, UNSPECIFIED]).is_err());
        assert!(s.change(&[0, UNSPECIFIED]).is_err());
        assert!(s.change(&[]).is_err());
    }

    #[test]
    fn test_change_scalar_and_empty() {
        let scalar = Shape::new();
        assert_eq!(scalar.change(&[1, 1]).unwrap(), Shape::from([1, 1]));
        assert_eq!(scalar.change(&[]).unwrap(), Shape::new());

        let empty = Shape::from_extents(&[0, 3]);
        assert_eq!(empty.change(&[3, 0]).unwrap(), Shape::from([3, 0]));
        assert!(empty.change(&[UNSPECIFIED, 0]).is_err());
    }

    #[test]
    fn test_change_preserves_size() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..500 {
            let ndims = rng.gen_range(0..=4);
            let dims: Vec<usize> = (0..ndims).map(|_| rng.gen_range(1..6)).collect();
            let shape = Shape::from(dims);

            let mut target: Vec<isize> = (0..rng.gen_range(1..=4))
                .map(|_| rng.gen_range(1..6))
                .collect();
            if rng.gen_bool(0.5) {
                let i = rng.gen_range(0..target.len());
                target[i] = UNSPECIFIED;
            }

            match shape.change(&target) {
                Ok(changed) => assert_eq!(changed.size(), shape.size()),
                Err(e) => assert!(matches!(e, HeaderError::IncompatibleReshape { .. })),
            }
        }
    }

    #[test]
    fn test_overflowing_shape_never_reshapes() {
        let s = Shape::from([100000; 6]);
        assert_eq!(
            s.change(&[UNSPECIFIED]),
            Err(HeaderError::IncompatibleReshape {
                from: vec![100000; 6],
                to: vec![UNSPECIFIED]
            })
        );
        assert!(s.change(&[UNSPECIFIED, 100000]).is_err());
        assert_eq!(
            s.item_size_at(&[1]),
            Err(HeaderError::ShapeOverflow {
                dims: vec![100000; 6]
            })
        );
        assert_eq!(s.item_size_at(&[1, 1, 1]).unwrap(), 1_000_000_000_000_000);
    }

    #[test]
    fn test_item_size_at() {
        let s = Shape::from([10, 4, 3, 2]);
        assert_eq!(s.item_size_at(&[]).unwrap(), 240);
        assert_eq!(s.item_size_at(&[-1, -1]).unwrap(), 240);
        assert_eq!(s.item_size_at(&[0]).unwrap(), 24);
        assert_eq!(s.item_size_at(&[5, 1]).unwrap(), 6);
        assert_eq!(s.item_size_at(&[5, 1, 2]).unwrap(), 2);
        assert_eq!(s.item_size_at(&[5, 1, 2, 1]).unwrap(), 1);
        assert_eq!(s.item_size_at(&[5, 1, 2, 1, 0, 0]).unwrap(), 1);
    }

    #[test]
    fn test_item_size_at_rejects_gaps() {
        let s = Shape::from([10, 4, 3]);
        assert_eq!(
            s.item_size_at(&[-1, 2]),
            Err(HeaderError::InvalidCoordinatePrefix {
                prefix: vec![-1, 2]
            })
        );
        assert!(s.item_size_at(&[1, -1, 0]).is_err());
        assert!(s.item_size_at(&[0, 0, 0, 0, 0, 0, 0]).is_err());
    }
}

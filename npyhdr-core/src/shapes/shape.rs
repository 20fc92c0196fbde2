use super::MAX_DIMS;
use std::{string::String, vec::Vec};

/// An ordered list of dimension extents, outermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    pub(super) dims: Vec<usize>,
}

impl Shape {
    /// A scalar shape, `()`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Pushes the given extents onto the shape.
    ///
    /// The first extent may be 0 (an array with no rows yet), later ones are
    /// only pushed when positive. Negative values, including
    /// [UNSPECIFIED](super::UNSPECIFIED), are skipped.
    pub fn append(&mut self, extents: &[isize]) {
        for (i, &e) in extents.iter().enumerate() {
            if e > 0 || (i == 0 && e == 0) {
                self.dims.push(e as usize);
            }
        }
    }

    /// Builds a shape with [Shape::append] semantics.
    pub fn from_extents(extents: &[isize]) -> Self {
        let mut shape = Self::new();
        shape.append(extents);
        shape
    }

    /// The number of elements in this shape; the product of all dimensions.
    ///
    /// Saturates at [usize::MAX]; see [Shape::checked_size].
    #[inline]
    pub fn size(&self) -> usize {
        self.checked_size().unwrap_or(usize::MAX)
    }

    /// The number of elements, or `None` if it does not fit in a `usize`.
    pub fn checked_size(&self) -> Option<usize> {
        checked_product(self.dims.iter().copied())
    }

    /// The number of elements in one item (row); the product of all but the first dimension.
    ///
    /// Saturates at [usize::MAX].
    #[inline]
    pub fn item_size(&self) -> usize {
        checked_product(self.dims.iter().skip(1).copied()).unwrap_or(usize::MAX)
    }

    /// Whether every product of extents fits in a `usize`, zero extents
    /// aside. Holds for every shape [Header::decode](crate::header::Header::decode)
    /// returns, so no size, stride or index of such a shape saturates.
    pub fn is_addressable(&self) -> bool {
        checked_product(self.dims.iter().map(|&d| d.max(1))).is_some()
    }

    /// Extent of dimension `d`, or 1 if the shape has fewer dimensions.
    #[inline]
    pub fn extent(&self, d: usize) -> usize {
        self.dims.get(d).copied().unwrap_or(1)
    }

    /// The strides of how this shape is layed out in memory, in elements.
    ///
    /// Saturates at [usize::MAX].
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.dims.len()];
        for i in (0..self.dims.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1].saturating_mul(self.dims[i + 1]);
        }
        strides
    }

    /// Row-major flat index of `coords`.
    ///
    /// Dimensions beyond [Shape::num_dims] count as extent 1. A shape with
    /// more than [MAX_DIMS] dimensions is indexed with coordinate 0 in every
    /// dimension past the sixth. Coordinates are not bounds checked, and the
    /// result saturates at [usize::MAX].
    pub fn flat_index(&self, coords: [usize; MAX_DIMS]) -> usize {
        let last = self.dims.len().max(MAX_DIMS);
        let mut idx: usize = 0;
        for (d, &c) in coords.iter().enumerate() {
            let inner = (d + 1..last).fold(1usize, |acc, e| acc.saturating_mul(self.extent(e)));
            idx = idx.saturating_add(c.saturating_mul(inner));
        }
        idx
    }

    /// `(10, 4)`, `(7,)` or `()`; with `json` set, `[10, 4]`, `[7]` or `[]`.
    pub fn to_tuple_text(&self, json: bool) -> String {
        let body = self
            .dims
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        if json {
            format!("[{body}]")
        } else if self.dims.len() == 1 {
            format!("({body},)")
        } else {
            format!("({body})")
        }
    }
}

pub(super) fn checked_product(extents: impl Iterator<Item = usize>) -> Option<usize> {
    extents.fold(Some(1usize), |acc, d| acc?.checked_mul(d))
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_tuple_text(false))
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self { dims }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.dims
    }
}

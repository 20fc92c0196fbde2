use super::{DtypeDescriptor, ElementKind};
use crate::endian::Endian;
use num_complex::Complex;

/// Maps an element type onto its dtype string.
///
/// For example an f32's dtype is "f4" and a `Complex<f64>`'s is "c16".
pub trait NumpyDtype: 'static + Copy + Send + Sync {
    const KIND: ElementKind;
    const BYTE_WIDTH: usize = std::mem::size_of::<Self>();

    /// Descriptor in the byte order of the running machine.
    fn dtype() -> DtypeDescriptor {
        DtypeDescriptor {
            endian: Endian::host(),
            kind: Self::KIND,
            byte_width: Self::BYTE_WIDTH,
        }
    }
}

macro_rules! dtype {
    ($type:ty, $kind:expr) => {
        impl NumpyDtype for $type {
            const KIND: ElementKind = $kind;
        }
    };
}

dtype!(u8, ElementKind::Unsigned);
dtype!(u16, ElementKind::Unsigned);
dtype!(u32, ElementKind::Unsigned);
dtype!(u64, ElementKind::Unsigned);
dtype!(i8, ElementKind::Signed);
dtype!(i16, ElementKind::Signed);
dtype!(i32, ElementKind::Signed);
dtype!(i64, ElementKind::Signed);
dtype!(f32, ElementKind::Float);
dtype!(f64, ElementKind::Float);
dtype!(Complex<f32>, ElementKind::Complex);
dtype!(Complex<f64>, ElementKind::Complex);

//! Reinterpreting the bits of floats as integers and back.
//!
//! Used to smuggle integer ids through float arrays: the bit pattern is
//! copied unchanged, nothing is converted numerically.

/// Same-size bit reinterpretation between a float and its integer views.
pub trait BitView: Copy {
    type Uint: Copy;
    type Int: Copy;

    fn from_uint_bits(bits: Self::Uint) -> Self;
    fn to_uint_bits(self) -> Self::Uint;
    fn from_int_bits(bits: Self::Int) -> Self;
    fn to_int_bits(self) -> Self::Int;
}

macro_rules! bit_view {
    ($float:ty, $uint:ty, $int:ty) => {
        impl BitView for $float {
            type Uint = $uint;
            type Int = $int;

            #[inline(always)]
            fn from_uint_bits(bits: $uint) -> Self {
                <$float>::from_bits(bits)
            }
            #[inline(always)]
            fn to_uint_bits(self) -> $uint {
                self.to_bits()
            }
            #[inline(always)]
            fn from_int_bits(bits: $int) -> Self {
                <$float>::from_bits(<$uint>::from_ne_bytes(bits.to_ne_bytes()))
            }
            #[inline(always)]
            fn to_int_bits(self) -> $int {
                <$int>::from_ne_bytes(self.to_bits().to_ne_bytes())
            }
        }
    };
}

bit_view!(f32, u32, i32);
bit_view!(f64, u64, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_views() {
        assert_eq!(1.0f32.to_uint_bits(), 0x3f80_0000);
        assert_eq!(f32::from_uint_bits(0x3f80_0000), 1.0);
        assert_eq!((-2.0f32).to_int_bits(), 0xc000_0000u32 as i32);
        assert_eq!(f32::from_int_bits(-1).to_uint_bits(), u32::MAX);
    }

    #[test]
    fn test_no_numeric_conversion() {
        let f = f32::from_uint_bits(42);
        assert_ne!(f, 42.0);
        assert_eq!(f.to_uint_bits(), 42);

        for i in [0i64, 1, -1, 12345, i64::MIN, i64::MAX] {
            assert_eq!(f64::from_int_bits(i).to_int_bits(), i);
        }
        for u in [0u64, 1, 0x7ff8_0000_0000_0001, u64::MAX] {
            assert_eq!(f64::from_uint_bits(u).to_uint_bits(), u);
        }
    }
}

//! Numeric coercion.
//!
//! Every public drawing call accepts `impl Numeric` and converts to `f64`, the single
//! canonical scalar used inside the engine. Conversions are value conversions (`as`
//! between numeric types), never bit reinterpretation. The set of supported types is
//! closed: anything else is rejected at compile time.

pub mod calc;

/// A scalar that can cross the drawing API boundary.
pub trait Numeric: Copy {
    /// Converts into the canonical scalar.
    fn to_f64(self) -> f64;

    /// Builds a value of this type from the canonical scalar.
    ///
    /// Float-to-integer conversion truncates toward zero and saturates at the bounds
    /// of the target type; NaN becomes zero.
    fn from_f64(v: f64) -> Self;

    /// Converts into any other supported numeric type.
    #[inline]
    fn convert<T: Numeric>(self) -> T {
        T::from_f64(self.to_f64())
    }
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_numeric!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    // ── to_f64 ────────────────────────────────────────────────────────────

    #[test]
    fn integers_widen_exactly() {
        assert_eq!(42i8.to_f64(), 42.0);
        assert_eq!((-7i64).to_f64(), -7.0);
        assert_eq!(u32::MAX.to_f64(), 4_294_967_295.0);
        assert_eq!(3usize.to_f64(), 3.0);
    }

    #[test]
    fn f32_widens_to_same_value() {
        assert_eq!(0.5f32.to_f64(), 0.5);
    }

    // ── convert ───────────────────────────────────────────────────────────

    #[test]
    fn negative_to_unsigned_saturates_instead_of_wrapping() {
        // A bit reinterpretation would yield 255.
        let v: u8 = (-1i32).convert();
        assert_eq!(v, 0);
    }

    #[test]
    fn float_to_int_truncates_toward_zero() {
        let a: i32 = 2.9f64.convert();
        let b: i32 = (-2.9f64).convert();
        assert_eq!(a, 2);
        assert_eq!(b, -2);
    }

    #[test]
    fn out_of_range_saturates() {
        let v: i16 = 1.0e9f64.convert();
        assert_eq!(v, i16::MAX);
    }

    #[test]
    fn nan_converts_to_zero() {
        let v: u32 = f64::NAN.convert();
        assert_eq!(v, 0);
    }

    #[test]
    fn round_trip_through_canonical_is_lossless_for_small_ints() {
        for i in -1000i32..1000 {
            let back: i32 = i.to_f64().convert();
            assert_eq!(back, i);
        }
    }
}

//! Numeric helpers for the built-in integer and float types.

/// Returns true when `n % 2 == 0` for the number's own type.
///
/// Floats inherit IEEE remainder semantics: `4.0` is even, `2.5` and `NaN`
/// are not. No extra validation is applied.
///
/// # Examples
///
/// ```
/// use primext::number::is_even;
///
/// assert!(is_even(0));
/// assert!(!is_even(-3i64));
/// assert!(is_even(4.0f64));
/// assert!(!is_even(2.5f32));
/// ```
pub fn is_even<T: NumberExt>(n: T) -> bool {
    n.is_even()
}

/// The larger of two values. Ties and unordered pairs return `a`.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// The smaller of two values. Ties and unordered pairs return `a`.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Extension trait exposing the numeric helpers as methods.
///
/// `max_with`/`min_with` avoid clashing with `Ord::max` and `f64::max`.
///
/// # Examples
///
/// ```
/// use primext::NumberExt;
///
/// assert!(2u8.is_even());
/// assert_eq!(1i32.max_with(2), 2);
/// assert_eq!(1.5f64.min_with(-0.5), -0.5);
/// ```
pub trait NumberExt: Copy + PartialOrd {
    /// True when the value is divisible by two.
    fn is_even(self) -> bool;

    /// See [`max`].
    fn max_with(self, other: Self) -> Self {
        max(self, other)
    }

    /// See [`min`].
    fn min_with(self, other: Self) -> Self {
        min(self, other)
    }
}

macro_rules! impl_number_ext {
    ($zero:literal, $two:literal => $($t:ty),+ $(,)?) => {
        $(
            impl NumberExt for $t {
                fn is_even(self) -> bool {
                    self % $two == $zero
                }
            }
        )+
    };
}

impl_number_ext!(0, 2 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number_ext!(0.0, 2.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_even() {
        assert!(is_even(0));
        assert!(!is_even(1));
        assert!(is_even(2));
        assert!(is_even(-4i8));
        assert!(!is_even(-7i128));
        assert!(is_even(u64::MAX - 1));
        assert!(!is_even(usize::MAX));
    }

    #[test]
    fn test_is_even_on_floats_follows_remainder() {
        assert!(is_even(4.0f64));
        assert!(is_even(-0.0f64));
        assert!(!is_even(2.5f64));
        assert!(!is_even(3.0f32));
        assert!(!is_even(f64::NAN));
        assert!(!is_even(f64::INFINITY));
    }

    #[test]
    fn test_max() {
        assert_eq!(max(1, 2), 2);
        assert_eq!(max(-1, -2), -1);
        assert_eq!(max(0, 0), 0);
        assert_eq!(max(1.5, -3.0), 1.5);
    }

    #[test]
    fn test_min() {
        assert_eq!(min(1, 2), 1);
        assert_eq!(min(-1, -2), -2);
        assert_eq!(min(0, 0), 0);
        assert_eq!(min("b", "a"), "a");
    }

    #[test]
    fn test_unordered_values_return_first_argument() {
        assert!(max(f64::NAN, 1.0).is_nan());
        assert_eq!(max(1.0, f64::NAN), 1.0);
        assert!(min(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_number_ext_methods() {
        let num = 2i32;
        assert!(num.is_even());
        let odd = 1i32;
        assert!(!odd.is_even());
        assert_eq!(1i32.max_with(2), 2);
        assert_eq!(1i32.min_with(2), 1);
        assert_eq!(7u16.max_with(3), 7);
        assert_eq!((-2.5f32).min_with(2.5), -2.5);
    }
}

//! Fractional accessors on floating-point numbers.

/// Common fractions and multiples, e.g. `screen_width.half()`.
pub trait Fractions: Sized {
    fn half(self) -> Self;
    fn third(self) -> Self;
    fn quarter(self) -> Self;
    fn fifth(self) -> Self;
    fn tenth(self) -> Self;
    fn two_thirds(self) -> Self;
    fn three_quarters(self) -> Self;
    fn double(self) -> Self;
    fn triple(self) -> Self;
    fn quadruple(self) -> Self;
    /// `self * p / 100`.
    fn percent(self, p: Self) -> Self;
}

macro_rules! impl_fractions {
    ($($t:ty),*) => {$(
        impl Fractions for $t {
            #[inline] fn half(self) -> Self { self / 2.0 }
            #[inline] fn third(self) -> Self { self / 3.0 }
            #[inline] fn quarter(self) -> Self { self / 4.0 }
            #[inline] fn fifth(self) -> Self { self / 5.0 }
            #[inline] fn tenth(self) -> Self { self / 10.0 }
            #[inline] fn two_thirds(self) -> Self { self * 2.0 / 3.0 }
            #[inline] fn three_quarters(self) -> Self { self * 3.0 / 4.0 }
            #[inline] fn double(self) -> Self { self * 2.0 }
            #[inline] fn triple(self) -> Self { self * 3.0 }
            #[inline] fn quadruple(self) -> Self { self * 4.0 }
            #[inline] fn percent(self, p: Self) -> Self { self * p / 100.0 }
        }
    )*};
}

impl_fractions!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn half() { assert_eq!(10.0f32.half(), 5.0); }
    #[test] fn third() { assert_eq!(9.0f64.third(), 3.0); }
    #[test] fn quarter() { assert_eq!(10.0f32.quarter(), 2.5); }
    #[test] fn fifth_and_tenth() {
        assert_eq!(50.0f32.fifth(), 10.0);
        assert_eq!(50.0f32.tenth(), 5.0);
    }
    #[test] fn two_thirds() { assert_eq!(9.0f32.two_thirds(), 6.0); }
    #[test] fn three_quarters() { assert_eq!(8.0f64.three_quarters(), 6.0); }
    #[test] fn multiples() {
        assert_eq!(1.5f32.double(), 3.0);
        assert_eq!(1.5f32.triple(), 4.5);
        assert_eq!(1.5f32.quadruple(), 6.0);
    }
    #[test] fn percent() { assert_eq!(200.0f32.percent(15.0), 30.0); }
}

use std::fmt;

/// Plain numeric bin value.
///
/// Counters accumulate through `+=`: a unit increment adds `one()`, a weighted
/// increment adds the weight itself.
pub trait Counter
    : num::Num + num::ToPrimitive + num::FromPrimitive + num::NumAssignOps + PartialOrd<Self> + Copy + Default + fmt::Debug
    {
    /// Counter as a f64.
    fn as_f64(&self) -> f64;
    /// Counter multiplied by `factor`, computed in f64. Integer counters truncate
    /// toward zero and saturate at their bounds.
    fn scaled(self, factor: f64) -> Self;
}

macro_rules! impl_counter {
    ($($t:ty),*) => {
        $(
            impl Counter for $t {
                #[inline(always)]
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
                #[inline(always)]
                fn scaled(self, factor: f64) -> Self {
                    (self as f64 * factor) as $t
                }
            }
        )*
    }
}

impl_counter!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

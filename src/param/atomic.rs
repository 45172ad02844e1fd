use super::*;
use core::sync::atomic::*;

macro_rules! impl_get_set {
    ($($t:ty => $a:ty),* $(,)*) => {
        $(
            impl ParamGet<$t> for $a {
                fn get(&self) -> $t {
                    self.load(Ordering::Acquire)
                }
            }
            impl ParamSet<$t> for $a {
                fn set(&self, value: $t) {
                    self.store(value, Ordering::Release);
                }
            }
            impl ParamBind for $a {
                type Arg<'x> = $t;

                fn with_arg<R, F>(&self, f: F) -> Result<R>
                where
                    F: for<'x> FnOnce(Self::Arg<'x>) -> R,
                {
                    Ok(f(self.get()))
                }
            }
        )*
    };
}

impl_get_set!(
    bool => AtomicBool,
    i8 => AtomicI8,
    i16 => AtomicI16,
    i32 => AtomicI32,
    isize => AtomicIsize,
    u8 => AtomicU8,
    u16 => AtomicU16,
    u32 => AtomicU32,
    usize => AtomicUsize,
);

//requires 64bit atomics, will not work on some thumb/arm targets
#[cfg(target_pointer_width = "64")]
impl_get_set!(i64 => AtomicI64, u64 => AtomicU64);

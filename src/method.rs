//! Binding methods to parameter lists.
//!
//! `Method` is implemented for every `Fn(&mut T, A0, .. An) -> R` (up to 8 parameters) paired
//! with a tuple of bindings `(P0, .. Pn)` where each `Pi: ParamBind` hands over an `Ai`. Value
//! bindings hand over a fresh value, [`Mut`](../param/struct.Mut.html) and
//! [`Ref`](../param/struct.Ref.html) lend `&mut A` and `&A`.
//!
//! Every binding is read (or locked, for lent ones) before the target is locked, in declared
//! order, so a binding may share its storage with the target as long as it hands over a value.
//!
//! Method paths work directly:
//!
//! ```
//! use callback::method::Method;
//! use callback::param::Fixed;
//!
//! struct Counter {
//!     x: i32,
//! }
//!
//! impl Counter {
//!     fn increment(&mut self, by: i32) -> i32 {
//!         self.x += by;
//!         self.x
//!     }
//! }
//!
//! let c = spin::Mutex::new(Counter { x: 1 });
//! assert_eq!(Ok(3), Counter::increment.call_bound(&&c, &(Fixed(2),)));
//! ```

use crate::error::Result;
use crate::param::ParamBind;
use crate::target::Target;

pub trait Method<T, P, R> {
    /// Bind every parameter in `params`, in order, then lock `target` and call the method with
    /// the object and the arguments.
    fn call_bound<H>(&self, target: &H, params: &P) -> Result<R>
    where
        H: Target<Object = T>;
}

//nest one with_arg per binding, the target innermost
macro_rules! lend {
    ($m:expr, $t:expr; ; $($a:ident)*) => {
        $t.with_object(|object| ($m)(object $(, $a)*))
    };
    ($m:expr, $t:expr; ($p:ident $a0:ident) $(($ps:ident $as:ident))*; $($a:ident)*) => {
        $p.with_arg(|$a0| lend!($m, $t; $(($ps $as))*; $($a)* $a0))
            .and_then(|r| r)
    };
}

macro_rules! impl_method {
    ($(($P:ident $p:ident $a:ident $x:lifetime)),*) => {
        impl<F, T, R, $($P),*> Method<T, ($($P,)*), R> for F
        where
            F: for<'t $(, $x)*> Fn(&'t mut T $(, <$P as ParamBind>::Arg<$x>)*) -> R,
            $($P: ParamBind,)*
        {
            #[allow(unused_variables)]
            fn call_bound<H>(&self, target: &H, params: &($($P,)*)) -> Result<R>
            where
                H: Target<Object = T>,
            {
                let ($($p,)*) = params;
                lend!(self, target; $(($p $a))*; )
            }
        }
    };
}

impl_method!();
impl_method!((P0 p0 a0 'x0));
impl_method!((P0 p0 a0 'x0), (P1 p1 a1 'x1));
impl_method!((P0 p0 a0 'x0), (P1 p1 a1 'x1), (P2 p2 a2 'x2));
impl_method!((P0 p0 a0 'x0), (P1 p1 a1 'x1), (P2 p2 a2 'x2), (P3 p3 a3 'x3));
impl_method!(
    (P0 p0 a0 'x0),
    (P1 p1 a1 'x1),
    (P2 p2 a2 'x2),
    (P3 p3 a3 'x3),
    (P4 p4 a4 'x4)
);
impl_method!(
    (P0 p0 a0 'x0),
    (P1 p1 a1 'x1),
    (P2 p2 a2 'x2),
    (P3 p3 a3 'x3),
    (P4 p4 a4 'x4),
    (P5 p5 a5 'x5)
);
impl_method!(
    (P0 p0 a0 'x0),
    (P1 p1 a1 'x1),
    (P2 p2 a2 'x2),
    (P3 p3 a3 'x3),
    (P4 p4 a4 'x4),
    (P5 p5 a5 'x5),
    (P6 p6 a6 'x6)
);
impl_method!(
    (P0 p0 a0 'x0),
    (P1 p1 a1 'x1),
    (P2 p2 a2 'x2),
    (P3 p3 a3 'x3),
    (P4 p4 a4 'x4),
    (P5 p5 a5 'x5),
    (P6 p6 a6 'x6),
    (P7 p7 a7 'x7)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::param::{Fixed, Mut, ParamSet, Ref};
    use crate::ptr::new_shared;

    #[derive(Default)]
    struct Log {
        calls: Vec<(u8, char, bool)>,
        zero: usize,
    }

    impl Log {
        fn zero(&mut self) {
            self.zero += 1;
        }

        fn three(&mut self, a: u8, b: char, c: bool) -> usize {
            self.calls.push((a, b, c));
            self.calls.len()
        }

        fn drain_into(&mut self, out: &mut Vec<(u8, char, bool)>) {
            out.append(&mut self.calls);
        }

        fn count_of(&mut self, other: &Log) -> usize {
            other.calls.len()
        }
    }

    #[test]
    fn no_params() {
        let log = new_shared(Log::default());
        assert_eq!(Ok(()), Log::zero.call_bound(&log, &()));
        assert_eq!(1, log.lock().zero);
        assert!(log.lock().calls.is_empty());
    }

    #[test]
    fn order() {
        let log = new_shared(Log::default());
        let a = new_shared(1u8);
        let params = (a.clone(), Fixed('x'), Fixed(true));
        assert_eq!(Ok(1), Log::three.call_bound(&log, &params));
        a.set(2);
        assert_eq!(Ok(2), Log::three.call_bound(&log, &params));
        assert_eq!(vec![(1, 'x', true), (2, 'x', true)], log.lock().calls);
    }

    #[test]
    fn eight() {
        let fill = |t: &mut Vec<u8>, a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
            t.extend_from_slice(&[a, b, c, d, e, f, g, h]);
        };
        let v = spin::Mutex::new(Vec::new());
        let p = (
            Fixed(0u8),
            Fixed(1u8),
            Fixed(2u8),
            Fixed(3u8),
            Fixed(4u8),
            Fixed(5u8),
            Fixed(6u8),
            Fixed(7u8),
        );
        assert_eq!(Ok(()), fill.call_bound(&&v, &p));
        assert_eq!(vec![0, 1, 2, 3, 4, 5, 6, 7], *v.lock());
    }

    #[test]
    fn lent_params() {
        let log = new_shared(Log::default());
        let out = new_shared(Vec::<(u8, char, bool)>::new());
        let params = (Fixed(4u8), Fixed('y'), Fixed(false));
        assert_eq!(Ok(1), Log::three.call_bound(&log, &params));
        assert_eq!(Ok(()), Log::drain_into.call_bound(&log, &(Mut(out.clone()),)));
        assert_eq!(vec![(4, 'y', false)], *out.lock());
        assert!(log.lock().calls.is_empty());

        let other = new_shared(Log::default());
        other.lock().calls.push((0, 'z', true));
        assert_eq!(Ok(1), Log::count_of.call_bound(&log, &(Ref(other.clone()),)));
    }

    #[test]
    fn value_param_shares_target() {
        let add = |x: &mut i32, by: i32| {
            *x += by;
            *x
        };
        let n = new_shared(3);
        assert_eq!(Ok(6), add.call_bound(&n, &(n.clone(),)));
        assert_eq!(6, *n.lock());
    }

    #[test]
    fn lent_param_shares_target() {
        let copy = |x: &mut i32, from: &i32| *x = *from;
        let n = new_shared(3);
        assert_eq!(Err(Error::Busy), copy.call_bound(&n, &(Ref(n.clone()),)));
        assert_eq!(3, *n.lock());
    }
}

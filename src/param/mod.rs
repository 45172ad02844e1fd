//! Parameter bindings.
//!
//! A callback holds one binding per parameter of its bound method and only reads it when it is
//! triggered, so changes made through `ParamSet::set` (or directly through the lock) after the
//! callback was built are seen by the method.
//!
//! Most bindings hand the method a fresh value. [`Mut`](struct.Mut.html) and
//! [`Ref`](struct.Ref.html) instead lend the method `&mut A` or `&A` into the shared storage for
//! the duration of the call, so whatever the method writes there stays visible to the caller.

use crate::error::Result;
use crate::ptr::ShrPtr;
use crate::target::lock_with;
use core::ops::Deref;
use spin::{Mutex, RwLock};

//impl for atomic
mod atomic;

pub type ParamGetP<T> = ShrPtr<dyn ParamGet<T>>;

pub trait ParamGet<T>: Send + Sync {
    fn get(&self) -> T;
}

pub trait ParamSet<T>: Send + Sync {
    fn set(&self, value: T);
}

/// How a binding hands its argument to a bound method.
///
/// `Arg<'x>` is the type the method receives, it may borrow from the binding for `'x`, the
/// length of one call.
pub trait ParamBind {
    type Arg<'x>;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R;
}

/// A parameter that never changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fixed<T>(pub T);

/// Lend the method `&mut A` into a `spin::Mutex<A>`.
///
/// The mutex stays locked while the method runs.
#[derive(Clone, Copy, Debug)]
pub struct Mut<H>(pub H);

/// Lend the method `&A` into a `spin::Mutex<A>`.
///
/// The mutex stays locked while the method runs.
#[derive(Clone, Copy, Debug)]
pub struct Ref<H>(pub H);

impl<T> ParamGet<T> for Fixed<T>
where
    T: Clone + Send + Sync,
{
    fn get(&self) -> T {
        self.0.clone()
    }
}

impl<T> ParamBind for Fixed<T>
where
    T: Clone + Send + Sync,
{
    type Arg<'x> = T;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R,
    {
        Ok(f(self.get()))
    }
}

impl<T> ParamGet<T> for Mutex<T>
where
    T: Clone + Send,
{
    fn get(&self) -> T {
        self.lock().clone()
    }
}

impl<T> ParamSet<T> for Mutex<T>
where
    T: Send,
{
    fn set(&self, value: T) {
        *self.lock() = value;
    }
}

impl<T> ParamBind for Mutex<T>
where
    T: Clone + Send,
{
    type Arg<'x> = T;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R,
    {
        Ok(f(self.get()))
    }
}

impl<T> ParamGet<T> for RwLock<T>
where
    T: Clone + Send + Sync,
{
    fn get(&self) -> T {
        self.read().clone()
    }
}

impl<T> ParamSet<T> for RwLock<T>
where
    T: Send + Sync,
{
    fn set(&self, value: T) {
        *self.write() = value;
    }
}

impl<T> ParamBind for RwLock<T>
where
    T: Clone + Send + Sync,
{
    type Arg<'x> = T;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R,
    {
        Ok(f(self.get()))
    }
}

impl<'d, T> ParamBind for dyn ParamGet<T> + 'd {
    type Arg<'x> = T;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R,
    {
        Ok(f(self.get()))
    }
}

impl<H, T> ParamBind for Mut<H>
where
    H: Deref<Target = Mutex<T>>,
    T: 'static,
{
    type Arg<'x> = &'x mut T;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R,
    {
        lock_with(&*self.0, f)
    }
}

impl<H, T> ParamBind for Ref<H>
where
    H: Deref<Target = Mutex<T>>,
    T: 'static,
{
    type Arg<'x> = &'x T;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R,
    {
        lock_with(&*self.0, |arg| f(&*arg))
    }
}

impl<T, P> ParamGet<T> for ShrPtr<P>
where
    P: ParamGet<T> + ?Sized,
{
    fn get(&self) -> T {
        P::get(self)
    }
}

impl<T, P> ParamSet<T> for ShrPtr<P>
where
    P: ParamSet<T> + ?Sized,
{
    fn set(&self, value: T) {
        P::set(self, value)
    }
}

impl<P> ParamBind for ShrPtr<P>
where
    P: ParamBind + ?Sized,
{
    type Arg<'x> = P::Arg<'x>;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R,
    {
        P::with_arg(&**self, f)
    }
}

impl<'a, T, P> ParamGet<T> for &'a P
where
    P: ParamGet<T> + ?Sized,
{
    fn get(&self) -> T {
        P::get(*self)
    }
}

impl<'a, T, P> ParamSet<T> for &'a P
where
    P: ParamSet<T> + ?Sized,
{
    fn set(&self, value: T) {
        P::set(*self, value)
    }
}

impl<'a, P> ParamBind for &'a P
where
    P: ParamBind + ?Sized,
{
    type Arg<'x> = P::Arg<'x>;

    fn with_arg<R, F>(&self, f: F) -> Result<R>
    where
        F: for<'x> FnOnce(Self::Arg<'x>) -> R,
    {
        P::with_arg(*self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ptr::new_shared;
    use core::sync::atomic::AtomicUsize;

    #[test]
    fn mutex() {
        let p = new_shared(String::from("a"));
        let v: String = p.get();
        assert_eq!("a", v);
        p.set(String::from("b"));
        let v: String = p.get();
        assert_eq!("b", v);
        *p.lock() = String::from("c");
        assert_eq!("c", ParamGet::<String>::get(&p));
        assert_eq!(Ok(1), p.with_arg(|s: String| s.len()));
    }

    #[test]
    fn rwlock() {
        let p = ShrPtr::new(RwLock::new(2isize));
        assert_eq!(2, p.get());
        p.set(-5);
        assert_eq!(-5, p.get());
        assert_eq!(Ok(-4), p.with_arg(|v: isize| v + 1));
    }

    #[test]
    fn dyn_ptr() {
        let a = ShrPtr::new(AtomicUsize::new(10));
        let g = a.clone() as ParamGetP<usize>;
        assert_eq!(10, g.get());
        a.set(512);
        assert_eq!(512, g.get());
        assert_eq!(Ok(513), g.with_arg(|v: usize| v + 1));
    }

    #[test]
    fn borrowed() {
        let m = Mutex::new(1u8);
        let r = &m;
        assert_eq!(1, r.get());
        r.set(9);
        assert_eq!(9, m.get());
    }

    #[test]
    fn fixed() {
        let f = Fixed("hi");
        assert_eq!("hi", f.get());
        assert_eq!(Ok(2), f.with_arg(|s: &str| s.len()));
    }

    #[test]
    fn lend_mut() {
        let p = new_shared(vec![1u8]);
        let m = Mut(p.clone());
        assert_eq!(Ok(()), m.with_arg(|v: &mut Vec<u8>| v.push(2)));
        assert_eq!(vec![1, 2], *p.lock());

        let local = Mutex::new(0i32);
        let m = Mut(&local);
        assert_eq!(Ok(()), m.with_arg(|v: &mut i32| *v -= 3));
        assert_eq!(-3, *local.lock());
    }

    #[test]
    fn lend_ref() {
        let p = new_shared(String::from("abc"));
        let r = Ref(p.clone());
        assert_eq!(Ok(3), r.with_arg(|s: &String| s.len()));
    }

    #[test]
    fn lend_twice_is_busy() {
        let p = new_shared(0u32);
        let a = Mut(p.clone());
        let b = Ref(p.clone());
        assert_eq!(Ok(Err(Error::Busy)), a.with_arg(|_: &mut u32| b.with_arg(|v: &u32| *v)));
    }
}

use crate::error::Result;
use crate::method::Method;
use crate::ptr::{self, SShrPtr, WShrPtr};
use crate::target::Target;
use crate::trigger::{Trigger, TriggerId};
use core::marker::PhantomData;
use tracing::{trace, warn};

/// A method bound to an object and a list of parameters, ready to be triggered.
///
/// The target and every parameter are held by handle, not by value: the method sees the object
/// and the parameter values as they are when the callback is triggered, not as they were when
/// it was built.
///
/// * `H` - handle to the object, see [`Target`](../target/trait.Target.html)
/// * `M` - the method, any `Fn(&mut H::Object, A0, .. An) -> R`
/// * `P` - tuple of parameter bindings, `(P0, .. Pn)` with `Pi: ParamBind`
/// * `R` - what the method returns, inferred
pub struct Callback<H, M, P, R> {
    id: TriggerId,
    target: H,
    method: M,
    params: P,
    _phantom: PhantomData<fn() -> R>,
}

impl<H, M, P, R> Callback<H, M, P, R>
where
    H: Target,
    M: Method<H::Object, P, R>,
{
    /// Construct a new `Callback`, the method is not called.
    ///
    /// # Arguments
    ///
    /// * `target` - the object to call the method on
    /// * `method` - the method to call
    /// * `params` - the parameters to call the method with, in order
    pub fn new(target: H, method: M, params: P) -> Self {
        let id = TriggerId::new();
        trace!(%id, "binding callback");
        Self {
            id,
            target,
            method,
            params,
            _phantom: Default::default(),
        }
    }

    pub fn id(&self) -> TriggerId {
        self.id
    }

    /// Invoke the method and hand back what it returned.
    ///
    /// The parameters are bound first, in order, then the target is locked. Waits while another
    /// thread holds the target or a lent parameter.
    pub fn call(&self) -> Result<R> {
        trace!(id = %self.id, "invoking callback");
        self.method.call_bound(&self.target, &self.params)
    }

    /// Invoke the method, discarding its return value.
    pub fn try_trigger(&self) -> Result<()> {
        self.call().map(|_| ())
    }

    /// Invoke the method, discarding its return value.
    ///
    /// If the target cannot be reached the method is not called; the reason is logged and
    /// otherwise ignored. Use `try_trigger` to observe it.
    pub fn trigger(&self) {
        if let Err(err) = self.try_trigger() {
            warn!(id = %self.id, %err, "callback not invoked");
        }
    }
}

impl<'a, T, M, P, R> Callback<&'a spin::Mutex<T>, M, P, R>
where
    M: Method<T, P, R>,
{
    /// Construct a `Callback` that borrows its target, it cannot outlive `target`.
    pub fn borrowed(target: &'a spin::Mutex<T>, method: M, params: P) -> Self {
        Self::new(target, method, params)
    }
}

impl<T, M, P, R> Callback<SShrPtr<T>, M, P, R>
where
    M: Method<T, P, R> + Clone,
    P: Clone,
{
    /// A copy of this callback that does not keep the target alive.
    ///
    /// Once the target has been dropped, triggering the copy does nothing and `try_trigger`
    /// returns `Error::Expired`.
    pub fn downgrade(&self) -> Callback<WShrPtr<T>, M, P, R> {
        Callback::new(
            ptr::downgrade(&self.target),
            self.method.clone(),
            self.params.clone(),
        )
    }
}

/// The clone shares the target and parameters and gets its own id.
impl<H, M, P, R> Clone for Callback<H, M, P, R>
where
    H: Target + Clone,
    M: Method<H::Object, P, R> + Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.target.clone(), self.method.clone(), self.params.clone())
    }
}

impl<H, M, P, R> Trigger for Callback<H, M, P, R>
where
    H: Target,
    M: Method<H::Object, P, R>,
{
    fn trigger_id(&self) -> TriggerId {
        self.id
    }

    fn try_trigger(&self) -> Result<()> {
        Callback::try_trigger(self)
    }

    fn trigger(&self) {
        Callback::trigger(self)
    }
}

impl<H, M, P, R> core::fmt::Debug for Callback<H, M, P, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callback").field("id", &self.id).finish()
    }
}

/// Build a [`Callback`](callback/struct.Callback.html), cloning the target handle and every
/// parameter handle.
///
/// ```
/// use callback::{bind, ptr};
///
/// struct Lamp {
///     on: bool,
/// }
///
/// impl Lamp {
///     fn toggle(&mut self) {
///         self.on = !self.on;
///     }
/// }
///
/// let lamp = ptr::new_shared(Lamp { on: false });
/// let cb = bind!(lamp, Lamp::toggle);
/// cb.trigger();
/// assert!(lamp.lock().on);
/// ```
#[macro_export]
macro_rules! bind {
    ($target:expr, $method:expr $(, $param:expr)* $(,)?) => {
        $crate::Callback::new(
            ::core::clone::Clone::clone(&$target),
            $method,
            ($(::core::clone::Clone::clone(&$param),)*),
        )
    };
}

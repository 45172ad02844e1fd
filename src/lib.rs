//! Bind a method, the object it belongs to and a list of parameters into a single callback
//! that can be triggered later without knowing any of their types.
//!
//! ```
//! use callback::{bind, param::ParamSet, ptr};
//!
//! struct Counter {
//!     x: i32,
//! }
//!
//! impl Counter {
//!     fn increment(&mut self, by: i32) {
//!         self.x += by;
//!     }
//! }
//!
//! let counter = ptr::new_shared(Counter { x: 0 });
//! let by = ptr::new_shared(5);
//! let cb = bind!(counter, Counter::increment, by);
//!
//! cb.trigger();
//! assert_eq!(5, counter.lock().x);
//!
//! by.set(10);
//! cb.trigger();
//! assert_eq!(15, counter.lock().x);
//! ```
//!
//! Parameters are read when the callback is triggered, or lent to the method as `&mut A`/`&A`
//! with `param::Mut`/`param::Ref`, see [`param`](param/index.html). The target can be shared,
//! weak or borrowed, see [`target`](target/index.html).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
extern crate cfg_if;

#[macro_use]
mod macros;

pub mod callback;
pub mod error;
pub mod method;
pub mod param;
pub mod ptr;
pub mod target;
pub mod trigger;

pub use crate::callback::Callback;
pub use crate::error::{Error, Result};
pub use crate::trigger::{Trigger, TriggerId};

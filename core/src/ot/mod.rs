//! The operation algebra: apply, compose, transform
//!
//! All three functions are pure. They only read their inputs and allocate
//! their outputs, so any number of callers may use them on shared
//! operations at the same time.
//!
//! # Laws
//!
//! - **Apply length:** `len(apply(s, op)) == op.target_length()`
//! - **Compose:** `apply(s, compose(a, b)) == apply(apply(s, a), b)`
//! - **Convergence:** with `(a', b') = transform(a, b)`,
//!   `apply(s, compose(a, b')) == apply(s, compose(b, a'))`
//!
//! # References
//!
//! - "Concurrency Control in Groupware Systems" by Ellis and Gibbs
//! - "High-Latency, Low-Bandwidth Windowing in the Jupiter Collaboration System" (Nichols et al.)

mod apply;
mod compose;
mod transform;

pub use apply::apply;
pub use compose::compose;
pub use transform::{transform, transform_with_priority, InsertPriority};

//! Client-side state modules for the interaction core.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `assistant`, `starters`, ...) into
//! plain structs with synchronous transitions. Async drivers live next to
//! each struct and only touch state through a [`cell::StateCell`], so the
//! same code runs against Leptos signals in the browser and against
//! `Rc<RefCell<_>>` in native tests.

pub mod assistant;
pub mod cell;
pub mod mutation;
pub mod notice;
pub mod session;
pub mod starters;

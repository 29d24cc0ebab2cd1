//! Page transition controller.
//!
//! `Paginator` is the single owner of a target's `PaginationConfig`. Every
//! event, the first render included, runs through `Paginator::dispatch`,
//! which consults the lifecycle hooks and either commits a new config (and a
//! freshly built `RenderPlan`) or leaves everything untouched.
//!
//! The controller is synchronous and single-threaded: a dispatch runs hooks,
//! commit and rebuild to completion before returning. Independent targets use
//! independent controllers; nothing is shared between them.

mod controller;
mod transition;

pub use controller::{Paginator, initialize};
pub use transition::{HookStage, IgnoreReason, Transition};

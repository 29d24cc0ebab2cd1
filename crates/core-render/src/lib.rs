//! Page window calculation, jump segment placement and render plan assembly.
//!
//! Pipeline (every call recomputes from the config, nothing is cached):
//! 1. `window::compute_range` centers a window of `render_pages` buttons on
//!    the current page and clamps it to `[first_page, last_page]`.
//! 2. `jump::compute_jump_segments` decides the leading/trailing shortcut
//!    clusters from the window and the jump-button policy.
//! 3. `plan::build` emits the ordered `RenderPlan`.
//!
//! Turning a plan into something visible is the job of a `Renderer`; the
//! adapters in `renderer` cover plain text, JSON and an in-place terminal
//! line. Markup, styling and input wiring for any other surface stay outside
//! this crate.

pub mod jump;
pub mod plan;
pub mod renderer;
pub mod window;
pub mod writer;

pub use jump::compute_jump_segments;
pub use plan::build;
pub use renderer::{JsonRenderer, Labels, Renderer, TerminalRenderer, TextRenderer, format_plan};
pub use window::compute_range;

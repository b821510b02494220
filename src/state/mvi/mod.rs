//! Model-View-Intent primitives shared by every state slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ watchers
//!    ↑                                │
//!    └────────── effect tasks ←───────┘
//! ```
//!
//! - **State**: value snapshot of one slice
//! - **Intent**: a typed request to change that slice
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;

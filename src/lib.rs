//! Client-side state synchronization core for the schedule administration
//! service.
//!
//! ```text
//! encoder ──→ Action ──→ Store ──→ reducer ──→ AppState ──→ watchers
//!                          │                       ↑
//!                          └─→ effect task ──→ gateway
//!                               (last per kind wins)
//! ```

pub mod actions;
pub mod config;
pub mod effects;
pub mod gateway;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;

pub use effects::{Command, CommandKind, EffectRuntime};
pub use gateway::{ApiRequest, Gateway, GatewayError, HttpGateway, Method};
pub use i18n::Translator;
pub use state::{Action, AppState};
pub use store::{Store, StoreError, StoreHandle};

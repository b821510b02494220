//! Session slice: logout and account activation outcomes.

mod intent;
mod reducer;
mod state;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::AuthState;

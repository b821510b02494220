//! Form values kept in the store so effect sequences can reset them.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormsReducer;
pub use state::{FormId, FormValues, FormsState};

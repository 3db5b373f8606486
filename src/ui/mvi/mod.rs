//! Model-View-Intent (MVI) primitives.
//!
//! The login screen keeps a single observable state value. Every change to
//! that value is expressed as an intent and decided by a reducer, so the
//! controller only schedules work and publishes whatever the reducer returns.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Screen
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

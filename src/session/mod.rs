//! Sessions: the aggregate state, its single-writer entry point, events
//! and per-viewer snapshots.

mod events;
mod game;
mod snapshot;
mod state;

pub use events::{EventLog, SessionEvent};
pub use game::{GameSession, Listener, Outcome};
pub use snapshot::{ButtonSpec, HandCard, PromptView, ReactionView, SeatView, SnapshotBuilder, ViewModel};
pub use state::{BorrowRecord, Interaction, SeatState, SessionState};

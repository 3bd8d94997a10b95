//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardKind`: Category deciding placement and playability
//! - `Passive`: Abilities active while a card sits in a Stable
//! - `CardDefinition`: Static card data
//! - `InstanceId` / `CardInstance`: One physical copy in a session
//! - `CardRegistry`: Definition lookup, shared read-only across sessions

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardKind, Passive};
pub use instance::{CardInstance, InstanceId};
pub use registry::CardRegistry;

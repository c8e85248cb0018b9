//! State-changed notifications.
//!
//! ## Key Types
//!
//! - `StateField`: An observable part of the session
//! - `StateEvent`: A field's new value
//! - `EventBus`: Subscriptions, indexed by field
//! - `StateObserver`: Anything that receives events (closures included)

pub mod bus;
pub mod event;

pub use bus::{EventBus, StateObserver, SubscriptionId};
pub use event::{StateEvent, StateField};

// Adapters layer: concrete implementations for external systems (token
// issuer, entity store, user store).

pub mod store;
pub mod token;

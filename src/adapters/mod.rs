// Adapters layer: concrete implementations for external systems (console input, in-memory sources).

pub mod input;

// Adapters layer: concrete stdin/stdout implementations of the domain ports.

pub mod console;

//! Adapters - concrete implementations of ports (traits)

mod console_gate;
mod fixed_gate;
#[cfg(test)]
pub mod mock_keystore;
mod software_keystore;

pub use console_gate::{stdin_lines, ConsoleGate, LineReceiver};
pub use fixed_gate::FixedGate;
pub use software_keystore::SoftwareKeyStore;

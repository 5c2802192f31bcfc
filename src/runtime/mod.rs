pub mod effect;
pub mod intent;
pub mod key_bindings;
pub mod reducer;
pub mod runner;

pub use effect::Effect;
pub use intent::Intent;
pub use key_bindings::{KeyBinding, KeyBindings};
pub use reducer::Reducer;
pub use runner::Runtime;

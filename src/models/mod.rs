mod intent;
mod system;

pub use intent::*;
pub use system::*;

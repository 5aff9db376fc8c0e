pub mod debug;
pub mod feedback;
pub mod passphrase;
pub mod start;

pub use debug::{cancel_debug, debug};
pub use feedback::{cancel, feedback};
pub use passphrase::passphrase;
pub use start::start;

use crate::bot::Data;

type Error = Box<dyn std::error::Error + Send + Sync>;

/// Get all registered commands
pub fn all_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        start(),
        passphrase(),
        feedback(),
        cancel(),
        debug(),
        cancel_debug(),
    ]
}

//! Static user-facing strings.
//!
//! Keep every string the bot sends in this module so wording stays in one
//! place and is easy to update or translate.

pub const WELCOME_MESSAGE: &str =
    "Hi! I generate passphrases at five strengths.\n\
     Send one of these phrases, or use `/passphrase`:\n\n\
     Generate Weak password\n\
     Generate Normal password\n\
     Generate Strong password\n\
     Generate Stronger password\n\
     Generate Insane password\n\
     Send Feedback";

pub const NOT_STARTED: &str = "Use /start first so I can set up this chat.";

pub const ASK_FEEDBACK: &str =
    "Write your feedback as a single message. Send `Cancel` to go back to the menu.";
pub const FEEDBACK_DONE: &str = "Done! Your feedback has been forwarded to the maintainers.";
pub const CANCELLED: &str = "Cancelled. Back to the menu.";

pub const DEBUG_ENABLED: &str = "Debug mode: this account now receives relayed feedback.";
pub const DEBUG_DISABLED: &str = "success";

/// Menu phrases matched verbatim against plain chat messages.
pub const MENU_WEAK: &str = "Generate Weak password";
pub const MENU_NORMAL: &str = "Generate Normal password";
pub const MENU_STRONG: &str = "Generate Strong password";
pub const MENU_STRONGER: &str = "Generate Stronger password";
pub const MENU_INSANE: &str = "Generate Insane password";
pub const MENU_FEEDBACK: &str = "Send Feedback";
pub const MENU_CANCEL: &str = "Cancel";

const FEEDBACK_MARKER: &str = " sent feedback: ";

/// Line relayed to each admin for one piece of feedback.
pub fn feedback_message(author: &str, text: &str) -> String {
    format!("{author}{FEEDBACK_MARKER}{text}")
}

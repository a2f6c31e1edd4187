pub mod responder;
pub mod rules;
pub mod session;

pub use responder::Responder;
pub use rules::{RuleEntry, RuleTable};
pub use session::{ChatSession, Exchange, SUGGESTIONS, WELCOME_TEXT};

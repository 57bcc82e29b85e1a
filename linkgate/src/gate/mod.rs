// Gate module
//
// Per-request access decisions for the gated proxy:
// - bot_classifier: recognise link-preview crawlers from the User-Agent
// - cookie: pull the authkey cookie out of the Cookie header
// - dispatcher: decide pass/deny and forward or answer with the 404 page
// - not_found: the static 404 page

pub mod bot_classifier;
pub mod cookie;
pub mod dispatcher;
pub mod not_found;

pub use bot_classifier::{BotClassifier, ClassificationResult, PreviewBotRule};
pub use dispatcher::{AccessGate, GateDecision};

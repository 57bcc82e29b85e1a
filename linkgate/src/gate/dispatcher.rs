use crate::gate::bot_classifier::BotClassifier;
use crate::gate::cookie::{cookie_header, extract_authkey};
use crate::gate::not_found::not_found_response;
use crate::proxy::upstream::Upstream;
use anyhow::Result;
use hyper::header::USER_AGENT;
use hyper::{Body, HeaderMap, Request, Response};
use log::{debug, error, info};
use std::fmt::Display;
use std::net::IpAddr;

/// Terminal outcome of classifying one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// A known link-preview crawler; forwarded regardless of cookies.
    PassAsBot { bot_name: String },
    /// Carries an `authkey` cookie (any value, including empty).
    PassAsAuthorized,
    /// Neither; gets the static 404 page.
    Deny,
}

impl GateDecision {
    pub fn is_pass(&self) -> bool {
        !matches!(self, GateDecision::Deny)
    }
}

impl Display for GateDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateDecision::PassAsBot { bot_name } => write!(f, "pass (bot: {})", bot_name),
            GateDecision::PassAsAuthorized => write!(f, "pass (authkey)"),
            GateDecision::Deny => write!(f, "deny"),
        }
    }
}

fn user_agent(headers: &HeaderMap) -> &str {
    headers.get(USER_AGENT).and_then(|v| v.to_str().ok()).unwrap_or("")
}

/// Access gate in front of an origin.
///
/// Bot check first, then the cookie check; the first one that passes forwards the
/// request untouched, otherwise the visitor gets a 404. Nothing is kept between requests.
pub struct AccessGate<U: Upstream> {
    classifier: BotClassifier,
    upstream: U,
}

impl<U: Upstream> AccessGate<U> {
    pub fn new(classifier: BotClassifier, upstream: U) -> Self {
        Self { classifier, upstream }
    }

    /// Decide what to do with a request from its headers alone
    pub fn decide(&self, headers: &HeaderMap) -> GateDecision {
        let classification = self.classifier.classify(user_agent(headers));
        debug!("Classified request: {}", classification);
        if let Some(bot_name) = classification.bot_name {
            return GateDecision::PassAsBot { bot_name };
        }

        if extract_authkey(cookie_header(headers)).is_some() {
            GateDecision::PassAsAuthorized
        } else {
            GateDecision::Deny
        }
    }

    /// Handle one inbound request.
    ///
    /// Forward failures are returned as errors and left to the server loop; they are not
    /// turned into a response here.
    pub async fn handle(&self, client_ip: IpAddr, req: Request<Body>) -> Result<Response<Body>> {
        let decision = self.decide(req.headers());
        info!(
            "Received request from {ip} for {method} {path} -> {decision}",
            ip = client_ip,
            method = req.method(),
            path = req.uri().path(),
            decision = decision
        );

        if !decision.is_pass() {
            return Ok(not_found_response()?);
        }

        let path = req.uri().path().to_string();
        match self.upstream.forward(client_ip, req).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("Origin forward failed for {path} ({decision}): {e}", path = path, decision = decision, e = e);
                Err(e.into())
            }
        }
    }
}

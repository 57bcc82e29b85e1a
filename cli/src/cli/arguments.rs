use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use hyper::Uri;
use linkgate::config::env_vars;
use linkgate::gate::BotClassifier;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "linkgate", about, author, version, long_about = None, propagate_version = true)]
pub struct LinkgateArguments {
    #[arg(short = 'v', long = "verbose", global = true, help = "Enable verbose logging")]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: LinkgateCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LinkgateCommands {
    #[clap(name = "gate", about = "Run the access gate: preview bots and authkey holders reach the origin, everyone else gets a 404")]
    Gate {
        /// Origin base URL (plain http, e.g. http://127.0.0.1:3000)
        #[arg(short = 'o', long = "origin", env = env_vars::ORIGIN, default_value = "http://127.0.0.1:3000")]
        origin: String,
        /// Address to listen on
        #[arg(short = 'l', long = "listen", env = env_vars::GATE_LISTEN, default_value = "0.0.0.0:8080")]
        listen: SocketAddr,
    },
    #[clap(name = "rewrite", about = "Run the host-rewrite proxy; the target host is read from TARGET_HOST")]
    Rewrite {
        /// Address to listen on
        #[arg(short = 'l', long = "listen", env = env_vars::REWRITE_LISTEN, default_value = "0.0.0.0:8081")]
        listen: SocketAddr,
    },
    #[clap(name = "classify", about = "Show how a User-Agent would be classified")]
    Classify { user_agent: String },
}

/// The origin must be an absolute http:// URL with a host; the path, if any, is ignored
pub fn validate_origin(origin: &str) -> Result<()> {
    let uri = origin.parse::<Uri>().map_err(|e| anyhow!("Invalid origin '{}': {}", origin, e))?;
    if uri.scheme_str() != Some("http") {
        return Err(anyhow!("Origin must use http:// (TLS is terminated in front of linkgate): {}", origin));
    }
    if uri.authority().is_none() {
        return Err(anyhow!("Origin has no host: {}", origin));
    }
    Ok(())
}

/// Print the classification of a User-Agent the way the gate would see it
pub fn print_classification(classifier: &BotClassifier, user_agent: &str) {
    let result = classifier.classify(user_agent);
    match result.bot_name {
        Some(name) => println!("\x1b[1;32mbot\x1b[0m: \x1b[1;36m{}\x1b[0m", name),
        None => println!("\x1b[1;33mnot a bot\x1b[0m"),
    }
}

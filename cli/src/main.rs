mod cli;
mod proxy;

use crate::cli::LinkgateArguments;
use crate::cli::arguments::{LinkgateCommands, print_classification, validate_origin};
use anyhow::Result;
use clap::Parser;
use linkgate::config::{self, env_vars};
use linkgate::gate::{AccessGate, BotClassifier};
use linkgate::proxy::{HostRewriteProxy, HttpsUpstream, OriginUpstream};
use log::{LevelFilter, info, trace};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = LinkgateArguments::parse();
    pretty_env_logger::env_logger::builder()
        .format_timestamp(None)
        .filter_level(if args.verbose { LevelFilter::Trace } else { LevelFilter::Info })
        .init();

    trace!("Arguments: {:#?}", args);
    for &var_name in env_vars::all_env_vars() {
        trace!("{:<25} = {}", var_name, std::env::var(var_name).unwrap_or_else(|_| "[NOT SET]".to_string()));
    }

    match args.command {
        LinkgateCommands::Classify { user_agent } => {
            print_classification(&BotClassifier::preview_bots()?, &user_agent);
            Ok(())
        }
        LinkgateCommands::Gate { origin, listen } => {
            validate_origin(&origin)?;
            let classifier = BotClassifier::preview_bots()?;
            info!("Starting linkgate access gate -> {} ({} preview bot rules)", origin, classifier.get_rules().len());

            let gate = Arc::new(AccessGate::new(classifier, OriginUpstream::new(origin)));
            proxy::serve("Access gate", listen, move |client_ip, req| {
                let gate = gate.clone();
                async move { gate.handle(client_ip, req).await }
            })
            .await
        }
        LinkgateCommands::Rewrite { listen } => {
            info!("Starting linkgate host rewrite proxy -> https://{}", config::target_host());

            let rewrite = Arc::new(HostRewriteProxy::new(HttpsUpstream::default()));
            proxy::serve("Host rewrite proxy", listen, move |client_ip, req| {
                let rewrite = rewrite.clone();
                async move { Ok::<_, anyhow::Error>(rewrite.handle(client_ip, req).await) }
            })
            .await
        }
    }
}

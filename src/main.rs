mod auction;
mod config;
mod formatter;

use crate::auction::prelude::*;
use colored::Colorize;

#[tokio::main]
async fn main() {
    // Every failure lands here; the process still exits normally.
    if let Err(err) = run().await {
        eprintln!("{}", format!("{err:#}").red());
    }
}

async fn run() -> anyhow::Result<()> {
    let config = crate::config::Config::from_env()?;

    let access_token = authenticate(&config).await?;
    let client = Client::new(&config.api_host, &access_token)?;
    let envelope = query_purchased_assets(&client, &config.auction_code).await?;

    print!("{}", crate::formatter::render(&envelope)?);

    Ok(())
}

async fn authenticate(config: &crate::config::Config) -> anyhow::Result<String> {
    let outcome =
        initiate_user_password_auth(&config.client_id, &config.username, &config.password).await?;

    match outcome {
        AuthOutcome::Authenticated { access_token } => Ok(access_token),
        AuthOutcome::ChallengeRequired { challenge } => {
            anyhow::bail!("additional challenge {challenge} is required")
        }
    }
}

use clap::{Args, Parser, Subcommand};
use riffs::params::Page;
use riffs::{auth, marketplace, riff, user, Client};
use serde_json::{json, Value};

use crate::errors::Error;

/// Read-only access to the riffs backend api
#[derive(Parser, Debug)]
#[command(name = "riffs")]
#[command(version)]
#[command(about = "Query the riffs backend api and print the json response")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Page number, the endpoint default when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Page size, the endpoint default when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

impl From<PageArgs> for Page {
    fn from(args: PageArgs) -> Self {
        Page {
            page: args.page,
            limit: args.limit,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show a profile
    Profile { wallet: String },

    /// List the nfts of a profile
    Nfts {
        wallet: String,
        #[command(flatten)]
        page: PageArgs,
        /// Which nfts to list
        #[arg(long = "type", default_value = user::DEFAULT_NFT_TYPE)]
        kind: String,
    },

    /// List the collections of a profile
    Collections {
        wallet: String,
        #[command(flatten)]
        page: PageArgs,
    },

    /// List the favorites of a profile
    Favorites {
        wallet: String,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Activity of one profile, or of everyone without a wallet
    Activity {
        wallet: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Tipping tiers of a profile
    Tiers { wallet: String },

    /// Staking defaults of a profile
    Staking { wallet: String },

    /// The profile that received the most tips
    MostTipped,

    /// Show a riff by id
    Riff {
        id: String,
        #[arg(long, default_value = "")]
        wallet: String,
    },

    /// The newest riff
    Latest,

    /// A random riff
    Random,

    /// Marketplace listings
    Listings {
        #[arg(long, default_value = "")]
        wallet: String,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Latest riff, random riff and recent activity in one go
    Feed,

    /// Request a sign-in nonce for a wallet
    Nonce { wallet: String },
}

/// Runs `command` and returns the response body.
///
/// # Errors
/// [`Error::Api`] if the request failed, the failure has been published by then.
pub async fn run(command: Command, client: &Client) -> Result<Value, Error> {
    let value = match command {
        Command::Profile { wallet } => user::profile(client, &wallet).await?,
        Command::Nfts { wallet, page, kind } => {
            user::nfts(client, &wallet, page.into(), Some(kind.as_str())).await?
        }
        Command::Collections { wallet, page } => {
            user::collections(client, &wallet, page.into()).await?
        }
        Command::Favorites { wallet, page } => user::favorites(client, &wallet, page.into()).await?,
        Command::Activity {
            wallet: Some(wallet),
            page,
        } => user::activity(client, &wallet, page.into()).await?,
        Command::Activity { wallet: None, page } => user::all_activity(client, page.into()).await?,
        Command::Tiers { wallet } => user::tipping_tiers(client, &wallet).await?,
        Command::Staking { wallet } => user::staking_settings(client, &wallet).await?,
        Command::MostTipped => user::most_tipped_profile(client).await?,
        Command::Riff { id, wallet } => riff::get(client, &id, &wallet).await?,
        Command::Latest => riff::latest(client).await?,
        Command::Random => riff::random(client).await?,
        Command::Listings { wallet, page } => {
            marketplace::listings(client, &wallet, page.into()).await?
        }
        Command::Feed => {
            let (latest, random, activity) = futures::try_join!(
                riff::latest(client),
                riff::random(client),
                user::all_activity(client, Page::default()),
            )?;
            json!({
                "latest": latest,
                "random": random,
                "activity": activity,
            })
        }
        Command::Nonce { wallet } => auth::nonce(client, &wallet).await?,
    };
    Ok(value)
}

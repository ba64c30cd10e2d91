use crate::prelude::*;
use clap::Parser;

mod classify;
mod error;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify string tokens into odd/even/alphabetic/special buckets"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "SIFT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the classification API over HTTP
    Serve(crate::serve::App),

    /// Classify tokens from the command line
    Classify(crate::classify::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
        SubCommands::Classify(sub_app) => crate::classify::run(sub_app, app.global).await,
    }
}

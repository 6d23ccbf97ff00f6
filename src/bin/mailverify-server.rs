use anyhow::{Context, Result};

#[path = "mailverify-server/args.rs"]
mod args;

use args::ServerArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    mailverify::logging::init();

    let config = args.into_config();
    mailverify::serve(config)
        .await
        .context("mail verification server stopped with an error")
}

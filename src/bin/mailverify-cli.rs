use anyhow::{Context, Result};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use mailverify::{MailVerifierApiClient, Tier, VerificationResponse};

use std::io::{self, BufRead};

#[path = "mailverify-cli/args.rs"]
mod args;
#[path = "mailverify-cli/output.rs"]
mod output;

use args::{Cli, Commands};
use output::Row;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = HttpClientBuilder::default()
        .build(&cli.server)
        .with_context(|| format!("invalid --server '{}'", cli.server))?;

    let (tier, emails) = match cli.cmd {
        Some(Commands::Syntax { email }) => (Tier::Syntax, vec![email]),
        Some(Commands::Simple { email }) => (Tier::Simple, vec![email]),
        Some(Commands::Full { email }) => (Tier::Full, vec![email]),
        None if cli.stdin => {
            let mut emails = Vec::new();
            for line in io::stdin().lock().lines() {
                emails.push(line.context("read stdin")?);
            }
            (cli.tier()?, emails)
        }
        None => {
            Cli::clap_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let mut rows = Vec::with_capacity(emails.len());
    for email in emails {
        let response = call(&client, tier, email.clone())
            .await
            .with_context(|| format!("{tier} verification of {email} failed"))?;
        rows.push(Row::new(email, response));
    }

    output::print(&rows, &cli.format)?;

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    if rows.iter().any(|r| !r.valid) {
        std::process::exit(2);
    }
    Ok(())
}

async fn call(client: &HttpClient, tier: Tier, email: String) -> Result<VerificationResponse> {
    let response = match tier {
        Tier::Syntax => client.syntax_verification(email).await?,
        Tier::Simple => client.simple_verification(email).await?,
        Tier::Full => client.full_verification(email).await?,
    };
    Ok(response)
}

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mailverify::Tier;

#[derive(Parser)]
#[command(name = "mailverify-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// URL du serveur mailverify
    #[arg(long, env = "MAILVERIFY_SERVER", default_value = "http://127.0.0.1:50051")]
    pub server: String,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// niveau pour --stdin: syntax|simple|full
    #[arg(long, default_value = "syntax")]
    pub tier: String,

    /// format: human|json
    #[arg(long, default_value = "human")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// syntaxe seule
    Syntax { email: String },
    /// syntaxe + MX
    Simple { email: String },
    /// syntaxe + MX + vérificateur distant
    Full { email: String },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn tier(&self) -> Result<Tier> {
        tier_from_str(&self.tier)
    }
}

pub fn tier_from_str(s: &str) -> Result<Tier> {
    match s {
        "syntax" => Ok(Tier::Syntax),
        "simple" => Ok(Tier::Simple),
        "full" => Ok(Tier::Full),
        other => bail!("unknown --tier '{other}', use: syntax|simple|full"),
    }
}

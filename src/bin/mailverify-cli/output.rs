use anyhow::{Result, bail};
use mailverify::VerificationResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct Row {
    pub email: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Row {
    pub fn new(email: String, response: VerificationResponse) -> Self {
        Self {
            email,
            valid: response.valid,
            error_message: response.error_message,
        }
    }
}

pub fn print(rows: &[Row], format: &str) -> Result<()> {
    match format {
        "human" => {
            for r in rows {
                if r.valid {
                    println!("[OK]    {}", r.email);
                } else {
                    println!(
                        "[INVALID] {} :: {}",
                        r.email,
                        r.error_message.as_deref().unwrap_or("")
                    );
                }
            }
        }
        "json" => println!("{}", serde_json::to_string_pretty(rows)?),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
    Ok(())
}

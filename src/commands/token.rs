//! `issue-token` command.

use clap::Args;
use uuid::Uuid;

use tubely_auth::JwtEncoder;
use tubely_core::config::AppConfig;
use tubely_core::error::AppError;
use tubely_core::types::UserId;

/// Arguments for the issue-token command
#[derive(Debug, Args)]
pub struct IssueTokenArgs {
    /// User the token is issued for; a random id is used when omitted
    #[arg(long)]
    pub user_id: Option<Uuid>,
}

/// Sign an access token and print it with its user and expiry
pub fn execute(args: &IssueTokenArgs, config: &AppConfig) -> Result<(), AppError> {
    let user_id = args.user_id.map(UserId::from_uuid).unwrap_or_default();
    let issued = JwtEncoder::new(&config.auth).issue_access_token(user_id)?;

    println!("user_id:    {user_id}");
    println!("expires_at: {}", issued.expires_at.to_rfc3339());
    println!("token:      {}", issued.token);
    Ok(())
}

//! Promote an account to `admin`, or demote it with `--revoke`.
//!
//! ```text
//! TEMPLE_DATABASE_URL=postgres://... grant-admin --login abbot
//! ```

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use temple_backend::domain::UserRole;
use temple_backend::domain::ports::UserRepository;
use temple_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

#[derive(Debug, Parser)]
#[command(name = "grant-admin", about = "Change a temple back-office account's role")]
struct Args {
    /// Username or email of the account.
    #[arg(long)]
    login: String,
    /// Demote to `user` instead of promoting.
    #[arg(long)]
    revoke: bool,
    /// Database URL; falls back to TEMPLE_DATABASE_URL.
    #[arg(long, env = "TEMPLE_DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    let args = Args::parse();
    let url = args
        .database_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| eyre!("TEMPLE_DATABASE_URL or --database-url is required"))?;
    let role = if args.revoke {
        UserRole::User
    } else {
        UserRole::Admin
    };

    let pool = DbPool::new(PoolConfig::new(url).with_max_size(1))
        .await
        .wrap_err("build database pool")?;
    let users = DieselUserRepository::new(pool);

    match users
        .set_role(&args.login, role)
        .await
        .wrap_err("update role")?
    {
        Some(user) => {
            info!(username = %user.username(), role = %user.role(), "role updated");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            warn!(login = %args.login, "no account matches");
            Ok(ExitCode::FAILURE)
        }
    }
}

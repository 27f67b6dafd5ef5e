//! Example: Listing the members of an enterprise
//!
//! Reads the client configuration from `SCM_GRAPHQL_*` variables (or a
//! `scm-directory.toml` in the working directory) and prints every member of
//! the given enterprise, then looks up one account.
//!
//! # Usage
//!
//! ```bash
//! export GITHUB_TOKEN=ghp_...
//! RUST_LOG=scm_directory_core=debug cargo run --example list_members -- acme ai_humanoid
//! ```

use anyhow::Context;
use scm_directory_core::{AccountQuery, MembersQuery};
use scm_directory_infra::GithubScmGraphql;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let slug = args.next().context("usage: list_members <enterprise-slug> [login]")?;
    let login = args.next();
    let token = std::env::var("GITHUB_TOKEN").context("GITHUB_TOKEN must be set")?;

    let client = GithubScmGraphql::load()?;

    let members = client
        .list_enterprise_members(&MembersQuery::new(&slug).with_token(&token))
        .await
        .with_context(|| format!("listing members of {slug}"))?;

    println!("{} member(s) in {slug}", members.len());
    for member in &members {
        let kind = member.kind.map(|k| k.to_string()).unwrap_or_else(|| "?".into());
        println!("  {:<24} {:<22} {}", member.login, kind, member.name.as_deref().unwrap_or("-"));
    }

    if let Some(login) = login {
        let query = AccountQuery::new(&login).in_enterprise(&slug).with_token(&token);
        match client.get_enterprise_user_account(&query).await? {
            Some(account) => println!("\n{login} -> {}", serde_json::to_string_pretty(&account)?),
            None => println!("\n{login} does not resolve to exactly one account in {slug}"),
        }
    }

    Ok(())
}

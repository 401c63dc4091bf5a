//! # Mention Resolver Demo
//!
//! Seeds a small directory and resolves the mentions given on the command line
//! (defaults to `user:1 team:1`).
//!
//! ```bash
//! RUST_LOG=info cargo run -- user:2 team:1 team:2
//! ```

use mention_resolver::lifecycle::{setup_tracing, DirectoryConfig, DirectorySystem};
use mention_resolver::model::{Mention, OrganizationId, TeamCreate, UserCreate};
use tracing::{info, Instrument};

const DEFAULT_MENTIONS: [&str; 2] = ["user:1", "team:1"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let mut tokens: Vec<String> = std::env::args().skip(1).collect();
    if tokens.is_empty() {
        tokens = DEFAULT_MENTIONS.iter().map(|token| token.to_string()).collect();
    }
    let mentions = tokens
        .iter()
        .map(|token| token.parse::<Mention>())
        .collect::<Result<Vec<_>, _>>()?;

    let system = DirectorySystem::new(&DirectoryConfig::from_env());
    let organization_id = OrganizationId(1);

    let span = tracing::info_span!("seeding");
    async {
        info!("Seeding directory");
        let mut users = Vec::new();
        for (name, email) in [
            ("Alice", "alice@example.com"),
            ("Bob", "bob@example.com"),
            ("Carol", "carol@example.com"),
            ("Dave", "dave@example.com"),
        ] {
            let params = UserCreate {
                name: name.to_string(),
                email: email.to_string(),
            };
            users.push(system.user_client.create_user(params).await?);
        }

        let backend = system
            .team_client
            .create_team(TeamCreate {
                organization_id,
                slug: "backend".to_string(),
            })
            .await?;
        let frontend = system
            .team_client
            .create_team(TeamCreate {
                organization_id,
                slug: "frontend".to_string(),
            })
            .await?;

        for user_id in &users[..3] {
            system.team_client.add_member(backend, *user_id).await?;
        }
        for user_id in &users[2..] {
            system.team_client.add_member(frontend, *user_id).await?;
        }
        Ok::<_, mention_resolver::error::DirectoryError>(())
    }
    .instrument(span)
    .await?;

    let resolver = system.mention_resolver();
    let mentioned = resolver
        .extract_user_ids(organization_id, &mentions)
        .instrument(tracing::info_span!("resolving"))
        .await?;

    info!(
        users = ?mentioned.users,
        team_users = ?mentioned.team_users,
        "Mentions resolved"
    );
    for user_id in mentioned.recipients() {
        println!("{}", user_id);
    }

    drop(resolver);
    system.shutdown().await?;
    Ok(())
}

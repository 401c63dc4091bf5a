use crate::clients::{DirectoryResolver, TeamClient, UserClient};
use crate::lifecycle::DirectoryConfig;
use crate::resolver::MentionResolver;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Resolver backed by the running directory actors.
pub type DirectoryMentionResolver = MentionResolver<DirectoryResolver, TeamClient>;

/// The runtime orchestrator for the user and team directories.
///
/// `DirectorySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the store actors
/// - **Dependency Wiring**: building mention resolvers over the clients
pub struct DirectorySystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Team actor
    pub team_client: TeamClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl DirectorySystem {
    /// Spawns the user and team actors. Must be called inside a Tokio runtime.
    pub fn new(config: &DirectoryConfig) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(config.buffer_size);
        let (team_actor, team_client) = crate::team_actor::new(config.buffer_size);

        let user_handle = tokio::spawn(user_actor.run());
        let team_handle = tokio::spawn(team_actor.run());
        info!(buffer_size = config.buffer_size, "Directory started");

        Self {
            user_client,
            team_client,
            handles: vec![user_handle, team_handle],
        }
    }

    /// Builds a resolver over this directory.
    pub fn mention_resolver(&self) -> DirectoryMentionResolver {
        MentionResolver::new(
            DirectoryResolver::new(self.user_client.clone(), self.team_client.clone()),
            self.team_client.clone(),
        )
    }

    /// Gracefully shuts down the directory.
    ///
    /// Drops the clients, then waits for every actor task. Returns the first
    /// task failure (e.g., a panicked actor).
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down directory...");

        drop(self.user_client);
        drop(self.team_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Directory shutdown complete.");
        Ok(())
    }
}

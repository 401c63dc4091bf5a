use mention_resolver::clients::DirectoryClient;
use mention_resolver::error::DirectoryError;
use mention_resolver::lifecycle::{DirectoryConfig, DirectorySystem};
use mention_resolver::model::{Mention, OrganizationId, TeamCreate, TeamId, UserCreate, UserId};
use std::collections::BTreeSet;

const ORG: OrganizationId = OrganizationId(1);
const OTHER_ORG: OrganizationId = OrganizationId(2);

async fn create_user(system: &DirectorySystem, name: &str) -> UserId {
    system
        .user_client
        .create_user(UserCreate {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
        .expect("Failed to create user")
}

async fn create_team(
    system: &DirectorySystem,
    organization_id: OrganizationId,
    slug: &str,
    members: &[UserId],
) -> TeamId {
    let team_id = system
        .team_client
        .create_team(TeamCreate {
            organization_id,
            slug: slug.to_string(),
        })
        .await
        .expect("Failed to create team");
    for user_id in members {
        system
            .team_client
            .add_member(team_id, *user_id)
            .await
            .expect("Failed to add member");
    }
    team_id
}

fn set(ids: &[UserId]) -> BTreeSet<UserId> {
    ids.iter().copied().collect()
}

/// Full end-to-end test: real actors behind both collaborators.
#[tokio::test]
async fn test_user_and_team_mentions_end_to_end() {
    let system = DirectorySystem::new(&DirectoryConfig::default());

    let alice = create_user(&system, "Alice").await;
    let bob = create_user(&system, "Bob").await;
    let carol = create_user(&system, "Carol").await;
    let team = create_team(&system, ORG, "backend", &[alice, bob, carol]).await;

    let resolver = system.mention_resolver();
    let mentioned = resolver
        .extract_user_ids(ORG, &[Mention::User(alice), Mention::Team(team)])
        .await
        .expect("Failed to resolve mentions");

    assert_eq!(mentioned.users, set(&[alice]));
    assert_eq!(mentioned.team_users, set(&[bob, carol]));

    drop(resolver);
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_overlapping_teams_from_parsed_tokens() {
    let system = DirectorySystem::new(&DirectoryConfig::default());

    let alice = create_user(&system, "Alice").await;
    let bob = create_user(&system, "Bob").await;
    let carol = create_user(&system, "Carol").await;
    let backend = create_team(&system, ORG, "backend", &[alice, bob]).await;
    let frontend = create_team(&system, ORG, "frontend", &[bob, carol]).await;

    let mentions: Vec<Mention> = [format!("team:{}", backend.0), format!("team:{}", frontend.0)]
        .iter()
        .map(|token| token.parse::<Mention>().unwrap())
        .collect();

    let resolver = system.mention_resolver();
    let mentioned = resolver.extract_user_ids(ORG, &mentions).await.unwrap();

    assert!(mentioned.users.is_empty());
    assert_eq!(mentioned.team_users, set(&[alice, bob, carol]));

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_mentions_are_dropped() {
    let system = DirectorySystem::new(&DirectoryConfig::default());

    let alice = create_user(&system, "Alice").await;
    let bob = create_user(&system, "Bob").await;
    let team = create_team(&system, ORG, "backend", &[alice, bob]).await;

    let resolver = system.mention_resolver();
    let mentioned = resolver
        .extract_user_ids(
            ORG,
            &[
                Mention::User(bob),
                Mention::User(UserId(404)),
                Mention::Team(TeamId(404)),
                Mention::Team(team),
            ],
        )
        .await
        .unwrap();

    assert_eq!(mentioned.users, set(&[bob]));
    assert_eq!(mentioned.team_users, set(&[alice]));

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deactivated_user_mentioned_directly_and_via_team() {
    let system = DirectorySystem::new(&DirectoryConfig::default());

    let alice = create_user(&system, "Alice").await;
    let bob = create_user(&system, "Bob").await;
    let team = create_team(&system, ORG, "backend", &[alice, bob]).await;
    system.user_client.set_active(bob, false).await.unwrap();

    let resolver = system.mention_resolver();
    let mentioned = resolver
        .extract_user_ids(ORG, &[Mention::User(bob), Mention::Team(team)])
        .await
        .unwrap();

    assert_eq!(mentioned.users, set(&[bob]));
    assert_eq!(mentioned.team_users, set(&[alice]));
    assert!(mentioned.users.is_disjoint(&mentioned.team_users));

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_membership_is_scoped_to_organization() {
    let system = DirectorySystem::new(&DirectoryConfig::default());

    let alice = create_user(&system, "Alice").await;
    let bob = create_user(&system, "Bob").await;
    let carol = create_user(&system, "Carol").await;
    let ours = create_team(&system, ORG, "backend", &[alice]).await;
    let theirs = create_team(&system, OTHER_ORG, "backend", &[bob]).await;
    let shared = create_team(&system, ORG, "ops", &[carol, bob]).await;
    system
        .team_client
        .set_member_active(shared, bob, false)
        .await
        .unwrap();

    let resolver = system.mention_resolver();
    let mentioned = resolver
        .extract_user_ids(
            ORG,
            &[Mention::Team(ours), Mention::Team(theirs), Mention::Team(shared)],
        )
        .await
        .unwrap();

    assert_eq!(mentioned.team_users, set(&[alice, carol]));

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_and_duplicates_do_not_change_result() {
    let system = DirectorySystem::new(&DirectoryConfig { buffer_size: 4 });

    let alice = create_user(&system, "Alice").await;
    let bob = create_user(&system, "Bob").await;
    let carol = create_user(&system, "Carol").await;
    let backend = create_team(&system, ORG, "backend", &[alice, bob]).await;
    let frontend = create_team(&system, ORG, "frontend", &[bob, carol]).await;

    let mut mentions = vec![
        Mention::Team(backend),
        Mention::User(bob),
        Mention::Team(frontend),
        Mention::User(bob),
        Mention::Team(backend),
    ];

    let resolver = system.mention_resolver();
    let expected = resolver.extract_user_ids(ORG, &mentions).await.unwrap();
    assert_eq!(expected.users, set(&[bob]));
    assert_eq!(expected.team_users, set(&[alice, carol]));

    mentions.reverse();
    assert_eq!(resolver.extract_user_ids(ORG, &mentions).await.unwrap(), expected);
    mentions.rotate_left(2);
    assert_eq!(resolver.extract_user_ids(ORG, &mentions).await.unwrap(), expected);

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_directory_maintenance() {
    let system = DirectorySystem::new(&DirectoryConfig::default());

    let alice = create_user(&system, "Alice").await;
    let team = create_team(&system, ORG, "backend", &[alice]).await;

    let duplicate = system.team_client.add_member(team, alice).await;
    assert!(matches!(duplicate, Err(DirectoryError::AlreadyExists(_))));

    system.team_client.remove_member(team, alice).await.unwrap();
    let fetched = system.team_client.get(team).await.unwrap().unwrap();
    assert!(fetched.members.is_empty());
    assert_eq!(fetched.organization_id, ORG);

    let missing_team = system.team_client.add_member(TeamId(99), alice).await;
    assert_eq!(missing_team, Err(DirectoryError::NotFound("team_99".to_string())));

    let invalid = system
        .user_client
        .create_user(UserCreate {
            name: "Nobody".to_string(),
            email: "not-an-email".to_string(),
        })
        .await;
    assert!(matches!(invalid, Err(DirectoryError::Validation(_))));

    system.shutdown().await.unwrap();
}

/// Concurrent resolutions share the same actors without interfering.
#[tokio::test]
async fn test_concurrent_resolutions() {
    let system = DirectorySystem::new(&DirectoryConfig::default());

    let alice = create_user(&system, "Alice").await;
    let bob = create_user(&system, "Bob").await;
    let team = create_team(&system, ORG, "backend", &[alice, bob]).await;

    let mut handles = vec![];
    for i in 0..10 {
        let resolver = system.mention_resolver();
        let direct = if i % 2 == 0 { alice } else { bob };
        handles.push(tokio::spawn(async move {
            resolver
                .extract_user_ids(ORG, &[Mention::User(direct), Mention::Team(team)])
                .await
                .map(|mentioned| (direct, mentioned))
        }));
    }

    for handle in handles {
        let (direct, mentioned) = handle.await.unwrap().unwrap();
        assert_eq!(mentioned.users, set(&[direct]));
        assert_eq!(mentioned.team_users.len(), 1);
        assert!(!mentioned.team_users.contains(&direct));
    }

    system.shutdown().await.unwrap();
}

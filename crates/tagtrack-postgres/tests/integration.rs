use std::sync::Arc;

use tagtrack_domain::{
    DeviceStateRepository, Presence, PresenceService, SeenEvent, UpdateStateInput,
};
use tagtrack_postgres::{PostgresClient, PostgresDeviceStateRepository};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres;

const SCHEMA: &str = include_str!("../migrations/0001_create_device_states.sql");

async fn start_client() -> (testcontainers::ContainerAsync<Postgres>, PostgresClient) {
    let postgres = Postgres::default().start().await.unwrap();
    let host = postgres.get_host().await.unwrap();
    let port = postgres.get_host_port_ipv4(5432).await.unwrap();

    let client = PostgresClient::new(
        &host.to_string(),
        port,
        "postgres",
        "postgres",
        "postgres",
        5,
    )
    .unwrap();

    client.ping().await.unwrap();

    let conn = client.get_connection().await.unwrap();
    conn.batch_execute(SCHEMA).await.unwrap();

    (postgres, client)
}

#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
async fn test_postgres_connection() {
    let postgres = Postgres::default().start().await.unwrap();
    let host = postgres.get_host().await.unwrap();
    let port = postgres.get_host_port_ipv4(5432).await.unwrap();

    let client = PostgresClient::new(
        &host.to_string(),
        port,
        "postgres",
        "postgres",
        "postgres",
        5,
    )
    .unwrap();

    client.ping().await.unwrap();
}

#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
async fn test_state_round_trip() {
    let (_postgres, client) = start_client().await;
    let repo = PostgresDeviceStateRepository::new(client);

    // Unknown device reads back as absent
    let missing = repo.get_state("device-001").await.unwrap();
    assert!(missing.is_none());

    // Seed a checked-in record
    repo.upsert_state(UpdateStateInput {
        device_id: "device-001".to_string(),
        presence: Presence::In,
        room: Some("room-a".to_string()),
    })
    .await
    .unwrap();

    let state = repo.get_state("device-001").await.unwrap().unwrap();
    assert_eq!(state.presence, Presence::In);
    assert_eq!(state.room.as_deref(), Some("room-a"));

    // Toggle it out
    let updated = repo
        .update_state(UpdateStateInput {
            device_id: "device-001".to_string(),
            presence: Presence::Out,
            room: None,
        })
        .await
        .unwrap();
    assert!(updated);

    let state = repo.get_state("device-001").await.unwrap().unwrap();
    assert_eq!(state.presence, Presence::Out);
    assert!(state.room.is_none());
}

#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
async fn test_update_unknown_device_affects_no_rows() {
    let (_postgres, client) = start_client().await;
    let repo = PostgresDeviceStateRepository::new(client);

    let updated = repo
        .update_state(UpdateStateInput {
            device_id: "device-999".to_string(),
            presence: Presence::In,
            room: Some("room-a".to_string()),
        })
        .await
        .unwrap();

    assert!(!updated);
}

#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
async fn test_service_processes_events_against_postgres() {
    let (_postgres, client) = start_client().await;
    let repo = Arc::new(PostgresDeviceStateRepository::new(client));

    repo.upsert_state(UpdateStateInput {
        device_id: "device-001".to_string(),
        presence: Presence::In,
        room: Some("room-a".to_string()),
    })
    .await
    .unwrap();

    let service = PresenceService::new(repo.clone());

    // Same-room observation checks the device out
    let state = service
        .process_event(SeenEvent {
            device_id: "device-001".to_string(),
            room: "room-a".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(state.presence, Presence::Out);

    // Next observation checks it into the new room
    let state = service
        .process_event(SeenEvent {
            device_id: "device-001".to_string(),
            room: "room-b".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(state.presence, Presence::In);
    assert_eq!(state.room.as_deref(), Some("room-b"));

    let stored = repo.get_state("device-001").await.unwrap().unwrap();
    assert_eq!(stored.presence, Presence::In);
    assert_eq!(stored.room.as_deref(), Some("room-b"));
}

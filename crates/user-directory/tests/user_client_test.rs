use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use user_directory::api;
use user_directory::clients::UserClient;
use user_directory::model::{User, UserId, UserInput};
use user_directory::user_actor::{self, UserError};

fn input(id: i64, full_name: &str) -> UserInput {
    UserInput {
        id,
        full_name: full_name.to_string(),
        address: "1 Le Loi".to_string(),
        age: 30,
        coin: 10,
    }
}

/// Real actor, driven through the domain client.
#[tokio::test]
async fn test_user_client_against_real_actor() {
    let (actor, client) = user_actor::new(8);
    let handle = tokio::spawn(actor.run(()));

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].full_name, "John Nguyen");

    let created = client.create_user(input(0, "Linh")).await.unwrap();
    assert_eq!(created.id, UserId(3));

    let updated = client.update_user(UserId(3), input(3, "Linh Pham")).await.unwrap();
    assert_eq!(updated.full_name, "Linh Pham");
    assert_eq!(client.get_user(UserId(3)).await.unwrap(), updated);

    client.delete_user(UserId(3)).await.unwrap();
    assert_eq!(
        client.get_user(UserId(3)).await,
        Err(UserError::NotFound("3".to_string()))
    );
    assert_eq!(
        client.delete_user(UserId(3)).await,
        Err(UserError::NotAccepted("3".to_string()))
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_directory_lists_as_not_found() {
    let (actor, client) = user_actor::with_users(8, Vec::new());
    tokio::spawn(actor.run(()));

    assert!(matches!(
        client.list_users().await,
        Err(UserError::NotFound(_))
    ));
    // The raw trait method still reports the empty list as-is.
    assert_eq!(client.list().await.unwrap(), Vec::<User>::new());

    let first = client.create_user(input(0, "First")).await.unwrap();
    assert_eq!(first.id, UserId(1));
}

/// Mocked actor: the body id is rejected before any request is sent.
#[tokio::test]
async fn test_update_rejects_body_id_without_contacting_actor() {
    let mock = MockClient::<User>::new();
    let client = UserClient::new(mock.client());

    assert_eq!(
        client.update_user(UserId(1), input(0, "x")).await,
        Err(UserError::InvalidBodyId(0))
    );
    assert_eq!(
        client.update_user(UserId(1), input(-2, "x")).await,
        Err(UserError::InvalidBodyId(-2))
    );

    mock.verify();
}

#[tokio::test]
async fn test_framework_errors_map_to_directory_errors() {
    let mock = MockClient::<User>::new();
    mock.expect_update(UserId(5))
        .return_err(FrameworkError::NotFound("5".to_string()));
    mock.expect_delete(UserId(5))
        .return_err(FrameworkError::NotFound("5".to_string()));
    mock.expect_get(UserId(5)).return_ok(None);
    mock.expect_create().return_err(FrameworkError::ActorDropped);

    let client = UserClient::new(mock.client());

    assert_eq!(
        client.update_user(UserId(5), input(5, "x")).await,
        Err(UserError::NotFound("5".to_string()))
    );
    assert_eq!(
        client.delete_user(UserId(5)).await,
        Err(UserError::NotAccepted("5".to_string()))
    );
    assert_eq!(
        client.get_user(UserId(5)).await,
        Err(UserError::NotFound("5".to_string()))
    );
    assert!(matches!(
        client.create_user(input(0, "x")).await,
        Err(UserError::ActorCommunicationError(_))
    ));

    mock.verify();
}

/// An unreachable actor becomes a 500 response, not a panic.
#[tokio::test]
async fn test_unreachable_actor_is_internal_error() {
    let mock = MockClient::<User>::new();
    mock.expect_list().return_err(FrameworkError::ActorClosed);
    let app = api::router(UserClient::new(mock.client()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: api::StatusBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, api::StatusBody::new("INTERNAL", "Actor closed"));

    mock.verify();
}

mod common;

use chrono::Duration;
use common::test_issuer;
use common::test_service;
use common::ACCESS_SECRET;
use common::REFRESH_SECRET;
use credentials::TokenIssuer;
use identity_service::auth::errors::AuthError;
use identity_service::domain::auth::models::EmailAddress;
use identity_service::domain::auth::models::RegisterCommand;
use identity_service::domain::auth::models::UserId;
use identity_service::domain::auth::ports::AuthServicePort;

fn register_command(name: &str, email: &str, password: &str) -> RegisterCommand {
    RegisterCommand::new(
        name.to_string(),
        EmailAddress::new(email.to_string()).unwrap(),
        password.to_string(),
    )
}

#[tokio::test]
async fn test_register_login_bind_and_biometric_login_flow() {
    let service = test_service();

    let registered = service
        .register(register_command("Ada", "ada@example.com", "s3cret!"))
        .await
        .unwrap();
    let user_id = registered.user.id;

    // Login with the same credentials
    let email = EmailAddress::new("ada@example.com".to_string()).unwrap();
    let logged_in = service.login(&email, "s3cret!").await.unwrap();
    assert_eq!(logged_in.user.id, user_id);

    // Bind a biometric token
    let bound = service
        .bind_biometric_key(&user_id, "finger-1")
        .await
        .unwrap();
    assert!(bound.biometric_key_hash.is_some());

    // Biometric login with the bound token yields a token whose subject is
    // the original user id
    let bio = service.biometric_login("finger-1").await.unwrap();
    assert_eq!(bio.user.id, user_id);

    let claims = test_issuer()
        .verify_access(&bio.tokens.access_token)
        .unwrap();
    assert_eq!(claims.sub, user_id.to_string());

    // An unbound biometric token is rejected
    let result = service.biometric_login("finger-2").await;
    assert!(matches!(result.unwrap_err(), AuthError::Unauthorized(_)));
}

#[tokio::test]
async fn test_register_returns_tokens_for_created_user() {
    let service = test_service();

    let payload = service
        .register(register_command("Ada", "ada@example.com", "s3cret!"))
        .await
        .unwrap();

    let access = test_issuer()
        .verify_access(&payload.tokens.access_token)
        .unwrap();
    let refresh = test_issuer()
        .verify_refresh(&payload.tokens.refresh_token)
        .unwrap();

    assert_eq!(access.sub, payload.user.id.to_string());
    assert_eq!(refresh.sub, payload.user.id.to_string());
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict_case_insensitively() {
    let service = test_service();

    service
        .register(register_command("Ada", "ada@example.com", "s3cret!"))
        .await
        .unwrap();

    // Same email in different case, different name and password
    let result = service
        .register(register_command("Grace", "Ada@Example.COM", "d1fferent"))
        .await;

    assert!(matches!(result.unwrap_err(), AuthError::EmailTaken));
}

#[tokio::test]
async fn test_login_failure_kinds_are_distinguishable() {
    let service = test_service();

    service
        .register(register_command("Ada", "ada@example.com", "s3cret!"))
        .await
        .unwrap();

    let known = EmailAddress::new("ada@example.com".to_string()).unwrap();
    let unknown = EmailAddress::new("grace@example.com".to_string()).unwrap();

    let wrong_password = service.login(&known, "wrong!").await;
    assert!(matches!(
        wrong_password.unwrap_err(),
        AuthError::InvalidCredential
    ));

    let unknown_email = service.login(&unknown, "s3cret!").await;
    assert!(matches!(unknown_email.unwrap_err(), AuthError::NotFound(_)));
}

#[tokio::test]
async fn test_refresh_rotates_and_old_token_stays_valid() {
    let service = test_service();

    let registered = service
        .register(register_command("Ada", "ada@example.com", "s3cret!"))
        .await
        .unwrap();
    let user_id = registered.user.id;

    let first = service
        .refresh(&registered.tokens.refresh_token)
        .await
        .unwrap();

    let claims = test_issuer().verify_access(&first.access_token).unwrap();
    assert_eq!(claims.sub, user_id.to_string());

    // No single-use invalidation: refreshing twice from the original
    // token succeeds both times.
    let second = service
        .refresh(&registered.tokens.refresh_token)
        .await
        .unwrap();

    let claims = test_issuer().verify_refresh(&second.refresh_token).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
}

#[tokio::test]
async fn test_refresh_rejects_expired_and_tampered_tokens() {
    let service = test_service();

    // Same secrets, lifetimes already elapsed at issuance
    let expired_issuer = TokenIssuer::new(
        ACCESS_SECRET,
        REFRESH_SECRET,
        Duration::hours(-1),
        Duration::hours(-1),
    );
    let expired = expired_issuer.issue_pair("user123").unwrap();

    let result = service.refresh(&expired.refresh_token).await;
    assert!(matches!(result.unwrap_err(), AuthError::Unauthorized(_)));

    let mut tampered = test_issuer().issue_pair("user123").unwrap().refresh_token;
    tampered.pop();

    let result = service.refresh(&tampered).await;
    assert!(matches!(result.unwrap_err(), AuthError::Unauthorized(_)));

    // An access token never passes refresh verification
    let pair = test_issuer().issue_pair("user123").unwrap();
    let result = service.refresh(&pair.access_token).await;
    assert!(matches!(result.unwrap_err(), AuthError::Unauthorized(_)));
}

#[tokio::test]
async fn test_bind_biometric_key_owned_by_another_user_is_rejected() {
    let service = test_service();

    let ada = service
        .register(register_command("Ada", "ada@example.com", "s3cret!"))
        .await
        .unwrap();
    let grace = service
        .register(register_command("Grace", "grace@example.com", "hunter22"))
        .await
        .unwrap();

    service
        .bind_biometric_key(&ada.user.id, "finger-1")
        .await
        .unwrap();

    let result = service.bind_biometric_key(&grace.user.id, "finger-1").await;
    assert!(matches!(result.unwrap_err(), AuthError::Unauthorized(_)));

    // Ada re-binding her own key is fine
    assert!(service
        .bind_biometric_key(&ada.user.id, "finger-1")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_validate_user_resolves_registered_users_only() {
    let service = test_service();

    let registered = service
        .register(register_command("Ada", "ada@example.com", "s3cret!"))
        .await
        .unwrap();

    let resolved = service.validate_user(&registered.user.id).await.unwrap();
    assert_eq!(resolved.email.as_str(), "ada@example.com");

    let result = service.validate_user(&UserId::new()).await;
    assert!(matches!(result.unwrap_err(), AuthError::NotFound(_)));
}

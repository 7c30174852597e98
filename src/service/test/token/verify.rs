use super::*;

/// Tests an issued token verifies and carries the user's claims.
///
/// Expected: Ok(Claims) with matching sub, email, and role
#[test]
fn issued_token_round_trips() {
    let service = TokenService::new(SECRET, 24);
    let user = sample_user();

    let token = service.issue(&user).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, Role::Customer.as_str());
    assert!(claims.exp > claims.iat);
}

/// Tests a token past its expiry is rejected as expired, not merely invalid.
///
/// Issued with a negative expiry window so `exp` is already in the past.
/// Validation uses zero leeway, so no grace period applies.
///
/// Expected: Err(AuthError::TokenExpired)
#[test]
fn expired_token_is_rejected() {
    let issuer = TokenService::new(SECRET, -1);
    let verifier = TokenService::new(SECRET, 24);

    let token = issuer.issue(&sample_user()).unwrap();
    let result = verifier.verify(&token);

    assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
}

/// Tests a malformed token string fails verification.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn garbage_token_is_invalid() {
    let service = TokenService::new(SECRET, 24);

    let result = service.verify("not-a-jwt");

    assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
}

/// Tests a token signed with a different secret fails verification.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn wrong_secret_is_invalid() {
    let issuer = TokenService::new("other-secret", 24);
    let verifier = TokenService::new(SECRET, 24);

    let token = issuer.issue(&sample_user()).unwrap();
    let result = verifier.verify(&token);

    assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
}

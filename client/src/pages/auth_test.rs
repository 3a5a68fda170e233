use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  user@example.com ", " secret "),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("user@example.com", "   "), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("  ", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("user.example.com", "secret"), Err(INVALID_EMAIL));
}

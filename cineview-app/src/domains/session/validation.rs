//! Client-side credential checks, run before any network dispatch.

use cineview_model::{LoginRequest, RegisterRequest};

/// Login form: both fields present. Strength rules only apply at
/// registration time.
pub fn validate_login(request: &LoginRequest) -> Result<(), String> {
    if request.username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if request.password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

/// Registration form, checked in display order so the first problem is
/// the one surfaced.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), String> {
    if request.username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if !is_valid_email(&request.email) {
        return Err("Please enter a valid email address".to_string());
    }
    if request.password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if !has_required_mix(&request.password) {
        return Err(
            "Password must contain at least 1 uppercase, 1 lowercase, and 1 number"
                .to_string(),
        );
    }
    if request.full_name.trim().len() < 3 {
        return Err("Full name must be at least 3 characters".to_string());
    }
    Ok(())
}

/// Shape check only: something@something.tld, no whitespace.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    let (Some(tld), Some(host)) = (domain_parts.next(), domain_parts.next()) else {
        return false;
    };
    !tld.is_empty()
        && !host.is_empty()
        && !domain.chars().any(char::is_whitespace)
}

fn has_required_mix(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegisterRequest {
        RegisterRequest {
            username: "moviegoer".to_string(),
            email: "fan@example.com".to_string(),
            password: "Secret123".to_string(),
            full_name: "Pat Moviegoer".to_string(),
        }
    }

    #[test]
    fn well_formed_registration_passes() {
        assert!(validate_registration(&registration()).is_ok());
    }

    #[test]
    fn short_username_is_rejected() {
        let mut request = registration();
        request.username = "ab".to_string();
        assert_eq!(
            validate_registration(&request).unwrap_err(),
            "Username must be at least 3 characters"
        );
    }

    #[test]
    fn email_shape_is_enforced() {
        for bad in ["plainaddress", "no@tld", "two@@example.com", "sp ace@example.com"] {
            let mut request = registration();
            request.email = bad.to_string();
            assert!(
                validate_registration(&request).is_err(),
                "expected `{bad}` to be rejected"
            );
        }
    }

    #[test]
    fn password_needs_length_and_mix() {
        let mut request = registration();
        request.password = "Ab1".to_string();
        assert_eq!(
            validate_registration(&request).unwrap_err(),
            "Password must be at least 8 characters"
        );

        request.password = "alllowercase1".to_string();
        assert!(validate_registration(&request).is_err());

        request.password = "NODIGITSHERE".to_string();
        assert!(validate_registration(&request).is_err());
    }

    #[test]
    fn login_only_requires_presence() {
        assert!(
            validate_login(&LoginRequest {
                username: "x".to_string(),
                password: "y".to_string(),
            })
            .is_ok()
        );
        assert!(
            validate_login(&LoginRequest {
                username: "  ".to_string(),
                password: "y".to_string(),
            })
            .is_err()
        );
    }
}

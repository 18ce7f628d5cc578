use thiserror::Error;

use crate::security::SecretString;

const MIN_USERNAME_LEN: usize = 3;
const MAX_USERNAME_LEN: usize = 30;
const MIN_PASSWORD_LEN: usize = 8;

/// Client-side form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
pub enum ValidationError {
    #[error("email is required")]
    EmailEmpty,
    #[error("email address is invalid")]
    EmailInvalid,
    #[error("password is required")]
    PasswordEmpty,
    #[error("password must be at least {min_len} characters")]
    PasswordTooShort { min_len: usize },
    #[error("username must be {min_len}-{max_len} characters")]
    UsernameLength { min_len: usize, max_len: usize },
    #[error("username may only contain letters, digits, '_' and '.'")]
    UsernameCharacters,
    #[error("display name is required")]
    DisplayNameEmpty,
    #[error("display name must be at most {max_len} characters")]
    DisplayNameTooLong { max_len: usize },
    #[error("bio must be at most {max_len} characters")]
    BioTooLong { max_len: usize },
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be a positive amount")]
    NonPositiveAmount { field: &'static str },
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailEmpty);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::EmailInvalid),
    }
}

pub fn validate_password(password: &SecretString) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }
    if password.char_len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min_len: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let username = username.trim();
    let len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
        return Err(ValidationError::UsernameLength {
            min_len: MIN_USERNAME_LEN,
            max_len: MAX_USERNAME_LEN,
        });
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return Err(ValidationError::UsernameCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_local_part_and_dotted_domain() {
        assert_eq!(validate_email("a@b.io"), Ok(()));
        assert_eq!(validate_email(" "), Err(ValidationError::EmailEmpty));
        assert_eq!(validate_email("@b.io"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("a@localhost"), Err(ValidationError::EmailInvalid));
    }

    #[test]
    fn password_length_rule() {
        assert_eq!(
            validate_password(&SecretString::new("short")),
            Err(ValidationError::PasswordTooShort { min_len: 8 })
        );
        assert_eq!(validate_password(&SecretString::new("")), Err(ValidationError::PasswordEmpty));
        assert_eq!(validate_password(&SecretString::new("long enough")), Ok(()));
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("ab").is_err());
        assert_eq!(validate_username("bad name"), Err(ValidationError::UsernameCharacters));
        assert_eq!(validate_username("good.name_1"), Ok(()));
    }
}

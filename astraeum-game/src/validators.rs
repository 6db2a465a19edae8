//! Client-side input validation applied before any network call.

use crate::game::Difficulty;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 100;
const SOLUTION_MAX: usize = 500;
const TOKEN_SEGMENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Username must be at least {USERNAME_MIN} characters")]
    UsernameTooShort,
    #[error("Username must not exceed {USERNAME_MAX} characters")]
    UsernameTooLong,
    #[error("Username can only contain letters, numbers, and underscores")]
    UsernameCharset,
    #[error("Email is required")]
    EmailMissing,
    #[error("Invalid email format")]
    EmailFormat,
    #[error("Password must be at least {PASSWORD_MIN} characters")]
    PasswordTooShort,
    #[error("Password is too long")]
    PasswordTooLong,
    #[error("Password must contain both letters and numbers")]
    PasswordComposition,
    #[error("Solution cannot be empty")]
    SolutionEmpty,
    #[error("Solution is too long (max {SOLUTION_MAX} characters)")]
    SolutionTooLong,
    #[error("Invalid difficulty level")]
    DifficultyUnknown,
    #[error("Token is missing")]
    TokenMissing,
    #[error("Invalid token format")]
    TokenFormat,
}

/// 3-20 characters, alphanumeric and underscore only.
///
/// # Errors
///
/// Returns the first rule the username breaks.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < USERNAME_MIN {
        return Err(ValidationError::UsernameTooShort);
    }
    if username.chars().count() > USERNAME_MAX {
        return Err(ValidationError::UsernameTooLong);
    }
    let charset_ok = regex::Regex::new(r"^[a-zA-Z0-9_]+$")
        .map(|re| re.is_match(username))
        .unwrap_or(false);
    if !charset_ok {
        return Err(ValidationError::UsernameCharset);
    }
    Ok(())
}

/// # Errors
///
/// Returns the first rule the address breaks.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailMissing);
    }
    let shape_ok = regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false);
    if !shape_ok {
        return Err(ValidationError::EmailFormat);
    }
    Ok(())
}

/// Minimum 8 characters with at least one letter and one digit.
///
/// # Errors
///
/// Returns the first rule the password breaks.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password.chars().count() > PASSWORD_MAX {
        return Err(ValidationError::PasswordTooLong);
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ValidationError::PasswordComposition);
    }
    Ok(())
}

/// Rejects empty or whitespace-only solutions locally, before any network
/// call. Returns the trimmed text to submit.
///
/// # Errors
///
/// Returns the first rule the solution breaks.
pub fn validate_solution(solution: &str) -> Result<&str, ValidationError> {
    let trimmed = solution.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::SolutionEmpty);
    }
    if solution.chars().count() > SOLUTION_MAX {
        return Err(ValidationError::SolutionTooLong);
    }
    Ok(trimmed)
}

/// # Errors
///
/// Returns an error when the label is not a known difficulty.
pub fn validate_difficulty(label: &str) -> Result<Difficulty, ValidationError> {
    label
        .parse::<Difficulty>()
        .map_err(|()| ValidationError::DifficultyUnknown)
}

/// Shallow shape check of a persisted bearer token (three dot-separated
/// segments); no cryptographic verification happens client-side.
///
/// # Errors
///
/// Returns an error for an empty or malformed token.
pub fn validate_token_format(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::TokenMissing);
    }
    if token.split('.').count() != TOKEN_SEGMENTS {
        return Err(ValidationError::TokenFormat);
    }
    Ok(())
}

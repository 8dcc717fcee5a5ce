//! # Identifier Validation
//!
//! Syntax rule applied to every identifier segment and to tenant IDs:
//!
//! - between [`MIN_ID_LENGTH`] and [`MAX_ID_LENGTH`] characters
//! - lowercase ASCII letters, digits and `-` only
//! - no leading, trailing or doubled `-`
//!
//! Of the registry's identifier pattern `^[a-z0-9](?:[-]?[a-z0-9]){2,}$`
//! only the dash-run rule is carried over. Length is counted over the whole
//! segment including dashes, so `a-b` is valid here although that pattern
//! asks for three letters or digits.
//!
//! The rule is ASCII-only and case-sensitive. A segment that passes can never
//! contain `@` or `.`, which is what keeps the unique ID separators unambiguous.

use thiserror::Error;

/// Minimum length of an identifier segment.
pub const MIN_ID_LENGTH: usize = 3;

/// Maximum length of an identifier segment.
pub const MAX_ID_LENGTH: usize = 36;

/// Reasons a segment fails the identifier syntax rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdSyntaxError {
    /// The segment is the empty string.
    #[error("empty")]
    Empty,

    /// Fewer than [`MIN_ID_LENGTH`] characters.
    #[error("too short: {length} characters, minimum is {min}")]
    TooShort { length: usize, min: usize },

    /// More than [`MAX_ID_LENGTH`] characters.
    #[error("too long: {length} characters, maximum is {max}")]
    TooLong { length: usize, max: usize },

    /// A character outside `[a-z0-9-]`.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// First character is a dash.
    #[error("starts with a dash")]
    LeadingDash,

    /// Last character is a dash.
    #[error("ends with a dash")]
    TrailingDash,

    /// Two dashes in a row.
    #[error("consecutive dashes at position {position}")]
    ConsecutiveDashes { position: usize },
}

/// Validate a single identifier segment.
///
/// Length is checked before the character set, so an over-long segment is
/// reported as [`IdSyntaxError::TooLong`] even if it also holds bad characters.
pub fn validate_id(segment: &str) -> Result<(), IdSyntaxError> {
    if segment.is_empty() {
        return Err(IdSyntaxError::Empty);
    }

    let length = segment.chars().count();
    if length < MIN_ID_LENGTH {
        return Err(IdSyntaxError::TooShort {
            length,
            min: MIN_ID_LENGTH,
        });
    }
    if length > MAX_ID_LENGTH {
        return Err(IdSyntaxError::TooLong {
            length,
            max: MAX_ID_LENGTH,
        });
    }

    let mut previous_dash = false;
    for (position, character) in segment.chars().enumerate() {
        match character {
            'a'..='z' | '0'..='9' => previous_dash = false,
            '-' if position == 0 => return Err(IdSyntaxError::LeadingDash),
            '-' if previous_dash => return Err(IdSyntaxError::ConsecutiveDashes { position }),
            '-' => previous_dash = true,
            _ => {
                return Err(IdSyntaxError::InvalidCharacter {
                    character,
                    position,
                })
            }
        }
    }

    if previous_dash {
        return Err(IdSyntaxError::TrailingDash);
    }

    Ok(())
}

/// Returns `true` if the segment passes [`validate_id`].
#[must_use]
pub fn is_valid_id(segment: &str) -> bool {
    validate_id(segment).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_length_accepted() {
        assert_eq!(validate_id("oza"), Ok(()));
    }

    #[test]
    fn test_below_minimum_rejected() {
        assert_eq!(
            validate_id("id"),
            Err(IdSyntaxError::TooShort { length: 2, min: 3 })
        );
    }

    #[test]
    fn test_maximum_length_boundary() {
        let max = "abcdefghijklmnopqrstuvwxyz-012345678";
        assert_eq!(max.len(), MAX_ID_LENGTH);
        assert_eq!(validate_id(max), Ok(()));

        let over = format!("{max}9");
        assert_eq!(
            validate_id(&over),
            Err(IdSyntaxError::TooLong { length: 37, max: 36 })
        );
    }

    #[test]
    fn test_dash_boundaries_rejected() {
        assert_eq!(validate_id("-id"), Err(IdSyntaxError::LeadingDash));
        assert_eq!(validate_id("id-"), Err(IdSyntaxError::TrailingDash));
        assert_eq!(
            validate_id("id--test"),
            Err(IdSyntaxError::ConsecutiveDashes { position: 3 })
        );
        assert_eq!(validate_id("id-test"), Ok(()));
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert_eq!(
            validate_id("id_test"),
            Err(IdSyntaxError::InvalidCharacter {
                character: '_',
                position: 2
            })
        );
        assert_eq!(
            validate_id("id$test"),
            Err(IdSyntaxError::InvalidCharacter {
                character: '$',
                position: 2
            })
        );
        assert!(!is_valid_id("Upper"));
        assert!(!is_valid_id("foo.bar"));
        assert!(!is_valid_id("foo@bar"));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(validate_id(""), Err(IdSyntaxError::Empty));
    }

    #[test]
    fn test_digits_only_accepted() {
        assert!(is_valid_id("000"));
        assert!(is_valid_id("0-1"));
    }

    #[test]
    fn test_dashes_count_towards_length() {
        assert_eq!(validate_id("a-b"), Ok(()));
        assert_eq!(
            validate_id("ab--cd"),
            Err(IdSyntaxError::ConsecutiveDashes { position: 3 })
        );
    }
}

//! Version-checked UUID parsing with nil-token support.
//!
//! Request paths accept the literal token `nil` (any case) or the nil UUID
//! string as a shorthand for the nil UUID; everything else must be a valid
//! v4 UUID.

use thiserror::Error;
use uuid::Uuid;

/// Token accepted in place of the nil UUID string.
pub const NIL_UUID_TOKEN: &str = "nil";

/// Canonical string form of the nil UUID.
pub const NIL_UUID_STRING: &str = "00000000-0000-0000-0000-000000000000";

/// Errors from [`parse_v4`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUuid {
    #[error("'{input}' is not a UUID")]
    NotAUuid { input: String },

    #[error("'{input}' is not a v4 UUID")]
    NotV4 { input: String },
}

/// Creates a new random v4 UUID.
pub fn new_v4() -> Uuid {
    Uuid::new_v4()
}

/// Parses a v4 UUID from its string form.
///
/// The nil token and the nil UUID string are accepted case-insensitively
/// (RFC 4122 section 3: UUID text is case-insensitive on input) and yield
/// the nil UUID without touching the general parser. Any other input must
/// parse as a UUID of version 4.
pub fn parse_v4(input: &str) -> Result<Uuid, InvalidUuid> {
    if input.eq_ignore_ascii_case(NIL_UUID_TOKEN) || input.eq_ignore_ascii_case(NIL_UUID_STRING) {
        return Ok(Uuid::nil());
    }
    let uuid = Uuid::parse_str(input).map_err(|_| InvalidUuid::NotAUuid {
        input: input.to_owned(),
    })?;
    if uuid.get_version_num() != 4 {
        return Err(InvalidUuid::NotV4 {
            input: input.to_owned(),
        });
    }
    Ok(uuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_token_parses_to_nil_uuid() {
        assert_eq!(parse_v4("nil").unwrap(), Uuid::nil());
    }

    #[test]
    fn nil_token_is_case_insensitive() {
        assert_eq!(parse_v4("nIl").unwrap(), Uuid::nil());
        assert_eq!(parse_v4("NIL").unwrap(), Uuid::nil());
    }

    #[test]
    fn nil_uuid_string_parses_to_nil_uuid() {
        assert_eq!(parse_v4(NIL_UUID_STRING).unwrap(), Uuid::nil());
    }

    #[test]
    fn valid_v4_string_parses() {
        let uuid = parse_v4("27c3e7c6-88dc-4fcb-a54d-234abc0901fc").unwrap();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.to_string(), "27c3e7c6-88dc-4fcb-a54d-234abc0901fc");
    }

    #[test]
    fn v1_uuid_is_rejected_as_not_v4() {
        let result = parse_v4("d90ecefc-af0d-11ed-afa1-0242ac120002");
        assert_eq!(
            result,
            Err(InvalidUuid::NotV4 {
                input: "d90ecefc-af0d-11ed-afa1-0242ac120002".to_owned()
            })
        );
    }

    #[test]
    fn garbage_is_rejected_as_not_a_uuid() {
        let result = parse_v4("not-a-uuid");
        assert_eq!(
            result,
            Err(InvalidUuid::NotAUuid {
                input: "not-a-uuid".to_owned()
            })
        );
    }

    #[test]
    fn new_v4_generates_version_4() {
        assert_eq!(new_v4().get_version_num(), 4);
        assert_ne!(new_v4(), new_v4());
    }
}

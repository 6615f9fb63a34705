use sha2::{Digest, Sha256};

use crate::{
    auth::claims::{Claims, Role},
    errors::{AppError, AppResult},
};

pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if claims.role != Role::Admin {
        return Err(AppError::Unauthorized(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

/// Hex-encoded SHA-256 digest, used to compare the login password against the
/// configured admin hash.
pub fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: Role) -> Claims {
        Claims {
            sub: "admin@gramture.test".to_string(),
            role,
            iat: 0,
            exp: 9999999999,
        }
    }

    #[test]
    fn test_require_admin_success() {
        assert!(require_admin(&claims(Role::Admin)).is_ok());
    }

    #[test]
    fn test_require_admin_failure() {
        assert!(require_admin(&claims(Role::Reader)).is_err());
    }

    #[test]
    fn test_sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }
}

//! Domain-level constants.
//!
//! These constants define the placeholder hashing scheme and the seed data
//! used by the mock user database.

// =============================================================================
// Email
// =============================================================================

/// One or more characters that are neither `@` nor ECMAScript whitespace
/// (U+FEFF is whitespace, U+0085 is not).
macro_rules! email_part {
    () => {
        r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+"
    };
}

/// Accepted email shape: `local@domain.tld`, no whitespace, a single `@`
pub const EMAIL_PATTERN: &str =
    concat!("^", email_part!(), "@", email_part!(), r"\.", email_part!(), "$");

// =============================================================================
// Password Hashing
// =============================================================================

/// Algorithm label reported by the simulated hasher
pub const HASH_ALGORITHM: &str = "SHA-256";

/// Fixed salt mixed into every simulated hash (not securely generated)
pub const HASH_SALT: &str = "your_salt_here";

/// Prefix prepended to the plaintext by the simulated hasher
pub const HASH_PREFIX: &str = "hashed_";

// =============================================================================
// Seed Data
// =============================================================================

/// Username of the single seeded account
pub const SEED_USERNAME: &str = "example@example.com";

/// Stored hash of the seeded account's password
pub const SEED_PASSWORD_HASH: &str = "hashed_securePassword123!_your_salt_here";

/// Plaintext password matching [`SEED_PASSWORD_HASH`]
pub const DEMO_PASSWORD: &str = "securePassword123!";

// =============================================================================
// Service
// =============================================================================

/// Default service name for logging
pub const DEFAULT_SERVICE_NAME: &str = "auth-service";

/// Default log level when neither the environment nor the CLI sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

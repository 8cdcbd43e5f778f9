//! Shared constant values for test setup.
//!
//! None of these are real credentials.

/// Secret key handed to the payment gateway client pointed at the mock server.
pub static TEST_PAYSTACK_SECRET: &str = "sk_test_luxe";

/// Plain text password of every user inserted by the user fixtures.
pub static TEST_PASSWORD: &str = "correct-horse";

/// Bcrypt cost used by fixtures, kept at the minimum so tests stay fast.
pub const TEST_BCRYPT_COST: u32 = 4;

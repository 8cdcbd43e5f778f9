pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD, TEST_PAYSTACK_SECRET},
        fixtures::factory,
        test_setup_with_luxe_tables, test_setup_with_tables, TestError, TestSetup,
    };
}

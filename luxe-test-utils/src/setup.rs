use std::sync::Arc;

use mockito::{Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_PAYSTACK_SECRET, error::TestError};

pub struct TestAppState {
    pub db: DatabaseConnection,
    /// Base URL of the mock payment gateway
    pub paystack_url: String,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// The tuple is `(db, paystack_url, paystack_secret_key)`.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String, String)>,
    {
        T::from((
            self.state.db.clone(),
            self.state.paystack_url.clone(),
            TEST_PAYSTACK_SECRET.to_string(),
        ))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let paystack_url = mock_server.url();

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db, paystack_url },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every luxe table in foreign key order
#[macro_export]
macro_rules! test_setup_with_luxe_tables {
    () => {{
        $crate::test_setup_with_tables!(
            entity::prelude::LuxeUser,
            entity::prelude::LuxeProduct,
            entity::prelude::LuxeOrder,
            entity::prelude::LuxeOrderItem,
            entity::prelude::LuxeCartItem,
            entity::prelude::LuxeExpense,
            entity::prelude::LuxeNotification,
        )
    }};
}

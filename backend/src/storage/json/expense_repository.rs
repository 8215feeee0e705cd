use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use shared::Expense;

use super::connection::{JsonConnection, EXPENSES_KEY};
use crate::storage::traits::ExpenseStorage;

/// JSON-file-backed expense repository storing the full collection under
/// the `"travel-expenses"` key.
#[derive(Clone)]
pub struct ExpenseRepository {
    connection: JsonConnection,
}

impl ExpenseRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl ExpenseStorage for ExpenseRepository {
    async fn load_expenses(&self) -> Result<Vec<Expense>> {
        let bytes = match self.connection.read(EXPENSES_KEY)? {
            Some(bytes) => bytes,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(expenses) => Ok(expenses),
            Err(e) => {
                warn!("Stored expense collection is not decodable, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let bytes = serde_json::to_vec(expenses)?;
        self.connection.write(EXPENSES_KEY, &bytes)?;
        Ok(())
    }
}

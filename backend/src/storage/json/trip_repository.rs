use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use shared::Trip;

use super::connection::{JsonConnection, TRIPS_KEY};
use crate::storage::traits::TripStorage;

/// JSON-file-backed trip repository storing the full collection under the
/// `"travel-trips"` key.
#[derive(Clone)]
pub struct TripRepository {
    connection: JsonConnection,
}

impl TripRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl TripStorage for TripRepository {
    async fn load_trips(&self) -> Result<Vec<Trip>> {
        let bytes = match self.connection.read(TRIPS_KEY)? {
            Some(bytes) => bytes,
            None => return Ok(Vec::new()),
        };

        // Corrupt content decodes as an empty collection, never an error
        match serde_json::from_slice(&bytes) {
            Ok(trips) => Ok(trips),
            Err(e) => {
                warn!("Stored trip collection is not decodable, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn save_trips(&self, trips: &[Trip]) -> Result<()> {
        let bytes = serde_json::to_vec(trips)?;
        self.connection.write(TRIPS_KEY, &bytes)?;
        Ok(())
    }
}

//! Vehicle collaborator: entry, exit, and record lookups.

use async_trait::async_trait;
use serde_json::json;

use patio_core::models::{ActiveVehicle, Receipt, VehicleRecord};
use patio_core::plate::Plate;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Vehicle operations against the parking service.
///
/// Every operation takes a validated [`Plate`] or a record id; raw user
/// input never reaches the wire.
#[async_trait]
pub trait VehicleApi: Send + Sync {
    /// Vehicles currently inside the lot.
    async fn active(&self) -> Result<Vec<ActiveVehicle>, ApiError>;

    /// Look up a single parking record by its id.
    async fn by_id(&self, id: &str) -> Result<VehicleRecord, ApiError>;

    /// All parking records for a plate.
    async fn by_plate(&self, plate: &Plate) -> Result<Vec<VehicleRecord>, ApiError>;

    /// Register a vehicle entering the lot.
    async fn entry(&self, plate: &Plate) -> Result<Receipt, ApiError>;

    /// Register a vehicle leaving the lot.
    async fn exit(&self, plate: &Plate) -> Result<Receipt, ApiError>;
}

#[async_trait]
impl VehicleApi for ApiClient {
    async fn active(&self) -> Result<Vec<ActiveVehicle>, ApiError> {
        let url = format!("{}/api/veiculos", self.base_url);
        let response = self.with_auth(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    async fn by_id(&self, id: &str) -> Result<VehicleRecord, ApiError> {
        let url = format!("{}/api/veiculos/id/{}", self.base_url, id);
        let response = self.with_auth(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    async fn by_plate(&self, plate: &Plate) -> Result<Vec<VehicleRecord>, ApiError> {
        let url = format!("{}/api/veiculos/placa/{}", self.base_url, plate);
        let response = self.with_auth(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    async fn entry(&self, plate: &Plate) -> Result<Receipt, ApiError> {
        let url = format!("{}/api/veiculos/entrada", self.base_url);
        let response = self
            .with_auth(self.client.post(&url))
            .json(&json!({ "placa": plate.as_str() }))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn exit(&self, plate: &Plate) -> Result<Receipt, ApiError> {
        let url = format!("{}/api/veiculos/saida", self.base_url);
        let response = self
            .with_auth(self.client.put(&url))
            .json(&json!({ "placa": plate.as_str() }))
            .send()
            .await?;
        Self::decode(response).await
    }
}

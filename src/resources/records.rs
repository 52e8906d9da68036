//! Record operations.

use std::fmt::Display;

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, Transport};

/// Operations on the records of a CRM module.
///
/// Obtained through [`ZohoClient::records`](crate::ZohoClient::records).
/// Every method issues one request and returns the parsed body.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
///
/// let created = client
///     .records()
///     .create("Leads", json!({"data": [{"Last_Name": "Smith", "Company": "Acme"}]}))
///     .await?;
///
/// let found = client
///     .records()
///     .search("Leads", Some(json!({"email": "smith@acme.test"})))
///     .await?;
/// ```
#[derive(Debug)]
pub struct Records<'a, T> {
    client: &'a HttpClient<T>,
}

impl<'a, T: Transport> Records<'a, T> {
    pub(crate) const fn new(client: &'a HttpClient<T>) -> Self {
        Self { client }
    }

    /// Lists records of `module`. `GET {module}`.
    ///
    /// See <https://www.zoho.com/crm/developer/docs/api/v2/get-records.html>.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn list(&self, module: &str, options: Option<Value>) -> Result<Value, HttpError> {
        self.client.get(module, options).await
    }

    /// Fetches a single record. `GET {module}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn get(&self, module: &str, id: impl Display) -> Result<Value, HttpError> {
        self.client.get(&format!("{module}/{id}"), None).await
    }

    /// Inserts records. `POST {module}`.
    ///
    /// See <https://www.zoho.com/crm/developer/docs/api/v2/insert-records.html>.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn create(&self, module: &str, options: Value) -> Result<Value, HttpError> {
        self.client.post(module, options).await
    }

    /// Updates a record. `PUT {module}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn update(
        &self,
        module: &str,
        id: impl Display,
        options: Value,
    ) -> Result<Value, HttpError> {
        self.client.put(&format!("{module}/{id}"), options).await
    }

    /// Upserts a record. `POST {module}/{id}`.
    ///
    /// See <https://www.zoho.com/crm/developer/docs/api/v2/upsert-records.html>.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn upsert(
        &self,
        module: &str,
        id: impl Display,
        options: Value,
    ) -> Result<Value, HttpError> {
        self.client.post(&format!("{module}/{id}"), options).await
    }

    /// Deletes a record. `DELETE {module}/{id}`, without a body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn delete(&self, module: &str, id: impl Display) -> Result<Value, HttpError> {
        self.client.delete(&format!("{module}/{id}"), None).await
    }

    /// Searches records. `GET {module}/search`.
    ///
    /// Pass `criteria`, `email`, `phone` or `word` in `options`, as the
    /// search endpoint expects.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn search(&self, module: &str, options: Option<Value>) -> Result<Value, HttpError> {
        self.client.get(&format!("{module}/search"), options).await
    }

    /// Converts a lead into a contact, account and optionally a deal.
    /// `POST Leads/{lead_id}/actions/convert`.
    ///
    /// See <https://www.zoho.com/crm/developer/docs/api/v2/convert-lead.html>.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn convert(&self, lead_id: impl Display, options: Value) -> Result<Value, HttpError> {
        self.client
            .post(&format!("Leads/{lead_id}/actions/convert"), options)
            .await
    }
}

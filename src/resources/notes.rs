//! Notes operations.

use std::fmt::Display;

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, Transport};

/// Operations on notes, either across the account or under one record.
///
/// Obtained through [`ZohoClient::notes`](crate::ZohoClient::notes).
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
///
/// client
///     .notes()
///     .create(
///         "Leads",
///         "4150868000001234567",
///         json!({"data": [{"Note_Title": "Call", "Note_Content": "Left a voicemail"}]}),
///     )
///     .await?;
///
/// let notes = client.notes().list("Leads", "4150868000001234567", None).await?;
/// ```
#[derive(Debug)]
pub struct Notes<'a, T> {
    client: &'a HttpClient<T>,
}

impl<'a, T: Transport> Notes<'a, T> {
    pub(crate) const fn new(client: &'a HttpClient<T>) -> Self {
        Self { client }
    }

    /// Lists all notes in the account. `GET Notes`.
    ///
    /// See <https://www.zoho.com/crm/developer/docs/api/v2/get-notes.html>.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn all(&self, options: Option<Value>) -> Result<Value, HttpError> {
        self.client.get("Notes", options).await
    }

    /// Lists the notes of one record. `GET {module}/{id}/Notes`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn list(
        &self,
        module: &str,
        id: impl Display,
        options: Option<Value>,
    ) -> Result<Value, HttpError> {
        self.client.get(&format!("{module}/{id}/Notes"), options).await
    }

    /// Fetches a single note. `GET Notes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn get(&self, id: impl Display) -> Result<Value, HttpError> {
        self.client.get(&format!("Notes/{id}"), None).await
    }

    /// Adds notes to a record. `POST {module}/{id}/Notes`.
    ///
    /// See <https://www.zoho.com/crm/developer/docs/api/v2/create-notes.html>.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn create(
        &self,
        module: &str,
        id: impl Display,
        options: Value,
    ) -> Result<Value, HttpError> {
        self.client.post(&format!("{module}/{id}/Notes"), options).await
    }

    /// Updates notes of a record. `PUT {module}/{id}/Notes`.
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
        self.client.put(&format!("{module}/{id}/Notes"), options).await
    }

    /// Deletes one note of a record.
    /// `DELETE {module}/{record_id}/Notes/{note_id}`, without a body.
    ///
    /// See <https://www.zoho.com/crm/developer/docs/api/v2/delete-notes.html>.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body is not JSON.
    pub async fn delete(
        &self,
        module: &str,
        record_id: impl Display,
        note_id: impl Display,
    ) -> Result<Value, HttpError> {
        self.client
            .delete(&format!("{module}/{record_id}/Notes/{note_id}"), None)
            .await
    }
}

//! Integration tests for the record and note resources.
//!
//! A recording transport captures each outgoing request so the method,
//! URL and body produced by every resource operation can be checked
//! without a network.

use std::future::Future;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use zoho_crm::clients::{HttpError, HttpMethod, Transport, TransportRequest, TransportResponse};
use zoho_crm::{AccessToken, ClientConfig, Region, ZohoClient};

const BASE: &str = "https://accounts.zoho.eu/crm/v2";

#[derive(Clone, Default)]
struct RecordingTransport {
    sent: Arc<Mutex<Vec<TransportRequest>>>,
}

impl RecordingTransport {
    fn last(&self) -> TransportRequest {
        self.sent.lock().unwrap().last().cloned().unwrap()
    }

    fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Transport for RecordingTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, HttpError>> + Send {
        self.sent.lock().unwrap().push(request);
        async {
            Ok(TransportResponse {
                status: 200,
                headers: std::collections::HashMap::new(),
                body: br#"{"data":[],"info":{}}"#.to_vec(),
            })
        }
    }
}

fn client() -> (ZohoClient<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::default();
    let config = ClientConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .region(Region::Eu)
        .build()
        .unwrap();
    (ZohoClient::with_transport(config, transport.clone()), transport)
}

fn assert_sent(
    transport: &RecordingTransport,
    method: HttpMethod,
    url: &str,
    body: Option<Value>,
) {
    let sent = transport.last();
    assert_eq!(sent.method, method, "method for {url}");
    assert_eq!(sent.url, url);
    let sent_body = sent
        .body
        .map(|raw| serde_json::from_str::<Value>(&raw).unwrap());
    assert_eq!(sent_body, body, "body for {url}");
}

// ============================================================================
// Records
// ============================================================================

#[tokio::test]
async fn test_records_list() {
    let (client, transport) = client();
    client
        .records()
        .list("Leads", Some(json!({"fields": "Email", "page": 2})))
        .await
        .unwrap();

    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{BASE}/Leads?fields=Email&page=2"),
        None,
    );
}

#[tokio::test]
async fn test_records_get() {
    let (client, transport) = client();
    client.records().get("Contacts", 42).await.unwrap();

    assert_sent(&transport, HttpMethod::Get, &format!("{BASE}/Contacts/42"), None);
}

#[tokio::test]
async fn test_records_create() {
    let (client, transport) = client();
    let options = json!({"data": [{"Last_Name": "Smith"}]});
    client.records().create("Leads", options.clone()).await.unwrap();

    assert_sent(&transport, HttpMethod::Post, &format!("{BASE}/Leads"), Some(options));
}

#[tokio::test]
async fn test_records_update() {
    let (client, transport) = client();
    let options = json!({"data": [{"Phone": "555-0100"}]});
    client
        .records()
        .update("Deals", "9", options.clone())
        .await
        .unwrap();

    assert_sent(&transport, HttpMethod::Put, &format!("{BASE}/Deals/9"), Some(options));
}

#[tokio::test]
async fn test_records_upsert() {
    let (client, transport) = client();
    let options = json!({"data": [{"Email": "a@b.test"}], "duplicate_check_fields": ["Email"]});
    client
        .records()
        .upsert("Leads", "upsert", options.clone())
        .await
        .unwrap();

    assert_sent(
        &transport,
        HttpMethod::Post,
        &format!("{BASE}/Leads/upsert"),
        Some(options),
    );
}

#[tokio::test]
async fn test_records_delete() {
    let (client, transport) = client();
    client.records().delete("Accounts", "77").await.unwrap();

    assert_sent(&transport, HttpMethod::Delete, &format!("{BASE}/Accounts/77"), None);
}

#[tokio::test]
async fn test_records_search() {
    let (client, transport) = client();
    client
        .records()
        .search("Leads", Some(json!({"criteria": "(Email:equals:a@b.test)"})))
        .await
        .unwrap();

    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{BASE}/Leads/search?criteria=%28Email%3Aequals%3Aa%40b.test%29"),
        None,
    );
}

#[tokio::test]
async fn test_records_convert() {
    let (client, transport) = client();
    let options = json!({"data": [{"overwrite": true, "notify_lead_owner": false}]});
    client.records().convert("1001", options.clone()).await.unwrap();

    assert_sent(
        &transport,
        HttpMethod::Post,
        &format!("{BASE}/Leads/1001/actions/convert"),
        Some(options),
    );
}

#[tokio::test]
async fn test_module_and_id_are_forwarded_verbatim() {
    let (client, transport) = client();
    client.records().get("custom_module1", "").await.unwrap();

    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{BASE}/custom_module1/"),
        None,
    );
}

// ============================================================================
// Notes
// ============================================================================

#[tokio::test]
async fn test_notes_all() {
    let (client, transport) = client();
    client.notes().all(None).await.unwrap();

    assert_sent(&transport, HttpMethod::Get, &format!("{BASE}/Notes"), None);
}

#[tokio::test]
async fn test_notes_list_for_record() {
    let (client, transport) = client();
    client
        .notes()
        .list("Leads", "5", Some(json!({"per_page": 10})))
        .await
        .unwrap();

    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{BASE}/Leads/5/Notes?per_page=10"),
        None,
    );
}

#[tokio::test]
async fn test_notes_get() {
    let (client, transport) = client();
    client.notes().get("300").await.unwrap();

    assert_sent(&transport, HttpMethod::Get, &format!("{BASE}/Notes/300"), None);
}

#[tokio::test]
async fn test_notes_create() {
    let (client, transport) = client();
    let options = json!({"data": [{"Note_Title": "Call", "Note_Content": "Voicemail"}]});
    client
        .notes()
        .create("Contacts", "8", options.clone())
        .await
        .unwrap();

    assert_sent(
        &transport,
        HttpMethod::Post,
        &format!("{BASE}/Contacts/8/Notes"),
        Some(options),
    );
}

#[tokio::test]
async fn test_notes_update() {
    let (client, transport) = client();
    let options = json!({"data": [{"id": "300", "Note_Content": "Called back"}]});
    client
        .notes()
        .update("Contacts", "8", options.clone())
        .await
        .unwrap();

    assert_sent(
        &transport,
        HttpMethod::Put,
        &format!("{BASE}/Contacts/8/Notes"),
        Some(options),
    );
}

#[tokio::test]
async fn test_notes_delete() {
    let (client, transport) = client();
    client.notes().delete("Leads", "1", "2").await.unwrap();

    assert_sent(
        &transport,
        HttpMethod::Delete,
        &format!("{BASE}/Leads/1/Notes/2"),
        None,
    );
}

// ============================================================================
// Client Behavior
// ============================================================================

#[tokio::test]
async fn test_each_operation_sends_exactly_one_request() {
    let (client, transport) = client();

    client.records().list("Leads", None).await.unwrap();
    client.records().get("Leads", 1).await.unwrap();
    client.notes().all(None).await.unwrap();

    assert_eq!(transport.count(), 3);
}

#[tokio::test]
async fn test_responses_are_returned_verbatim() {
    let (client, _transport) = client();
    let body = client.records().list("Leads", None).await.unwrap();

    assert_eq!(body, json!({"data": [], "info": {}}));
}

#[tokio::test]
async fn test_set_base_url_redirects_requests() {
    let (mut client, transport) = client();
    client.set_base_url("https://crm.sandbox.test");

    client.records().get("Leads", 1).await.unwrap();
    assert_eq!(transport.last().url, "https://crm.sandbox.test/crm/v2/Leads/1");
}

#[tokio::test]
async fn test_set_transport_swaps_sender() {
    let (mut client, first) = client();
    let second = RecordingTransport::default();
    client.set_transport(second.clone());

    client.notes().get("1").await.unwrap();

    assert_eq!(first.count(), 0);
    assert_eq!(second.count(), 1);
}

#[tokio::test]
async fn test_headers_reach_transport() {
    let (client, transport) = client();
    client.notes().all(None).await.unwrap();

    let headers = transport.last().headers;
    assert_eq!(
        headers.get("Authorization").map(String::as_str),
        Some("Zoho-oauthtoken test-token")
    );
    assert_eq!(
        headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZohoClient>();
    assert_send_sync::<ZohoClient<RecordingTransport>>();
}

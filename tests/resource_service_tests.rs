//! Integration tests for the generic resource service.
//!
//! These tests drive `ResourceService` through an in-memory transport that
//! records every request and answers with a canned body or status, so URL
//! building, envelope handling and error propagation can be checked without
//! a network.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use ynab_api::clients::{HttpError, HttpMethod, Transport};
use ynab_api::rest::resources::{
    Account, AccountType, PayloadAccount, PayloadPayee, PayloadTransaction, Payee, Transaction,
};
use ynab_api::rest::{Creatable, Filter, Resource, ResourceError, ResourceService};

type Recorded = (HttpMethod, String, Option<Vec<u8>>);

/// Transport answering every request with the same canned reply.
struct RecordingTransport {
    reply: Result<String, (u16, String)>,
    requests: Mutex<Vec<Recorded>>,
}

impl RecordingTransport {
    fn ok(body: &str) -> Self {
        Self {
            reply: Ok(body.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn status(code: u16, body: &str) -> Self {
        Self {
            reply: Err((code, body.to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, HttpError> {
        self.requests
            .lock()
            .unwrap()
            .push((method, path.to_string(), body));

        match &self.reply {
            Ok(body) => {
                serde_json::from_str(body).map_err(|source| HttpError::Deserialization {
                    path: path.to_string(),
                    source,
                })
            }
            Err((code, body)) => Err(HttpError::from_status(*code, body)),
        }
    }
}

fn body_json(body: Option<Vec<u8>>) -> serde_json::Value {
    serde_json::from_slice(&body.expect("request should carry a body")).unwrap()
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_with_filter_builds_delta_query() {
    let transport = RecordingTransport::ok(
        r#"{"data":{"accounts":[{"id":"A1","name":"Checking"}],"server_knowledge":57}}"#,
    );
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    let snapshot = service.list("B1", Some(&Filter::since(42))).await.unwrap();

    let (method, path, body) = transport.only_request();
    assert_eq!(method, HttpMethod::Get);
    assert_eq!(path, "/budgets/B1/accounts?last_knowledge_of_server=42");
    assert!(body.is_none());

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, "A1");
    assert_eq!(snapshot[0].name, "Checking");
    assert_eq!(snapshot.server_knowledge, 57);
    assert_eq!(snapshot.next_filter(), Filter::since(57));
}

#[tokio::test]
async fn test_list_without_filter_has_no_query() {
    let transport = RecordingTransport::ok(r#"{"data":{"accounts":[],"server_knowledge":1}}"#);
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    service.list("B1", None).await.unwrap();
    service.list("B1", Some(&Filter::new())).await.unwrap();

    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.1).collect();
    assert_eq!(paths, ["/budgets/B1/accounts", "/budgets/B1/accounts"]);
}

#[tokio::test]
async fn test_list_preserves_server_order_and_deletions() {
    let transport = RecordingTransport::ok(
        r#"{"data":{"payees":[
            {"id":"P3","name":"Gone","deleted":true},
            {"id":"P1","name":"Grocer"},
            {"id":"P2","name":"Landlord"}
        ],"server_knowledge":9}}"#,
    );
    let service: ResourceService<_, Payee> = ResourceService::new(&transport);

    let snapshot = service.list("B1", Some(&Filter::since(8))).await.unwrap();

    let ids: Vec<&str> = snapshot.iter().map(Resource::id).collect();
    assert_eq!(ids, ["P3", "P1", "P2"]);
    assert_eq!(snapshot.deleted().count(), 1);
    assert_eq!(snapshot.active().count(), 2);
}

#[tokio::test]
async fn test_list_missing_server_knowledge_is_deserialization_error() {
    let transport = RecordingTransport::ok(r#"{"data":{"accounts":[]}}"#);
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    let err = service.list("B1", None).await.unwrap_err();
    assert!(matches!(
        err,
        ResourceError::Http(HttpError::Deserialization { .. })
    ));
}

#[tokio::test]
async fn test_list_encodes_path_segments() {
    let transport = RecordingTransport::ok(r#"{"data":{"accounts":[],"server_knowledge":1}}"#);
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    service.list("my budget/1", None).await.unwrap();

    let (_, path, _) = transport.only_request();
    assert_eq!(path, "/budgets/my%20budget%2F1/accounts");
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_get_returns_entity() {
    let transport = RecordingTransport::ok(
        r#"{"data":{"account":{"id":"A1","name":"Checking","type":"checking"}}}"#,
    );
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    let account = service.get("B1", "A1").await.unwrap().unwrap();

    let (method, path, _) = transport.only_request();
    assert_eq!(method, HttpMethod::Get);
    assert_eq!(path, "/budgets/B1/accounts/A1");
    assert_eq!(account.account_type, Some(AccountType::Checking));
}

#[tokio::test]
async fn test_get_null_entity_is_none_not_error() {
    let transport = RecordingTransport::ok(r#"{"data":{"account":null}}"#);
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    let result = service.get("B1", "A9").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_not_found_passes_transport_error_through() {
    let transport = RecordingTransport::status(
        404,
        r#"{"error":{"id":"404.2","name":"resource_not_found","detail":"Resource not found"}}"#,
    );
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    let err = service.get("B1", "A9").await.unwrap_err();
    match err {
        ResourceError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.detail.unwrap().name, "resource_not_found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_wraps_payload_and_keeps_trailing_slash() {
    let transport = RecordingTransport::ok(
        r#"{"data":{"account":{"id":"A2","name":"Savings","type":"savings","balance":1000}}}"#,
    );
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    let payload = PayloadAccount::new("Savings", AccountType::Savings, 1000);
    let account = service.create("B1", &payload).await.unwrap();

    let (method, path, body) = transport.only_request();
    assert_eq!(method, HttpMethod::Post);
    assert_eq!(path, "/budgets/B1/accounts/");
    assert_eq!(
        body_json(body),
        serde_json::json!({"account": {"name": "Savings", "type": "savings", "balance": 1000}})
    );
    assert_eq!(account.id, "A2");
    assert_eq!(account.balance, 1000);
}

#[tokio::test]
async fn test_create_validation_error_passes_through() {
    let transport = RecordingTransport::status(
        400,
        r#"{"error":{"id":"400","name":"bad_request","detail":"Bad Request"}}"#,
    );
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    let payload = PayloadAccount::new("Savings", AccountType::Savings, 1000);
    let err = service.create("B1", &payload).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_create_null_entity_is_deserialization_error() {
    let transport = RecordingTransport::ok(r#"{"data":{"account":null}}"#);
    let service: ResourceService<_, Account> = ResourceService::new(&transport);

    let payload = PayloadAccount::new("Savings", AccountType::Savings, 1000);
    let err = service.create("B1", &payload).await.unwrap_err();
    assert!(matches!(
        err,
        ResourceError::Http(HttpError::Deserialization { .. })
    ));
}

#[derive(Debug, Deserialize)]
struct Gadget {
    id: String,
}

impl Resource for Gadget {
    const NAME: &'static str = "gadget";
    const PLURAL: &'static str = "gadgets";

    fn id(&self) -> &str {
        &self.id
    }
}

struct UnencodablePayload;

impl Serialize for UnencodablePayload {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("cannot encode gadget"))
    }
}

impl Creatable for Gadget {
    type CreatePayload = UnencodablePayload;
}

#[tokio::test]
async fn test_create_serialization_failure_sends_nothing() {
    let transport = RecordingTransport::ok(r#"{"data":{"gadget":{"id":"G1"}}}"#);
    let service: ResourceService<_, Gadget> = ResourceService::new(&transport);

    let err = service.create("B1", &UnencodablePayload).await.unwrap_err();

    match err {
        ResourceError::Serialization { resource, source } => {
            assert_eq!(resource, "gadget");
            assert!(source.to_string().contains("cannot encode gadget"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(transport.requests().is_empty());
}

// ============================================================================
// Update and delete
// ============================================================================

#[tokio::test]
async fn test_payee_update_uses_patch() {
    let transport =
        RecordingTransport::ok(r#"{"data":{"payee":{"id":"P1","name":"Grocer"},"server_knowledge":12}}"#);
    let service: ResourceService<_, Payee> = ResourceService::new(&transport);

    let payee = service
        .update("B1", "P1", &PayloadPayee::new("Grocer"))
        .await
        .unwrap();

    let (method, path, body) = transport.only_request();
    assert_eq!(method, HttpMethod::Patch);
    assert_eq!(path, "/budgets/B1/payees/P1");
    assert_eq!(body_json(body), serde_json::json!({"payee": {"name": "Grocer"}}));
    assert_eq!(payee.name, "Grocer");
}

#[tokio::test]
async fn test_transaction_update_uses_put_and_delete_returns_entity() {
    let reply = r#"{"data":{"transaction":{
        "id":"T1","date":"2024-03-01","amount":-12500,"account_id":"A1","deleted":true
    }}}"#;
    let transport = RecordingTransport::ok(reply);
    let service: ResourceService<_, Transaction> = ResourceService::new(&transport);

    let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let payload = PayloadTransaction::new("A1", date, -12_500).with_memo("latte");
    service.update("B1", "T1", &payload).await.unwrap();
    let deleted = service.delete("B1", "T1").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].0, HttpMethod::Put);
    assert_eq!(requests[0].1, "/budgets/B1/transactions/T1");
    assert_eq!(
        body_json(requests[0].2.clone()),
        serde_json::json!({"transaction": {
            "account_id": "A1", "date": "2024-03-01", "amount": -12500, "memo": "latte"
        }})
    );

    assert_eq!(requests[1].0, HttpMethod::Delete);
    assert_eq!(requests[1].1, "/budgets/B1/transactions/T1");
    assert!(requests[1].2.is_none());
    assert!(deleted.is_deleted());
}

#[tokio::test]
async fn test_services_share_one_transport_via_arc() {
    let transport = std::sync::Arc::new(RecordingTransport::ok(
        r#"{"data":{"accounts":[],"payees":[],"server_knowledge":3}}"#,
    ));
    let accounts: ResourceService<_, Account> = ResourceService::new(transport.clone());
    let payees: ResourceService<_, Payee> = ResourceService::new(transport.clone());

    accounts.list("B1", None).await.unwrap();
    payees.list("B1", None).await.unwrap();

    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.1).collect();
    assert_eq!(paths, ["/budgets/B1/accounts", "/budgets/B1/payees"]);
}

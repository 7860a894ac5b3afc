//! Integration tests for the outbound request shapes.
//!
//! Every operation maps to exactly one method + path + query set + body, and
//! these tests pin that mapping against a mock server. A mounted expectation
//! that does not match fails the call with wiremock's 404 fallback, so each
//! successful response doubles as a shape assertion.

use ruvds_api::{
    ActionListParams, AddSshKeyRequest, BalanceParams, CreateServerRequest, CreateTokenRequest,
    NotificationListParams, PaymentListParams, RuvdsClient, ServerActionRequest, ServerListParams,
    SortOrder, StartPasswordParams, UpdateNotificationRequest,
};
use ruvds_core::id::{DatacenterId, NotificationId, OsId, ServerId, SshKeyId, TariffId};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RuvdsClient {
    RuvdsClient::with_endpoint(server.uri(), "test-token").unwrap()
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ok": true}))
}

#[tokio::test]
async fn list_actions_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/actions"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "25"))
        .and(query_param("sort", "id"))
        .and(query_param("order", "asc"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .list_actions(&ActionListParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn get_balance_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/balance"))
        .and(query_param("type", "default"))
        .and(query_param("currency_id", "1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .get_balance(&BalanceParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn list_datacenters_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/datacenters"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server).list_datacenters().await.unwrap();
}

#[tokio::test]
async fn list_notifications_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/notifications"))
        .and(query_param("status", "all"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "25"))
        .and(query_param("sort", "add_dt"))
        .and(query_param("order", "asc"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .list_notifications(&NotificationListParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn update_notification_status_shape() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v2/notifications/17"))
        .and(body_json(json!({"status": "read"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .update_notification_status(
            NotificationId::new(17),
            &UpdateNotificationRequest::new("read"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn list_operating_systems_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/os"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server).list_operating_systems().await.unwrap();
}

#[tokio::test]
async fn list_payments_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/payments"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "25"))
        .and(query_param("sort", "dt"))
        .and(query_param("order", "asc"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .list_payments(&PaymentListParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn create_server_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/servers"))
        .and(body_json(json!({
            "datacenter": 1,
            "tariff_id": 14,
            "os_id": 52,
            "payment_period": 2,
            "cpu": 2,
            "ram": 2,
            "drive": 20,
            "drive_tariff_id": 3,
            "ip": 1,
            "computer_name": "SQLSRV-01",
            "user_comment": "Server created via API."
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateServerRequest {
        datacenter: DatacenterId::new(1),
        tariff_id: TariffId::new(14),
        os_id: OsId::new(52),
        payment_period: 2,
        cpu: 2,
        ram: 2,
        drive: 20,
        drive_tariff_id: TariffId::new(3),
        ip: 1,
        computer_name: "SQLSRV-01".to_string(),
        user_comment: Some("Server created via API.".to_string()),
    };
    client(&server).create_server(&request).await.unwrap();
}

#[tokio::test]
async fn list_servers_shape_with_overrides() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/servers"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "50"))
        .and(query_param("sort", "virtual_server_id"))
        .and(query_param("order", "desc"))
        .and(query_param("get_paid_till", "true"))
        .and(query_param("get_network", "false"))
        .and(query_param("search", "sql"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let params = ServerListParams {
        page: 3,
        per_page: 50,
        order: SortOrder::Desc,
        get_paid_till: true,
        search: Some("sql".to_string()),
        ..ServerListParams::default()
    };
    client(&server).list_servers(&params).await.unwrap();
}

#[tokio::test]
async fn list_servers_omits_absent_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/servers"))
        .and(query_param_is_missing("search"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .list_servers(&ServerListParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn add_ssh_key_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ssh_keys"))
        .and(body_json(json!({
            "public_key": "ssh-ed25519 AAAA deploy@ci",
            "name": "deploy"
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let request = AddSshKeyRequest {
        public_key: "ssh-ed25519 AAAA deploy@ci".to_string(),
        name: "deploy".to_string(),
    };
    client(&server).add_ssh_key(&request).await.unwrap();
}

#[tokio::test]
async fn list_ssh_keys_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ssh_keys"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server).list_ssh_keys().await.unwrap();
}

#[tokio::test]
async fn delete_ssh_key_shape() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/ssh_keys/42"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .delete_ssh_key(SshKeyId::new(42))
        .await
        .unwrap();
}

#[tokio::test]
async fn list_tokens_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/tokens"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server).list_tokens().await.unwrap();
}

#[tokio::test]
async fn create_token_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/tokens"))
        .and(body_json(json!({
            "token_name": "ci",
            "token_role": "read_only"
        })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateTokenRequest {
        token_name: "ci".to_string(),
        token_role: "read_only".to_string(),
        token_expiry: None,
    };
    client(&server).create_token(&request).await.unwrap();
}

#[tokio::test]
async fn send_server_action_shape() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v2/servers/1232/actions"))
        .and(body_json(json!({"type": "start"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .send_server_action(ServerId::new(1232), &ServerActionRequest::new("start"))
        .await
        .unwrap();
}

#[tokio::test]
async fn get_server_start_password_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/servers/1232/start_password"))
        .and(query_param("response_format", "base64"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .get_server_start_password(ServerId::new(1232), &StartPasswordParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn identical_calls_produce_identical_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/servers"))
        .and(query_param("page", "2"))
        .and(query_param("order", "desc"))
        .respond_with(ok())
        .expect(2)
        .mount(&server)
        .await;

    let params = ServerListParams {
        page: 2,
        order: SortOrder::Desc,
        ..ServerListParams::default()
    };
    let client = client(&server);
    client.list_servers(&params).await.unwrap();
    client.list_servers(&params).await.unwrap();
}

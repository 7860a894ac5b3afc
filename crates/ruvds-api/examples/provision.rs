//! End-to-end provisioning walkthrough: list servers, create one, fetch its
//! start password.
//!
//! ```sh
//! RUVDS_API_TOKEN=... cargo run --example provision
//! ```

use anyhow::Context;
use ruvds_api::{CreateServerRequest, RuvdsClient, ServerListParams, StartPasswordParams};
use ruvds_core::id::{DatacenterId, OsId, ServerId, TariffId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let token = std::env::var("RUVDS_API_TOKEN").context("RUVDS_API_TOKEN is not set")?;
    let client = RuvdsClient::new(token)?;

    let servers = client.list_servers(&ServerListParams::default()).await?;
    println!("servers: {servers:#}");

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
    let created = client.create_server(&request).await?;
    println!("created: {created:#}");

    let password = client
        .get_server_start_password(ServerId::new(1232), &StartPasswordParams::default())
        .await?;
    println!("start password: {password:#}");

    Ok(())
}

//! Two independent clients logging concurrently against one service.
//!
//! Start the server first (`cargo run -p lognet-server`), then:
//!
//! ```sh
//! cargo run -p lognet-client --example multi_client [http://localhost:8000]
//! ```

use std::time::Duration;

use lognet_client::{Client, ClientConfig};
use lognet_core::LogLevel;
use rand::Rng;

async fn log_messages(client: Client, tag: u32) {
    for i in 0..5 {
        let message = format!("Message {i} from client {tag}");
        match client.log(&message, LogLevel::Info).await {
            Ok(outcome) => println!("Logged: {outcome:?}"),
            Err(err) => eprintln!("Log failed: {err}"),
        }

        let delay = rand::thread_rng().gen_range(1.0..3.0);
        tokio::time::sleep(Duration::from_secs_f64(delay)).await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let server = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000".to_string());

    let cli1 = Client::connect("dummy1", &server, ClientConfig::default()).await?;
    let cli2 = Client::connect("dummy2", &server, ClientConfig::default()).await?;

    let task1 = tokio::spawn(log_messages(cli1, 1));
    let task2 = tokio::spawn(log_messages(cli2, 2));

    task1.await?;
    task2.await?;

    Ok(())
}

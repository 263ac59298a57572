//! openvtt backend binary.
//!
//! Initializes logging, then runs the HTTP server: env config, database
//! connection + schema migration, bucket provisioning, listener.

#[tokio::main]
async fn main() {
    vtt_core::log();
    vtt_server::run().await.expect("server failed");
}

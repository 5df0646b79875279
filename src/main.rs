use analysis_server::frameworks::server;

#[tokio::main]
async fn main() {
    // Bind/serve failures are logged inside the bootstrap before surfacing here.
    if server::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}

// One-time bootstrap shared by the integration tests: a mock of the upstream
// chat-completions endpoint plus the server under test on an ephemeral port.
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use httpmock::MockServer;

// Model identifier the server is configured with for the whole test binary.
pub const TEST_MODEL: &str = "test-suite/strategy-model";

// Mock upstream shared by every test in this binary.
static UPSTREAM: OnceLock<MockServer> = OnceLock::new();
// Base URL the server publishes once it has bound its port.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// Guard so the bootstrap path runs only once across all tests.
static STACK_READY: OnceLock<()> = OnceLock::new();

// Ensure the upstream mock and the server under test are running.
// Returns the shared mock handle and the server base URL.
pub fn ensure_stack() -> (&'static MockServer, &'static str) {
    STACK_READY.get_or_init(|| {
        // Bootstrap on a plain OS thread; readiness polling below blocks, and
        // it must not stall a tokio test runtime worker.
        std::thread::spawn(bootstrap_stack)
            .join()
            .expect("test stack bootstrap panicked");
    });

    (
        UPSTREAM.get().expect("upstream mock should be initialized"),
        SERVER_URL
            .get()
            .expect("server url should be initialized")
            .as_str(),
    )
}

fn bootstrap_stack() {
    // The mock must exist before the server reads its configuration.
    let upstream = UPSTREAM.get_or_init(MockServer::start);

    // The server reads these at startup, so they are set before it spawns.
    std::env::set_var("INFERENCE_BASE_URL", upstream.base_url());
    std::env::set_var("INFERENCE_API_KEY", "test-key");
    std::env::set_var("INFERENCE_MODEL", TEST_MODEL);
    std::env::set_var("INFERENCE_TIMEOUT_MS", "2000");

    // Slot the server thread fills in with its OS-assigned address.
    let published_url = Arc::new(OnceLock::<String>::new());
    let published_url_thread = Arc::clone(&published_url);
    // A dedicated OS thread with its own runtime keeps the server alive
    // across the per-test tokio runtimes.
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            // Port 0 avoids collisions with anything already listening locally.
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral test port");
            let addr = listener.local_addr().expect("get local addr");
            let _ = published_url_thread.set(format!("http://{}", addr));
            analysis_server::run(listener).await.expect("server failed");
        });
    });

    wait_until_accepting(published_url);
}

// Block until the server address is known and the socket accepts connections.
fn wait_until_accepting(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    // host:port form for raw TCP probes.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}

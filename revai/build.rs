fn main() {
    ensure_client_available();
    add_build_info();
}

/// Ensure at least one API client is compiled in
fn ensure_client_available() {
    let clients = [
        cfg!(feature = "sentiment-analysis"),
        cfg!(feature = "language-identification"),
        cfg!(feature = "topic-extraction"),
    ];

    if !clients.iter().any(|&enabled| enabled) {
        panic!(
            "At least one client feature must be enabled. Available features: sentiment-analysis, language-identification, topic-extraction"
        );
    }
}

/// Add build-time information as environment variables
fn add_build_info() {
    let mut enabled_clients = Vec::new();

    if cfg!(feature = "sentiment-analysis") {
        enabled_clients.push("sentiment-analysis");
    }
    if cfg!(feature = "language-identification") {
        enabled_clients.push("language-identification");
    }
    if cfg!(feature = "topic-extraction") {
        enabled_clients.push("topic-extraction");
    }

    println!(
        "cargo:rustc-env=REVAI_ENABLED_CLIENTS={}",
        enabled_clients.join(",")
    );
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // plain output so log shippers do not receive ANSI color codes.
        .with_ansi(false)
        .json()
        .init();
}

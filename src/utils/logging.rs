// helper method to install the json tracing subscriber used by the binaries
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // log lines are collected as json, so ANSI color codes would only add noise.
        .with_ansi(false)
        .json()
        .init();
}

use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // reqwest is built without a default TLS provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    trivia::cli::run().await
}

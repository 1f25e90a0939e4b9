#[tokio::main]
async fn main() {
    if let Err(e) = clinitek_lib::run().await {
        tracing::error!("Clinitek stopped: {e}");
        eprintln!("clinitek: {e}");
        std::process::exit(1);
    }
}

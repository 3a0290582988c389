#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = ielts_web::run().await {
        eprintln!("ielts-web fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    artsearch::start_server().await;
}

#[tokio::main]
async fn main() {
    calm_map_be::start_server().await;
}

use hippocard_lib::config::ServerConfig;

#[tokio::main]
async fn main() {
    hippocard_lib::init_tracing();

    if let Err(e) = hippocard_lib::run(ServerConfig::from_env()).await {
        tracing::error!("HippoCard server failed: {e}");
        std::process::exit(1);
    }
}

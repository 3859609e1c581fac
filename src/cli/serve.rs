use crate::api;
use crate::core::AppConfig;

pub async fn run(host: String, port: String) {
    api::serve(host, port, AppConfig::default()).await;
}

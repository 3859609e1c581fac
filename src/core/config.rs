use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub greeting: String,
    pub assets_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let greeting = env::var("TASKBOT_GREETING").unwrap_or_else(|_| {
            "Hello! How can I assist you with your to-do list today?".to_string()
        });
        let assets_path =
            env::var("TASKBOT_ASSETS_PATH").unwrap_or_else(|_| "./web-ui".to_string());

        Self {
            greeting,
            assets_path,
        }
    }
}

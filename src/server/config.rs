use std::env;

#[derive(Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub jwt_secret: String,
    /// Default DeepSeek key for description enhancement. Optional; requests
    /// may carry their own key in developer mode.
    pub deepseek_api_key: Option<String>,
    /// Default Google AI key for image generation.
    pub google_ai_api_key: Option<String>,
    /// hcti.io credentials for screenshot capture.
    pub screenshot_user_id: Option<String>,
    pub screenshot_api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set".to_string())?;

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(ServerConfig {
            listen_addr,
            jwt_secret,
            deepseek_api_key: env::var("DEEPSEEK_API_KEY").ok(),
            google_ai_api_key: env::var("GOOGLE_AI_API_KEY").ok(),
            screenshot_user_id: env::var("HTMLCSS_USER_ID").ok(),
            screenshot_api_key: env::var("HTMLCSS_API_KEY").ok(),
        })
    }
}

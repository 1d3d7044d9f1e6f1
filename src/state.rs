use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub api_base: String,
    pub http: Client,
}

impl AppState {
    pub fn new(api_base: String) -> Self {
        Self {
            api_base,
            http: Client::new(),
        }
    }
}

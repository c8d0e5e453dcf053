use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpGetResult>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl HttpGetResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Interactive terminal: prompts read one line, `say` writes one line to stdout.
pub trait ConsolePort {
    fn prompt(&mut self, message: &str) -> Result<String>;
    fn say(&mut self, line: &str);
}

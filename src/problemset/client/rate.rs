extern crate tokio;

use std::time::Duration;
use tokio::{
    sync::Mutex,
    time::{sleep_until, Instant},
};

/// Keeps consecutive requests at least `delay` apart.
pub struct RateLimit {
    next: Mutex<Instant>,
    delay: Duration,
}
impl RateLimit {
    pub fn new(delay: Duration) -> Self {
        Self {
            next: Mutex::new(Instant::now()),
            delay,
        }
    }
    pub async fn wait(&self) {
        let mut next = self.next.lock().await;
        sleep_until(*next).await;
        *next = Instant::now() + self.delay;
    }
}

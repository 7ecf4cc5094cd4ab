use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub tick_rate: Duration,
    pub show_help: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            show_help: true,
        }
    }
}

impl AppOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }
}

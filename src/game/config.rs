use std::time::Duration;

/// Configuration for the game.
///
/// All lengths are in pixels. Positions on the board are multiples of
/// `unit_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the playfield
    pub screen_width: i32,
    /// Height of the playfield
    pub screen_height: i32,
    /// Side length of one grid cell
    pub unit_size: i32,
    /// Delay between two ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Initial length of the snake
    pub initial_body_parts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1300,
            screen_height: 750,
            unit_size: 50,
            tick_interval_ms: 175,
            initial_body_parts: 6,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom playfield, keeping the other defaults
    #[cfg(test)]
    pub fn with_screen(screen_width: i32, screen_height: i32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    /// Number of cells along the x axis
    pub fn columns(&self) -> i32 {
        self.screen_width / self.unit_size
    }

    /// Number of cells along the y axis
    pub fn rows(&self) -> i32 {
        self.screen_height / self.unit_size
    }

    /// Total number of grid cells, which bounds the snake length
    pub fn capacity(&self) -> usize {
        ((self.screen_width * self.screen_height) / (self.unit_size * self.unit_size)) as usize
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

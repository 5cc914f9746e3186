use grid_util::Point;
use std::time::Duration;

use crate::error::ConfigError;
use crate::frontier::TieBreak;

pub const DEFAULT_COLUMNS: usize = 50;
pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_WINDOW_SIZE: u32 = 800;
pub const DEFAULT_FRAMES_PER_SECOND: u32 = 30;

/// Parameters of a visualizer run. The grid shape is fixed for the lifetime of the
/// [Visualizer](crate::visualizer::Visualizer) built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub columns: usize,
    pub rows: usize,
    /// Window size in pixels, used to map pointer positions onto cells.
    pub window_width: u32,
    pub window_height: u32,
    pub frames_per_second: u32,
    pub tie_break: TieBreak,
}

impl Default for VisualizerConfig {
    fn default() -> VisualizerConfig {
        VisualizerConfig {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            window_width: DEFAULT_WINDOW_SIZE,
            window_height: DEFAULT_WINDOW_SIZE,
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            tie_break: TieBreak::Fifo,
        }
    }
}

impl VisualizerConfig {
    pub fn with_grid(columns: usize, rows: usize) -> VisualizerConfig {
        VisualizerConfig {
            columns,
            rows,
            ..VisualizerConfig::default()
        }
    }
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.cell_width() == 0 || self.cell_height() == 0 {
            return Err(ConfigError::CellTooSmall {
                width: self.window_width,
                height: self.window_height,
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.frames_per_second == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }
    pub fn cell_width(&self) -> u32 {
        self.window_width / self.columns.max(1) as u32
    }
    pub fn cell_height(&self) -> u32 {
        self.window_height / self.rows.max(1) as u32
    }
    /// Time budget of one tick.
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }
    /// Maps a pointer position in pixels to the cell under it, or [None] outside the grid.
    pub fn cell_at_pixel(&self, px: u32, py: u32) -> Option<Point> {
        let (w, h) = (self.cell_width(), self.cell_height());
        if w == 0 || h == 0 {
            return None;
        }
        let (x, y) = ((px / w) as usize, (py / h) as usize);
        (x < self.columns && y < self.rows).then(|| Point::new(x as i32, y as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_layout() {
        let config = VisualizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_width(), 16);
        assert_eq!(config.cell_height(), 16);
        assert_eq!(config.frame_period(), Duration::from_nanos(33_333_333));
        assert_eq!(config.tie_break, TieBreak::Fifo);
    }

    #[test]
    fn pixel_mapping() {
        let config = VisualizerConfig::default();
        assert_eq!(config.cell_at_pixel(0, 0), Some(Point::new(0, 0)));
        assert_eq!(config.cell_at_pixel(17, 799), Some(Point::new(1, 49)));
        assert_eq!(config.cell_at_pixel(800, 10), None);
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert_eq!(
            VisualizerConfig::with_grid(0, 3).validate(),
            Err(ConfigError::EmptyGrid { columns: 0, rows: 3 })
        );
        let tiny = VisualizerConfig {
            window_width: 10,
            ..VisualizerConfig::with_grid(20, 2)
        };
        assert!(matches!(
            tiny.validate(),
            Err(ConfigError::CellTooSmall { columns: 20, .. })
        ));
        let frozen = VisualizerConfig {
            frames_per_second: 0,
            ..VisualizerConfig::default()
        };
        assert_eq!(frozen.validate(), Err(ConfigError::ZeroFrameRate));
    }
}

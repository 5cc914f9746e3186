use grid_util::Point;
use thiserror::Error;

/// Reasons a placement (start, target or wall) is refused. These are never surfaced to the user:
/// the controller logs and drops them, leaving the grid unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("{0} is a wall")]
    Wall(Point),
    #[error("{0} is the start or the target")]
    Endpoint(Point),
    #[error("a start cell has already been placed")]
    StartAlreadySet,
    #[error("a target cell has already been placed")]
    TargetAlreadySet,
}

/// Rejected [VisualizerConfig](crate::config::VisualizerConfig) values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must have at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: usize, rows: usize },
    #[error("window of {width}x{height} pixels leaves no room for {columns}x{rows} cells")]
    CellTooSmall {
        width: u32,
        height: u32,
        columns: usize,
        rows: usize,
    },
    #[error("frame rate must be positive")]
    ZeroFrameRate,
}

//! Game constants and tuning defaults.

// --- Arena ---

/// Side length of the square arena (units). Valid coordinates are `[0, MAP_SIZE)`.
pub const MAP_SIZE: i32 = 10_000;

/// Largest accepted arena side. Keeps cell and world arithmetic inside `i32`.
pub const MAX_MAP_SIZE: i32 = i32::MAX / 4;

/// Depth at or above which a drone is considered at the surface.
pub const SURFACE_Y_THRESHOLD: i32 = 500;

// --- Scanning ---

/// Distance within which a targeted fish counts as scanned.
pub const SCAN_RADIUS: f64 = 800.0;

/// Distance within which a visible fish justifies switching the light on
/// during exploration.
pub const DETECTION_RADIUS: f64 = 800.0;

// --- Drone movement ---

/// Vertical distance covered by one surface-return move.
pub const SURFACE_STEP: i32 = 600;

/// Number of proximity scans after which a drone heads back up.
pub const SCANS_BEFORE_SURFACING: u32 = 2;

/// Battery cost of one turn with the light switched on.
pub const LIGHT_BATTERY_COST: u32 = 5;

// --- Scoring ---

/// Base points by fish type, indexed by type.
pub const BASE_POINTS: [u32; 3] = [1, 2, 3];

/// Multiplier applied when this agent scans a fish for the first time.
pub const FIRST_SCAN_MULTIPLIER: u32 = 2;

/// Bonus for scanning the last unscanned fish of a color.
pub const COLOR_COMPLETION_BONUS: u32 = 3;

/// Bonus for scanning the last unscanned fish of a type.
pub const TYPE_COMPLETION_BONUS: u32 = 4;

// --- Planning ---

/// Arena units per planner cell for the turn engine.
pub const PLANNER_CELL_SIZE: i32 = 100;

/// Upper bound on A* node expansions per planning call.
pub const MAX_PLANNER_EXPANSIONS: usize = 100_000;

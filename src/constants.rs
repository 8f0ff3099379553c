/// Car body length in pixels.
pub const CAR_LENGTH: f64 = 15.0;

/// Car body width in pixels. Cars are drawn straddling the rail line.
pub const CAR_WIDTH: f64 = 8.0;

/// Coupling gap between consecutive cars of one train.
pub const CAR_GAP: f64 = 3.0;

/// Horizontal space one car occupies in a consist.
pub const CAR_SLOT: f64 = CAR_LENGTH + CAR_GAP;

/// Global speed multiplier applied to every train each frame.
pub const DEFAULT_ANIMATION_SPEED: u32 = 2;
pub const MIN_ANIMATION_SPEED: u32 = 1;
pub const MAX_ANIMATION_SPEED: u32 = 3;

/// Frames between spawn attempts on each side of the yard.
pub const DEFAULT_SPAWN_CYCLE: u32 = 200;
pub const MIN_SPAWN_CYCLE: u32 = 100;
pub const MAX_SPAWN_CYCLE: u32 = 1000;

/// Frame interval for the software-timer fallback when
/// `requestAnimationFrame` is unavailable (~60 fps).
pub const FALLBACK_FRAME_MS: u32 = 16;

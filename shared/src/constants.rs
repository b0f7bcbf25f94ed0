pub const STORAGE_KEY: &str = "corucheWheel_Woman";
pub const THEME_STORAGE_KEY: &str = "corucheWheel_Woman_Theme";
pub const CONFIG_PATH: &str = "config-woman.json";

pub const MIN_SEGMENTS: usize = 2;
pub const MAX_SEGMENTS: usize = 50;
pub const DEFAULT_SEGMENT_COUNT: usize = 12;
pub const HISTORY_LIMIT: usize = 15;

pub const DEFAULT_EMOJI_SIZE: u32 = 28;
pub const MIN_EMOJI_SIZE: u32 = 10;
pub const MAX_EMOJI_SIZE: u32 = 40;

/// Colors cycled through when new segment slots are created.
pub const SEGMENT_PALETTE: [&str; 6] = [
    "#E8D1DC", "#FFFFFF", "#E0C7E8", "#D6B8DF", "#E5D4ED", "#DFC2DE",
];

pub const SPIN_DURATION_MS: f64 = 5000.0;
pub const EXTRA_REVOLUTIONS: f64 = 10.0;
/// How long the winner popup stays up.
pub const WINNER_POPUP_MS: u32 = 3500;

pub const LAST_WHEEL_ERROR: &str = "Não podes apagar a única roda!";
pub const MIN_SEGMENTS_ERROR: &str = "Mínimo 2 segmentos!";
pub const SAVE_FAILED_ERROR: &str = "Não foi possível guardar as rodas.";

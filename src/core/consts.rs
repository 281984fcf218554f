/// Level numbers handed to players are 1-based.
pub const DEFAULT_START_LEVEL: usize = 1;

/// Default number of AI generations allowed per day
pub const DEFAULT_DAILY_REMOTE_LIMIT: u32 = 10;
/// Characters of input echoed back by the fallback handler
pub const DEFAULT_FALLBACK_ECHO_CHARS: usize = 500;

/// Repeat count used when the second input line is missing or not a number
pub const DEFAULT_REPEAT_COUNT: usize = 3;
/// Hard cap on repeat count
pub const MAX_REPEAT_COUNT: usize = 100;

/// Password length used when the input is absent or non-numeric
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;
/// Shortest password that still fits one character of every class
pub const MIN_PASSWORD_LENGTH: usize = 4;
/// Hard cap on password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Words per minute for silent reading estimates
pub const READING_WPM: f64 = 200.0;
/// Words per minute for speaking estimates
pub const SPEAKING_WPM: f64 = 150.0;

/// Title length above which search engines truncate
pub const META_TITLE_LIMIT: usize = 60;
/// Description length above which search engines truncate
pub const META_DESCRIPTION_LIMIT: usize = 160;

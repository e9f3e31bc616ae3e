/// Default account language for new users
pub const DEFAULT_LANGUAGE: &str = "en";

/// Upper bound for a dog's age in years
pub const MAX_DOG_AGE_YEARS: i32 = 30;

/// Default appointment reminder lead time in minutes
pub const DEFAULT_REMINDER_MINUTES: i32 = 60;

/// Vaccinations due within this many days trigger a reminder email
pub const VACCINATION_REMINDER_DAYS: i64 = 30;

use chrono::{DateTime, Duration, FixedOffset};

pub const CACHE_TTL_HOURS: i64 = 2;

/// How long a stored recommendation stays usable
pub fn cache_ttl() -> Duration {
    Duration::hours(CACHE_TTL_HOURS)
}

/// Storage key for a location's recommendation
pub fn cache_key(subdistrict: &str, province: &str) -> String {
    format!("spray_window:{}:{}", subdistrict.trim(), province.trim())
}

/// Whether a recommendation generated at `generated_at` can still be shown at `now`
pub fn is_fresh(generated_at: DateTime<FixedOffset>, now: DateTime<FixedOffset>, ttl: Duration) -> bool {
    now.signed_duration_since(generated_at) < ttl
}

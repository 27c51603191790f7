use redisify::{Caches, Environment, RedisifySettings, redisify};

/// Build an environment snapshot from name/value pairs
pub fn env(vars: &[(&str, &str)]) -> Environment {
    vars.iter().copied().collect()
}

/// Run redisify with default settings and an optional fallback URL
pub fn caches_for(vars: &[(&str, &str)], fallback: Option<&str>) -> Caches {
    let mut settings = RedisifySettings::default();
    if let Some(url) = fallback {
        settings = settings.with_fallback_url(url);
    }

    redisify(&env(vars), &settings).expect("environment should produce valid cache settings")
}

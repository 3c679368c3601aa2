use std::path::{Path, PathBuf};

/// Load the service `.env` (picked by `APP_ENV`), then the workspace `.env`
/// as a fallback. Variables already set in the process are never overridden.
///
/// Runs before the subscriber is installed, so it returns the files it
/// loaded instead of logging them.
pub fn load_service_env(manifest_dir: &Path) -> Vec<PathBuf> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

    let mut loaded = Vec::new();

    let candidate = service_env_path(manifest_dir, &app_env);
    if dotenvy::from_path(&candidate).is_ok() {
        loaded.push(candidate);
    }
    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    loaded
}

pub fn service_env_path(manifest_dir: &Path, app_env: &str) -> PathBuf {
    let filename = match app_env {
        "production" => ".env.production",
        "staging" => ".env.staging",
        _ => ".env",
    };

    manifest_dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_file_follows_app_env() {
        let dir = Path::new("/srv/assessment-api");
        assert_eq!(
            service_env_path(dir, "production"),
            dir.join(".env.production")
        );
        assert_eq!(service_env_path(dir, "staging"), dir.join(".env.staging"));
        assert_eq!(service_env_path(dir, "development"), dir.join(".env"));
        assert_eq!(service_env_path(dir, "anything"), dir.join(".env"));
    }
}

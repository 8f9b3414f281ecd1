//! Settings loading.
//!
//! Layered the usual way: compiled-in defaults first, then an optional TOML
//! file on top. A missing file is not an error, the defaults already describe
//! a complete run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use tracing::debug;

use splash_core::config::SplashConfig;

/// Default settings location, e.g. `~/.config/geosplash/settings.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("geosplash").join("settings.toml"))
}

/// Load settings from `path`, or from the default location when `path` is
/// `None`. Values absent from the file keep their defaults.
pub fn load_settings(path: Option<&Path>) -> Result<SplashConfig> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_settings_path(),
    };

    let mut builder =
        Config::builder().add_source(Config::try_from(&SplashConfig::default())?);

    if let Some(path) = &path {
        debug!(path = %path.display(), "loading settings");
        builder = builder.add_source(
            File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(false),
        );
    }

    builder
        .build()
        .context("failed to load settings")?
        .try_deserialize()
        .context("settings file has an invalid shape")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use splash_core::config::GeocoderKind;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_settings(Some(Path::new("/nonexistent/settings.toml"))).unwrap();

        assert_eq!(config.timings.logo_ms, 2500);
        assert_eq!(config.profile.name, "ARIES ADITYANTO");
        assert!(config.location.available);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [timings]
            logo_ms = 100

            [profile]
            name = "BUDI SANTOSO"

            [location.geocoder]
            backend = "nominatim"
            "#
        )
        .unwrap();

        let config = load_settings(Some(file.path())).unwrap();

        assert_eq!(config.timings.logo_ms, 100);
        // Untouched sibling keys keep their defaults.
        assert_eq!(config.timings.finding_location_ms, 3000);
        assert_eq!(config.profile.name, "BUDI SANTOSO");
        assert_eq!(config.profile.class_label, "TI.24.B1");
        assert_eq!(config.location.geocoder.backend, GeocoderKind::Nominatim);
    }

    #[test]
    fn malformed_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timings = \"not a table\"").unwrap();

        assert!(load_settings(Some(file.path())).is_err());
    }
}

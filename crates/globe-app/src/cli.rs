use std::path::PathBuf;

use clap::Parser;

use globe_config::schema::WindowMode;
use globe_config::GlobeConfig;

/// Animated globe backdrop: a textured earth, wireframe shell and orbiting particles.
#[derive(Parser, Debug)]
#[command(name = "globe-backdrop", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `globe=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Particle layout seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Globe texture URL or file path. An empty string disables texturing.
    #[arg(long)]
    pub texture: Option<String>,

    /// Run undecorated, behind other windows, ignoring clicks.
    #[arg(long)]
    pub backdrop: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Fold command-line overrides into the loaded config.
    pub fn apply_overrides(&self, config: &mut GlobeConfig) {
        if let Some(seed) = self.seed {
            config.particles.seed = Some(seed);
        }
        if let Some(ref texture) = self.texture {
            config.globe.texture = texture.clone();
        }
        if self.backdrop {
            config.window.mode = WindowMode::Backdrop;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("globe-backdrop").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_flags_changes_nothing() {
        let mut config = GlobeConfig::default();
        args(&[]).apply_overrides(&mut config);
        assert_eq!(config.particles.seed, None);
        assert_eq!(config.window.mode, WindowMode::Windowed);
        assert!(config.globe.texture.starts_with("https://"));
    }

    #[test]
    fn overrides_apply() {
        let mut config = GlobeConfig::default();
        args(&["--seed", "7", "--texture", "/tmp/earth.png", "--backdrop"])
            .apply_overrides(&mut config);
        assert_eq!(config.particles.seed, Some(7));
        assert_eq!(config.globe.texture, "/tmp/earth.png");
        assert_eq!(config.window.mode, WindowMode::Backdrop);
    }

    #[test]
    fn empty_texture_disables() {
        let mut config = GlobeConfig::default();
        args(&["--texture", ""]).apply_overrides(&mut config);
        assert!(config.globe.texture.is_empty());
    }

    #[test]
    fn parses_config_and_log_level() {
        let a = args(&["--config", "/etc/globe.toml", "--log-level", "globe=debug", "--print-config"]);
        assert_eq!(a.config, Some(PathBuf::from("/etc/globe.toml")));
        assert_eq!(a.log_level.as_deref(), Some("globe=debug"));
        assert!(a.print_config);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["globe-backdrop", "--seed", "abc"]).is_err());
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colorstrip_config::Overrides;
use colorstrip_core::Theme;

#[derive(Parser, Debug)]
#[command(name = "colorstrip")]
#[command(author, version, about = "An animated ring of colored strips for the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "COLORSTRIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true, env = "COLORSTRIP_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Parameter fragment, e.g. "#theme=dark#stripCount=6"
    #[arg(short, long, global = true)]
    pub params: Option<String>,

    #[command(flatten)]
    pub options: OptionArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Play the animation in the terminal (default)
    Play,

    /// Print frames as JSON: background, colors and polygons
    Dump {
        /// Number of frames after the initial one
        #[arg(long, default_value_t = 0)]
        frames: usize,

        /// Surface width
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Surface height
        #[arg(long, default_value_t = 600.0)]
        height: f64,

        /// Time increment applied between frames
        #[arg(long, default_value_t = 16.0)]
        time_increment: f64,
    },

    /// Print the resolved settings as a TOML config file
    Config,
}

/// Animation options; each overrides the config file and the fragment.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Number of strips
    #[arg(long, global = true)]
    pub strip_count: Option<usize>,

    /// Hue spread of the palette, between 0 and 1
    #[arg(long, global = true)]
    pub diversity_ratio: Option<f64>,

    /// light, pastelle, twilight or dark
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Multiplier on the oscillators' random kicks
    #[arg(long, global = true)]
    pub speed_factor: Option<f64>,

    /// Horizontal radius factor
    #[arg(long, global = true)]
    pub radius_factor: Option<f64>,

    /// Vertical radius factor (defaults to the horizontal one)
    #[arg(long, global = true)]
    pub secondary_radius_factor: Option<f64>,

    /// Seed for both palette and motion
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Palette seed (defaults to --seed)
    #[arg(long, global = true)]
    pub palette_seed: Option<u64>,

    /// Motion seed (defaults to --seed)
    #[arg(long, global = true)]
    pub strip_circle_seed: Option<u64>,

    /// Base hue of the palette, between 0 and 360
    #[arg(long, global = true)]
    pub hue: Option<f64>,

    /// Bound of the sigma wobble, in radians
    #[arg(long, global = true)]
    pub sigma_bound: Option<f64>,
}

impl OptionArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            strip_count: self.strip_count,
            diversity_ratio: self.diversity_ratio,
            theme: self.theme,
            speed_factor: self.speed_factor,
            radius_factor: self.radius_factor,
            secondary_radius_factor: self.secondary_radius_factor,
            seed: self.seed,
            palette_seed: self.palette_seed,
            strip_circle_seed: self.strip_circle_seed,
            hue: self.hue,
            sigma_bound: self.sigma_bound,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_options_and_dump() {
        let cli = Cli::parse_from([
            "colorstrip",
            "--theme",
            "dark",
            "--strip-count",
            "6",
            "dump",
            "--frames",
            "3",
            "--seed",
            "9",
        ]);
        let overrides = cli.options.overrides();
        assert_eq!(overrides.theme, Some(Theme::Dark));
        assert_eq!(overrides.strip_count, Some(6));
        assert_eq!(overrides.seed, Some(9));
        assert_eq!(
            cli.command,
            Some(Command::Dump {
                frames: 3,
                width: 800.0,
                height: 600.0,
                time_increment: 16.0,
            })
        );
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["colorstrip", "--theme", "sepia"]).is_err());
    }
}

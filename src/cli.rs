// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;

#[derive(Parser, Debug, Clone)]
#[command(name = "img-viewer")]
#[command(about = "Command line image viewer", long_about = None)]
pub struct Cli {
    /// Path to the image file to display
    pub image: PathBuf,

    /// Window width in pixels (must be a multiple of 16)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Window height in pixels (must be a multiple of 9)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

impl Cli {
    /// Parse arguments, mapping usage errors (no image path, stray extra
    /// arguments) to exit status 1 with a plain diagnostic. Help and version
    /// keep clap's normal behavior.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(_) => {
                eprintln!("error: missing input image");
                std::process::exit(1);
            }
        }
    }
}

/// The window keeps a 16:9 aspect ratio: width a multiple of 16, height a
/// multiple of 9. Checked before any window creation.
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width % 16 != 0 || height % 9 != 0 {
        bail!(
            "screen resolution must have 16:9 aspect ratio (got {}x{})",
            width,
            height
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions_are_valid() {
        assert!(validate_dimensions(DEFAULT_WIDTH, DEFAULT_HEIGHT).is_ok());
        assert!(validate_dimensions(1920, 1080).is_ok());
    }

    #[test]
    fn test_rejects_non_16_9_dimensions() {
        // 1000 % 16 != 0
        assert!(validate_dimensions(1000, 720).is_err());
        assert!(validate_dimensions(1280, 719).is_err());
    }

    #[test]
    fn test_cli_parses_image_and_size() {
        let cli = Cli::try_parse_from(["img-viewer", "photo.png", "--width", "1920", "--height", "1080"])
            .expect("valid arguments must parse");
        assert_eq!(cli.image, PathBuf::from("photo.png"));
        assert_eq!(cli.width, 1920);
        assert_eq!(cli.height, 1080);
    }

    #[test]
    fn test_cli_rejects_missing_and_extra_paths() {
        assert!(Cli::try_parse_from(["img-viewer"]).is_err());
        assert!(Cli::try_parse_from(["img-viewer", "a.png", "b.png"]).is_err());
    }
}

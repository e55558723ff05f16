// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "orbit-view")]
#[command(about = "Orbit camera scene viewer", long_about = None)]
pub struct Cli {
    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Mouse look sensitivity in radians per pixel
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Zoom speed in units per second
    #[arg(long = "zoom-speed")]
    pub zoom_speed: Option<f32>,

    /// Initial window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Flags given on the command line win over the config file
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(fov) = self.fov {
            config.projection.fov_y_degrees = fov;
        }
        if let Some(sensitivity) = self.sensitivity {
            config.camera.mouse_sensitivity = sensitivity;
        }
        if let Some(zoom_speed) = self.zoom_speed {
            config.camera.zoom_speed = zoom_speed;
        }
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
    }
}

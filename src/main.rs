use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};

use i2cbright::{set_brightness, Selector};

/// Set monitor brightness via i2c using the DDC protocol.
#[derive(Parser, Debug)]
#[command(version, about, group(ArgGroup::new("monitor").required(true)))]
struct Args {
    /// Directly specify the i2c-dev device, eg. /dev/i2c-11
    #[arg(long, value_name = "PATH", group = "monitor")]
    dev: Option<PathBuf>,

    /// Directly specify the monitor sysfs path, eg. /sys/class/drm/card1-DP-1
    #[arg(long, value_name = "PATH", group = "monitor")]
    drm: Option<PathBuf>,

    /// Search via EDID substring, eg. DELL
    #[arg(long, value_name = "SUBSTRING", group = "monitor")]
    edid: Option<String>,

    /// Display debug info
    #[arg(long)]
    debug: bool,

    /// Brightness to set (eg. 75)
    brightness: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let selector = match (args.dev, args.drm, args.edid) {
        (Some(dev), _, _) => Selector::Device(dev),
        (_, Some(drm), _) => Selector::Display(drm),
        (_, _, Some(edid)) => Selector::Edid(edid.into_bytes()),
        // clap enforces that exactly one selection flag is present
        _ => unreachable!(),
    };

    set_brightness(&selector, args.brightness)?;
    Ok(())
}

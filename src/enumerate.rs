//! Resolution of a monitor selection to an i2c-dev node.
//!
//! The kernel exposes one directory per display connector under
//! `/sys/class/drm`, each carrying the monitor's raw EDID blob and, when the
//! i2c-dev module is loaded, the adapter's character device beneath
//! `i2c-*/i2c-dev/i2c-*/uevent`. Resolution walks exactly that layout; it
//! never opens the bus itself.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::sysfs::{Filesystem, DRM_CLASS};

/// How the target monitor is identified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// An i2c-dev node used as-is, e.g. `/dev/i2c-11`.
    Device(PathBuf),
    /// A connector directory under sysfs, e.g. `/sys/class/drm/card1-DP-1`.
    Display(PathBuf),
    /// A byte substring searched for in every connector's EDID blob.
    Edid(Vec<u8>),
}

/// Resolve a selector to the i2c-dev node to talk to.
///
/// `Selector::Device` passes through untouched; the other variants walk the
/// sysfs tree. Failure to resolve is terminal, never an empty result.
pub fn resolve<F: Filesystem>(fs: &F, selector: &Selector) -> Result<PathBuf> {
    match selector {
        Selector::Device(dev) => Ok(dev.clone()),
        Selector::Display(output) => find_i2c_device(fs, output),
        Selector::Edid(needle) => {
            let output = find_display(fs, needle)?;
            find_i2c_device(fs, &output)
        }
    }
}

/// Search every connector's EDID for `needle`. First match wins; connectors
/// without a readable EDID blob are skipped. Enumeration order is whatever
/// the filesystem yields.
pub fn find_display<F: Filesystem>(fs: &F, needle: &[u8]) -> Result<PathBuf> {
    for output in fs.list_dir(Path::new(DRM_CLASS)).unwrap_or_default() {
        let edid = output.join("edid");
        debug!("considering edid file {}", edid.display());
        let blob = match fs.read(&edid) {
            Ok(blob) => blob,
            Err(_) => continue,
        };
        if contains(&blob, needle) {
            debug!("  got a match");
            return Ok(output);
        }
    }

    Err(Error::NoDisplayMatched)
}

/// Descend from a connector directory to its adapter's i2c-dev node.
///
/// The adapter's uevent file names the character device relative to `/dev`
/// in its `DEVNAME=` line; uevent files without that line are skipped.
pub fn find_i2c_device<F: Filesystem>(fs: &F, output: &Path) -> Result<PathBuf> {
    for adapter in list_prefixed(fs, output, "i2c-") {
        for dev in list_prefixed(fs, &adapter.join("i2c-dev"), "i2c-") {
            let uevent = dev.join("uevent");
            debug!("considering uevent file {}", uevent.display());
            let text = match fs.read(&uevent) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(_) => continue,
            };
            if let Some(name) = devname(&text) {
                debug!("  got DEVNAME={}", name);
                return Ok(Path::new("/dev").join(name));
            }
        }
    }

    Err(Error::NoI2cDevice {
        display: output.to_owned(),
    })
}

fn list_prefixed<F: Filesystem>(fs: &F, dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let mut entries = fs.list_dir(dir).unwrap_or_default();
    entries.retain(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| name.starts_with(prefix))
    });
    entries
}

/// Value of the line-anchored `DEVNAME=` key, if present.
fn devname(uevent: &str) -> Option<&str> {
    uevent.lines().find_map(|line| line.strip_prefix("DEVNAME="))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

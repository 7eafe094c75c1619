//! Failure modes of a brightness-set operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An error that can occur while resolving a monitor or talking to its bus.
///
/// None of these are recovered from; every failure aborts the operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Brightness outside what the VCP value byte can carry.
    #[error("brightness {0} out of range, expected 0-255")]
    BrightnessRange(u16),

    /// No connector's EDID contained the requested substring.
    #[error("unable to find a monitor with the given EDID substring")]
    NoDisplayMatched,

    /// No i2c-dev adapter was found beneath the display's sysfs directory.
    #[error("unable to find i2c device for {}; modprobe i2c-dev?", .display.display())]
    NoI2cDevice {
        /// The connector directory that was searched.
        display: PathBuf,
    },

    /// The i2c device node could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    DeviceOpen {
        /// The device node that was being opened.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },

    /// Programming the DDC/CI slave address failed.
    #[error("failed to set i2c slave address: {0}")]
    SlaveAddress(#[source] io::Error),

    /// The bus write failed.
    #[error("i2c write failed: {0}")]
    Write(#[source] io::Error),

    /// The device accepted only part of the packet.
    #[error("short write to i2c device, {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes the device accepted.
        written: usize,
        /// Length of the full packet.
        expected: usize,
    },
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

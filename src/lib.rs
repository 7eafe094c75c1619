#![deny(missing_docs)]

//! Set monitor backlight brightness using the DDC/CI protocol.
//!
//! Talks to the display's i2c-dev node directly: resolves the node from a
//! connector's sysfs path or an EDID substring, frames a Set VCP Feature
//! request for the brightness control, and writes it to the bus as a single
//! transaction. Nothing is read back from the monitor.
//!
//! # Example
//!
//! ```rust,no_run
//! use i2cbright::{set_brightness, Selector};
//!
//! set_brightness(&Selector::Edid(b"DELL".to_vec()), 75).unwrap();
//! ```

use std::path::PathBuf;

/// DDC/CI command and control I2C address
pub const DDC_CI_ADDRESS: u16 = 0x37;

/// DDC sub-address command prefix
pub const SUB_ADDRESS_DDC_CI: u8 = 0x51;

pub mod commands;

mod bus;
mod enumerate;
mod error;
mod sysfs;

pub use bus::Bus;
pub use enumerate::{find_display, find_i2c_device, resolve, Selector};
pub use error::{Error, Result};
pub use sysfs::{Filesystem, SysFs};

/// Set the brightness of the monitor identified by `selector`.
///
/// Any step's failure aborts the whole operation; nothing is retried, and
/// there is no state to roll back.
pub fn set_brightness(selector: &Selector, brightness: u16) -> Result<()> {
    set_brightness_with(&SysFs, Bus::open, selector, brightness)
}

/// Run one brightness-set operation against a pluggable filesystem and bus
/// opener.
///
/// This is [`set_brightness`] with its seams exposed, so the whole sequence
/// can be exercised against synthetic devices.
pub fn set_brightness_with<F, I, O>(
    fs: &F,
    open: O,
    selector: &Selector,
    brightness: u16,
) -> Result<()>
where
    F: Filesystem,
    I: i2c::Address + i2c::ReadWrite,
    I::Error: Into<std::io::Error>,
    O: FnOnce(PathBuf) -> Result<Bus<I>>,
{
    let value = u8::try_from(brightness).map_err(|_| Error::BrightnessRange(brightness))?;
    let device = enumerate::resolve(fs, selector)?;
    let packet = commands::SetVcpFeature::brightness(value).encode();
    let mut bus = open(device)?;
    bus.send(&packet)
}

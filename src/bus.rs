//! Single-transaction DDC/CI bus transport.

use std::fs::File;
use std::io;
use std::path::Path;

use log::debug;

use crate::commands::Packet;
use crate::error::{Error, Result};
use crate::DDC_CI_ADDRESS;

/// An open, address-programmed DDC/CI connection.
///
/// Generic over the `i2c` master traits so synthetic devices can stand in for
/// hardware; [`Bus::open`] provides the Linux i2c-dev backend. The underlying
/// device is closed when the bus is dropped, on every exit path.
pub struct Bus<I> {
    inner: I,
}

impl Bus<i2c_linux::I2c<File>> {
    /// Open the i2c-dev node at `path` and program the DDC/CI slave address.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("opening i2c device {}", path.display());
        let i2c = i2c_linux::I2c::from_path(path).map_err(|source| Error::DeviceOpen {
            path: path.to_owned(),
            source,
        })?;
        Bus::new(i2c)
    }
}

impl<I> Bus<I>
where
    I: i2c::Address + i2c::ReadWrite,
    I::Error: Into<io::Error>,
{
    /// Wrap an already-open device, programming the DDC/CI slave address.
    pub fn new(mut i2c: I) -> Result<Self> {
        debug!("setting i2c slave address {:#04x}", DDC_CI_ADDRESS);
        i2c.set_slave_address(DDC_CI_ADDRESS, false)
            .map_err(|e| Error::SlaveAddress(e.into()))?;
        Ok(Bus { inner: i2c })
    }

    /// Write one framed request to the device as a single bus transaction.
    ///
    /// A short write is a failure; nothing is retried and no acknowledgement
    /// is read back.
    pub fn send(&mut self, packet: &Packet) -> Result<()> {
        let bytes = packet.bytes();
        let written = self
            .inner
            .i2c_write(bytes)
            .map_err(|e| Error::Write(e.into()))?;
        if written != bytes.len() {
            return Err(Error::ShortWrite {
                written,
                expected: bytes.len(),
            });
        }
        Ok(())
    }
}

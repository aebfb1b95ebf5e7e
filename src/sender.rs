//! Built-in sender  
//! If you want to put the ST7032 behind another transport, you will need to implement [`SendCommand`] trait

use embedded_hal::delay::DelayNs;

use crate::command::Command;

mod i2c_sender;

pub use i2c_sender::{I2cSender, DEFAULT_ADDRESS};

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// Every call of [`SendCommand::send`] is one independent register write,
/// a sender should not batch commands together.
pub trait SendCommand<Delayer: DelayNs> {
    /// Error reported by the underlying transport
    type Error;

    /// Put a [`Command`] on the bus
    fn send(&mut self, command: impl Into<Command>) -> Result<(), Self::Error>;

    /// Send command, then wait for the chip to settle
    fn send_and_wait(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut Delayer,
        settle_ms: u32,
    ) -> Result<(), Self::Error> {
        self.send(command)?;
        delayer.delay_ms(settle_ms);
        Ok(())
    }
}

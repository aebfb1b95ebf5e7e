use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::command::Command;

use super::SendCommand;

/// 7 bit I2C address of the ST7032
pub const DEFAULT_ADDRESS: u8 = 0x3E;

// One transaction is always two bytes:
// control byte (0x00 instruction / 0x40 data), then the payload byte

/// Sender for the I2C interface of the ST7032
pub struct I2cSender<'a, I2cLcd: I2c> {
    i2c: &'a mut I2cLcd,
    addr: u8,
}

impl<'a, I2cLcd: I2c> I2cSender<'a, I2cLcd> {
    /// Use the fixed address of the ST7032
    pub fn new(i2c: &'a mut I2cLcd) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Use a custom address, e.g. behind an address translator
    pub fn with_address(i2c: &'a mut I2cLcd, addr: u8) -> Self {
        Self { i2c, addr }
    }
}

impl<'a, I2cLcd: I2c, Delayer: DelayNs> SendCommand<Delayer> for I2cSender<'a, I2cLcd> {
    type Error = I2cLcd::Error;

    fn send(&mut self, command: impl Into<Command>) -> Result<(), Self::Error> {
        let command: Command = command.into();
        let seq = [
            command.get_register_selection().control_byte(),
            command.get_data(),
        ];

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "st7032 @ {=u8:#x}: {=u8:#x} {=u8:#x}",
            self.addr,
            seq[0],
            seq[1]
        );

        self.i2c.write(self.addr, &seq)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::command::CommandSet;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        i2c::{Mock as I2cMock, Transaction as I2cTransaction},
    };

    #[test]
    fn instruction_and_data_control_bytes() {
        let expected = std::vec![
            I2cTransaction::write(DEFAULT_ADDRESS, std::vec![0x00, 0x01]),
            I2cTransaction::write(DEFAULT_ADDRESS, std::vec![0x40, b'A']),
        ];
        let mut i2c = I2cMock::new(&expected);
        let mut sender = I2cSender::new(&mut i2c);

        SendCommand::<NoopDelay>::send(&mut sender, CommandSet::ClearDisplay).unwrap();
        SendCommand::<NoopDelay>::send(&mut sender, CommandSet::WriteDataToRAM(b'A')).unwrap();

        i2c.done();
    }

    #[test]
    fn custom_address_and_bus_error() {
        let expected = std::vec![
            I2cTransaction::write(0x3F, std::vec![0x00, 0x02]).with_error(ErrorKind::Other),
        ];
        let mut i2c = I2cMock::new(&expected);
        let mut sender = I2cSender::with_address(&mut i2c, 0x3F);

        let result = sender.send_and_wait(CommandSet::ReturnHome, &mut NoopDelay::new(), 30);
        assert_eq!(result, Err(ErrorKind::Other));

        i2c.done();
    }
}

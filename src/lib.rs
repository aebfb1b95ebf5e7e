/*!
# ST7032 Driver

Driver for the Sitronix ST7032 dot matrix character LCD controller, on its I2C interface.

Basic Usage:

1. Initialize a "sender" <br/>
    This crate include an I2C sender [`sender::I2cSender`], it works with any
    [`embedded_hal::i2c::I2c`] bus, at the fixed ST7032 address `0x3E`.

    You can also use any sender implemented [`sender::SendCommand`].
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] with a [`lcd::Config`] to create a [`lcd::Lcd`], and initialize ST7032 hardware
<br/>
<br/>
3. use any methods provide by [`lcd::Lcd`] to control the display

```rust,ignore
let mut sender = I2cSender::new(&mut i2c);
let mut lcd = Lcd::new(&mut sender, &mut delay, Config::default())?;

lcd.write("Hello!".chars())?;
lcd.set_cursor(1, 0)?;
lcd.write([0xBA, 0xDD, 0xC6, 0xC1, 0xDC])?;
lcd.adjust_contrast(-2)?;
```

Every write is followed by a blocking settle delay (30ms by default, clear and home wait 1200ms more),
so keep the driver out of time critical paths.

Enable the `defmt` feature to trace every bus transaction.
*/

#![no_std]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod lcd;
pub mod payload;
pub mod sender;
mod state;
pub mod utils;

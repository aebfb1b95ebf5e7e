//! Drive an ST7032 16x2 module (e.g. AQM1602, SB1602) with a STM32F411RET6 over I2C
//!
//! Wiring diagram
//!
//! ST7032 module <-> STM32F411RET6
//!           VDD <-> 3.3V
//!           GND <-> GND
//!           SCL <-> PB6 (4.7 kOhm pull up to 3.3V)
//!           SDA <-> PB7 (4.7 kOhm pull up to 3.3V)
//!          RESET <-> 3.3V

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{
    i2c::{self, I2c},
    pac,
    prelude::*,
};

use st7032_driver::{
    command::{MoveDirection, ShiftType, State},
    lcd::{Config, Lcd},
    payload::Payload,
    sender::I2cSender,
};

// a heart shape
const HEART: [u8; 8] = [
    0b00000, 0b00000, 0b01010, 0b11111, 0b01110, 0b00100, 0b00000, 0b00000,
];

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpiob = dp.GPIOB.split();

    let mut i2c = I2c::new(
        dp.I2C1,
        (gpiob.pb6, gpiob.pb7),
        i2c::Mode::standard(100.kHz()), // ST7032 max I2C speed is 400 kHz
        &clocks,
    );

    let mut sender = I2cSender::new(&mut i2c);

    rprintln!("init ST7032");
    let mut lcd = Lcd::new(&mut sender, &mut delayer, Config::default())
        .expect("ST7032 init failed, check wiring");

    lcd.write("Hello!".chars()).unwrap();

    // "コンニチワ!" in the katakana block of CGROM
    lcd.set_cursor(1, 0).unwrap();
    lcd.write([
        Payload::Byte(0xBA),
        Payload::Byte(0xDD),
        Payload::Byte(0xC6),
        Payload::Byte(0xC1),
        Payload::Byte(0xDC),
        Payload::Char('!'),
    ])
    .unwrap();

    // put a heart at the end of the first line
    lcd.write_graph_to_cgram(1, &HEART).unwrap();
    lcd.set_cursor(0, 15).unwrap();
    lcd.write([1u8]).unwrap();

    lcd.cursor().unwrap();
    lcd.blink().unwrap();
    lcd.delay_ms(1_000);
    lcd.no_blink().unwrap();
    lcd.no_cursor().unwrap();

    // fade contrast down and back up
    for _ in 0..8 {
        lcd.adjust_contrast(-2).unwrap();
        rprintln!("contrast: {}", lcd.get_contrast());
    }
    for _ in 0..8 {
        lcd.adjust_contrast(2).unwrap();
        rprintln!("contrast: {}", lcd.get_contrast());
    }

    // shift display window away and back
    for _ in 0..4 {
        lcd.shift_cursor_or_display(ShiftType::CursorAndDisplay, MoveDirection::LeftToRight)
            .unwrap();
    }
    for _ in 0..4 {
        lcd.shift_cursor_or_display(ShiftType::CursorAndDisplay, MoveDirection::RightToLeft)
            .unwrap();
    }

    // and blinking display 3 times
    for _ in 0..3 {
        lcd.set_display_state(State::Off).unwrap();
        lcd.delay_ms(500);
        lcd.set_display_state(State::On).unwrap();
        lcd.delay_ms(500);
    }

    rprintln!("demo done");

    #[allow(clippy::empty_loop)]
    loop {}
}

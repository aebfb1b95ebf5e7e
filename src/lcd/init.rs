use embedded_hal::delay::DelayNs;

use crate::{
    command::{Bias, CommandSet, Font, InstructionTable, LineMode, MoveDirection, ShiftType, State},
    error::Error,
    lcd::{Lcd, Timing},
    sender::SendCommand,
    state::{wrap_contrast, LcdState},
};

/// [`Config`] is the init config of a [`Lcd`]
///
/// [`Config::default()`] is the power-on setting of a 16x2 ST7032 module at 3.3V:
/// 2 lines, bias 1/4, contrast 0x18, booster on, follower ratio 0b100,
/// display on, cursor and blink off, address counter increments.
#[derive(Clone)]
pub struct Config {
    state: LcdState,
    bias: Bias,
    osc_frequency: u8,
    follower_ratio: u8,
    write_delay_ms: u32,
    clear_home_delay_ms: u32,
    follower_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state: LcdState::default(),
            bias: Bias::OneFourth,
            osc_frequency: 0b100,
            follower_ratio: 0b100,
            write_delay_ms: 30,
            clear_home_delay_ms: 1200,
            follower_delay_ms: 300,
        }
    }
}

#[allow(missing_docs)]
impl Config {
    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    pub fn set_line_mode(mut self, line: LineMode) -> Self {
        self.state.set_line_mode(line);
        self
    }

    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    pub fn set_font(mut self, font: Font) -> Self {
        self.state.set_font(font);
        self
    }

    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    pub fn set_display_state(mut self, display: State) -> Self {
        self.state.set_display_state(display);
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.state.set_cursor_state(cursor);
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.state.get_cursor_blink()
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.state.set_cursor_blink(blink);
        self
    }

    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    pub fn set_direction(mut self, dir: MoveDirection) -> Self {
        self.state.set_direction(dir);
        self
    }

    pub fn get_shift_type(&self) -> ShiftType {
        self.state.get_shift_type()
    }

    pub fn set_shift_type(mut self, shift: ShiftType) -> Self {
        self.state.set_shift_type(shift);
        self
    }

    pub fn get_contrast(&self) -> u8 {
        self.state.get_contrast()
    }

    /// Wraps like [`Lcd::set_contrast`]
    pub fn set_contrast(mut self, contrast: i32) -> Self {
        self.state.set_contrast(wrap_contrast(contrast));
        self
    }

    pub fn get_booster(&self) -> State {
        self.state.get_booster()
    }

    pub fn set_booster(mut self, booster: State) -> Self {
        self.state.set_booster(booster);
        self
    }

    pub fn get_icon(&self) -> State {
        self.state.get_icon()
    }

    pub fn set_icon(mut self, icon: State) -> Self {
        self.state.set_icon(icon);
        self
    }

    pub fn get_bias(&self) -> Bias {
        self.bias
    }

    pub fn set_bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }

    pub fn get_osc_frequency(&self) -> u8 {
        self.osc_frequency
    }

    /// Only the lower 3 bits are used
    pub fn set_osc_frequency(mut self, frequency: u8) -> Self {
        self.osc_frequency = frequency & 0b111;
        self
    }

    pub fn get_follower_ratio(&self) -> u8 {
        self.follower_ratio
    }

    /// Only the lower 3 bits are used
    pub fn set_follower_ratio(mut self, ratio: u8) -> Self {
        self.follower_ratio = ratio & 0b111;
        self
    }

    pub fn get_write_delay_ms(&self) -> u32 {
        self.write_delay_ms
    }

    /// Wait after every instruction and data write
    pub fn set_write_delay_ms(mut self, delay_ms: u32) -> Self {
        self.write_delay_ms = delay_ms;
        self
    }

    pub fn get_clear_home_delay_ms(&self) -> u32 {
        self.clear_home_delay_ms
    }

    /// Extra wait after clear display and return home
    pub fn set_clear_home_delay_ms(mut self, delay_ms: u32) -> Self {
        self.clear_home_delay_ms = delay_ms;
        self
    }

    pub fn get_follower_delay_ms(&self) -> u32 {
        self.follower_delay_ms
    }

    /// Wait for the follower circuit to become stable, once during init
    pub fn set_follower_delay_ms(mut self, delay_ms: u32) -> Self {
        self.follower_delay_ms = delay_ms;
        self
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, and init ST7032 hardware
    pub fn new(
        sender: &'a mut Sender,
        delayer: &'b mut Delayer,
        config: Config,
    ) -> Result<Self, Error<Sender::Error>> {
        let Config {
            state,
            bias,
            osc_frequency,
            follower_ratio,
            write_delay_ms,
            clear_home_delay_ms,
            follower_delay_ms,
        } = config;

        let mut lcd = Lcd {
            sender,
            delayer,
            state,
            timing: Timing {
                write_delay_ms,
                clear_home_delay_ms,
            },
        };

        // oscillator, power and follower live in the extended table,
        // so the very first function set selects it
        lcd.state.set_instruction_table(InstructionTable::Extended);
        lcd.send_command(lcd.state.function_set())?;

        lcd.send_command(CommandSet::InternalOscFrequency(bias, osc_frequency))?;

        // contrast bits are not set yet, they come with the contrast sequence
        lcd.send_command(CommandSet::PowerIconContrast {
            icon: lcd.state.get_icon(),
            booster: lcd.state.get_booster(),
            contrast_high: 0,
        })?;

        let contrast = lcd.state.get_contrast();
        lcd.set_contrast(i32::from(contrast))?;

        lcd.send_command(CommandSet::FollowerControl(State::On, follower_ratio))?;
        lcd.delayer.delay_ms(follower_delay_ms);

        lcd.send_command(lcd.state.display_on_off())?;
        lcd.send_command(lcd.state.entry_mode())?;

        lcd.clear()?;
        lcd.home()?;

        Ok(lcd)
    }
}

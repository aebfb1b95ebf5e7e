//! The [`Lcd`] handle, use it to control the ST7032

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, InstructionTable, MoveDirection, ShiftType, State},
    error::Error,
    payload::Payload,
    sender::SendCommand,
    state::{wrap_contrast, LcdState},
};

mod init;

pub use init::Config;

/// Visible columns of one line
pub const MAX_COL: u8 = 16;

/// DDRAM address of the first column of each line
const LINE_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Settle delays, in millisecond
#[derive(Clone, Copy)]
pub(crate) struct Timing {
    pub(crate) write_delay_ms: u32,
    pub(crate) clear_home_delay_ms: u32,
}

/// Driver handle, created by [`Lcd::new`]
///
/// The ST7032 registers are write only, so [`Lcd`] keeps a shadow copy of them.
/// The shadow only changes after the chip accepted the write.
/// Use one [`Lcd`] per chip.
///
/// [`Lcd`] implements [`core::fmt::Write`]: one `write!` call writes at most
/// [`MAX_COL`] characters in total, however many pieces the format string has.
/// Bus errors surface as [`core::fmt::Error`], use [`Lcd::write`] to get the [`Error`].
pub struct Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
    state: LcdState,
    timing: Timing,
}

/// Result of every bus-touching [`Lcd`] method
pub type LcdResult<Sender, Delayer> = Result<(), Error<<Sender as SendCommand<Delayer>>::Error>>;

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Clear all DDRAM, and set address counter to 0
    pub fn clear(&mut self) -> LcdResult<Sender, Delayer> {
        self.send_command(CommandSet::ClearDisplay)?;
        self.delayer.delay_ms(self.timing.clear_home_delay_ms);
        Ok(())
    }

    /// Set address counter to the start of line 1, DDRAM is not changed
    pub fn home(&mut self) -> LcdResult<Sender, Delayer> {
        self.send_command(CommandSet::ReturnHome)?;
        self.delayer.delay_ms(self.timing.clear_home_delay_ms);
        Ok(())
    }

    /// Turn the display on, cursor and blink are kept
    pub fn display_on(&mut self) -> LcdResult<Sender, Delayer> {
        self.set_display_state(State::On)
    }

    #[allow(missing_docs)]
    pub fn display_off(&mut self) -> LcdResult<Sender, Delayer> {
        self.set_display_state(State::Off)
    }

    /// Show the underline cursor
    pub fn cursor(&mut self) -> LcdResult<Sender, Delayer> {
        self.set_cursor_state(State::On)
    }

    #[allow(missing_docs)]
    pub fn no_cursor(&mut self) -> LcdResult<Sender, Delayer> {
        self.set_cursor_state(State::Off)
    }

    #[allow(missing_docs)]
    pub fn blink(&mut self) -> LcdResult<Sender, Delayer> {
        self.set_cursor_blink_state(State::On)
    }

    #[allow(missing_docs)]
    pub fn no_blink(&mut self) -> LcdResult<Sender, Delayer> {
        self.set_cursor_blink_state(State::Off)
    }

    /// Set display on/off, cursor and blink states are kept
    pub fn set_display_state(&mut self, display: State) -> LcdResult<Sender, Delayer> {
        let mut next = self.state.clone();
        next.set_display_state(display);
        self.commit(next.display_on_off(), next)
    }

    #[allow(missing_docs)]
    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    /// Show or hide the underline cursor, display and blink states are kept
    pub fn set_cursor_state(&mut self, cursor: State) -> LcdResult<Sender, Delayer> {
        let mut next = self.state.clone();
        next.set_cursor_state(cursor);
        self.commit(next.display_on_off(), next)
    }

    #[allow(missing_docs)]
    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    /// Blink the cursor position, display and cursor states are kept
    pub fn set_cursor_blink_state(&mut self, blink: State) -> LcdResult<Sender, Delayer> {
        let mut next = self.state.clone();
        next.set_cursor_blink(blink);
        self.commit(next.display_on_off(), next)
    }

    #[allow(missing_docs)]
    pub fn get_cursor_blink_state(&self) -> State {
        self.state.get_cursor_blink()
    }

    /// Move address counter to `pos` of `line`.
    ///
    /// `line` 0 is the first line, any other value is the second line.
    /// `pos` is unsigned, so a negative column cannot be asked for;
    /// a `pos` of 16 or more is reset to 0.
    pub fn set_cursor(&mut self, line: u8, pos: u8) -> LcdResult<Sender, Delayer> {
        let pos = if pos < MAX_COL { pos } else { 0 };
        let line_offset = if line == 0 {
            LINE_OFFSETS[0]
        } else {
            LINE_OFFSETS[1]
        };

        self.send_command(CommandSet::SetDDRAM(line_offset + pos))
    }

    /// Set the 6 bit contrast.
    ///
    /// A `value` above 63 becomes 0, a `value` below 0 becomes 63.
    pub fn set_contrast(&mut self, value: i32) -> LcdResult<Sender, Delayer> {
        let contrast = wrap_contrast(value);

        self.select_instruction_table(InstructionTable::Extended)?;
        self.send_command(CommandSet::ContrastSet(contrast & 0b1111))?;
        self.send_command(self.state.power_icon_contrast(contrast))?;

        self.state.set_contrast(contrast);
        Ok(())
    }

    /// Same as `set_contrast(current + delta)`, including the wrap
    pub fn adjust_contrast(&mut self, delta: i32) -> LcdResult<Sender, Delayer> {
        let target = i32::from(self.get_contrast()).saturating_add(delta);
        self.set_contrast(target)
    }

    /// Last contrast written to the chip, no bus access
    pub fn get_contrast(&self) -> u8 {
        self.state.get_contrast()
    }

    /// Turn the booster circuit on or off, contrast and icon are kept
    pub fn set_booster_state(&mut self, booster: State) -> LcdResult<Sender, Delayer> {
        self.select_instruction_table(InstructionTable::Extended)?;
        let mut next = self.state.clone();
        next.set_booster(booster);
        self.commit(next.power_icon_contrast(next.get_contrast()), next)
    }

    #[allow(missing_docs)]
    pub fn get_booster_state(&self) -> State {
        self.state.get_booster()
    }

    /// Turn the icon display on or off, contrast and booster are kept
    pub fn set_icon_state(&mut self, icon: State) -> LcdResult<Sender, Delayer> {
        self.select_instruction_table(InstructionTable::Extended)?;
        let mut next = self.state.clone();
        next.set_icon(icon);
        self.commit(next.power_icon_contrast(next.get_contrast()), next)
    }

    #[allow(missing_docs)]
    pub fn get_icon_state(&self) -> State {
        self.state.get_icon()
    }

    /// Write text and raw character codes from the cursor position.
    ///
    /// Only the first [`MAX_COL`] elements are written, the rest are dropped.
    /// The driver does not wrap to the next line.
    ///
    /// A character without a single byte code stops the write with
    /// [`Error::InvalidPayloadElement`], elements before it stay on the display.
    pub fn write<P: Into<Payload>>(
        &mut self,
        payload: impl IntoIterator<Item = P>,
    ) -> LcdResult<Sender, Delayer> {
        for element in payload.into_iter().take(MAX_COL as usize) {
            let element: Payload = element.into();
            let byte = u8::try_from(element).map_err(Error::InvalidPayloadElement)?;
            self.send_command(CommandSet::WriteDataToRAM(byte))?;
        }
        Ok(())
    }

    /// Set the direction the address counter moves after each write
    pub fn set_direction(&mut self, dir: MoveDirection) -> LcdResult<Sender, Delayer> {
        let mut next = self.state.clone();
        next.set_direction(dir);
        self.commit(next.entry_mode(), next)
    }

    #[allow(missing_docs)]
    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    /// Whether the whole display shifts after each write
    pub fn set_shift_type(&mut self, shift: ShiftType) -> LcdResult<Sender, Delayer> {
        let mut next = self.state.clone();
        next.set_shift_type(shift);
        self.commit(next.entry_mode(), next)
    }

    #[allow(missing_docs)]
    pub fn get_shift_type(&self) -> ShiftType {
        self.state.get_shift_type()
    }

    /// Move the cursor, or the cursor together with the display, by one step
    pub fn shift_cursor_or_display(
        &mut self,
        shift_type: ShiftType,
        dir: MoveDirection,
    ) -> LcdResult<Sender, Delayer> {
        self.select_instruction_table(InstructionTable::Normal)?;
        self.send_command(CommandSet::CursorOrDisplayShift(shift_type, dir))
    }

    /// Store a 5x8 glyph in CGRAM slot `index`, only the lower 5 bits of each row are used.
    ///
    /// Print it with `write([index])`. Address counter stays in CGRAM,
    /// call [`Lcd::set_cursor`] before writing text again.
    pub fn write_graph_to_cgram(
        &mut self,
        index: u8,
        graph_data: &[u8; 8],
    ) -> LcdResult<Sender, Delayer> {
        if index >= 8 {
            return Err(Error::CgramIndexOutOfRange(index));
        }

        // if DDRAM is written from right to left, CGRAM rows would be written from lower to upper
        let direction_flipped = self.get_direction() == MoveDirection::RightToLeft;
        if direction_flipped {
            self.set_direction(MoveDirection::LeftToRight)?;
        }

        self.select_instruction_table(InstructionTable::Normal)?;
        self.send_command(CommandSet::SetCGRAM(index << 3))?;
        for &line_data in graph_data {
            self.send_command(CommandSet::WriteDataToRAM(line_data & 0b1_1111))?;
        }

        if direction_flipped {
            self.set_direction(MoveDirection::RightToLeft)?;
        }
        Ok(())
    }

    /// Instruction table currently selected on the chip
    pub fn get_instruction_table(&self) -> InstructionTable {
        self.state.get_instruction_table()
    }

    /// Block for `ms` millisecond with the delayer of this [`Lcd`]
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn send_command(&mut self, command: CommandSet) -> LcdResult<Sender, Delayer> {
        self.sender
            .send_and_wait(command, self.delayer, self.timing.write_delay_ms)
            .map_err(Error::Bus)
    }

    /// Send `command` built from `next`, `next` becomes the shadow only once the chip has it
    fn commit(&mut self, command: CommandSet, next: LcdState) -> LcdResult<Sender, Delayer> {
        self.send_command(command)?;
        self.state = next;
        Ok(())
    }

    /// Switch instruction table with a function set, only when the chip is on the other table
    fn select_instruction_table(&mut self, table: InstructionTable) -> LcdResult<Sender, Delayer> {
        if self.state.get_instruction_table() == table {
            return Ok(());
        }

        let mut next = self.state.clone();
        next.set_instruction_table(table);
        self.commit(next.function_set(), next)
    }
}

/// Column budget of one `write!` call
struct Columns<'l, 'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    lcd: &'l mut Lcd<'a, 'b, Sender, Delayer>,
    written: u8,
}

impl<'l, 'a, 'b, Sender, Delayer> fmt::Write for Columns<'l, 'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = usize::from(MAX_COL.saturating_sub(self.written));
        let chars = s.chars().take(room);
        let count = chars.clone().count();

        self.lcd.write(chars).map_err(|_| fmt::Error)?;
        self.written += count as u8;
        Ok(())
    }
}

impl<'a, 'b, Sender, Delayer> fmt::Write for Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(&mut Columns { lcd: self, written: 0 }, s)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::write(&mut Columns { lcd: self, written: 0 }, args)
    }
}

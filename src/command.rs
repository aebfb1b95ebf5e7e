//! ST7032 instruction set, and how each instruction is packed into a byte

use crate::utils::BitOps;

/// Control byte: an instruction byte follows
pub const CONTROL_INSTRUCTION: u8 = 0b0000_0000;
/// Control byte: a DDRAM/CGRAM data byte follows
pub const CONTROL_DATA: u8 = 0b0100_0000;

/// Every instruction this driver sends to the ST7032.
///
/// Some instructions only exist in one [`InstructionTable`], see the variant docs.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    ClearDisplay,
    ReturnHome,
    EntryModeSet(MoveDirection, ShiftType),
    DisplayOnOff {
        display: State,
        cursor: State,
        cursor_blink: State,
    },
    /// Normal table only
    CursorOrDisplayShift(ShiftType, MoveDirection),
    FunctionSet(LineMode, Font, InstructionTable),
    /// Normal table only
    SetCGRAM(u8),
    SetDDRAM(u8),
    /// Extended table only, frequency adjust is 3 bits wide
    InternalOscFrequency(Bias, u8),
    /// Extended table only, `contrast_high` is bit 5 and bit 4 of the contrast
    PowerIconContrast {
        icon: State,
        booster: State,
        contrast_high: u8,
    },
    /// Extended table only, amplified ratio is 3 bits wide
    FollowerControl(State, u8),
    /// Extended table only, bit 3 to bit 0 of the contrast
    ContrastSet(u8),
    WriteDataToRAM(u8),
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    RightToLeft,
    #[default]
    LeftToRight,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftType {
    #[default]
    CursorOnly,
    CursorAndDisplay,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Off,
    #[default]
    On,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    OneLine,
    #[default]
    TwoLine,
}

/// Double height font only takes effect in [`LineMode::OneLine`]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    #[default]
    Normal,
    DoubleHeight,
}

/// The ST7032 has two instruction tables, selected by the IS bit of function set
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InstructionTable {
    /// IS = 0: cursor/display shift, CGRAM address
    #[default]
    Normal,
    /// IS = 1: oscillator, power/icon/contrast, follower, contrast
    Extended,
}

/// LCD bias selection of the internal oscillator instruction
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bias {
    OneFifth,
    #[default]
    OneFourth,
}

/// Which address space the byte of a [`Command`] goes to
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    /// Instruction register
    Instruction,
    /// DDRAM/CGRAM data
    Data,
}

impl RegisterSelection {
    /// The control byte that prefixes every I2C transaction
    pub fn control_byte(self) -> u8 {
        match self {
            RegisterSelection::Instruction => CONTROL_INSTRUCTION,
            RegisterSelection::Data => CONTROL_DATA,
        }
    }
}

/// A single encoded write, ready to be put on the bus
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    rs: RegisterSelection,
    data: u8,
}

impl Command {
    pub(crate) fn new(rs: RegisterSelection, data: u8) -> Self {
        Self { rs, data }
    }

    #[allow(missing_docs)]
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    #[allow(missing_docs)]
    pub fn get_data(&self) -> u8 {
        self.data
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => {
                Self::new(RegisterSelection::Instruction, 0b0000_0001)
            }

            CommandSet::ReturnHome => Self::new(RegisterSelection::Instruction, 0b0000_0010),

            CommandSet::EntryModeSet(dir, st) => {
                let mut raw_bits: u8 = 0b0000_0100;

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(1),
                    MoveDirection::LeftToRight => raw_bits.set_bit(1),
                };

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(0),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(0),
                };

                Self::new(RegisterSelection::Instruction, raw_bits)
            }

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let mut raw_bits: u8 = 0b0000_1000;

                raw_bits.put_bit(2, display);
                raw_bits.put_bit(1, cursor);
                raw_bits.put_bit(0, cursor_blink);

                Self::new(RegisterSelection::Instruction, raw_bits)
            }

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits: u8 = 0b0001_0000;

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(3),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(3),
                };

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(2),
                    MoveDirection::LeftToRight => raw_bits.set_bit(2),
                };

                Self::new(RegisterSelection::Instruction, raw_bits)
            }

            CommandSet::FunctionSet(line, font, table) => {
                // I2C interface is always 8 bit wide
                let mut raw_bits: u8 = 0b0011_0000;

                match line {
                    LineMode::OneLine => raw_bits.clear_bit(3),
                    LineMode::TwoLine => raw_bits.set_bit(3),
                };

                match font {
                    Font::Normal => raw_bits.clear_bit(2),
                    Font::DoubleHeight => raw_bits.set_bit(2),
                };

                match table {
                    InstructionTable::Normal => raw_bits.clear_bit(0),
                    InstructionTable::Extended => raw_bits.set_bit(0),
                };

                Self::new(RegisterSelection::Instruction, raw_bits)
            }

            CommandSet::SetCGRAM(addr) => Self::new(
                RegisterSelection::Instruction,
                0b0100_0000 | (addr & 0b0011_1111),
            ),

            CommandSet::SetDDRAM(addr) => Self::new(
                RegisterSelection::Instruction,
                0b1000_0000 | (addr & 0b0111_1111),
            ),

            CommandSet::InternalOscFrequency(bias, frequency) => {
                let mut raw_bits: u8 = 0b0001_0000 | (frequency & 0b111);

                match bias {
                    Bias::OneFifth => raw_bits.clear_bit(3),
                    Bias::OneFourth => raw_bits.set_bit(3),
                };

                Self::new(RegisterSelection::Instruction, raw_bits)
            }

            CommandSet::PowerIconContrast {
                icon,
                booster,
                contrast_high,
            } => {
                let mut raw_bits: u8 = 0b0101_0000 | (contrast_high & 0b11);

                raw_bits.put_bit(3, icon);
                raw_bits.put_bit(2, booster);

                Self::new(RegisterSelection::Instruction, raw_bits)
            }

            CommandSet::FollowerControl(follower, ratio) => {
                let mut raw_bits: u8 = 0b0110_0000 | (ratio & 0b111);

                raw_bits.put_bit(3, follower);

                Self::new(RegisterSelection::Instruction, raw_bits)
            }

            CommandSet::ContrastSet(contrast_low) => Self::new(
                RegisterSelection::Instruction,
                0b0111_0000 | (contrast_low & 0b1111),
            ),

            CommandSet::WriteDataToRAM(data) => Self::new(RegisterSelection::Data, data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(command: CommandSet) -> u8 {
        Command::from(command).get_data()
    }

    #[test]
    fn power_on_instructions() {
        assert_eq!(
            encode(CommandSet::FunctionSet(
                LineMode::TwoLine,
                Font::Normal,
                InstructionTable::Extended
            )),
            0x39
        );
        assert_eq!(
            encode(CommandSet::InternalOscFrequency(Bias::OneFourth, 0b100)),
            0x1C
        );
        assert_eq!(
            encode(CommandSet::PowerIconContrast {
                icon: State::Off,
                booster: State::On,
                contrast_high: 0
            }),
            0x54
        );
        assert_eq!(encode(CommandSet::FollowerControl(State::On, 0b100)), 0x6C);
        assert_eq!(
            encode(CommandSet::EntryModeSet(
                MoveDirection::LeftToRight,
                ShiftType::CursorOnly
            )),
            0x06
        );
    }

    #[test]
    fn display_on_off_bits() {
        let encoded = encode(CommandSet::DisplayOnOff {
            display: State::On,
            cursor: State::Off,
            cursor_blink: State::On,
        });
        assert_eq!(encoded, 0b0000_1101);
    }

    #[test]
    fn contrast_fields_are_masked() {
        assert_eq!(encode(CommandSet::ContrastSet(0x18)), 0x78);
        assert_eq!(
            encode(CommandSet::PowerIconContrast {
                icon: State::On,
                booster: State::On,
                contrast_high: 0b111
            }),
            0x5F
        );
    }

    #[test]
    fn normal_table_instructions() {
        assert_eq!(
            encode(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::RightToLeft
            )),
            0x18
        );
        assert_eq!(encode(CommandSet::SetCGRAM(3 << 3)), 0x58);
        assert_eq!(
            encode(CommandSet::FunctionSet(
                LineMode::OneLine,
                Font::DoubleHeight,
                InstructionTable::Normal
            )),
            0x34
        );
    }

    #[test]
    fn data_goes_to_data_register() {
        let command = Command::from(CommandSet::WriteDataToRAM(0xBA));
        assert_eq!(command.get_register_selection(), RegisterSelection::Data);
        assert_eq!(command.get_register_selection().control_byte(), 0x40);
        assert_eq!(command.get_data(), 0xBA);

        let command = Command::from(CommandSet::SetDDRAM(0x45));
        assert_eq!(command.get_register_selection().control_byte(), 0x00);
        assert_eq!(command.get_data(), 0xC5);
    }
}

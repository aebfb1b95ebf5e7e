use crate::command::{
    CommandSet, Font, InstructionTable, LineMode, MoveDirection, ShiftType, State,
};

/// Highest value of the 6 bit contrast field
pub(crate) const CONTRAST_MAX: u8 = 0x3F;
pub(crate) const CONTRAST_MIN: u8 = 0x00;
pub(crate) const DEFAULT_CONTRAST: u8 = 0x18;

/// Out of range contrast is replaced by the opposite boundary, one step only:
/// anything above the max becomes the min, anything below the min becomes the max.
pub(crate) fn wrap_contrast(value: i32) -> u8 {
    if value > i32::from(CONTRAST_MAX) {
        CONTRAST_MIN
    } else if value < i32::from(CONTRAST_MIN) {
        CONTRAST_MAX
    } else {
        value as u8
    }
}

/// Shadow copy of the write-only registers of the ST7032
#[derive(Clone)]
pub(crate) struct LcdState {
    line: LineMode,
    font: Font,
    instruction_table: InstructionTable,
    display_on: State,
    cursor_on: State,
    cursor_blink: State,
    direction: MoveDirection,
    shift_type: ShiftType,
    contrast: u8,
    booster: State,
    icon: State,
}

impl Default for LcdState {
    fn default() -> Self {
        Self {
            line: LineMode::TwoLine,
            font: Font::Normal,
            instruction_table: InstructionTable::Normal,
            display_on: State::On,
            cursor_on: State::Off,
            cursor_blink: State::Off,
            direction: MoveDirection::LeftToRight,
            shift_type: ShiftType::CursorOnly,
            contrast: DEFAULT_CONTRAST,
            booster: State::On,
            icon: State::Off,
        }
    }
}

impl LcdState {
    pub(crate) fn get_line_mode(&self) -> LineMode {
        self.line
    }

    pub(crate) fn set_line_mode(&mut self, line: LineMode) {
        self.line = line;
    }

    pub(crate) fn get_font(&self) -> Font {
        self.font
    }

    pub(crate) fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub(crate) fn get_instruction_table(&self) -> InstructionTable {
        self.instruction_table
    }

    pub(crate) fn set_instruction_table(&mut self, table: InstructionTable) {
        self.instruction_table = table;
    }

    pub(crate) fn get_display_state(&self) -> State {
        self.display_on
    }

    pub(crate) fn set_display_state(&mut self, display: State) {
        self.display_on = display;
    }

    pub(crate) fn get_cursor_state(&self) -> State {
        self.cursor_on
    }

    pub(crate) fn set_cursor_state(&mut self, cursor: State) {
        self.cursor_on = cursor;
    }

    pub(crate) fn get_cursor_blink(&self) -> State {
        self.cursor_blink
    }

    pub(crate) fn set_cursor_blink(&mut self, blink: State) {
        self.cursor_blink = blink;
    }

    pub(crate) fn get_direction(&self) -> MoveDirection {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, dir: MoveDirection) {
        self.direction = dir;
    }

    pub(crate) fn get_shift_type(&self) -> ShiftType {
        self.shift_type
    }

    pub(crate) fn set_shift_type(&mut self, shift: ShiftType) {
        self.shift_type = shift;
    }

    pub(crate) fn get_contrast(&self) -> u8 {
        self.contrast
    }

    pub(crate) fn set_contrast(&mut self, contrast: u8) {
        debug_assert!(contrast <= CONTRAST_MAX, "contrast is 6 bit wide");
        self.contrast = contrast;
    }

    pub(crate) fn get_booster(&self) -> State {
        self.booster
    }

    pub(crate) fn set_booster(&mut self, booster: State) {
        self.booster = booster;
    }

    pub(crate) fn get_icon(&self) -> State {
        self.icon
    }

    pub(crate) fn set_icon(&mut self, icon: State) {
        self.icon = icon;
    }

    pub(crate) fn function_set(&self) -> CommandSet {
        CommandSet::FunctionSet(self.line, self.font, self.instruction_table)
    }

    pub(crate) fn display_on_off(&self) -> CommandSet {
        CommandSet::DisplayOnOff {
            display: self.display_on,
            cursor: self.cursor_on,
            cursor_blink: self.cursor_blink,
        }
    }

    pub(crate) fn entry_mode(&self) -> CommandSet {
        CommandSet::EntryModeSet(self.direction, self.shift_type)
    }

    /// Power/icon/contrast instruction carrying `contrast` bit 5 and bit 4,
    /// together with the tracked booster and icon bits
    pub(crate) fn power_icon_contrast(&self, contrast: u8) -> CommandSet {
        CommandSet::PowerIconContrast {
            icon: self.icon,
            booster: self.booster,
            contrast_high: contrast >> 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_wraps_one_boundary_step() {
        assert_eq!(wrap_contrast(0), 0);
        assert_eq!(wrap_contrast(63), 63);
        assert_eq!(wrap_contrast(64), 0);
        assert_eq!(wrap_contrast(127), 0);
        assert_eq!(wrap_contrast(64 * 5), 0);
        assert_eq!(wrap_contrast(-1), 63);
        assert_eq!(wrap_contrast(-64), 63);
        assert_eq!(wrap_contrast(i32::MIN), 63);
        assert_eq!(wrap_contrast(i32::MAX), 0);
    }

    #[test]
    fn default_state_is_power_on_state() {
        let state = LcdState::default();
        assert_eq!(state.get_contrast(), 0x18);
        assert_eq!(state.get_booster(), State::On);
        assert_eq!(state.get_icon(), State::Off);
        assert_eq!(
            state.display_on_off(),
            CommandSet::DisplayOnOff {
                display: State::On,
                cursor: State::Off,
                cursor_blink: State::Off,
            }
        );
    }

    #[test]
    fn power_icon_contrast_keeps_booster_and_icon() {
        let mut state = LcdState::default();
        state.set_icon(State::On);
        state.set_booster(State::Off);
        assert_eq!(
            state.power_icon_contrast(0x3F),
            CommandSet::PowerIconContrast {
                icon: State::On,
                booster: State::Off,
                contrast_high: 0b11,
            }
        );
    }
}

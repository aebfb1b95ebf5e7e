//! Common tools

use crate::command::State;

/// Simple bit ops on an instruction byte
pub trait BitOps {
    #[allow(missing_docs)]
    fn set_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn clear_bit(&mut self, pos: u8) -> Self;
    /// Set the bit at `pos` when `state` is [`State::On`], clear it when [`State::Off`]
    fn put_bit(&mut self, pos: u8, state: State) -> Self;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) -> Self {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        *self |= 1u8 << pos;
        *self
    }

    fn clear_bit(&mut self, pos: u8) -> Self {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        *self &= !(1u8 << pos);
        *self
    }

    fn put_bit(&mut self, pos: u8, state: State) -> Self {
        match state {
            State::On => self.set_bit(pos),
            State::Off => self.clear_bit(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_bit_only_touches_its_own_bit() {
        let mut byte = 0b1010_0000u8;
        byte.put_bit(0, State::On);
        assert_eq!(byte, 0b1010_0001);
        byte.put_bit(5, State::Off);
        assert_eq!(byte, 0b1000_0001);
        byte.put_bit(5, State::Off);
        assert_eq!(byte, 0b1000_0001);
    }
}

//! Elements accepted by [`Lcd::write`](crate::lcd::Lcd::write)

/// One element of a write: a text character or a raw character code
///
/// Raw codes reach glyphs that have no Unicode counterpart in the ST7032 CGROM,
/// e.g. the katakana block at 0xA1 to 0xDF, or the CGRAM glyphs at 0x00 to 0x07.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Payload {
    /// Written as its code point, which must fit in one byte
    Char(char),
    /// Written as-is
    Byte(u8),
}

impl From<char> for Payload {
    fn from(c: char) -> Self {
        Payload::Char(c)
    }
}

impl From<u8> for Payload {
    fn from(byte: u8) -> Self {
        Payload::Byte(byte)
    }
}

impl From<&u8> for Payload {
    fn from(byte: &u8) -> Self {
        Payload::Byte(*byte)
    }
}

impl TryFrom<Payload> for u8 {
    /// The character that has no single byte code
    type Error = char;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        match payload {
            Payload::Byte(byte) => Ok(byte),
            Payload::Char(c) => u8::try_from(c).map_err(|_| c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_map_to_their_code_point() {
        assert_eq!(u8::try_from(Payload::from('H')), Ok(0x48));
        assert_eq!(u8::try_from(Payload::from('\u{ba}')), Ok(0xBA));
        assert_eq!(u8::try_from(Payload::from(0xDDu8)), Ok(0xDD));
    }

    #[test]
    fn wide_chars_are_rejected() {
        assert_eq!(u8::try_from(Payload::from('コ')), Err('コ'));
        assert_eq!(u8::try_from(Payload::from('\u{100}')), Err('\u{100}'));
    }
}

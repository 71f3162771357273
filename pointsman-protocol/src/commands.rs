//! Display command encoding
//!
//! Commands are encoded as the byte image written after the bus address:
//! one command byte followed by command-specific payload. The display
//! retains whatever was last sent; nothing is tracked on this side.

use heapless::Vec;

/// 7-bit bus address the display listens on
pub const DISPLAY_ADDRESS: u8 = 0x04;

/// Write text to the top row: `[color][len][bytes…]`
pub const CMD_TEXT_TOP: u8 = 0x01;
/// Write text to the bottom row: `[color][len][bytes…]`
pub const CMD_TEXT_BOTTOM: u8 = 0x02;
/// Write the numeric score: big-endian 16-bit signed
pub const CMD_SCORE: u8 = 0x03;
/// Write the ball count: 1 byte
pub const CMD_BALL_COUNT: u8 = 0x04;
/// Clear the entire screen: no payload
pub const CMD_CLEAR: u8 = 0x05;

/// Maximum text length in bytes (the length field is one byte)
pub const MAX_TEXT_LEN: usize = 255;

/// Maximum encoded command size (COMMAND + color + len + text)
pub const MAX_COMMAND_SIZE: usize = 3 + MAX_TEXT_LEN;

/// Delay between consecutive commands, in milliseconds
///
/// The display has no ready signal; it is assumed to have finished
/// processing a command after this long.
pub const SETTLE_DELAY_MS: u64 = 50;

/// Errors that can occur during command encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Text exceeds the 255-byte length field
    TextTooLong,
}

/// Display row selector for text commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    Top,
    Bottom,
}

impl Row {
    /// Command byte for a text write to this row
    pub fn command(self) -> u8 {
        match self {
            Row::Top => CMD_TEXT_TOP,
            Row::Bottom => CMD_TEXT_BOTTOM,
        }
    }
}

/// A single command for the score display
///
/// Ephemeral by design: constructed, encoded, transmitted, discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand<'a> {
    /// Wipe the entire display
    Clear,
    /// Write text to one row in the given color index (0-9)
    Text { row: Row, color: u8, text: &'a str },
    /// Write the score, right-adjusted on the bottom row
    Score(i16),
    /// Light one pixel per remaining ball
    BallCount(u8),
}

impl<'a> DisplayCommand<'a> {
    /// Encode this command into the byte image of one bus transaction
    /// (everything after the address byte).
    pub fn encode(&self) -> Result<Vec<u8, MAX_COMMAND_SIZE>, ProtocolError> {
        let mut bytes = Vec::new();
        match self {
            DisplayCommand::Clear => {
                let _ = bytes.push(CMD_CLEAR);
            }
            DisplayCommand::Text { row, color, text } => {
                let text_bytes = text.as_bytes();
                if text_bytes.len() > MAX_TEXT_LEN {
                    return Err(ProtocolError::TextTooLong);
                }
                let _ = bytes.push(row.command());
                let _ = bytes.push(*color);
                let _ = bytes.push(text_bytes.len() as u8);
                // Cannot overflow: 3 + MAX_TEXT_LEN == MAX_COMMAND_SIZE
                let _ = bytes.extend_from_slice(text_bytes);
            }
            DisplayCommand::Score(value) => {
                let _ = bytes.push(CMD_SCORE);
                let _ = bytes.extend_from_slice(&value.to_be_bytes());
            }
            DisplayCommand::BallCount(count) => {
                let _ = bytes.push(CMD_BALL_COUNT);
                let _ = bytes.push(*count);
            }
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_clear() {
        let bytes = DisplayCommand::Clear.encode().unwrap();
        assert_eq!(&bytes[..], &[CMD_CLEAR]);
    }

    #[test]
    fn test_encode_text_top() {
        let cmd = DisplayCommand::Text {
            row: Row::Top,
            color: 1,
            text: "SCORE",
        };
        let bytes = cmd.encode().unwrap();
        assert_eq!(bytes[0], CMD_TEXT_TOP);
        assert_eq!(bytes[1], 1); // color
        assert_eq!(bytes[2], 5); // length equals text byte length
        assert_eq!(&bytes[3..], b"SCORE");
    }

    #[test]
    fn test_encode_text_bottom() {
        let cmd = DisplayCommand::Text {
            row: Row::Bottom,
            color: 6,
            text: "____OVER",
        };
        let bytes = cmd.encode().unwrap();
        assert_eq!(bytes[0], CMD_TEXT_BOTTOM);
        assert_eq!(bytes[2] as usize, "____OVER".len());
    }

    #[test]
    fn test_encode_score_big_endian() {
        let bytes = DisplayCommand::Score(1000).encode().unwrap();
        assert_eq!(&bytes[..], &[CMD_SCORE, 0x03, 0xE8]);

        // Negative values survive the signed encoding
        let bytes = DisplayCommand::Score(-1).encode().unwrap();
        assert_eq!(&bytes[..], &[CMD_SCORE, 0xFF, 0xFF]);
    }

    #[test]
    fn test_encode_ball_count() {
        let bytes = DisplayCommand::BallCount(7).encode().unwrap();
        assert_eq!(&bytes[..], &[CMD_BALL_COUNT, 7]);
    }

    #[test]
    fn test_text_too_long() {
        let text = core::str::from_utf8(&[b'x'; MAX_TEXT_LEN + 1]).unwrap();
        let cmd = DisplayCommand::Text {
            row: Row::Top,
            color: 0,
            text,
        };
        assert_eq!(cmd.encode(), Err(ProtocolError::TextTooLong));
    }

    #[test]
    fn test_max_length_text_fits() {
        let text = core::str::from_utf8(&[b'x'; MAX_TEXT_LEN]).unwrap();
        let cmd = DisplayCommand::Text {
            row: Row::Bottom,
            color: 9,
            text,
        };
        let bytes = cmd.encode().unwrap();
        assert_eq!(bytes.len(), MAX_COMMAND_SIZE);
        assert_eq!(bytes[2], 255);
    }
}

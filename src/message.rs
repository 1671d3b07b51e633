use std::fmt::{Display, LowerHex, Write as _};

/// How [`MessageBuilder::int`] renders integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntFormat {
    /// Base-10 rendering (the default).
    #[default]
    Decimal,
    /// Lowercase base-16 rendering, no `0x` prefix.
    LowerHex,
}

/// Incremental builder for one rendered log message.
///
/// Pieces are appended left to right; [`hex`](Self::hex) and
/// [`dec`](Self::dec) switch how subsequent [`int`](Self::int) calls render.
/// Anything implementing [`Display`] is accepted, so the facility stays
/// type-agnostic without a shared base type. The builder performs no I/O and
/// takes no lock; [`finish`](Self::finish) yields the string the writer
/// consumes.
///
/// # Example
///
/// ```
/// use dualog::MessageBuilder;
///
/// let msg = MessageBuilder::new()
///     .text("Data: ")
///     .hex()
///     .int(0xDEAD_BEEF_u32)
///     .finish();
/// assert_eq!(msg, "Data: deadbeef");
/// ```
#[derive(Debug, Default)]
pub struct MessageBuilder {
    buf: String,
    int_format: IntFormat,
}

impl MessageBuilder {
    /// Creates an empty builder in decimal mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the textual rendering of any displayable value.
    #[must_use]
    pub fn text(mut self, piece: impl Display) -> Self {
        // Writing to a String cannot fail.
        let _ = write!(self.buf, "{piece}");
        self
    }

    /// Appends an integer, honoring the current [`IntFormat`].
    #[must_use]
    pub fn int<T: Display + LowerHex>(mut self, value: T) -> Self {
        match self.int_format {
            IntFormat::Decimal => {
                let _ = write!(self.buf, "{value}");
            }
            IntFormat::LowerHex => {
                let _ = write!(self.buf, "{value:x}");
            }
        }
        self
    }

    /// Switches subsequent [`int`](Self::int) calls to lowercase hexadecimal.
    #[must_use]
    pub fn hex(mut self) -> Self {
        self.int_format = IntFormat::LowerHex;
        self
    }

    /// Switches subsequent [`int`](Self::int) calls back to decimal.
    #[must_use]
    pub fn dec(mut self) -> Self {
        self.int_format = IntFormat::Decimal;
        self
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_mixed_displayable_values() {
        let msg = MessageBuilder::new()
            .text("value=")
            .text(42)
            .text(", pi=")
            .text(3.14159)
            .finish();
        assert_eq!(msg, "value=42, pi=3.14159");
    }

    #[test]
    fn hex_directive_applies_to_subsequent_ints() {
        let msg = MessageBuilder::new()
            .int(255_u32)
            .text(" ")
            .hex()
            .int(255_u32)
            .finish();
        assert_eq!(msg, "255 ff");
    }

    #[test]
    fn dec_directive_restores_decimal() {
        let msg = MessageBuilder::new()
            .hex()
            .int(0xDEAD_BEEF_u32)
            .text(" ")
            .dec()
            .int(10_u8)
            .finish();
        assert_eq!(msg, "deadbeef 10");
    }

    #[test]
    fn builder_matches_eager_formatting() {
        let value = 42;
        let eager = format!("The value is: {value}");
        let streamed = MessageBuilder::new()
            .text("The value is: ")
            .int(value)
            .finish();
        assert_eq!(eager, streamed);
    }

    #[test]
    fn empty_builder_renders_empty_string() {
        assert_eq!(MessageBuilder::new().finish(), "");
    }
}

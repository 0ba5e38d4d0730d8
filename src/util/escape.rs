/*!
Provides convenience routines for displaying raw bytes in error messages.

Parsers in this crate work on `&[u8]`, so when reporting what input was
unexpected, it's helpful to render it in a way that is readable even when it
isn't valid UTF-8.
*/

/// Provides a convenient `Display` and `Debug` implementation for a `u8`.
///
/// The byte is treated as ASCII. If it isn't printable ASCII, then it is
/// emitted as an escape sequence (e.g., `\xFF`).
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' {
            return f.write_str(" ");
        }
        for b in core::ascii::escape_default(self.0) {
            // capitalize \xab to \xAB
            let ch = char::from(b);
            if ch.is_ascii_lowercase() && ch <= 'f' && self.0 >= 0x80 {
                write!(f, "{}", ch.to_ascii_uppercase())?;
            } else {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// Provides a convenient `Display` and `Debug` implementation for `&[u8]`.
///
/// This works best when the bytes are mostly UTF-8. Valid UTF-8 sequences are
/// printed as their `char::escape_debug` form, while every invalid byte is
/// emitted as a hex escape sequence.
pub(crate) struct Bytes<'a>(pub &'a [u8]);

impl<'a> core::fmt::Display for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut bytes = self.0;
        while !bytes.is_empty() {
            let (valid, rest) = match core::str::from_utf8(bytes) {
                Ok(s) => (s, &b""[..]),
                Err(err) => {
                    let (valid, rest) = bytes.split_at(err.valid_up_to());
                    // OK because `valid_up_to` guarantees this prefix is
                    // valid UTF-8.
                    let valid = core::str::from_utf8(valid).unwrap_or("");
                    (valid, rest)
                }
            };
            for ch in valid.chars() {
                match ch {
                    '\0' => f.write_str("\\0")?,
                    '\x01'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x19'
                    | '\x7f' => write!(f, "\\x{:02x}", u32::from(ch))?,
                    _ => write!(f, "{}", ch.escape_debug())?,
                }
            }
            if let Some((&invalid, tail)) = rest.split_first() {
                write!(f, r"\x{invalid:02x}")?;
                bytes = tail;
            } else {
                bytes = rest;
            }
        }
        Ok(())
    }
}

impl<'a> core::fmt::Debug for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn byte() {
        assert_eq!(Byte(b'a').to_string(), "a");
        assert_eq!(Byte(b' ').to_string(), " ");
        assert_eq!(Byte(b'\n').to_string(), "\\n");
        assert_eq!(Byte(0xFF).to_string(), "\\xFF");
    }

    #[test]
    fn bytes() {
        assert_eq!(Bytes(b"+01:00").to_string(), "+01:00");
        assert_eq!(Bytes(b"a\xFFb").to_string(), "a\\xffb");
        assert_eq!(Bytes(b"\"").to_string(), "\\\"");
        assert_eq!(alloc::format!("{:?}", Bytes(b"P1Y")), "\"P1Y\"");
    }
}

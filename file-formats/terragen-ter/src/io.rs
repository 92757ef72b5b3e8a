// io.rs - Helper traits for reading/writing little-endian values

use std::io::{self, Read, Write};

/// Extension trait for reading little-endian values
///
/// A short read surfaces as an `io::Error` with `ErrorKind::UnexpectedEof`;
/// no partial values are ever returned.
pub trait ReadLittleEndian: Read {
    fn read_u16_le(&mut self) -> io::Result<u16> {
        let mut buf = [0; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    fn read_i16_le(&mut self) -> io::Result<i16> {
        let mut buf = [0; 2];
        self.read_exact(&mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }

    fn read_f32_le(&mut self) -> io::Result<f32> {
        let mut buf = [0; 4];
        self.read_exact(&mut buf)?;
        Ok(f32::from_le_bytes(buf))
    }

    /// Consumes the 2 explicit padding bytes that follow a 16-bit field
    fn skip_padding(&mut self) -> io::Result<()> {
        let mut buf = [0; 2];
        self.read_exact(&mut buf)?;
        Ok(())
    }
}

/// Extension trait for writing little-endian values
pub trait WriteLittleEndian: Write {
    fn write_u16_le(&mut self, value: u16) -> io::Result<()> {
        self.write_all(&value.to_le_bytes())
    }

    fn write_i16_le(&mut self, value: i16) -> io::Result<()> {
        self.write_all(&value.to_le_bytes())
    }

    fn write_f32_le(&mut self, value: f32) -> io::Result<()> {
        self.write_all(&value.to_le_bytes())
    }
}

// Implement for all types that implement Read/Write
impl<R: Read + ?Sized> ReadLittleEndian for R {}
impl<W: Write + ?Sized> WriteLittleEndian for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_u16_le() {
        let mut cursor = Cursor::new(vec![0x34, 0x12]);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x1234);
    }

    #[test]
    fn test_read_i16_le_negative() {
        // Two's complement reinterpretation of the unsigned bytes
        let mut cursor = Cursor::new(vec![0xFF, 0xFF]);
        assert_eq!(cursor.read_i16_le().unwrap(), -1);
    }

    #[test]
    fn test_read_f32_le() {
        let mut cursor = Cursor::new(1.5f32.to_le_bytes().to_vec());
        assert_eq!(cursor.read_f32_le().unwrap(), 1.5);
    }

    #[test]
    fn test_short_read_is_unexpected_eof() {
        let mut cursor = Cursor::new(vec![0x01]);
        let err = cursor.read_u16_le().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let mut cursor = Cursor::new(vec![0x01, 0x02, 0x03]);
        let err = cursor.read_f32_le().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_write_read_roundtrip() {
        let mut buffer = Vec::new();
        buffer.write_u16_le(0xBEEF).unwrap();
        buffer.write_i16_le(-12345).unwrap();
        buffer.write_f32_le(-0.25).unwrap();

        let mut cursor = Cursor::new(buffer);
        assert_eq!(cursor.read_u16_le().unwrap(), 0xBEEF);
        assert_eq!(cursor.read_i16_le().unwrap(), -12345);
        assert_eq!(cursor.read_f32_le().unwrap(), -0.25);
    }
}

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Bounds-checked little-endian reader over a Borsh-style payload. Fields are
/// laid out in declaration order with no padding.
pub struct BinaryReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            buffer: data,
            offset: 0,
        }
    }

    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8], ReaderError> {
        self.check_bounds(length)?;
        let slice = &self.buffer[self.offset..self.offset + length];
        self.offset += length;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReaderError> {
        self.check_bounds(1)?;
        let value = self.buffer[self.offset];
        self.offset += 1;
        Ok(value)
    }

    pub fn read_bool(&mut self) -> Result<bool, ReaderError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u64(&mut self) -> Result<u64, ReaderError> {
        self.check_bounds(8)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 8]);
        let value = cursor.read_u64::<LittleEndian>().map_err(ReaderError::Io)?;
        self.offset += 8;
        Ok(value)
    }

    pub fn read_i64(&mut self) -> Result<i64, ReaderError> {
        self.check_bounds(8)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 8]);
        let value = cursor.read_i64::<LittleEndian>().map_err(ReaderError::Io)?;
        self.offset += 8;
        Ok(value)
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, ReaderError> {
        let bytes = self.read_bytes(32)?;
        let mut array = [0u8; 32];
        array.copy_from_slice(bytes);
        Ok(Pubkey::new_from_array(array))
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    fn check_bounds(&self, length: usize) -> Result<(), ReaderError> {
        if self.offset + length > self.buffer.len() {
            return Err(ReaderError::BufferOverflow {
                length,
                offset: self.offset,
                buffer_len: self.buffer.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("buffer overflow: trying to read {length} bytes at offset {offset} from buffer of length {buffer_len}")]
    BufferOverflow {
        length: usize,
        offset: usize,
        buffer_len: usize,
    },
    #[error("failed to read value: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_fields_in_order() {
        let mut data = vec![7u8];
        data.extend_from_slice(&42u64.to_le_bytes());
        data.extend_from_slice(&(-5i64).to_le_bytes());
        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.read_u64().unwrap(), 42);
        assert_eq!(reader.read_i64().unwrap(), -5);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn overflow_is_an_error_not_a_panic() {
        let data = [1u8, 2, 3];
        let mut reader = BinaryReader::new(&data);
        assert!(reader.read_u64().is_err());
        // A failed read does not advance the offset.
        assert_eq!(reader.read_u8().unwrap(), 1);
    }

    #[test]
    fn pubkey_round_trips() {
        let key = Pubkey::new_unique();
        let mut reader_data = key.to_bytes().to_vec();
        reader_data.push(1);
        let mut reader = BinaryReader::new(&reader_data);
        assert_eq!(reader.read_pubkey().unwrap(), key);
        assert!(reader.read_bool().unwrap());
    }
}

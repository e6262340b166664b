use std::io::{self, Read, Seek, SeekFrom};

/// Check whether a reader points to a binary file by looking for null
/// bytes in the first 512 bytes. Resets the reader position afterward.
pub fn is_binary_reader<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut header = [0u8; 512];
    let n = reader.read(&mut header)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(header[..n].contains(&0))
}

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const BZIP2_MAGIC: [u8; 3] = *b"BZh";

/// Supported input compression formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
}

impl Compression {
    /// Returns true when the input is compressed.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gbff2gff::detect::Compression;
    ///
    /// assert!(Compression::Gzip.is_compressed());
    /// assert!(!Compression::None.is_compressed());
    /// ```
    pub fn is_compressed(self) -> bool {
        !matches!(self, Compression::None)
    }
}

/// Detects the compression of a GBFF input.
///
/// The extension decides first (`.gz`, `.bz2` and their long forms); any other
/// extension falls back to sniffing the magic bytes, so `sample.gbff`,
/// `sample.gbk` or an extensionless file are all accepted as plain text.
///
/// # Arguments
///
/// * `path` - Path to the input file
///
/// # Returns
///
/// Returns the detected Compression, `Compression::None` for plain text.
///
/// # Errors
///
/// Returns the I/O error from opening or reading the file, e.g. `NotFound`.
///
/// # Example
///
/// ```rust, ignore
/// use gbff2gff::detect::{detect_compression, Compression};
/// use std::path::Path;
///
/// let compression = detect_compression(Path::new("sample.gbff.gz"))?;
/// assert_eq!(compression, Compression::Gzip);
/// ```
pub fn detect_compression(path: &Path) -> io::Result<Compression> {
    let ext = extension_lowercase(path);
    if let Some(compression) = ext.as_deref().and_then(compression_from_extension) {
        return Ok(compression);
    }

    let mut magic = [0u8; 3];
    let mut file = File::open(path)?;
    let read = read_up_to(&mut file, &mut magic)?;
    Ok(compression_from_magic(&magic[..read]))
}

/// Extracts the lowercase extension from a path.
fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Maps compression extensions to their [`Compression`] variant.
fn compression_from_extension(ext: &str) -> Option<Compression> {
    match ext {
        "gz" | "gzip" => Some(Compression::Gzip),
        "bz2" | "bzip2" => Some(Compression::Bzip2),
        _ => None,
    }
}

fn compression_from_magic(magic: &[u8]) -> Compression {
    if magic.starts_with(&GZIP_MAGIC) {
        Compression::Gzip
    } else if magic.starts_with(&BZIP2_MAGIC) {
        Compression::Bzip2
    } else {
        Compression::None
    }
}

/// Fills `buf` as far as the file allows; short files are fine.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(compression_from_extension("gz"), Some(Compression::Gzip));
        assert_eq!(compression_from_extension("bzip2"), Some(Compression::Bzip2));
        assert_eq!(compression_from_extension("gbff"), None);
    }

    #[test]
    fn test_magic_bytes() {
        assert_eq!(compression_from_magic(&[0x1f, 0x8b, 0x08]), Compression::Gzip);
        assert_eq!(compression_from_magic(b"BZh"), Compression::Bzip2);
        assert_eq!(compression_from_magic(b"LOC"), Compression::None);
        assert_eq!(compression_from_magic(b""), Compression::None);
    }
}

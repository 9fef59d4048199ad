//! DDS header fields.
//!
//! Only the handful of fields the unpacker and repacker look at are read:
//! the magic, the mipmap count, the pixel-format FourCC and, for `DX10`
//! files, the DXGI format of the extended header.

/// Magic bytes at the start of every DDS file.
pub const SIGNATURE: &[u8; 4] = b"DDS ";

/// Length of the magic plus the fixed `DDS_HEADER`.
pub const HEADER_LEN: usize = 128;

/// Length of the `DDS_HEADER_DXT10` extension that follows a `DX10` header.
pub const DX10_HEADER_LEN: usize = 20;

/// FourCC label used when a texture carries none.
pub const UNKNOWN_FORMAT: &str = "UNKNOWN";

/// FourCC announcing the DX10 extended header.
pub const DX10_FOURCC: &str = "DX10";

const MIPMAP_COUNT_OFFSET: usize = 28;
const FOURCC_RANGE: std::ops::Range<usize> = 84..88;

/// Whether `bytes` holds a complete header starting with the DDS magic.
pub fn is_dds_header(bytes: &[u8]) -> bool {
    bytes.len() >= HEADER_LEN && bytes.starts_with(SIGNATURE)
}

/// FourCC label of a texture, read leniently from bytes 84..88.
///
/// Non-ASCII bytes are dropped and surrounding whitespace and NULs trimmed.
/// Missing or blank codes read as [`UNKNOWN_FORMAT`].
pub fn fourcc(bytes: &[u8]) -> String {
    let end = bytes.len().min(FOURCC_RANGE.end);
    let raw = bytes.get(FOURCC_RANGE.start..end).unwrap_or_default();
    let text: String = raw
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0');

    if trimmed.is_empty() {
        UNKNOWN_FORMAT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// FourCC of a well-formed header, or `None` when `bytes` is not one.
pub fn header_format(bytes: &[u8]) -> Option<String> {
    is_dds_header(bytes).then(|| fourcc(bytes))
}

/// Mipmap count from the header; zero or an invalid header count as one.
pub fn mipmap_count(bytes: &[u8]) -> u32 {
    if !is_dds_header(bytes) {
        return 1;
    }
    read_u32(bytes, MIPMAP_COUNT_OFFSET).filter(|&n| n > 0).unwrap_or(1)
}

/// DXGI format code from the DX10 extension, if the bytes reach that far.
pub fn dxgi_format(bytes: &[u8]) -> Option<u32> {
    if bytes.len() < HEADER_LEN + DX10_HEADER_LEN {
        return None;
    }
    read_u32(bytes, HEADER_LEN)
}

/// texconv `-f` name for a legacy FourCC.
pub fn texconv_format_for_fourcc(fourcc: &str) -> Option<&'static str> {
    match fourcc {
        "DXT1" => Some("BC1_UNORM"),
        "DXT3" => Some("BC2_UNORM"),
        "DXT5" => Some("BC3_UNORM"),
        "ATI2" => Some("BC5_UNORM"),
        _ => None,
    }
}

/// texconv `-f` name for a DXGI format code.
pub fn texconv_format_for_dxgi(dxgi: u32) -> Option<&'static str> {
    match dxgi {
        71 => Some("BC1_UNORM"),
        74 => Some("BC2_UNORM"),
        77 => Some("BC3_UNORM"),
        83 => Some("BC5_UNORM"),
        _ => None,
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let raw: [u8; 4] = bytes.get(offset..offset + 4)?.try_into().ok()?;
    Some(u32::from_le_bytes(raw))
}

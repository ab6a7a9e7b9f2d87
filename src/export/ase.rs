use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::analysis::color::metrics::parse_hex;
use crate::types::{DesignProfile, PaletteEntry};

const SIGNATURE: &[u8; 4] = b"ASEF";
const VERSION: [u8; 4] = [0x00, 0x01, 0x00, 0x00];
const COLOR_ENTRY: [u8; 2] = [0x00, 0x01];
const RGB_MODEL: &[u8; 4] = b"RGB ";
const GLOBAL_COLOR: [u8; 2] = [0x00, 0x00];

/// Body of one color block: name, color model, channels and color type.
fn color_block(entry: &PaletteEntry) -> Vec<u8> {
    let name: Vec<u16> = entry.role.as_str().encode_utf16().collect();
    let mut body = Vec::with_capacity(2 + name.len() * 2 + 2 + 4 + 12 + 2);

    body.extend_from_slice(&((name.len() + 1) as u16).to_be_bytes());
    for unit in &name {
        body.extend_from_slice(&unit.to_be_bytes());
    }
    body.extend_from_slice(&[0x00, 0x00]);

    body.extend_from_slice(RGB_MODEL);
    let rgb = parse_hex(&entry.hex).unwrap_or(image::Rgb([0, 0, 0]));
    for channel in rgb.0 {
        body.extend_from_slice(&(channel as f32 / 255.0).to_be_bytes());
    }
    body.extend_from_slice(&GLOBAL_COLOR);
    body
}

/// Raw Adobe Swatch Exchange bytes with one global RGB color per palette entry.
pub fn ase_bytes(palette: &[PaletteEntry]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(12 + palette.len() * 48);
    bytes.extend_from_slice(SIGNATURE);
    bytes.extend_from_slice(&VERSION);
    bytes.extend_from_slice(&(palette.len() as u32).to_be_bytes());

    for entry in palette {
        let body = color_block(entry);
        bytes.extend_from_slice(&COLOR_ENTRY);
        bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&body);
    }
    bytes
}

pub fn adobe_ase(profile: &DesignProfile) -> String {
    STANDARD.encode(ase_bytes(&profile.colors.palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_profile;
    use crate::types::ColorRole;

    fn be_u32(bytes: &[u8]) -> u32 {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn be_f32(bytes: &[u8]) -> f32 {
        f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[test]
    fn test_header() {
        let profile = sample_profile();
        let decoded = STANDARD.decode(adobe_ase(&profile)).unwrap();

        assert_eq!(&decoded[0..4], b"ASEF");
        assert_eq!(&decoded[4..8], &[0x00, 0x01, 0x00, 0x00]);
        assert_eq!(be_u32(&decoded[8..12]), profile.colors.palette.len() as u32);
    }

    #[test]
    fn test_color_block_layout() {
        let bytes = ase_bytes(&[PaletteEntry::new("#FF8000", ColorRole::Text, 100)]);
        let block = &bytes[12..];

        assert_eq!(&block[0..2], &[0x00, 0x01]);
        // "text" -> 2 + 4*2 + 2 name bytes, 4 model bytes, 12 channel bytes, 2 type bytes
        let length = be_u32(&block[2..6]) as usize;
        assert_eq!(length, 12 + 4 + 12 + 2);
        assert_eq!(block.len(), 6 + length);

        let body = &block[6..];
        assert_eq!(&body[0..2], &[0x00, 0x05]);
        assert_eq!(&body[2..10], &[0x00, b't', 0x00, b'e', 0x00, b'x', 0x00, b't']);
        assert_eq!(&body[10..12], &[0x00, 0x00]);
        assert_eq!(&body[12..16], b"RGB ");
        assert_eq!(be_f32(&body[16..20]), 1.0);
        assert_eq!(be_f32(&body[20..24]), 128.0 / 255.0);
        assert_eq!(be_f32(&body[24..28]), 0.0);
        assert_eq!(&body[28..30], &[0x00, 0x00]);
    }

    #[test]
    fn test_blocks_follow_palette_order() {
        let profile = sample_profile();
        let bytes = ase_bytes(&profile.colors.palette);

        let mut offset = 12;
        let mut names = Vec::new();
        while offset < bytes.len() {
            let length = be_u32(&bytes[offset + 2..offset + 6]) as usize;
            let body = &bytes[offset + 6..offset + 6 + length];
            let chars = u16::from_be_bytes([body[0], body[1]]) as usize - 1;
            let name: String = (0..chars)
                .map(|i| char::from(body[3 + i * 2]))
                .collect();
            names.push(name);
            offset += 6 + length;
        }

        assert_eq!(offset, bytes.len());
        assert_eq!(names, vec!["background", "text", "accent", "interactive"]);
    }

    #[test]
    fn test_empty_palette() {
        assert_eq!(ase_bytes(&[]), b"ASEF\x00\x01\x00\x00\x00\x00\x00\x00".to_vec());
    }
}

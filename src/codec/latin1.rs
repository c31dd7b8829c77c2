//! ISO-8859-1 transport for the legacy file formats.
//!
//! Every sign file is single-byte text. Latin-1 maps each byte to the code
//! point of the same value, so decoding is total; encoding substitutes `?`
//! for anything beyond 0xFF, since the device side has no way to show it.

/// Substitution character for non-Latin-1 code points on encode.
const SUBSTITUTE: u8 = b'?';

/// Decode Latin-1 bytes into a string. Never fails.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode a string as Latin-1 bytes, substituting `?` for code points the
/// encoding cannot carry.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            let code = u32::from(ch);
            #[allow(clippy::cast_possible_truncation)]
            if code <= 0xFF {
                code as u8
            } else {
                SUBSTITUTE
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_round_trip() {
        let text = "LIGNE 7 CENTRE-VILLE";
        assert_eq!(decode(&encode(text)), text);
    }

    #[test]
    fn test_accented_round_trip() {
        let text = "Hôtel de Ville — é è ç";
        // The em dash is not Latin-1; everything else is.
        let decoded = decode(&encode(text));
        assert_eq!(decoded, "Hôtel de Ville ? é è ç");
    }

    #[test]
    fn test_every_byte_decodes() {
        let bytes: Vec<u8> = (0..=255).collect();
        let decoded = decode(&bytes);
        assert_eq!(decoded.chars().count(), 256);
        assert_eq!(encode(&decoded), bytes);
    }

    #[test]
    fn test_substitution() {
        assert_eq!(encode("→"), vec![b'?']);
        assert_eq!(encode("語"), vec![b'?']);
    }
}

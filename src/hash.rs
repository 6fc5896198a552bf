pub const DIGEST_HEX_LEN: usize = 8;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a over the raw bytes. Stable across runs and platforms.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:0width$x}", fnv1a_32(bytes), width = DIGEST_HEX_LEN)
}

pub fn hash_text(text: &str) -> String {
    hash_bytes(text.as_bytes())
}

use std::sync::OnceLock;

/// Reflected CRC-32 polynomial shared by ZIP, gzip, and PNG.
const POLYNOMIAL: u32 = 0xEDB8_8320;

static CRC_TABLE: OnceLock<[u32; 256]> = OnceLock::new();

/// 256-entry lookup table, built on first use and read-only afterwards.
fn table() -> &'static [u32; 256] {
    CRC_TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (value, slot) in table.iter_mut().enumerate() {
            let mut crc = value as u32;
            for _ in 0..8 {
                crc = if crc & 1 != 0 {
                    (crc >> 1) ^ POLYNOMIAL
                } else {
                    crc >> 1
                };
            }
            *slot = crc;
        }
        table
    })
}

/// Compute the ISO-3309 CRC-32 of `data`.
///
/// This is the checksum ZIP entries store: the running value starts
/// all-ones and the result is its complement, so `digest(&[])` is 0.
/// Safe to call from any number of threads.
pub fn digest(data: &[u8]) -> u32 {
    let table = table();
    let mut crc = !0u32;
    for &byte in data {
        crc = (crc >> 8) ^ table[((crc ^ u32::from(byte)) & 0xFF) as usize];
    }
    !crc
}

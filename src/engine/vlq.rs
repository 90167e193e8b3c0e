//! Base64 VLQ encoder for the `mappings` field of source map v3.

const VLQ_BASE64_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Append the VLQ encoding of `value` to `out`.
///
/// The sign goes in bit 0 of the first digit; each digit carries 5 value bits
/// and uses bit 5 as the continuation flag.
pub fn encode_vlq_value(value: i64, out: &mut String) {
    let mut rest = if value < 0 {
        ((-value) << 1) | 1
    } else {
        value << 1
    };

    loop {
        let mut digit = rest & 0x1F;
        rest >>= 5;
        if rest > 0 {
            digit |= 0x20;
        }
        out.push(VLQ_BASE64_CHARS[digit as usize] as char);
        if rest == 0 {
            break;
        }
    }
}

/// Encode one mapping segment (all fields relative to the previous segment).
pub fn encode_segment(fields: &[i64]) -> String {
    let mut out = String::new();
    for &field in fields {
        encode_vlq_value(field, &mut out);
    }
    out
}

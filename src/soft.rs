//! Portable backend for targets without hardware AES.
//!
//! Bit-exact with the hardware paths and covered by the same known-answer
//! vectors; under `cfg(test)` it doubles as the reference the hardware
//! backends are checked against. Everything is byte-addressed, so lane k of
//! the 32-bit view is bytes 4k..4k+4 regardless of host endianness.

use crate::tables::{SBOX, rot_word, sub_word};

/// 128-bit integer vector, viewed per call as 2x i64, 4x i32 or 16x u8 lanes.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct __m128i([u8; 16]);

/// 128-bit float vector, 4x f32 lanes.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct __m128([u8; 16]);

#[inline(always)]
fn lane_u32(v: &[u8; 16], lane: usize) -> u32 {
    let i = lane * 4;
    u32::from_le_bytes([v[i], v[i + 1], v[i + 2], v[i + 3]])
}

#[inline(always)]
fn lane_u64(v: &[u8; 16], lane: usize) -> u64 {
    let i = lane * 8;
    u64::from_le_bytes([
        v[i],
        v[i + 1],
        v[i + 2],
        v[i + 3],
        v[i + 4],
        v[i + 5],
        v[i + 6],
        v[i + 7],
    ])
}

/// Accepted and ignored; prefetching is a pure hint and this backend has
/// nothing useful to hint with.
#[inline(always)]
pub fn _mm_prefetch<const STRATEGY: i32>(p: *const i8) {
    const { assert!(STRATEGY >= 0 && STRATEGY < 8, "prefetch strategy is a 3-bit immediate") };
    let _ = p;
}

/// `e1` is the HIGH 64-bit lane, `e0` the low; the reverse of memory order.
#[inline(always)]
pub fn _mm_set_epi64x(e1: i64, e0: i64) -> __m128i {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&e0.to_le_bytes());
    out[8..].copy_from_slice(&e1.to_le_bytes());
    __m128i(out)
}

/// Returns the low 64-bit lane as a signed integer.
#[inline(always)]
pub fn _mm_cvtsi128_si64(a: __m128i) -> i64 {
    lane_u64(&a.0, 0) as i64
}

/// Lane-wise 64-bit addition. Wrapping mod 2^64 is the same bit result for
/// the signed and unsigned views.
#[inline(always)]
pub fn _mm_add_epi64(a: __m128i, b: __m128i) -> __m128i {
    let mut out = [0u8; 16];
    let lo = lane_u64(&a.0, 0).wrapping_add(lane_u64(&b.0, 0));
    let hi = lane_u64(&a.0, 1).wrapping_add(lane_u64(&b.0, 1));
    out[..8].copy_from_slice(&lo.to_le_bytes());
    out[8..].copy_from_slice(&hi.to_le_bytes());
    __m128i(out)
}

/// High two f32 lanes of `b` into the low half, high two lanes of `a` into
/// the high half. Lanes move as raw bytes, so NaN payloads survive.
#[inline(always)]
pub fn _mm_movehl_ps(a: __m128, b: __m128) -> __m128 {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&b.0[8..]);
    out[8..].copy_from_slice(&a.0[8..]);
    __m128(out)
}

/// One round of an AES encryption flow: SubBytes, ShiftRows, MixColumns,
/// then XOR with `round_key`.
#[inline(always)]
pub fn _mm_aesenc_si128(a: __m128i, round_key: __m128i) -> __m128i {
    let mut s = mix_columns(shift_rows(sub_bytes(a.0)));
    for (b, k) in s.iter_mut().zip(round_key.0.iter()) {
        *b ^= k;
    }
    __m128i(s)
}

/// AES key-expansion assist for `a` with round constant `IMM8`.
#[inline(always)]
pub fn _mm_aeskeygenassist_si128<const IMM8: i32>(a: __m128i) -> __m128i {
    const { assert!(IMM8 >= 0 && IMM8 < 256, "rcon is an 8-bit immediate") };
    let rcon = IMM8 as u32;
    let x1 = sub_word(lane_u32(&a.0, 1));
    let x3 = sub_word(lane_u32(&a.0, 3));
    let mut out = [0u8; 16];
    out[0..4].copy_from_slice(&x1.to_le_bytes());
    out[4..8].copy_from_slice(&(rot_word(x1) ^ rcon).to_le_bytes());
    out[8..12].copy_from_slice(&x3.to_le_bytes());
    out[12..16].copy_from_slice(&(rot_word(x3) ^ rcon).to_le_bytes());
    __m128i(out)
}

/// Reinterprets the bits of `a` as a float vector. No bits move.
#[inline(always)]
pub fn _mm_castsi128_ps(a: __m128i) -> __m128 {
    __m128(a.0)
}

/// Reinterprets the bits of `a` as an integer vector. No bits move.
#[inline(always)]
pub fn _mm_castps_si128(a: __m128) -> __m128i {
    __m128i(a.0)
}

/// # Safety
///
/// `mem_addr` must be valid for a 16-byte read.
#[inline(always)]
pub unsafe fn _mm_loadu_si128(mem_addr: *const __m128i) -> __m128i {
    __m128i(unsafe { core::ptr::read_unaligned(mem_addr as *const [u8; 16]) })
}

/// # Safety
///
/// `mem_addr` must be valid for a 16-byte write.
#[inline(always)]
pub unsafe fn _mm_storeu_si128(mem_addr: *mut __m128i, a: __m128i) {
    unsafe { core::ptr::write_unaligned(mem_addr as *mut [u8; 16], a.0) }
}

/// # Safety
///
/// `mem_addr` must be valid for a 16-byte read.
#[inline(always)]
pub unsafe fn _mm_loadu_ps(mem_addr: *const f32) -> __m128 {
    __m128(unsafe { core::ptr::read_unaligned(mem_addr as *const [u8; 16]) })
}

/// # Safety
///
/// `mem_addr` must be valid for a 16-byte write.
#[inline(always)]
pub unsafe fn _mm_storeu_ps(mem_addr: *mut f32, a: __m128) {
    unsafe { core::ptr::write_unaligned(mem_addr as *mut [u8; 16], a.0) }
}

/// SubBytes: substitute every state byte through the S-box.
#[inline(always)]
pub(crate) fn sub_bytes(s: [u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = SBOX[s[i] as usize];
    }
    out
}

/// ShiftRows on the column-major state: row r rotates left by r.
#[inline(always)]
pub(crate) fn shift_rows(s: [u8; 16]) -> [u8; 16] {
    const MAP: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = s[MAP[i]];
    }
    out
}

/// MixColumns over GF(2^8), one 4-byte column at a time.
#[inline(always)]
pub(crate) fn mix_columns(s: [u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for col in 0..4 {
        let i = col * 4;
        out[i] = gf_mul2(s[i]) ^ gf_mul3(s[i + 1]) ^ s[i + 2] ^ s[i + 3];
        out[i + 1] = s[i] ^ gf_mul2(s[i + 1]) ^ gf_mul3(s[i + 2]) ^ s[i + 3];
        out[i + 2] = s[i] ^ s[i + 1] ^ gf_mul2(s[i + 2]) ^ gf_mul3(s[i + 3]);
        out[i + 3] = gf_mul3(s[i]) ^ s[i + 1] ^ s[i + 2] ^ gf_mul2(s[i + 3]);
    }
    out
}

/// GF(2^8) doubling, reduced by the AES polynomial x^8 + x^4 + x^3 + x + 1.
#[inline(always)]
fn gf_mul2(x: u8) -> u8 {
    (x << 1) ^ ((x >> 7) * 0x1b)
}

/// GF(2^8) tripling: 3x = 2x ^ x.
#[inline(always)]
fn gf_mul3(x: u8) -> u8 {
    gf_mul2(x) ^ x
}

//! NEON backend, the emulation this crate exists for.
//!
//! One byte-register type sits behind every `__m128i`; each operation
//! reinterprets it to the lane view it needs. All reinterpretation is
//! `vreinterpretq_*`, which never moves bits.
//!
//! The NEON intrinsics carry `#[target_feature]`, so every call needs an
//! `unsafe` block even though the `cfg` gate on this module guarantees the
//! features are enabled.

use core::arch::aarch64::{
    float32x4_t, uint8x16_t, vaddq_s64, vaeseq_u8, vaesmcq_u8, vcombine_f32, vdupq_n_u8,
    veorq_u8, vget_high_f32, vgetq_lane_s64, vgetq_lane_u32, vld1q_f32, vld1q_s64, vld1q_u32,
    vld1q_u8, vreinterpretq_f32_u8, vreinterpretq_s64_u8, vreinterpretq_u32_u8,
    vreinterpretq_u8_f32, vreinterpretq_u8_s64, vreinterpretq_u8_u32, vst1q_f32, vst1q_u8,
};
use core::arch::asm;

use crate::tables::{rot_word, sub_word};

/// 128-bit integer vector, viewed per call as 2x i64, 4x i32 or 16x u8 lanes.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct __m128i(uint8x16_t);

/// 128-bit float vector, 4x f32 lanes.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct __m128(float32x4_t);

/// Fetches the cache line containing `p` into the cache.
///
/// PRFM has a single relevant flavor here, so the locality levels collapse
/// to `pldl1keep`; the hint must still be accepted. Never faults, even for
/// garbage addresses.
///
/// [Intel's documentation](https://www.intel.com/content/www/us/en/docs/intrinsics-guide/index.html#text=_mm_prefetch)
#[inline(always)]
pub fn _mm_prefetch<const STRATEGY: i32>(p: *const i8) {
    const { assert!(STRATEGY >= 0 && STRATEGY < 8, "prefetch strategy is a 3-bit immediate") };
    unsafe {
        asm!(
            "prfm pldl1keep, [{p}]",
            p = in(reg) p,
            options(nostack, preserves_flags)
        );
    }
}

/// Sets the vector to `[e0, e1]`: `e1` is the HIGH 64-bit lane, `e0` the low.
///
/// The argument order is most-significant-first, the reverse of memory
/// order, so the staging buffer below is deliberately `[e0, e1]`.
///
/// [Intel's documentation](https://www.intel.com/content/www/us/en/docs/intrinsics-guide/index.html#text=_mm_set_epi64x)
#[inline(always)]
pub fn _mm_set_epi64x(e1: i64, e0: i64) -> __m128i {
    let lanes = [e0, e1];
    __m128i(unsafe { vreinterpretq_u8_s64(vld1q_s64(lanes.as_ptr())) })
}

/// Returns the low 64-bit lane as a signed integer.
///
/// [Intel's documentation](https://www.intel.com/content/www/us/en/docs/intrinsics-guide/index.html#text=_mm_cvtsi128_si64)
#[inline(always)]
pub fn _mm_cvtsi128_si64(a: __m128i) -> i64 {
    unsafe { vgetq_lane_s64::<0>(vreinterpretq_s64_u8(a.0)) }
}

/// Lane-wise 64-bit addition with two's-complement wraparound.
///
/// [Intel's documentation](https://www.intel.com/content/www/us/en/docs/intrinsics-guide/index.html#text=_mm_add_epi64)
#[inline(always)]
pub fn _mm_add_epi64(a: __m128i, b: __m128i) -> __m128i {
    __m128i(unsafe {
        vreinterpretq_u8_s64(vaddq_s64(
            vreinterpretq_s64_u8(a.0),
            vreinterpretq_s64_u8(b.0),
        ))
    })
}

/// Moves the high two f32 lanes of `b` into the low half of the result and
/// the high two lanes of `a` into the high half. Pure shuffle; NaN payloads
/// pass through untouched.
///
/// [Intel's documentation](https://www.intel.com/content/www/us/en/docs/intrinsics-guide/index.html#text=_mm_movehl_ps)
#[inline(always)]
pub fn _mm_movehl_ps(a: __m128, b: __m128) -> __m128 {
    __m128(unsafe { vcombine_f32(vget_high_f32(b.0), vget_high_f32(a.0)) })
}

/// Performs one round of an AES encryption flow: SubBytes, ShiftRows,
/// MixColumns, then XOR with `round_key`.
///
/// AESE XORs its key operand before SubBytes/ShiftRows, while AESENC adds
/// the round key after MixColumns. AESE against an all-zero key followed by
/// AESMC reproduces the AESENC body and leaves the key XOR to us.
///
/// [Intel's documentation](https://www.intel.com/content/www/us/en/docs/intrinsics-guide/index.html#text=_mm_aesenc_si128)
#[inline(always)]
pub fn _mm_aesenc_si128(a: __m128i, round_key: __m128i) -> __m128i {
    unsafe {
        let zero = vdupq_n_u8(0);
        __m128i(veorq_u8(vaesmcq_u8(vaeseq_u8(a.0, zero)), round_key.0))
    }
}

/// Computes the AES key-expansion assist value for `a` with the round
/// constant `IMM8`.
///
/// No NEON counterpart exists, so this recomputes the instruction from the
/// S-box: substitute 32-bit lanes 1 and 3, rotate the substituted words left
/// by one byte, XOR in the round constant, and assemble the four output
/// lanes in the order the instruction documents.
///
/// [Intel's documentation](https://www.intel.com/content/www/us/en/docs/intrinsics-guide/index.html#text=_mm_aeskeygenassist_si128)
#[inline(always)]
pub fn _mm_aeskeygenassist_si128<const IMM8: i32>(a: __m128i) -> __m128i {
    const { assert!(IMM8 >= 0 && IMM8 < 256, "rcon is an 8-bit immediate") };
    let rcon = IMM8 as u32;
    unsafe {
        let words = vreinterpretq_u32_u8(a.0);
        let x1 = sub_word(vgetq_lane_u32::<1>(words));
        let x3 = sub_word(vgetq_lane_u32::<3>(words));
        let lanes = [x1, rot_word(x1) ^ rcon, x3, rot_word(x3) ^ rcon];
        __m128i(vreinterpretq_u8_u32(vld1q_u32(lanes.as_ptr())))
    }
}

/// Reinterprets the bits of `a` as a float vector. No bits move.
#[inline(always)]
pub fn _mm_castsi128_ps(a: __m128i) -> __m128 {
    __m128(unsafe { vreinterpretq_f32_u8(a.0) })
}

/// Reinterprets the bits of `a` as an integer vector. No bits move.
#[inline(always)]
pub fn _mm_castps_si128(a: __m128) -> __m128i {
    __m128i(unsafe { vreinterpretq_u8_f32(a.0) })
}

/// Loads 128 bits from `mem_addr`. No alignment requirement.
///
/// # Safety
///
/// `mem_addr` must be valid for a 16-byte read.
#[inline(always)]
pub unsafe fn _mm_loadu_si128(mem_addr: *const __m128i) -> __m128i {
    __m128i(unsafe { vld1q_u8(mem_addr as *const u8) })
}

/// Stores 128 bits to `mem_addr`. No alignment requirement.
///
/// # Safety
///
/// `mem_addr` must be valid for a 16-byte write.
#[inline(always)]
pub unsafe fn _mm_storeu_si128(mem_addr: *mut __m128i, a: __m128i) {
    unsafe { vst1q_u8(mem_addr as *mut u8, a.0) }
}

/// Loads four f32 lanes from `mem_addr`. No alignment requirement.
///
/// # Safety
///
/// `mem_addr` must be valid for a 16-byte read.
#[inline(always)]
pub unsafe fn _mm_loadu_ps(mem_addr: *const f32) -> __m128 {
    __m128(unsafe { vld1q_f32(mem_addr) })
}

/// Stores four f32 lanes to `mem_addr`. No alignment requirement.
///
/// # Safety
///
/// `mem_addr` must be valid for a 16-byte write.
#[inline(always)]
pub unsafe fn _mm_storeu_ps(mem_addr: *mut f32, a: __m128) {
    unsafe { vst1q_f32(mem_addr, a.0) }
}

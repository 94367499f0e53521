//! x86_64 backend: zero-cost passthrough to the native instructions.
//!
//! On the architecture the caller was written for there is nothing to
//! emulate; these wrappers only pin down one crate-level surface so the
//! caller and the tests are identical on every target.
//!
//! The native intrinsics carry `#[target_feature]`, so every call needs an
//! `unsafe` block even though the `cfg` gate on this module guarantees the
//! features are enabled.

use core::arch::x86_64 as arch;

pub use core::arch::x86_64::{__m128, __m128i};

#[inline(always)]
pub fn _mm_prefetch<const STRATEGY: i32>(p: *const i8) {
    const { assert!(STRATEGY >= 0 && STRATEGY < 8, "prefetch strategy is a 3-bit immediate") };
    unsafe { arch::_mm_prefetch::<STRATEGY>(p) }
}

#[inline(always)]
pub fn _mm_set_epi64x(e1: i64, e0: i64) -> __m128i {
    unsafe { arch::_mm_set_epi64x(e1, e0) }
}

#[inline(always)]
pub fn _mm_cvtsi128_si64(a: __m128i) -> i64 {
    unsafe { arch::_mm_cvtsi128_si64(a) }
}

#[inline(always)]
pub fn _mm_add_epi64(a: __m128i, b: __m128i) -> __m128i {
    unsafe { arch::_mm_add_epi64(a, b) }
}

#[inline(always)]
pub fn _mm_movehl_ps(a: __m128, b: __m128) -> __m128 {
    unsafe { arch::_mm_movehl_ps(a, b) }
}

#[inline(always)]
pub fn _mm_aesenc_si128(a: __m128i, round_key: __m128i) -> __m128i {
    unsafe { arch::_mm_aesenc_si128(a, round_key) }
}

#[inline(always)]
pub fn _mm_aeskeygenassist_si128<const IMM8: i32>(a: __m128i) -> __m128i {
    const { assert!(IMM8 >= 0 && IMM8 < 256, "rcon is an 8-bit immediate") };
    unsafe { arch::_mm_aeskeygenassist_si128::<IMM8>(a) }
}

#[inline(always)]
pub fn _mm_castsi128_ps(a: __m128i) -> __m128 {
    unsafe { arch::_mm_castsi128_ps(a) }
}

#[inline(always)]
pub fn _mm_castps_si128(a: __m128) -> __m128i {
    unsafe { arch::_mm_castps_si128(a) }
}

/// # Safety
///
/// `mem_addr` must be valid for a 16-byte read.
#[inline(always)]
pub unsafe fn _mm_loadu_si128(mem_addr: *const __m128i) -> __m128i {
    unsafe { arch::_mm_loadu_si128(mem_addr) }
}

/// # Safety
///
/// `mem_addr` must be valid for a 16-byte write.
#[inline(always)]
pub unsafe fn _mm_storeu_si128(mem_addr: *mut __m128i, a: __m128i) {
    unsafe { arch::_mm_storeu_si128(mem_addr, a) }
}

/// # Safety
///
/// `mem_addr` must be valid for a 16-byte read.
#[inline(always)]
pub unsafe fn _mm_loadu_ps(mem_addr: *const f32) -> __m128 {
    unsafe { arch::_mm_loadu_ps(mem_addr) }
}

/// # Safety
///
/// `mem_addr` must be valid for a 16-byte write.
#[inline(always)]
pub unsafe fn _mm_storeu_ps(mem_addr: *mut f32, a: __m128) {
    unsafe { arch::_mm_storeu_ps(mem_addr, a) }
}

//! # sse2neon
//!
//! The slice of the x86 SSE2 + AES-NI intrinsic surface that a
//! CryptoNight-style hashing loop actually executes, reproduced bit-for-bit
//! on ARM NEON with the Crypto extension.
//!
//! The hashing loop is written against `_mm_*` intrinsics and is not going
//! to be rewritten. Everything here keeps those names and calling
//! conventions so the loop compiles unmodified; `core::arch` supplies the
//! underlying register types and per-arch primitives.
//!
//! ## Backends
//!
//! Exactly one implementation is selected at build time:
//!
//! - **aarch64 + `aes`**: NEON emulation, the reason this crate exists.
//! - **x86_64 + `aes`**: zero-cost passthrough to the native instructions.
//! - **anything else**: portable software implementation, bit-exact with the
//!   hardware paths (the same known-answer tests cover all three).
//!
//! There is no runtime dispatch; a tight branch-free inner loop cannot
//! afford it, and the caller already knows its target.
//!
//! ## The AES nuance
//!
//! ARM's AESE instruction XORs its key operand *before* SubBytes/ShiftRows,
//! while x86's AESENC adds the round key *after* MixColumns. A single AESENC
//! is therefore rebuilt as AESE against an all-zero key, then AESMC, then an
//! explicit XOR with the round key. The key-schedule assist has no NEON
//! counterpart at all and is recomputed from the S-box. Both are covered by
//! FIPS-197 and Intel reference vectors; a lane transposition in either
//! produces plausible-looking garbage, so the vectors are the contract.
//!
//! ## Example
//!
//! ```rust
//! use sse2neon::{_mm_add_epi64, _mm_cvtsi128_si64, _mm_set_epi64x};
//!
//! // First argument is the HIGH lane, as in the original instruction set.
//! let a = _mm_set_epi64x(1, 2);
//! let b = _mm_set_epi64x(30, 40);
//! let sum = _mm_add_epi64(a, b);
//! assert_eq!(_mm_cvtsi128_si64(sum), 42);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(non_camel_case_types)]

#[cfg(any(test, not(all(target_arch = "x86_64", target_feature = "aes"))))]
mod tables;

#[cfg(all(target_arch = "x86_64", target_feature = "aes"))]
mod x86;

#[cfg(all(target_arch = "aarch64", target_feature = "aes"))]
mod neon;

#[cfg(any(
    test,
    not(any(
        all(target_arch = "x86_64", target_feature = "aes"),
        all(target_arch = "aarch64", target_feature = "aes")
    ))
))]
mod soft;

#[cfg(all(target_arch = "x86_64", target_feature = "aes"))]
pub use x86::*;

#[cfg(all(target_arch = "aarch64", target_feature = "aes"))]
pub use neon::*;

#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "aes"),
    all(target_arch = "aarch64", target_feature = "aes")
)))]
pub use soft::*;

/// Prefetch into all levels of the cache hierarchy.
pub const _MM_HINT_T0: i32 = 3;

/// Prefetch into L2 and higher.
pub const _MM_HINT_T1: i32 = 2;

/// Prefetch into L3 and higher.
pub const _MM_HINT_T2: i32 = 1;

/// Prefetch non-temporally, minimizing cache pollution.
pub const _MM_HINT_NTA: i32 = 0;

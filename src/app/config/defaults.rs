// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Transition**: Enter/exit animation length of the top alert
//! - **Inset**: Extra top padding for system bars

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default enter/exit transition length (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Minimum transition length; zero disables the animation.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition length (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Inset Defaults
// ==========================================================================

/// Default top safe-area inset; desktop windows have none.
pub const DEFAULT_TOP_INSET: f32 = 0.0;

/// Minimum top inset (in logical pixels).
pub const MIN_TOP_INSET: f32 = 0.0;

/// Maximum top inset (in logical pixels).
pub const MAX_TOP_INSET: f32 = 200.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_TOP_INSET >= MIN_TOP_INSET);
    assert!(DEFAULT_TOP_INSET <= MAX_TOP_INSET);
};

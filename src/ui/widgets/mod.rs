// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod slide;

pub use animated_spinner::AnimatedSpinner;
pub use slide::{slide, Slide};

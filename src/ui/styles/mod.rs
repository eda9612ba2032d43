// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the alert card and the demo host.

pub mod button;
pub mod container;

// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

//! Cardwall — deterministic 4-column card grid layout engine.
//!
//! Cards carry an importance level that fixes their footprint on the grid.
//! The layout pipeline orders them, packs them into complete rows, and closes
//! the sequence so a site-info card lands flush with the bottom-right corner
//! under native row-major auto-placement.

pub mod layout;
pub mod model;
pub mod query;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}

//! Value types produced by the page-window calculation.

pub mod page;

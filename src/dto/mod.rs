//! DTO modules that bridge pagination state with templates.

pub mod view;

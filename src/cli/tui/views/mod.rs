//! One view per tab

pub mod draw;
pub mod group;

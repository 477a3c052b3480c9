//! Domain models for the lucky draw
//!
//! Contains the selection and grouping rules without any I/O concerns.

mod names;
mod draw;
mod group;

pub use names::NameList;
pub use draw::{DrawEngine, DrawError, DrawHistory, WinnerState};
pub use group::{coerce_group_size, GroupEngine, GroupError, GroupPartition, MIN_GROUP_SIZE};

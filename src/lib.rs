//! Lucky Draw - random winners and random groups from a list of names
//!
//! Names come from pasted text or a CSV file. The [`DrawEngine`] picks
//! winners one at a time, optionally without repeats, and the
//! [`GroupEngine`] splits the list into random groups of a fixed size.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{DrawEngine, DrawError, GroupEngine, GroupError, GroupPartition, NameList};

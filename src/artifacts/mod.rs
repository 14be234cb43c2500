//! Static artifacts projected into the target project.

pub mod meta_util;
pub mod robots;

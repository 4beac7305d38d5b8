pub mod list_opts;

pub use crate::opts::list_opts::{ListOpts, ListOptsPatch, SortDir};

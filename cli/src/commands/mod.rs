pub(crate) mod list;

pub(crate) use list::{ListOptions, OutputFormat, command_list};

pub(crate) mod format_table;
pub(crate) mod output;
pub(crate) mod types;

pub(crate) use output::{print_done, print_json, prompt_line, prompt_password};
pub(crate) use types::CommandContext;

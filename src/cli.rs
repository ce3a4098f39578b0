use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gitree")]
#[command(about = "Print a gitignore-aware directory tree", long_about = None)]
pub struct Cli {
    /// Resolve relative paths against this directory instead of the working directory
    #[arg(long, env = "GITREE_BASE_DIR", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Print the tool definition as JSON and exit
    #[arg(long)]
    pub schema: bool,

    /// Run one tool call with JSON arguments, e.g. '{"path":"src","max_depth":2}'
    #[arg(long, value_name = "JSON", conflicts_with = "tree_args")]
    pub call: Option<String>,

    /// Target path followed by tree flags: -L <n> limits depth, -a/--all shows hidden entries
    #[arg(
        value_name = "TREE_ARGS",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tree_args: Vec<String>,
}

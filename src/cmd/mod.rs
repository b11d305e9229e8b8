/*!
Subcommand modules. Each exposes one `execute_*` entry point returning
`anyhow::Result<()>`; argument structs derive `clap::Args`.

  serve.rs   (default) MCP server on stdio
  list.rs    print the tool catalogue
  exec.rs    run one tool from the shell and print its report
  shared.rs  tool-name resolution + parameter helpers for exec
  format.rs  table / color helpers for human output
*/

pub mod exec;
pub mod format;
pub mod list;
pub mod serve;
pub mod shared;

pub use exec::{ExecArgs, execute_exec};
pub use list::{ListArgs, execute_list};
pub use serve::execute_serve;

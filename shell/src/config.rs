//! Command-line and environment configuration.

use clap::Parser;

/// Terminal front end for the todo list.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-shell", version, about)]
pub struct Args {
    /// Base URL of the todo API (the prefix in front of `/todo`).
    #[arg(long, env = "TODO_API_URL", default_value = "http://127.0.0.1:3000/api")]
    pub api_url: String,

    /// Log filter, e.g. `debug` or `todo_core=trace`.
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let args = Args::try_parse_from(["todo-shell"]).unwrap();
        assert_eq!(args.api_url, "http://127.0.0.1:3000/api");
        assert_eq!(args.log, "info");
    }

    #[test]
    fn api_url_flag_overrides_default() {
        let args = Args::try_parse_from(["todo-shell", "--api-url", "http://example.test/api"]).unwrap();
        assert_eq!(args.api_url, "http://example.test/api");
    }
}

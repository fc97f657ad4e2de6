use clap::Parser;

/// Analyze MySQL query performance and provide optimization suggestions.
///
/// Runs the query once to measure wall-clock time, fetches its EXPLAIN plan,
/// and reports detected problems with remediation suggestions.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    after_help = "Example:\n  mysql-query-analyzer --host localhost --user root --password secret \\\n    --database mydb --query \"SELECT * FROM users WHERE email LIKE '%@example.com'\""
)]
pub struct Cli {
    /// MySQL database host
    #[arg(long)]
    pub host: String,

    /// MySQL server port
    #[arg(long, default_value_t = 3306)]
    pub port: u16,

    /// MySQL database username
    #[arg(long)]
    pub user: String,

    /// MySQL database password
    #[arg(long, env = "MYSQL_PWD", hide_env_values = true)]
    pub password: String,

    /// MySQL database name
    #[arg(long)]
    pub database: String,

    /// SQL query to analyze
    #[arg(long)]
    pub query: String,

    /// Render the report as plain text instead of formatted tables
    #[arg(long)]
    pub plain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_all_connection_args_required() {
        // Missing --query is a usage error before any connection attempt.
        let result = Cli::try_parse_from([
            "mysql-query-analyzer",
            "--host",
            "localhost",
            "--user",
            "root",
            "--password",
            "secret",
            "--database",
            "mydb",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_port_defaults_to_3306() {
        let cli = Cli::try_parse_from([
            "mysql-query-analyzer",
            "--host",
            "db.example.com",
            "--user",
            "app",
            "--password",
            "pw",
            "--database",
            "shop",
            "--query",
            "SELECT 1",
        ])
        .unwrap();
        assert_eq!(cli.port, 3306);
        assert!(!cli.plain);
    }
}

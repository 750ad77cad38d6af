//! Command-line argument dispatch.
//!
//! This module maps validated CLI arguments to the appropriate action, such
//! as starting the API server.

use crate::cli::actions::Action;
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    Ok(Action::Server { port })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_default_port() {
        temp_env::with_vars([("FACTORIA_PORT", None::<&str>)], || {
            let command = crate::cli::commands::new();
            let matches = command.get_matches_from(vec!["factoria"]);
            let action = handler(&matches).expect("handler should succeed");
            let Action::Server { port } = action;
            assert_eq!(port, 8080);
        });
    }

    #[test]
    fn test_handler_custom_port() {
        let command = crate::cli::commands::new();
        let matches = command.get_matches_from(vec!["factoria", "--port", "9090"]);
        let action = handler(&matches).expect("handler should succeed");
        let Action::Server { port } = action;
        assert_eq!(port, 9090);
    }
}

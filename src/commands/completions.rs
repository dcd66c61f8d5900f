//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{Result, cli};

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(cli::unknown_shell(name)),
    }
}

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "claudex", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClaudexError;

    #[test]
    fn test_parse_shell_names() {
        assert_eq!(parse_shell("bash").unwrap(), clap_complete::Shell::Bash);
        assert_eq!(parse_shell("elvish").unwrap(), clap_complete::Shell::Elvish);
        assert_eq!(parse_shell("fish").unwrap(), clap_complete::Shell::Fish);
        assert_eq!(parse_shell("zsh").unwrap(), clap_complete::Shell::Zsh);
    }

    #[test]
    fn test_parse_shell_powershell_aliases() {
        assert_eq!(parse_shell("powershell").unwrap(), clap_complete::Shell::PowerShell);
        assert_eq!(parse_shell("pwsh").unwrap(), clap_complete::Shell::PowerShell);
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert_eq!(parse_shell("BASH").unwrap(), clap_complete::Shell::Bash);
        assert_eq!(parse_shell("Zsh").unwrap(), clap_complete::Shell::Zsh);
    }

    #[test]
    fn test_unknown_shell() {
        assert!(matches!(
            parse_shell("tcsh"),
            Err(ClaudexError::UnknownShell { shell }) if shell == "tcsh"
        ));
    }

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(&args).is_ok());
    }
}

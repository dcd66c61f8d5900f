use clap::Parser;

/// Arguments for the completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Complete validator subcommands in zsh:\n    claudex completions zsh > ~/.zfunc/_claudex\n\n\
                  Complete in bash, including --format values:\n    claudex completions bash > ~/.local/share/bash-completion/completions/claudex\n\n\
                  Complete in PowerShell (pwsh is accepted as an alias):\n    claudex completions pwsh")]
pub struct CompletionsArgs {
    /// Shell to generate for: bash, elvish, fish, powershell (or pwsh), zsh
    pub shell: String,
}

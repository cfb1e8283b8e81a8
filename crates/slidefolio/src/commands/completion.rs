use clap::CommandFactory;
use clap_complete::{Shell as CompleteShell, generate};

use crate::cli::{Cli, Shell};

/// Print completions for `shell` to stdout.
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(to_complete_shell(shell), &mut cmd, name, &mut std::io::stdout());
}

fn to_complete_shell(shell: Shell) -> CompleteShell {
    match shell {
        Shell::Bash => CompleteShell::Bash,
        Shell::Zsh => CompleteShell::Zsh,
        Shell::Fish => CompleteShell::Fish,
        Shell::Powershell => CompleteShell::PowerShell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completion_mentions_subcommands() {
        let mut cmd = Cli::command();
        let mut out = Vec::new();
        generate(CompleteShell::Bash, &mut cmd, "slidefolio", &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("catalog"));
        assert!(script.contains("completion"));
    }
}

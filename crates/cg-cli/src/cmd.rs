use crate::check::run_check_command;
use crate::generate::run_generate_command;
use crate::list::run_list_command;
use anyhow::Result;
use cg_codegen::Policy;
use clap::ArgAction;
use clap::{Args, Parser, Subcommand};

/// Where the generated file lives, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "src/image/colors.rs";

///////// Groups /////////

#[derive(Clone, Debug, Args)]
pub struct TargetGroups {
    #[arg(
        short = 'o',
        long = "output",
        help = "Path of the generated colors file",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: String,

    #[arg(
        long = "skip-unsupported",
        help = "Keep going when a hex value is neither 6 nor 8 digits, leaving its variant without a match arm",
        default_value = "false",
        action = ArgAction::SetTrue,
    )]
    pub skip_unsupported: bool,
}

impl TargetGroups {
    pub fn policy(&self) -> Policy {
        if self.skip_unsupported {
            Policy::SkipUnsupported
        } else {
            Policy::Strict
        }
    }
}

///////// Args /////////

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub target: TargetGroups,

    #[arg(
        long = "stdout",
        help = "Print the generated source instead of writing it. Overrides -o/--output when present",
        default_value = "false",
        action = ArgAction::SetTrue,
    )]
    pub stdout: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetGroups,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[arg(
        long = "json",
        help = "Print as json array",
        default_value = "false",
        action = ArgAction::SetTrue,
    )]
    pub json: bool,
}

///////// Subcommand /////////

#[derive(Clone, Debug, Parser)]
#[command(name = "colorgen", about = "Generate the drawing color enum from the palette")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    #[command(about = "write the generated colors file")]
    Generate(GenerateArgs),

    #[command(about = "fail if the colors file on disk is not what generate would write")]
    Check(CheckArgs),

    #[command(about = "print palette entries with their variant names and channels")]
    List(ListArgs),
}

/// Main entry of all subcommands.
pub fn run_command_with_args(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(generate_args) => run_generate_command(generate_args),
        Command::Check(check_args) => run_check_command(check_args),
        Command::List(list_args) => run_list_command(list_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["colorgen", "generate"]).unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.target.output, DEFAULT_OUTPUT);
                assert_eq!(args.target.policy(), Policy::Strict);
                assert!(!args.stdout);
            }
            c => panic!("unexpected command {c:?}"),
        }
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::try_parse_from([
            "colorgen",
            "check",
            "-o",
            "gen/colors.rs",
            "--skip-unsupported",
        ])
        .unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.target.output, "gen/colors.rs");
                assert_eq!(args.target.policy(), Policy::SkipUnsupported);
            }
            c => panic!("unexpected command {c:?}"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["colorgen"]).is_err());
    }
}

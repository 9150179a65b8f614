use crate::cmd::CheckArgs;
use anyhow::{bail, Context, Result};
use cg_codegen::generate;
use cg_palette::COLORS;

pub fn run_check_command(args: CheckArgs) -> Result<()> {
    let file = generate(COLORS, args.target.policy()).context("when generating colors")?;
    let output = args.target.output;

    let up_to_date = file
        .is_up_to_date(&output)
        .with_context(|| format!("when reading {output}"))?;
    if !up_to_date {
        bail!("{output} is missing or outdated, run the generate subcommand");
    }

    println!("{output} is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::{GenerateArgs, TargetGroups};
    use crate::generate::run_generate_command;
    use std::env;
    use std::fs;

    fn target(output: &str) -> TargetGroups {
        TargetGroups {
            output: output.to_string(),
            skip_unsupported: false,
        }
    }

    #[test]
    fn test_check_after_generate() {
        let dir = env::temp_dir().join(format!("cg-cli-test-{}", std::process::id()));
        let output = dir.join("src/image/colors.rs");
        let output = output.to_string_lossy().to_string();
        let _ = fs::remove_dir_all(&dir);

        assert!(run_check_command(CheckArgs {
            target: target(&output)
        })
        .is_err());

        run_generate_command(GenerateArgs {
            target: target(&output),
            stdout: false,
        })
        .unwrap();
        run_check_command(CheckArgs {
            target: target(&output),
        })
        .unwrap();

        fs::write(&output, "// edited by hand\n").unwrap();
        let err = run_check_command(CheckArgs {
            target: target(&output),
        })
        .unwrap_err();
        assert!(err.to_string().contains("outdated"));

        fs::remove_dir_all(&dir).unwrap();
    }
}

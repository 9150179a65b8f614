use crate::cmd::GenerateArgs;
use anyhow::{Context, Result};
use cg_codegen::generate;
use cg_palette::COLORS;
use tracing::debug;

pub fn run_generate_command(args: GenerateArgs) -> Result<()> {
    let file = generate(COLORS, args.target.policy()).context("when generating colors")?;

    if args.stdout {
        print!("{}", file.content());
        return Ok(());
    }

    let output = args.target.output;
    debug!("writing colors to {output}");
    file.write_to(&output)
        .with_context(|| format!("when writing colors to {output}"))?;

    println!(
        "generated {} colors ({} match arms) into {output}",
        file.variants(),
        file.arms()
    );
    for name in file.skipped() {
        println!("  no match arm for {name:?}");
    }
    Ok(())
}

use anyhow::Result;
use renum_core::{shift_operation, OutputFormat, OutputFormatter};

use crate::cli::Cli;

pub fn handle_shift(cli: Cli, use_color: bool) -> Result<()> {
    let output: OutputFormat = cli.output.into();

    let (result, preview) = shift_operation(
        &cli.character,
        cli.start_number,
        cli.offset,
        cli.direction.into(),
        cli.root,
        cli.pad_width,
        cli.dry_run,
        cli.yes,
        use_color,
        output,
    )?;

    match output {
        OutputFormat::Json => println!("{}", result.format(OutputFormat::Json)),
        OutputFormat::Summary => {
            if let Some(preview) = preview {
                println!("{preview}");
            }
            print!("{}", result.format(OutputFormat::Summary));
        },
    }

    Ok(())
}

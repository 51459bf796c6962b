use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bookicon::IconConfig;

/// Draw the book icon at 16, 48 and 128 px
#[derive(Parser, Debug)]
#[command(name = "bookicon", version, about)]
struct Cli {
    /// Directory to write icon16.png, icon48.png and icon128.png into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = IconConfig {
        out_dir: cli.out_dir,
        ..Default::default()
    };

    bookicon::generate_icons(&config, |icon| {
        println!("Created {} ({}x{})", icon.file_name, icon.size, icon.size);
    })
    .with_context(|| format!("generating icons in {}", config.out_dir.display()))?;

    println!("All icon files created successfully!");
    Ok(())
}

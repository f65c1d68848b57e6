//! Config generation command

use aces_gen::{generate_config_aces, DescriptionStyle, GenerateSettings};
use anyhow::{bail, Context, Result};

use crate::GenerateArgs;

pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let mut settings = match &args.settings {
        Some(path) => GenerateSettings::from_file(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?,
        None => GenerateSettings::default(),
    };

    if let Some(transforms) = args.transforms {
        settings.transforms_dir = transforms;
    }
    if let Some(output) = args.output {
        settings.output = Some(output);
    }
    if let Some(describe) = &args.describe {
        settings.describe = match DescriptionStyle::parse(describe) {
            Some(style) => style,
            None => bail!("Unknown description style: {describe}"),
        };
    }
    if args.no_validate {
        settings.validate = false;
    }
    settings.include.extend(args.include);
    settings.exclude.extend(args.exclude);

    if settings.transforms_dir.as_os_str().is_empty() {
        bail!("No CTL transform directory given, use --transforms or a settings file");
    }

    if verbose {
        println!(
            "Generating config from {}",
            settings.transforms_dir.display()
        );
    }

    let generated = generate_config_aces(&settings)?;

    match &settings.output {
        Some(path) => {
            println!(
                "Generated config with {} colorspaces, {} displays, {} views",
                generated.data.colorspaces.len(),
                generated.data.active_displays.len(),
                generated.data.views.len()
            );
            println!("Wrote {}", path.display());
        }
        None => print!("{}", generated.config.to_yaml()),
    }

    Ok(())
}

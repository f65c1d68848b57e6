//! CTL transform listing command

use aces_ctl::TransformFamily;
use anyhow::{bail, Result};

use crate::TransformsArgs;

pub fn run(args: TransformsArgs, verbose: bool) -> Result<()> {
    let mut transforms = super::load_ctl_transforms(&args.transforms)?;

    if let Some(family) = &args.family {
        let Some(family) = TransformFamily::parse(family) else {
            bail!("Unknown transform family: {family}");
        };
        transforms.retain(|transform| transform.family() == family);
    }

    if args.yaml {
        print!("{}", serde_yaml::to_string(&transforms)?);
        return Ok(());
    }

    for transform in &transforms {
        let conversion = match transform.conversion() {
            Some((source, target)) => format!("{source} -> {target}"),
            None => String::new(),
        };
        println!(
            "{:<8} {:<16} {:<40} {}",
            transform.family(),
            transform.genus(),
            transform.name(),
            conversion
        );
    }
    if verbose {
        println!("{} transforms", transforms.len());
    }

    Ok(())
}

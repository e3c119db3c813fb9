use crate::cli::ToCifArgs;
use crate::config::PartialConvertConfig;
use crate::error::Result;
use crate::utils::files;
use cifpdb::workflows;
use std::path::PathBuf;
use tracing::{debug, info};

pub fn run(args: ToCifArgs) -> Result<()> {
    let settings = PartialConvertConfig::load(&args.config)?.merge_to_cif(&args)?;
    let content = files::read_input(&args.input)?;

    let file = workflows::pdb_to_cif(&content, &settings.chains)?;

    let path = settings
        .output
        .unwrap_or_else(|| PathBuf::from(&file.name));
    debug!("Writing {:?}", path);
    files::write_output(&path, &file.content)?;
    println!("{}", path.display());
    info!("Wrote {:?}.", path);
    Ok(())
}

use crate::cli::ToPdbArgs;
use crate::config::PartialConvertConfig;
use crate::error::Result;
use crate::utils::files;
use cifpdb::workflows;
use tracing::{debug, info};

pub fn run(args: ToPdbArgs) -> Result<()> {
    let settings = PartialConvertConfig::load(&args.config)?.merge_to_pdb(&args)?;
    let content = files::read_input(&args.input)?;

    let outputs = workflows::cif_to_pdb_bundles(&content, &settings.options)?;

    std::fs::create_dir_all(&settings.output_dir)?;
    for file in &outputs {
        let path = settings.output_dir.join(&file.name);
        debug!("Writing {:?}", path);
        files::write_output(&path, &file.content)?;
        println!("{}", file.name);
    }
    info!(
        "Wrote {} files to {:?}.",
        outputs.len(),
        settings.output_dir
    );
    Ok(())
}

use crate::cli::{ToCifArgs, ToPdbArgs};
use crate::error::{CliError, Result};
use cifpdb::workflows::BundleOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    dir: Option<PathBuf>,
    prefix: Option<String>,
}

/// Optional TOML configuration. CLI arguments take precedence over the
/// file's values.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConvertConfig {
    output: Option<PartialOutputConfig>,
    seqres: Option<bool>,
    #[serde(rename = "chain-filter")]
    chain_filter: Option<Vec<String>>,
}

/// Resolved settings for the `to-pdb` subcommand.
#[derive(Debug)]
pub struct ToPdbSettings {
    pub output_dir: PathBuf,
    pub options: BundleOptions,
}

/// Resolved settings for the `to-cif` subcommand.
#[derive(Debug)]
pub struct ToCifSettings {
    pub output: Option<PathBuf>,
    pub chains: Vec<String>,
}

impl PartialConvertConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn load(path: &Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_to_pdb(mut self, args: &ToPdbArgs) -> Result<ToPdbSettings> {
        let output = self.output.take().unwrap_or_default();
        let prefix = args.prefix.clone().or(output.prefix);
        if let Some(prefix) = &prefix {
            // the prefix becomes the output file-name stem
            if prefix.is_empty() || prefix.contains(['/', '\\']) {
                return Err(CliError::Config(format!(
                    "output prefix {prefix:?} must be a non-empty file-name stem"
                )));
            }
        }
        Ok(ToPdbSettings {
            output_dir: args
                .output_dir
                .clone()
                .or(output.dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            options: BundleOptions {
                seqres: args.seqres || self.seqres.unwrap_or(false),
                prefix,
            },
        })
    }

    pub fn merge_to_cif(mut self, args: &ToCifArgs) -> Result<ToCifSettings> {
        let chains = if args.chain.is_empty() {
            self.chain_filter.take().unwrap_or_default()
        } else {
            args.chain.clone()
        };
        if chains.iter().any(|chain| chain.trim().is_empty()) {
            return Err(CliError::Config(
                "chain filter entries must not be empty".to_string(),
            ));
        }
        Ok(ToCifSettings {
            output: args.output.clone(),
            chains,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;

    fn to_pdb_args(argv: &[&str]) -> ToPdbArgs {
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::ToPdb(args) => args,
            _ => panic!("expected 'to-pdb' subcommand"),
        }
    }

    #[test]
    fn file_values_apply_when_cli_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convert.toml");
        fs::write(
            &path,
            r#"
            seqres = true
            chain-filter = ["A"]

            [output]
            dir = "bundles"
            prefix = "7xyz"
            "#,
        )
        .unwrap();

        let config = PartialConvertConfig::from_file(&path).unwrap();
        let args = to_pdb_args(&["cifpdb", "to-pdb", "-i", "in.cif"]);
        let settings = config.merge_to_pdb(&args).unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("bundles"));
        assert_eq!(settings.options.prefix.as_deref(), Some("7xyz"));
        assert!(settings.options.seqres);
    }

    #[test]
    fn cli_arguments_override_file_values() {
        let config = PartialConvertConfig {
            output: Some(PartialOutputConfig {
                dir: Some(PathBuf::from("from-file")),
                prefix: Some("file".to_string()),
            }),
            seqres: Some(false),
            chain_filter: None,
        };
        let args = to_pdb_args(&["cifpdb", "to-pdb", "-i", "in.cif", "-o", "cli", "-p", "arg"]);
        let settings = config.merge_to_pdb(&args).unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("cli"));
        assert_eq!(settings.options.prefix.as_deref(), Some("arg"));
        assert!(!settings.options.seqres);
    }

    #[test]
    fn path_like_prefix_is_rejected() {
        let args = to_pdb_args(&["cifpdb", "to-pdb", "-i", "in.cif", "-p", "out/7xyz"]);
        let result = PartialConvertConfig::default().merge_to_pdb(&args);
        assert!(matches!(result, Err(CliError::Config(_))));

        let args = to_pdb_args(&["cifpdb", "to-pdb", "-i", "in.cif", "-p", ""]);
        let result = PartialConvertConfig::default().merge_to_pdb(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn empty_chain_filter_entry_is_rejected() {
        let args = match Cli::parse_from(["cifpdb", "to-cif", "-i", "in.pdb", "--chain", "A,,B"])
            .command
        {
            Commands::ToCif(args) => args,
            _ => panic!("expected 'to-cif' subcommand"),
        };
        let result = PartialConvertConfig::default().merge_to_cif(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convert.toml");
        fs::write(&path, "sequres = true\n").unwrap();
        let result = PartialConvertConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}

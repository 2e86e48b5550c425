//! Command-line arguments.

use clap::Parser;
use flatstub_codegen::GeneratorConfig;
use flatstub_codegen::config::{DEFAULT_EXPORT_MACRO, DEFAULT_GUARD, DEFAULT_HEADER};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Flat API description (JSON).
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Generated source file. Not needed with `--stdout`.
    #[arg(value_name = "OUTPUT", required_unless_present = "stdout")]
    pub output: Option<PathBuf>,

    /// Symbol of the `#ifdef` guard wrapping the file.
    #[arg(long, value_name = "SYMBOL", default_value = DEFAULT_GUARD)]
    pub guard: String,

    /// Header included at the top of the file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_HEADER)]
    pub header: String,

    /// External-linkage macro placed before every function.
    #[arg(long, value_name = "MACRO", default_value = DEFAULT_EXPORT_MACRO)]
    pub export_macro: String,

    /// Calling-convention macro placed before every function name.
    #[arg(long, value_name = "MACRO")]
    pub call_type: Option<String>,

    /// Fail on return types that have no default value instead of warning.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print the generated source instead of writing OUTPUT.
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}

impl Args {
    /// Builds the generator settings from the flags.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new()
            .guard(&self.guard)
            .header(&self.header)
            .export_macro(&self.export_macro);
        if let Some(call_type) = &self.call_type {
            config = config.call_type(call_type);
        }
        if self.strict {
            config = config.strict();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatstub_codegen::UnhandledPolicy;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["flatstub", "steam_api.json", "stub.cpp"]);
        assert_eq!(args.schema, PathBuf::from("steam_api.json"));
        assert_eq!(args.output, Some(PathBuf::from("stub.cpp")));
        assert!(!args.stdout);

        let config = args.generator_config();
        assert_eq!(config.guard_symbol(), DEFAULT_GUARD);
        assert_eq!(config.header_path(), DEFAULT_HEADER);
        assert_eq!(config.export_macro_name(), DEFAULT_EXPORT_MACRO);
        assert_eq!(config.call_type_name(), None);
        assert_eq!(config.unhandled_policy(), UnhandledPolicy::Warn);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "flatstub",
            "api.json",
            "out.cpp",
            "--guard",
            "USE_EOS_STUB",
            "--header",
            "eos/flat.h",
            "--export-macro",
            "EOS_API",
            "--call-type",
            "EOS_CALL",
            "--strict",
        ]);
        let config = args.generator_config();
        assert_eq!(config.guard_symbol(), "USE_EOS_STUB");
        assert_eq!(config.header_path(), "eos/flat.h");
        assert_eq!(config.export_macro_name(), "EOS_API");
        assert_eq!(config.call_type_name(), Some("EOS_CALL"));
        assert_eq!(config.unhandled_policy(), UnhandledPolicy::Fail);
    }

    #[test]
    fn test_args_output_required_without_stdout() {
        assert!(Args::try_parse_from(["flatstub", "api.json"]).is_err());

        let args = Args::try_parse_from(["flatstub", "api.json", "--stdout"]).expect("parse");
        assert!(args.stdout);
        assert!(args.output.is_none());
    }
}

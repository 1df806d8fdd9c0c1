use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use labelcodec::{
    Alphabet,
    AlphabetOptions,
    alphabet::{
        DEFAULT_BLANK_SYMBOL,
        io::{TableFormat, load_alphabet_path},
    },
    pretrained::BuiltinAlphabet,
};

/// Alphabet selection arg group.
///
/// A table file wins over `--builtin`; with neither, the `alphanumeric`
/// built-in alphabet is used.
#[derive(clap::Args, Debug)]
pub struct AlphabetArgs {
    /// Alphabet table file.
    #[arg(long, env = "LCODEC_ALPHABET")]
    alphabet: Option<PathBuf>,

    /// Table file format; inferred from the file extension when absent.
    #[arg(long, env = "LCODEC_FORMAT", requires = "alphabet")]
    format: Option<TableFormat>,

    /// Built-in alphabet.
    #[arg(long, conflicts_with = "alphabet")]
    builtin: Option<BuiltinAlphabet>,

    /// Symbols are whitespace-delimited words.
    #[arg(long, env = "LCODEC_DICTIONARY")]
    dictionary: bool,

    /// Do not append a blank code.
    #[arg(long)]
    no_blank: bool,

    /// The symbol of the blank code.
    #[arg(long, default_value = DEFAULT_BLANK_SYMBOL)]
    blank_symbol: String,
}

impl AlphabetArgs {
    /// The alphabet options selected by the flags.
    pub fn options(&self) -> AlphabetOptions {
        AlphabetOptions::default()
            .with_dictionary(self.dictionary)
            .with_add_blank(!self.no_blank)
            .with_blank_symbol(self.blank_symbol.as_str())
    }

    /// The format of the table file.
    fn table_format(
        &self,
        path: &Path,
    ) -> Result<TableFormat, Box<dyn std::error::Error>> {
        match self.format {
            Some(format) => Ok(format),
            None => TableFormat::from_path(path).ok_or_else(|| {
                format!(
                    "cannot infer the table format of {}; use --format",
                    path.display()
                )
                .into()
            }),
        }
    }

    /// Load the alphabet.
    pub fn load_alphabet(&self) -> Result<Arc<Alphabet<u32>>, Box<dyn std::error::Error>> {
        let options = self.options();

        if let Some(path) = &self.alphabet {
            let format = self.table_format(path)?;
            log::info!("loading {format} alphabet from {}", path.display());
            return Ok(Arc::new(load_alphabet_path(path, format, &options)?));
        }

        let builtin = self.builtin.unwrap_or(BuiltinAlphabet::Alphanumeric);
        log::info!("using the {builtin} alphabet");
        if options == AlphabetOptions::default() {
            Ok(builtin.load()?)
        } else {
            Ok(Arc::new(builtin.build_with_options(&options)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use labelcodec::SymbolMode;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        alphabet: AlphabetArgs,
    }

    #[test]
    fn test_default_builtin() {
        let args = TestArgs::try_parse_from(["test"]).unwrap();
        let alphabet = args.alphabet.load_alphabet().unwrap();
        assert_eq!(alphabet.len(), 64);
        assert_eq!(alphabet.blank_code(), Some(63));
    }

    #[test]
    fn test_builtin_options() {
        let args =
            TestArgs::try_parse_from(["test", "--builtin", "letters", "--no-blank"]).unwrap();
        let alphabet = args.alphabet.load_alphabet().unwrap();
        assert_eq!(alphabet.len(), 53);
        assert_eq!(alphabet.blank_code(), None);
    }

    #[test]
    fn test_table_file() {
        tempdir::TempDir::new("lcodec_test")
            .and_then(|dir| {
                let path = dir.path().join("words.tsv");
                std::fs::write(&path, "0\tthe\n1\tcat\n")?;

                let path_arg = path.display().to_string();
                let args =
                    TestArgs::try_parse_from(["test", "--alphabet", &path_arg, "--dictionary"])
                        .unwrap();
                let alphabet = args.alphabet.load_alphabet().unwrap();
                assert_eq!(alphabet.mode(), SymbolMode::Dictionary);
                assert_eq!(alphabet.lookup_code("cat"), Some(1));

                let unknown = dir.path().join("words.dat");
                let unknown_arg = unknown.display().to_string();
                let args = TestArgs::try_parse_from(["test", "--alphabet", &unknown_arg]).unwrap();
                assert!(args.alphabet.load_alphabet().is_err());

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_conflicts() {
        assert!(
            TestArgs::try_parse_from(["test", "--alphabet", "a.tsv", "--builtin", "letters"])
                .is_err()
        );
    }
}

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use engine::prelude::ByteSlice;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("missing <input> argument")]
    MissingInput,
}

#[derive(Default)]
struct Opts {
    verbose: bool,
    input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options.
    fn parse() -> Result<Self> {
        Self::parse_from(std::env::args_os().skip(1))
    }

    fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    for arg in it.by_ref() {
                        opts.set_input(PathBuf::from(arg))?;
                    }

                    break;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                path => {
                    opts.set_input(PathBuf::from(path))?;
                }
            }
        }

        Ok(opts)
    }

    fn set_input(&mut self, path: PathBuf) -> Result<()> {
        if self.input.is_some() {
            bail!("duplicate <input> argument: {}", path.display());
        }

        self.input = Some(path);
        Ok(())
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    engine::cli::init(opts.verbose)?;

    let path = opts.input.ok_or(Error::MissingInput)?;

    let data = std::fs::read(&path).with_context(|| anyhow!("{}", path.display()))?;
    log::debug!("read {} bytes from {}", data.len(), path.display());

    let (part_numbers, gear_ratios) = engine::solve(data.lines());

    println!("{part_numbers}");
    println!("{gear_ratios}");
    Ok(())
}

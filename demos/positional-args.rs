// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A program that takes positional arguments rather than subcommands.
use tracing_subscriber::EnvFilter;
use usage::{Entry, Opt, Result, Usage};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut usage = Usage::new("concat")?;

    usage.add_arg("file")?;
    usage.add_arg("more")?;

    let mut sep = Opt::new(&["-s", "--separator"], "Text to place between files.")?;
    sep.add_arg("text")?;
    usage.add_option(sep)?;

    // Positional arguments and entries cannot be mixed.
    if let Err(e) = usage.add_entry(Entry::new("extra", "")?) {
        println!("INFO: entry rejected: {}", e);
    }

    print!("{}", usage.help());

    Ok(())
}

// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// Describe a program with subcommands and print its help text.
///
/// Specify a command name to see the help for that command:
///
/// ```bash
/// $ cargo run --example subcommands -- build
/// ```
use std::env;

use tracing_subscriber::EnvFilter;
use usage::{Entry, Opt, Result, Settings, Usage};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::new().reject_duplicate_entries();
    let mut usage = Usage::with_settings("pkg", settings)?;

    usage.add_option(Opt::new(&["-q", "--quiet"], "Only show errors.")?)?;

    let mut build = Entry::new(
        "build",
        "Compile the package and all of its dependencies.\n\n\
         Artifacts are written to the target directory.",
    )?;
    build.add_arg("package")?;

    let mut jobs = Opt::new(&["-j", "--jobs"], "Number of parallel jobs.")?;
    jobs.add_arg("n")?;
    build.add_option(jobs)?;
    build.add_option(Opt::new(&["--release"], "Build with optimisations.")?)?;

    let mut install = Entry::new("install", "Install a package from the registry.")?;
    install.add_arg("name")?;
    install.add_arg("version")?;

    let clean = Entry::new("clean", "Remove generated artifacts.")?;

    // Registered out of order: the help lists them sorted.
    usage.add_entry(install)?;
    usage.add_entry(clean.clone())?;
    usage.add_entry(build)?;

    if let Err(e) = usage.add_entry(clean) {
        println!("INFO: second 'clean' entry rejected: {}", e);
    }

    match env::args().nth(1) {
        Some(name) => match usage.command_help(&name) {
            Some(help) => print!("{}", help),
            None => println!("ERROR: unknown command: {:?}", name),
        },
        None => print!("{}", usage.help()),
    }

    Ok(())
}

use std::io;

use anyhow::Result;
use inferior::{dispatch, logging, options::Options};

fn main() -> Result<()> {
    logging::init()?;
    let options = Options::from_env();

    let mut out = io::stdout().lock();
    dispatch::run(&options, &mut out)
}

//! `ndl` - build and report the net topology of a compact schematic
//! description.
//!
//! Reads a description file with `$parts`, `$comps` and `$nets` sections and
//! prints one line per net, in order of first appearance:
//!
//! ```text
//! COIL_A : KA/1 J1/1
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ndl::NetList;

/// Pattern-expansion netlist builder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist description file
    #[arg(value_name = "NETLIST_FILE")]
    netlist_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = fs::read_to_string(&args.netlist_file)
        .with_context(|| format!("reading {}", args.netlist_file.display()))?;

    let netlist = NetList::try_from(input.as_str())
        .with_context(|| format!("parsing {}", args.netlist_file.display()))?;

    for net in &netlist.nets {
        println!("{net}");
    }

    Ok(())
}

//! Netlist builder for a compact, line-oriented schematic description format.
//!
//! The format describes a design in three sections: `$parts` (pin-name to
//! pin-number templates), `$comps` (named instances of a part) and `$nets`
//! (named sets of `component/pin` terminals). Identifiers in every section may
//! use the expansion mini-language of [`expand`]: `[a-b]` integer ranges and
//! `{x,y,...}` choices, composing via cross product.
//!
//! ```
//! use ndl::NetList;
//!
//! let input = "\
//! $parts
//! U
//! \t[1-2]
//! $comps
//! U[5-6]\tU
//! $nets
//! CLK\tU5/1 U6/2
//! ";
//! let netlist = NetList::try_from(input).unwrap();
//! assert_eq!(format!("{}", netlist.nets[0]), "CLK : U5/1 U6/2");
//! ```

use std::fmt::Display;

mod error;
mod expand;
mod parse;

pub use error::{ExpandError, ParseError};
pub use expand::expand;
pub use parse::NetListBuilder;

/// The full netlist
#[derive(Debug, Clone)]
pub struct NetList {
    pub parts: Vec<Part>,
    pub components: Vec<Component>,
    pub nets: Vec<Net>,
}

/// A part: a reusable pin-mapping template
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub pins: Vec<PartPin>,
}

/// A logical pin name and the physical pin numbers assigned to it
#[derive(Debug, Clone)]
pub struct PartPin {
    pub name: String,
    pub nums: Vec<String>,
}

/// A component: a named instance of a part
#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    pub part: String,
    /// Display name; defaults to the part name when not given.
    pub display: String,
}

/// A net: a named group of connected terminals
#[derive(Debug, Clone)]
pub struct Net {
    pub name: String,
    pub terms: Vec<Term>,
}

/// A terminal connects a net to one physical pin of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub component: String,
    pub pin: String,
}

impl Part {
    pub fn pin(&self, name: &str) -> Option<&PartPin> {
        self.pins.iter().find(|pin| pin.name == name)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.component, self.pin)
    }
}

impl Display for Net {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :", self.name)?;
        for term in &self.terms {
            write!(f, " {}", term)?;
        }
        Ok(())
    }
}

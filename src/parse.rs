//! Line-oriented parsing of the netlist description format.
//!
//! The input is split into `$`-introduced sections whose bodies are handed to
//! the section processors of [`NetListBuilder`]. The builder owns the three
//! tables (parts, components, nets) and can be fed several inputs before being
//! consumed with [`NetListBuilder::finish`].

use log::debug;

use crate::error::ParseError;
use crate::expand::expand;
use crate::{Component, Net, NetList, Part, PartPin, Term};

/// Builds the parts, components and nets tables from description input.
#[derive(Debug, Default)]
pub struct NetListBuilder {
    parts: Vec<Part>,
    components: Vec<Component>,
    nets: Vec<Net>,
}

/// One non-blank, comment-stripped body line. `num` is 1-based within the
/// current input.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    num: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    fn indented(&self) -> bool {
        self.text.starts_with(|c: char| c.is_whitespace())
    }

    fn tokens(&self) -> Vec<&'a str> {
        self.text.split_whitespace().collect()
    }
}

impl NetListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one whole description input, accumulating into the tables.
    pub fn read(&mut self, input: &str) -> Result<(), ParseError> {
        let mut section: Option<(&str, usize)> = None;
        let mut body: Vec<Line> = Vec::new();

        for (idx, raw) in input.lines().enumerate() {
            let num = idx + 1;
            // Strip the trailing comment before anything else.
            let text = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            if text.trim().is_empty() {
                continue;
            }
            if let Some(rest) = text.trim_start().strip_prefix('$') {
                if let Some((keyword, header_num)) = section.take() {
                    self.section(keyword, header_num, &body)?;
                }
                body.clear();
                section = Some((rest.split_whitespace().next().unwrap_or(""), num));
            } else if section.is_some() {
                body.push(Line { num, text });
            } else {
                return Err(ParseError::MissingSectionHeader { line: num });
            }
        }
        if let Some((keyword, header_num)) = section {
            self.section(keyword, header_num, &body)?;
        }
        Ok(())
    }

    /// Consume the builder, yielding the finished tables.
    pub fn finish(self) -> NetList {
        let Self {
            parts,
            components,
            nets,
        } = self;
        NetList {
            parts,
            components,
            nets,
        }
    }

    fn section(&mut self, keyword: &str, header_num: usize, body: &[Line]) -> Result<(), ParseError> {
        debug!("section `{keyword}` with {} line(s)", body.len());
        match keyword.to_ascii_lowercase().as_str() {
            "comment" => Ok(()),
            "parts" => self.parts_section(body),
            "comps" => self.comps_section(body),
            "nets" => self.nets_section(body),
            _ => Err(ParseError::UnknownSection {
                name: keyword.to_owned(),
                line: header_num,
            }),
        }
    }

    /// A non-indented line declares (or re-opens) one or more parts; indented
    /// lines below it add pins to every part of that declaration block.
    fn parts_section(&mut self, body: &[Line]) -> Result<(), ParseError> {
        let mut current: Vec<String> = Vec::new();
        for line in body {
            let tokens = line.tokens();
            if !line.indented() {
                current = expand(tokens[0])?;
                for name in &current {
                    if self.part(name).is_none() {
                        self.parts.push(Part {
                            name: name.clone(),
                            pins: Vec::new(),
                        });
                    }
                }
            } else {
                if current.is_empty() {
                    return Err(ParseError::PinWithoutPart { line: line.num });
                }
                let (nums_pat, names_pat) = match tokens.as_slice() {
                    [nums] => (*nums, None),
                    [nums, names] => (*nums, Some(*names)),
                    _ => {
                        return Err(ParseError::MalformedPinDef {
                            line: line.num,
                            text: line.text.trim().to_owned(),
                        })
                    }
                };
                let mut nums = expand(nums_pat)?;
                let mut names = match names_pat {
                    Some(pat) => expand(pat)?,
                    None => nums.clone(),
                };
                // One number with several names, or one name spanning several
                // numbers, broadcasts to the longer list.
                if nums.len() == 1 {
                    nums = vec![nums[0].clone(); names.len()];
                }
                if names.len() == 1 {
                    names = vec![names[0].clone(); nums.len()];
                }
                if nums.len() != names.len() {
                    return Err(ParseError::PinCountMismatch {
                        parts: current.join(" "),
                        line: line.num,
                        text: line.text.trim().to_owned(),
                    });
                }
                for (name, num) in names.iter().zip(&nums) {
                    for part_name in &current {
                        let part = self
                            .part_mut(part_name)
                            .expect("parts of the current block were declared above");
                        match part.pins.iter_mut().find(|pin| pin.name == *name) {
                            Some(pin) => pin.nums.push(num.clone()),
                            None => part.pins.push(PartPin {
                                name: name.clone(),
                                nums: vec![num.clone()],
                            }),
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Each line instantiates components: `name-pattern part [display]`.
    fn comps_section(&mut self, body: &[Line]) -> Result<(), ParseError> {
        for line in body {
            let tokens = line.tokens();
            let (name_pat, part, display) = match tokens.as_slice() {
                [name, part] => (*name, *part, *part),
                [name, part, display] => (*name, *part, *display),
                _ => {
                    return Err(ParseError::MalformedComponentDef {
                        line: line.num,
                        text: line.text.trim().to_owned(),
                    })
                }
            };
            if self.part(part).is_none() {
                return Err(ParseError::UnknownPart {
                    name: part.to_owned(),
                    line: line.num,
                });
            }
            for name in expand(name_pat)? {
                if self.component(&name).is_some() {
                    return Err(ParseError::DuplicateComponent {
                        name,
                        line: line.num,
                    });
                }
                self.components.push(Component {
                    name,
                    part: part.to_owned(),
                    display: display.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Each line adds terminals to one or more nets. A non-indented line names
    /// its nets with the expanded first token; an indented line synthesizes the
    /// name `*_<first token>`. When the name pattern yields several nets the
    /// terminals pair off with them one-to-one.
    fn nets_section(&mut self, body: &[Line]) -> Result<(), ParseError> {
        for line in body {
            let tokens = line.tokens();
            let names = if line.indented() {
                vec![format!("*_{}", tokens[0])]
            } else {
                expand(tokens[0])?
            };
            let mut term_refs = Vec::new();
            for pat in &tokens[1..] {
                term_refs.extend(expand(pat)?);
            }
            if names.len() > 1 {
                if names.len() != term_refs.len() {
                    return Err(ParseError::NetTermMismatch {
                        net: tokens[0].to_owned(),
                        names: names.len(),
                        terms: term_refs.len(),
                        line: line.num,
                    });
                }
                for (name, term_ref) in names.iter().zip(&term_refs) {
                    self.add_terms(name, std::slice::from_ref(term_ref), line.num)?;
                }
            } else {
                self.add_terms(&names[0], &term_refs, line.num)?;
            }
        }
        Ok(())
    }

    /// Resolve `component/pin-name` references into physical
    /// `component/pin-number` terminals and append them to the named net.
    fn add_terms(
        &mut self,
        net_name: &str,
        term_refs: &[String],
        line: usize,
    ) -> Result<(), ParseError> {
        let mut terms = Vec::with_capacity(term_refs.len());
        for term_ref in term_refs {
            let Some((comp_name, pin_name)) = term_ref.split_once('/') else {
                return Err(ParseError::MalformedTerm {
                    term: term_ref.clone(),
                    line,
                });
            };
            let component =
                self.component(comp_name)
                    .ok_or_else(|| ParseError::UnknownComponent {
                        name: comp_name.to_owned(),
                        line,
                    })?;
            let part = self
                .part(&component.part)
                .expect("component references were checked on instantiation");
            let pin = part.pin(pin_name).ok_or_else(|| ParseError::UnknownPin {
                part: part.name.clone(),
                pin: pin_name.to_owned(),
                line,
            })?;
            for num in &pin.nums {
                terms.push(Term {
                    component: comp_name.to_owned(),
                    pin: num.clone(),
                });
            }
        }

        let net = match self.nets.iter_mut().position(|net| net.name == net_name) {
            Some(pos) => &mut self.nets[pos],
            None => {
                self.nets.push(Net {
                    name: net_name.to_owned(),
                    terms: Vec::new(),
                });
                self.nets.last_mut().expect("just pushed")
            }
        };
        net.terms.extend(terms);
        Ok(())
    }

    fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.name == name)
    }

    fn part_mut(&mut self, name: &str) -> Option<&mut Part> {
        self.parts.iter_mut().find(|part| part.name == name)
    }

    fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|comp| comp.name == name)
    }
}

impl TryFrom<&str> for NetList {
    type Error = ParseError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut builder = NetListBuilder::new();
        builder.read(input)?;
        Ok(builder.finish())
    }
}

//! In-memory utility registry that renders CSS text.

use std::fmt;

use crate::emit::{Declarations, UtilityMap, UtilityRule};
use crate::plugin::UtilitySink;

/// Collects registered utilities in order. Re-registering a selector
/// replaces its rule in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: UtilityMap,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, selector: &str) -> Option<&UtilityRule> {
        self.rules.get(selector)
    }

    pub fn utilities(&self) -> &UtilityMap {
        &self.rules
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl UtilitySink for Stylesheet {
    fn add_utilities(&mut self, utilities: UtilityMap) {
        self.rules.extend(utilities);
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (selector, rule) in &self.rules {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write_block(f, selector, &rule.declarations, 0)?;

            for (query, block) in &rule.media {
                if block.is_empty() {
                    continue;
                }
                writeln!(f)?;
                writeln!(f, "{query} {{")?;
                write_block(f, selector, block, 2)?;
                writeln!(f, "}}")?;
            }
        }
        Ok(())
    }
}

fn write_block(
    f: &mut fmt::Formatter<'_>,
    selector: &str,
    declarations: &Declarations,
    indent: usize,
) -> fmt::Result {
    let pad = " ".repeat(indent);
    writeln!(f, "{pad}{selector} {{")?;
    for (property, value) in declarations {
        writeln!(f, "{pad}  {property}: {value};")?;
    }
    writeln!(f, "{pad}}}")
}

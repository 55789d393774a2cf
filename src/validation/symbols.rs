//! Symbol Table
//!
//! Elements declared so far and the relationship edges between them. Names
//! are compared as opaque strings: a dotted identifier such as `bank.api` is
//! never split into parent and child.

use std::collections::HashSet;

use crate::core::Diagnostics;
use crate::parser::ElementKind;

/// A declared element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSymbol {
    pub name: String,
    pub kind: ElementKind,
    pub line: usize,
}

/// A directed edge between two element names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipEdge {
    pub source: String,
    pub destination: String,
    pub description: Option<String>,
    pub line: usize,
}

impl RelationshipEdge {
    /// Key used to collapse duplicate edges
    pub fn key(&self) -> String {
        format!("{}->{}", self.source, self.destination)
    }
}

/// Which end of a relationship a name appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl Endpoint {
    fn label(self) -> &'static str {
        match self {
            Endpoint::Source => "Source",
            Endpoint::Destination => "Destination",
        }
    }
}

/// Names treated as external systems are never reported as undefined
pub fn is_external_system(name: &str) -> bool {
    name.ends_with("_external") || name.to_lowercase().contains("external")
}

/// Declared elements and seen relationships for a single validation run
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    elements: Vec<ElementSymbol>,
    names: HashSet<String>,
    edges: Vec<RelationshipEdge>,
    edge_keys: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an element; a repeated name keeps its first declaration
    pub fn declare(&mut self, name: &str, kind: ElementKind, line: usize) {
        if self.names.insert(name.to_string()) {
            self.elements.push(ElementSymbol {
                name: name.to_string(),
                kind,
                line,
            });
        } else {
            log::debug!("Element '{}' redeclared on line {}", name, line);
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Declared or exempt as an external system
    pub fn resolves(&self, name: &str) -> bool {
        self.is_declared(name) || is_external_system(name)
    }

    /// Record an edge; duplicates collapse silently
    pub fn relate(&mut self, edge: RelationshipEdge) {
        if self.edge_keys.insert(edge.key()) {
            self.edges.push(edge);
        }
    }

    /// Warn about relationship endpoints not declared earlier in the document
    pub fn check_forward_references(
        &self,
        source: &str,
        destination: &str,
        line: usize,
        context: &str,
        diagnostics: &mut Diagnostics,
    ) {
        for (endpoint, name) in [(Endpoint::Source, source), (Endpoint::Destination, destination)] {
            if !self.resolves(name) {
                diagnostics.add_warning(
                    line,
                    format!("{} element '{}' not defined before use", endpoint.label(), name),
                    Some(context),
                );
            }
        }
    }

    pub fn elements(&self) -> &[ElementSymbol] {
        &self.elements
    }

    pub fn edges(&self) -> &[RelationshipEdge] {
        &self.edges
    }

    /// End-of-document pass
    ///
    /// Reports each endpoint that is still undefined once the whole document
    /// has been read (ERROR, at the first relationship naming it) and each
    /// element that takes part in no relationship (INFO).
    pub fn check_references(&self, diagnostics: &mut Diagnostics) {
        let mut reported = HashSet::new();
        for edge in &self.edges {
            for name in [&edge.source, &edge.destination] {
                if !self.resolves(name) && reported.insert(name.as_str()) {
                    diagnostics.add_error(
                        edge.line,
                        format!(
                            "Element '{}' is referenced by a relationship but never defined",
                            name
                        ),
                        None,
                    );
                }
            }
        }

        let connected: HashSet<&str> = self
            .edges
            .iter()
            .flat_map(|edge| [edge.source.as_str(), edge.destination.as_str()])
            .collect();

        for element in &self.elements {
            if !connected.contains(element.name.as_str()) {
                diagnostics.add_info(
                    element.line,
                    format!(
                        "{} '{}' is not used in any relationship",
                        element.kind, element.name
                    ),
                    None,
                );
            }
        }
    }
}

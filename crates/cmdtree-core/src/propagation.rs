//! Command propagation over an influence graph
//!
//! An issuer hands a command to one target; the command then spreads along
//! "A influences B" edges, each hop recording its provenance. Everyone is
//! commanded at most once, by whoever reaches them first in a depth-first
//! walk that follows each person's influence list in order.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::ops::{HierarchyStore, ROOT_ID};

/// Command text attached to the issuer at the top of every tree
pub const ROOT_ISSUER_COMMAND: &str = "(Root issuer)";

pub const SAMPLE_ISSUER: &str = "Lelouch";
pub const SAMPLE_TARGET: &str = "Suzaku";
pub const SAMPLE_COMMAND: &str = "Follow my order: dismantle the chain of command";

/// Directed "influences" relation, person -> ordered list of people
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluenceGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl InfluenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` to the people `from` influences
    pub fn add_influence(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.entry(from.into()).or_default().push(to.into());
    }

    /// Builder form: `from` influences each of `targets`, in order
    pub fn with_influences(mut self, from: &str, targets: &[&str]) -> Self {
        for target in targets {
            self.add_influence(from, *target);
        }
        self
    }

    /// People directly influenced by `person` (empty if none)
    pub fn influenced_by(&self, person: &str) -> &[String] {
        self.edges.get(person).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Command handed down from `from` to `target`
///
/// The base command is kept and the influencer is appended as provenance.
pub fn derive_command(from: &str, base_command: &str, _target: &str) -> String {
    format!("{} (via {})", base_command, from)
}

/// One commanded person in a [`CommandTree`]
///
/// Only the hop is stored: `via` names the influencer who passed the command
/// on, and is `None` for the issuer and the target. The full command text is
/// rebuilt on demand by [`CommandTree::command_at`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    pub person: String,
    pub via: Option<String>,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub depth: usize,
}

/// Result of a propagation, stored as an arena with the issuer at slot 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandTree {
    base_command: String,
    entries: Vec<CommandEntry>,
}

impl CommandTree {
    fn with_issuer(issuer: &str, base_command: &str) -> Self {
        Self {
            base_command: base_command.to_string(),
            entries: vec![CommandEntry {
                person: issuer.to_string(),
                via: None,
                parent: None,
                children: Vec::new(),
                depth: 0,
            }],
        }
    }

    fn attach(&mut self, parent: usize, person: &str, via: Option<&str>) -> usize {
        let slot = self.entries.len();
        let depth = self.entries[parent].depth + 1;
        self.entries.push(CommandEntry {
            person: person.to_string(),
            via: via.map(str::to_string),
            parent: Some(parent),
            children: Vec::new(),
            depth,
        });
        self.entries[parent].children.push(slot);
        slot
    }

    /// All entries in the order people were commanded, issuer first
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Command the issuer handed to the target
    pub fn base_command(&self) -> &str {
        &self.base_command
    }

    /// Full command text received at `slot`
    ///
    /// Walks up to the target collecting influencers, then applies
    /// [`derive_command`] once per hop from the top down.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn command_at(&self, slot: usize) -> String {
        let entry = &self.entries[slot];
        if entry.parent.is_none() {
            return ROOT_ISSUER_COMMAND.to_string();
        }

        let mut hops = Vec::with_capacity(entry.depth);
        let mut cursor = slot;
        while let Some(via) = self.entries[cursor].via.as_deref() {
            hops.push((via, self.entries[cursor].person.as_str()));
            match self.entries[cursor].parent {
                Some(parent) => cursor = parent,
                None => break,
            }
        }

        hops.iter()
            .rev()
            .fold(self.base_command.clone(), |command, (via, person)| {
                derive_command(via, &command, person)
            })
    }

    /// Command received by `person`, if they were reached
    pub fn command_for(&self, person: &str) -> Option<String> {
        self.entries
            .iter()
            .position(|e| e.person == person)
            .map(|slot| self.command_at(slot))
    }

    /// Indented listing, two spaces per level: `- <person>: <command>`
    pub fn render(&self) -> String {
        let mut output = String::new();
        let mut stack = vec![0];

        while let Some(slot) = stack.pop() {
            let entry = &self.entries[slot];
            output.push_str(&"  ".repeat(entry.depth));
            output.push_str(&format!("- {}: {}\n", entry.person, self.command_at(slot)));
            stack.extend(entry.children.iter().rev());
        }

        output
    }

    /// Load the tree into a hierarchy store, issuer under [`ROOT_ID`]
    ///
    /// # Errors
    /// * `DuplicateId` - If a person is named `ROOT` or the issuer is also
    ///   the target
    pub fn to_hierarchy(&self) -> Result<HierarchyStore> {
        let mut store = HierarchyStore::new();
        for entry in &self.entries {
            let commander = match entry.parent {
                Some(parent) => self.entries[parent].person.as_str(),
                None => ROOT_ID,
            };
            store.insert(&entry.person, commander)?;
        }
        Ok(store)
    }
}

/// Spread `command` from `issuer` through `target` along the influence graph
///
/// The issuer and target are commanded up front; everyone else is reached
/// depth-first from the target. Uses an explicit stack of
/// `(entry, next edge)` cursors, so long influence chains do not recurse.
pub fn propagate(graph: &InfluenceGraph, issuer: &str, target: &str, command: &str) -> CommandTree {
    let mut tree = CommandTree::with_issuer(issuer, command);
    let first = tree.attach(0, target, None);

    let mut commanded: HashSet<&str> = HashSet::new();
    commanded.insert(issuer);
    commanded.insert(target);

    let mut cursors: Vec<(usize, usize)> = vec![(first, 0)];

    while let Some(&(slot, next_edge)) = cursors.last() {
        let person = tree.entries[slot].person.clone();
        let influenced = graph.influenced_by(&person);

        let Some(next) = influenced.get(next_edge) else {
            cursors.pop();
            continue;
        };
        if let Some(cursor) = cursors.last_mut() {
            cursor.1 += 1;
        }
        if !commanded.insert(next.as_str()) {
            continue;
        }

        let child = tree.attach(slot, next, Some(person.as_str()));
        cursors.push((child, 0));
    }

    tracing::debug!(
        issuer,
        target,
        commanded = tree.entries.len(),
        "command propagated"
    );

    tree
}

/// The built-in example network used by the demo
pub fn sample_influence_graph() -> InfluenceGraph {
    InfluenceGraph::new()
        .with_influences("Lelouch", &["Suzaku", "Kallen", "Schneizel"])
        .with_influences("Suzaku", &["ArmyA", "SoldierX"])
        .with_influences("Kallen", &["BlackKnights", "RebelCell1"])
        .with_influences("Schneizel", &["Minister1", "Minister2"])
        .with_influences("ArmyA", &["Civilians"])
        .with_influences("BlackKnights", &["RebelCell1", "RebelCell2"])
        .with_influences("RebelCell1", &["Civilians"])
}

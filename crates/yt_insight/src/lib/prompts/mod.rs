//! # Prompt registry
//!
//! The fixed set of instruction templates a client can pick from via `prompt_id`.
//! The table is compiled into the binary and never mutated at runtime.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub id: &'static str,
    pub instruction: &'static str,
}

static BUILTIN_TEMPLATES: &[PromptTemplate] = &[
    PromptTemplate {
        id: "summarize",
        instruction: include_str!("./summarize.txt"),
    },
    PromptTemplate {
        id: "actionable",
        instruction: include_str!("./actionable.txt"),
    },
    PromptTemplate {
        id: "quotes",
        instruction: include_str!("./quotes.txt"),
    },
    PromptTemplate {
        id: "qa",
        instruction: include_str!("./qa.txt"),
    },
];

/// Read-only lookup from prompt id to instruction text.
///
/// Lookups are exact and case-sensitive; ids are reported in table order.
#[derive(Debug, Clone, Copy)]
pub struct PromptRegistry {
    templates: &'static [PromptTemplate],
}

impl PromptRegistry {
    pub const fn new(templates: &'static [PromptTemplate]) -> Self {
        Self { templates }
    }

    /// The templates shipped with the service
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATES)
    }

    pub fn get(&self, id: &str) -> Option<&'static PromptTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        let templates = self.templates;
        templates.iter().map(|t| t.id)
    }

    /// Renders the known ids as `'a', 'b', 'c'` for client-facing messages
    pub fn quoted_ids(&self) -> String {
        let mut out = String::new();
        for (idx, id) in self.ids().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "'{id}'");
        }
        out
    }
}

//! Persona registry
//!
//! A persona bundles the system prompt used for conversation with the prompt
//! used to summarize that conversation. The table is built once at startup
//! and only ever read afterwards.

mod prompts;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Persona used when a chat request does not name one
pub const DEFAULT_PERSONA_ID: &str = "dawn";

/// A therapist persona
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Stable key used in requests (`therapist_id`)
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line tagline shown under the name
    pub subtitle: String,
    /// System instruction for conversation
    pub system_prompt: String,
    /// System instruction for summarizing a conversation
    pub summary_prompt: String,
}

impl Persona {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subtitle: impl Into<String>,
        system_prompt: impl Into<String>,
        summary_prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: subtitle.into(),
            system_prompt: system_prompt.into(),
            summary_prompt: summary_prompt.into(),
        }
    }

    /// Public view of the persona, without prompts
    pub fn summary(&self) -> PersonaSummary {
        PersonaSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            subtitle: self.subtitle.clone(),
        }
    }
}

/// What clients see when discovering personas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSummary {
    pub id: String,
    pub name: String,
    pub subtitle: String,
}

/// Immutable id → persona table with a fixed listing order
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
    index: HashMap<String, usize>,
}

impl PersonaRegistry {
    /// Build a registry from personas in listing order
    ///
    /// Ids must be unique; a repeated id keeps its first entry.
    pub fn new(personas: Vec<Persona>) -> Self {
        let mut kept = Vec::with_capacity(personas.len());
        let mut index = HashMap::with_capacity(personas.len());

        for persona in personas {
            if index.contains_key(&persona.id) {
                continue;
            }
            index.insert(persona.id.clone(), kept.len());
            kept.push(persona);
        }

        Self {
            personas: kept,
            index,
        }
    }

    /// The five built-in therapist personas
    pub fn builtin() -> Self {
        Self::new(vec![
            Persona::new(
                "dawn",
                "Dawn",
                "Every day brings new clarity",
                prompts::DAWN_PROMPT,
                prompts::DAWN_SUMMARY,
            ),
            Persona::new(
                "alex",
                "Alex",
                "Change your thoughts, change your world",
                prompts::ALEX_PROMPT,
                prompts::ALEX_SUMMARY,
            ),
            Persona::new(
                "maya",
                "Maya",
                "Understanding yesterday, transforming today",
                prompts::MAYA_PROMPT,
                prompts::MAYA_SUMMARY,
            ),
            Persona::new(
                "james",
                "James",
                "Your story matters here",
                prompts::JAMES_PROMPT,
                prompts::JAMES_SUMMARY,
            ),
            Persona::new(
                "sarah",
                "Sarah",
                "Finding peace in the present",
                prompts::SARAH_PROMPT,
                prompts::SARAH_SUMMARY,
            ),
        ])
    }

    pub fn lookup(&self, id: &str) -> Option<&Persona> {
        self.index.get(id).map(|&i| &self.personas[i])
    }

    /// Summaries of every persona, in listing order
    pub fn list_all(&self) -> Vec<PersonaSummary> {
        self.personas.iter().map(Persona::summary).collect()
    }
}

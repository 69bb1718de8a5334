//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    /// Per port+method queue of interactions, consumed front-to-back.
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = (interaction.port.clone(), interaction.method.clone());
            queues.entry(key).or_default().push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination, naming what was requested and what the
    /// cassette actually holds.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());

        let Some(queue) = self.queues.get_mut(&key) else {
            let available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            panic!(
                "cassette has no interactions for port={port:?} method={method:?} \
                 (available: [{}])",
                available.join(", ")
            );
        };

        queue.pop_front().unwrap_or_else(|| {
            panic!(
                "cassette exhausted: every interaction for port={port:?} method={method:?} \
                 has already been consumed"
            )
        })
    }
}

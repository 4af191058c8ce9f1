//! Typed calls against the words backend.
//!
//! Each method names its endpoint and returns the plain `Envelope`; use
//! `Envelope::decode` for a typed view of the data.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::transport::Transport;
use crate::types::{WordCreate, WordUpdate};

const WORDS: &str = "/words";

impl<T: Transport> ApiClient<T> {
    /// `GET /words`: all words, unlearned first.
    pub fn list_words(&self) -> Envelope {
        self.get(WORDS)
    }

    /// `POST /words`
    pub fn create_word(&self, input: &WordCreate) -> Envelope {
        self.post(WORDS, input)
    }

    /// `PUT /words/{id}`
    pub fn update_word(&self, id: i64, input: &WordUpdate) -> Envelope {
        self.put(&format!("{WORDS}/{id}"), input)
    }

    /// `DELETE /words/{id}`
    pub fn delete_word(&self, id: i64) -> Envelope {
        self.delete(&format!("{WORDS}/{id}"))
    }

    /// `PATCH /words/{id}/toggle_learned`, sent without a body.
    pub fn toggle_learned(&self, id: i64) -> Envelope {
        self.patch::<()>(&format!("{WORDS}/{id}/toggle_learned"), None)
    }

    /// `GET /words/phrasal_roots`: distinct roots of phrasal verbs.
    pub fn phrasal_roots(&self) -> Envelope {
        self.get(&format!("{WORDS}/phrasal_roots"))
    }

    /// `GET /words/phrasal/{root}`, with `root` percent-encoded.
    pub fn phrasal_verbs(&self, root: &str) -> Envelope {
        self.get(&format!("{WORDS}/phrasal/{}", urlencoding::encode(root)))
    }

    /// `GET /words/idioms`
    pub fn idioms(&self) -> Envelope {
        self.get(&format!("{WORDS}/idioms"))
    }
}

//! In-memory stand-in for the vocabulary backend's words API.
//!
//! Mirrors the backend's routes, status codes and error bodies closely
//! enough for client integration tests: 404s carry
//! `{"detail": "Word not found"}` and listings follow the backend's ordering.
//! There is no user scoping and no enrichment service; missing metadata on
//! create is filled with fixed defaults.

use std::{
    cmp::Reverse,
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub user_id: i64,
    pub word: String,
    pub translation: String,
    pub examples: Option<String>,
    pub synonyms: Option<String>,
    pub rank: i64,
    pub rank_range: String,
    pub level: String,
    pub frequency: i64,
    pub frequency_group: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_phrasal: bool,
    pub is_idiom: bool,
    pub is_learned: bool,
}

/// Create payload. Only `word` is required; the optional fields stand in
/// for the metadata the real backend obtains from its enrichment service.
#[derive(Debug, Default, Deserialize)]
pub struct CreateWord {
    pub word: String,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub examples: Option<String>,
    #[serde(default)]
    pub synonyms: Option<String>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub rank_range: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub frequency: Option<i64>,
    #[serde(default)]
    pub frequency_group: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_phrasal: Option<bool>,
    #[serde(default)]
    pub is_idiom: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWord {
    pub word: Option<String>,
    pub translation: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    words: BTreeMap<i64, Word>,
}

impl Store {
    fn insert(&mut self, input: CreateWord) -> Word {
        self.next_id += 1;
        let text = input.word.trim().to_lowercase();
        let token_count = text.split_whitespace().count();
        let kind = input
            .kind
            .unwrap_or_else(|| (if token_count > 1 { "phrase" } else { "word" }).to_string());
        let word = Word {
            id: self.next_id,
            user_id: 1,
            translation: input.translation.unwrap_or_default(),
            examples: input.examples,
            synonyms: input.synonyms,
            rank: input.rank.unwrap_or(0),
            rank_range: input.rank_range.unwrap_or_default(),
            level: input.level.unwrap_or_else(|| "A1".to_string()),
            frequency: input.frequency.unwrap_or(0),
            frequency_group: input.frequency_group.unwrap_or_else(|| "Unranked".to_string()),
            category: input.category.unwrap_or_else(|| "Uncategorized".to_string()),
            is_phrasal: input.is_phrasal.unwrap_or(kind == "phrase" && token_count == 2),
            is_idiom: input.is_idiom.unwrap_or(token_count > 2),
            kind,
            is_learned: false,
            word: text,
        };
        self.words.insert(word.id, word.clone());
        word
    }

    /// Newest first.
    fn newest_where(&self, keep: impl Fn(&Word) -> bool) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.values().filter(|w| keep(w)).cloned().collect();
        words.sort_by_key(|w| Reverse(w.id));
        words
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/words", get(list_words).post(create_word))
        .route("/words/phrasal_roots", get(phrasal_roots))
        .route("/words/phrasal/{root}", get(phrasal_verbs))
        .route("/words/idioms", get(idioms))
        .route("/words/{id}", put(update_word).delete(delete_word))
        .route("/words/{id}/toggle_learned", patch(toggle_learned))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(id: i64) -> (StatusCode, Json<Value>) {
    tracing::debug!(id, "word not found");
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Word not found"})))
}

/// Unlearned words first, newest first within each group.
async fn list_words(State(db): State<Db>) -> Json<Vec<Word>> {
    let store = db.read().await;
    let mut words: Vec<Word> = store.words.values().cloned().collect();
    words.sort_by_key(|w| (w.is_learned, Reverse(w.id)));
    Json(words)
}

async fn create_word(State(db): State<Db>, Json(input): Json<CreateWord>) -> Json<Word> {
    Json(db.write().await.insert(input))
}

/// Distinct capitalized first tokens of phrasal verbs, sorted.
async fn phrasal_roots(State(db): State<Db>) -> Json<Vec<String>> {
    let store = db.read().await;
    let roots: BTreeSet<String> = store
        .words
        .values()
        .filter(|w| w.is_phrasal)
        .filter_map(|w| w.word.split_whitespace().next())
        .map(capitalize)
        .collect();
    Json(roots.into_iter().collect())
}

async fn phrasal_verbs(State(db): State<Db>, Path(root): Path<String>) -> Json<Vec<Word>> {
    let prefix = format!("{} ", root.to_lowercase());
    let store = db.read().await;
    Json(store.newest_where(|w| w.is_phrasal && w.word.starts_with(&prefix)))
}

async fn idioms(State(db): State<Db>) -> Json<Vec<Word>> {
    Json(db.read().await.newest_where(|w| w.is_idiom))
}

async fn update_word(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateWord>,
) -> ApiResult<Word> {
    let mut store = db.write().await;
    let word = store.words.get_mut(&id).ok_or_else(|| not_found(id))?;
    if let Some(text) = input.word {
        word.word = text;
    }
    if let Some(translation) = input.translation {
        word.translation = translation;
    }
    if let Some(category) = input.category {
        word.category = category;
    }
    Ok(Json(word.clone()))
}

async fn delete_word(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult<Value> {
    let mut store = db.write().await;
    store.words.remove(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(json!({"message": "Deleted successfully"})))
}

async fn toggle_learned(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult<Word> {
    let mut store = db.write().await;
    let word = store.words.get_mut(&id).ok_or_else(|| not_found(id))?;
    word.is_learned = !word.is_learned;
    Ok(Json(word.clone()))
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(word: &str) -> CreateWord {
        CreateWord {
            word: word.to_string(),
            ..CreateWord::default()
        }
    }

    #[test]
    fn word_serializes_type_field() {
        let mut store = Store::default();
        let word = store.insert(create("Run"));
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["type"], "word");
        assert_eq!(json["word"], "run");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn insert_fills_defaults() {
        let mut store = Store::default();
        let word = store.insert(create("look up"));
        assert_eq!(word.kind, "phrase");
        assert!(word.is_phrasal);
        assert!(!word.is_idiom);
        assert_eq!(word.level, "A1");

        let idiom = store.insert(create("break the ice"));
        assert!(idiom.is_idiom);
        assert!(!idiom.is_phrasal);
    }

    #[test]
    fn explicit_metadata_wins() {
        let input: CreateWord = serde_json::from_str(
            r#"{"word":"set","type":"word","level":"B2","frequency_group":"Core 1000","rank":700}"#,
        )
        .unwrap();
        let word = Store::default().insert(input);
        assert_eq!(word.level, "B2");
        assert_eq!(word.frequency_group, "Core 1000");
        assert_eq!(word.rank, 700);
    }

    #[test]
    fn create_word_rejects_missing_word() {
        let result: Result<CreateWord, _> = serde_json::from_str(r#"{"level":"A1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_word_all_fields_optional() {
        let input: UpdateWord = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.word.is_none());
        assert!(input.translation.is_none());
        assert!(input.category.is_none());
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("lOOK"), "Look");
        assert_eq!(capitalize(""), "");
    }
}

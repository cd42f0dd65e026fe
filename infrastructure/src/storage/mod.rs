//! Conversation storage.
//!
//! Provides [`JsonFileConversationStore`], a JSON file writer that implements
//! the [`ConversationStore`](sentiment_application::ConversationStore) port.

mod json_file_store;

pub use json_file_store::JsonFileConversationStore;

//! Optional retrieval augmentation of outgoing user messages.
//!
//! A failed lookup degrades to the raw message: augmentation is a nicety and
//! must never cost the user a reply.

use async_trait::async_trait;

use super::error::LlmError;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub text: String,
}

/// Nearest-neighbour lookup over a small document set.
#[async_trait]
pub trait DocumentSearch: Send + Sync {
    /// At most `k` documents, most relevant first.
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Document>, LlmError>;
}

/// Append up to `k` relevant snippets to `message`.
pub async fn augment_message(search: &dyn DocumentSearch, message: &str, k: usize) -> String {
    if k == 0 {
        return message.to_string();
    }

    match search.search(message, k).await {
        Ok(docs) if !docs.is_empty() => {
            let snippets: Vec<String> = docs
                .iter()
                .take(k)
                .map(|d| format!("- {}", d.text.trim()))
                .collect();
            format!("{message}\n\nRelevant notes:\n{}", snippets.join("\n"))
        }
        Ok(_) => message.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Document search failed, sending message without notes");
            message.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSearch(Vec<Document>);

    #[async_trait]
    impl DocumentSearch for FixedSearch {
        async fn search(&self, _query: &str, k: usize) -> Result<Vec<Document>, LlmError> {
            Ok(self.0.iter().take(k).cloned().collect())
        }
    }

    struct BrokenSearch;

    #[async_trait]
    impl DocumentSearch for BrokenSearch {
        async fn search(&self, _query: &str, _k: usize) -> Result<Vec<Document>, LlmError> {
            Err(LlmError::Search("index file is corrupt".to_string()))
        }
    }

    fn doc(id: &str, text: &str) -> Document {
        Document {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_snippets_are_appended_in_order() {
        let search = FixedSearch(vec![
            doc("1", "Kant misplaced his keys. "),
            doc("2", "Form 17-B covers omens."),
            doc("3", "never shown"),
        ]);

        let augmented = augment_message(&search, "Where are my keys?", 2).await;
        assert_eq!(
            augmented,
            "Where are my keys?\n\nRelevant notes:\n- Kant misplaced his keys.\n- Form 17-B covers omens."
        );
    }

    #[tokio::test]
    async fn test_failed_search_degrades_to_raw_message() {
        let augmented = augment_message(&BrokenSearch, "Where are my keys?", 3).await;
        assert_eq!(augmented, "Where are my keys?");
    }

    #[tokio::test]
    async fn test_no_hits_leaves_message_alone() {
        let augmented = augment_message(&FixedSearch(vec![]), "hello", 3).await;
        assert_eq!(augmented, "hello");
    }
}

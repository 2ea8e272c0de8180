//! In-process document store.
//!
//! The non-persisted variant: two collections held in memory with
//! monotonic per-collection counters minting the ids. Like the document
//! stores it stands in for, deleting an absent id is a no-op.

use serde_json::Value;
use teamtrack_core::protocol::{Collection, Document};

pub struct MemoryStore {
    tasks: Vec<Document>,
    meetings: Vec<Document>,
    next_task_id: u64,
    next_meeting_id: u64,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            tasks: Vec::new(),
            meetings: Vec::new(),
            next_task_id: 1,
            next_meeting_id: 1,
        }
    }

    fn collection(&self, collection: Collection) -> &Vec<Document> {
        match collection {
            Collection::Tasks => &self.tasks,
            Collection::Meetings => &self.meetings,
        }
    }

    fn collection_mut(&mut self, collection: Collection) -> &mut Vec<Document> {
        match collection {
            Collection::Tasks => &mut self.tasks,
            Collection::Meetings => &mut self.meetings,
        }
    }

    fn next_id(&mut self, collection: Collection) -> String {
        let counter = match collection {
            Collection::Tasks => &mut self.next_task_id,
            Collection::Meetings => &mut self.next_meeting_id,
        };
        let id = counter.to_string();
        *counter += 1;
        id
    }

    pub fn create(&mut self, collection: Collection, fields: Value) -> String {
        let id = self.next_id(collection);
        self.collection_mut(collection).push(Document {
            id: id.clone(),
            fields,
        });
        id
    }

    pub fn list(&self, collection: Collection) -> Vec<Document> {
        self.collection(collection).clone()
    }

    /// Merge a partial field map into the stored document. Absent ids
    /// and non-object field maps are ignored.
    pub fn update(&mut self, collection: Collection, id: &str, fields: Value) {
        if let Some(doc) = self
            .collection_mut(collection)
            .iter_mut()
            .find(|d| d.id == id)
            && let Value::Object(updates) = fields
            && let Value::Object(existing) = &mut doc.fields
        {
            for (key, value) in updates {
                existing.insert(key, value);
            }
        }
    }

    pub fn delete(&mut self, collection: Collection, id: &str) {
        self.collection_mut(collection).retain(|d| d.id != id);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_mints_sequential_string_ids_per_collection() {
        let mut store = MemoryStore::new();
        assert_eq!(store.create(Collection::Tasks, json!({})), "1");
        assert_eq!(store.create(Collection::Tasks, json!({})), "2");
        assert_eq!(store.create(Collection::Meetings, json!({})), "1");
    }

    #[test]
    fn test_update_merges_fields() {
        let mut store = MemoryStore::new();
        let id = store.create(Collection::Tasks, json!({ "title": "t", "status": "pending" }));

        store.update(Collection::Tasks, &id, json!({ "status": "done" }));

        let docs = store.list(Collection::Tasks);
        assert_eq!(docs[0].fields["status"], "done");
        assert_eq!(docs[0].fields["title"], "t");
    }

    #[test]
    fn test_update_absent_id_is_a_noop() {
        let mut store = MemoryStore::new();
        store.update(Collection::Tasks, "404", json!({ "status": "done" }));
        assert!(store.list(Collection::Tasks).is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = MemoryStore::new();
        let id = store.create(Collection::Meetings, json!({ "title": "Standup" }));

        store.delete(Collection::Meetings, &id);
        assert!(store.list(Collection::Meetings).is_empty());

        // second delete of the same id succeeds silently
        store.delete(Collection::Meetings, &id);
        assert!(store.list(Collection::Meetings).is_empty());
    }
}

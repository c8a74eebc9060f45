//! Shared execution context handed around during a build

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Key-value store shared between the host and its plugins.
///
/// Values are type-erased; readers ask for the type they expect and get
/// `None` when the key is missing or holds a different type.
#[derive(Default)]
pub struct ExecutionContext {
    data: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous value under the same key
    pub fn insert<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        self.data.insert(key.into(), Box::new(value));
    }

    /// Read a value of the expected type
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.data.get(key).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("keys", &self.data.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut context = ExecutionContext::new();
        context.insert("answer", 42u32);

        assert_eq!(context.get::<u32>("answer"), Some(&42));
        assert!(context.contains_key("answer"));
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn wrong_type_returns_none() {
        let mut context = ExecutionContext::new();
        context.insert("answer", 42u32);

        assert_eq!(context.get::<String>("answer"), None);
    }

    #[test]
    fn missing_key_returns_none() {
        let context = ExecutionContext::new();
        assert!(context.is_empty());
        assert_eq!(context.get::<u32>("missing"), None);
    }

    #[test]
    fn insert_replaces_value() {
        let mut context = ExecutionContext::new();
        context.insert("name", "first".to_string());
        context.insert("name", "second".to_string());

        assert_eq!(context.get::<String>("name").map(String::as_str), Some("second"));
        assert_eq!(context.len(), 1);
    }
}

use crate::core::errors::GalleryError;

/// Data/loading/error triple for one fetch mode.
///
/// `generation` increases every time a fetch completes, successfully or not,
/// and is what derived values key their cache on.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: u64,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None, generation: 0 }
    }
}

impl<T> QueryState<T> {
    /// Marks the query in flight. Returns `false` if it already was.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Stores a completed fetch. A failure drops any previous data.
    pub fn complete(&mut self, result: Result<T, GalleryError>) {
        self.loading = false;
        self.generation += 1;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.data = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_is_not_reentrant() {
        let mut q: QueryState<Vec<u8>> = QueryState::default();
        assert!(!q.loading && q.data.is_none() && q.error.is_none());
        assert!(q.begin());
        assert!(!q.begin());
        q.complete(Ok(vec![1]));
        assert!(!q.loading);
        assert!(q.begin());
    }

    #[test]
    fn test_complete_bumps_generation_and_records_error() {
        let mut q: QueryState<Vec<u8>> = QueryState::default();
        q.begin();
        q.complete(Ok(vec![1, 2]));
        assert_eq!(q.generation, 1);
        assert_eq!(q.data, Some(vec![1, 2]));

        q.begin();
        q.complete(Err(GalleryError::Network("connection refused".to_string())));
        assert_eq!(q.generation, 2);
        assert_eq!(q.data, None);
        assert_eq!(q.error.as_deref(), Some("Network error: connection refused"));
    }
}

use serde::{Deserialize, Serialize};

use crate::joke::Joke;

/// An ordered list of [`Joke`]s returned by a single batch request.
///
/// Dereferences to `Vec<Joke>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    jokes: Vec<Joke>,
}

impl Batch {
    /// Unwraps the batch into its jokes.
    pub fn into_inner(self) -> Vec<Joke> {
        self.jokes
    }
}

impl std::ops::Deref for Batch {
    type Target = Vec<Joke>;

    fn deref(&self) -> &Self::Target {
        &self.jokes
    }
}

impl IntoIterator for Batch {
    type Item = Joke;
    type IntoIter = std::vec::IntoIter<Joke>;

    fn into_iter(self) -> Self::IntoIter {
        self.jokes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Joke;
    type IntoIter = std::slice::Iter<'a, Joke>;

    fn into_iter(self) -> Self::IntoIter {
        self.jokes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_from_a_json_array_in_order() {
        let batch: Batch = serde_json::from_str(
            r#"[
                {"id": 3, "type": "general", "setup": "s3", "punchline": "p3"},
                {"id": 1, "type": "programming", "setup": "s1", "punchline": "p1"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<u32> = batch.iter().map(Joke::id).collect();
        assert_eq!(ids, [3, 1]);
        assert_eq!(batch.into_inner().len(), 2);
    }

    #[test]
    fn single_object_is_not_a_batch() {
        let res = serde_json::from_str::<Batch>(
            r#"{"id": 3, "type": "general", "setup": "s", "punchline": "p"}"#,
        );
        assert!(res.is_err());
    }
}

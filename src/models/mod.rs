/// The [`Batch`] list type.
///
/// [`Batch`]: crate::batch::Batch
pub mod batch;

/// The [`Joke`] record and its known [`Category`] labels.
///
/// [`Joke`]: crate::joke::Joke
/// [`Category`]: crate::joke::Category
pub mod joke;

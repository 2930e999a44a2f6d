#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
//! # jokegen
//!
//! jokegen is a small wrapper library around the Official Joke API.
//!
//! This library can fetch:
//! - a random [`Joke`]
//! - a random [`Joke`] of a given [`Category`]
//! - a [`Joke`] by its ID
//! - a [`Batch`] of up to 10 jokes
//!
//! Every call is a single GET request with a fixed timeout.
//! Failures are returned as an [`Error`] and never retried.
//!
//! ## Example: Printing a knock-knock joke.
//!
//! ```rust,no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use jokegen::joke::Category;
//! use jokegen::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new();
//!     let joke = client.fetch_by_type(Category::KnockKnock).await?;
//!
//!     println!("{}", joke.format());
//!     Ok(())
//! }
//! ```
//!
//! [`Joke`]:     crate::joke::Joke
//! [`Category`]: crate::joke::Category
//! [`Batch`]:    crate::batch::Batch
//! [`Error`]:    crate::error::Error

/// Client module contains [`Client`] for requesting jokes.
pub mod client;

/// Settings and fixed constants used by the [`Client`].
pub mod config;

/// Contains [`Error`]s that can be thrown by the libary.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod models;

pub(crate) mod result;

pub use client::Client;
pub use config::Config;
pub use models::*;

//! Chat UI controller.
//!
//! Mediates between user input, the recommendation endpoint and an
//! append-only list of message bubbles.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use movie_chat::chat::{ChatController, Transcript};
//! use movie_chat::recommend::HttpRecommendClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpRecommendClient::new("http://127.0.0.1:5000/recommend".parse()?, None)?;
//! let controller = ChatController::new(Arc::new(client));
//!
//! let mut transcript = Transcript::with_input("  Star Wars (1977) ");
//! controller.send_message(&mut transcript).await;
//! assert_eq!(transcript.messages().len(), 2);
//! # Ok(())
//! # }
//! ```

mod controller;
mod message;
mod view;

pub use controller::{ChatController, FALLBACK_MESSAGE, Submission};
pub use message::{Message, Sender};
pub use view::{ChatView, Transcript};

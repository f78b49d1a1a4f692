//! # writekit
//!
//! 面向 Groq 托管模型的写作助手工具集：语法检查、改写、查重、转写摘要与图像分析。
//!
//! Writing-assistant toolkit over Groq-hosted chat models. A thin, predictable
//! orchestration layer: one gateway owns every remote call, and each assistant
//! capability is a single function with a guaranteed result shape.
//!
//! ## Core Philosophy
//!
//! - **One gateway**: all remote calls funnel through [`ModelGateway`], which
//!   owns routing, credentials and fully-specified completion parameters
//! - **Guaranteed shapes**: feature functions return [`NormalizedResult`],
//!   never `Err` and never a panic, so presentation code renders blindly
//! - **Tolerant extraction**: model output is treated as advisory; structured
//!   payloads are recovered through an ordered extraction chain with
//!   documented fallbacks
//!
//! ## Key Features
//!
//! - **Grammar check**: corrections with rule-level explanations via
//!   [`features::grammar::check_grammar`]
//! - **Chat**: persona-framed conversation with session history via
//!   [`ChatSession`]
//! - **Paraphrase**: seven styles with per-style prompt guidelines via
//!   [`features::paraphrase::paraphrase`]
//! - **Plagiarism review**: scored report with flagged sentences via
//!   [`features::plagiarism::check_plagiarism`]
//! - **Transcript summaries**: truncation-safe video summarization via
//!   [`transcript::summarize_video`]
//! - **Image analysis**: vision-model dispatch via
//!   [`features::vision::analyze_image`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use writekit::features::grammar;
//! use writekit::ModelGateway;
//!
//! #[tokio::main]
//! async fn main() -> writekit::Result<()> {
//!     // Reads GROQ_API_KEY from the environment.
//!     let gateway = ModelGateway::from_env()?;
//!
//!     let report = grammar::check_grammar(&gateway, "She dont like apples.").await;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`gateway`] | Model gateway: routing, parameters, request execution |
//! | [`features`] | One function per assistant capability |
//! | [`extract`] | Tolerant JSON extraction from model output |
//! | [`session`] | Conversation history and chat sessions |
//! | [`transcript`] | Video id extraction, transcript flattening, summarization |
//! | [`types`] | Messages, multimodal content and the result contract |
//! | [`config`] | Credential and endpoint configuration |

pub mod config;
pub mod extract;
pub mod features;
pub mod gateway;
pub mod session;
pub mod transcript;
pub mod types;

// Re-export main types for convenience
pub use gateway::{GatewayBuilder, ModelGateway, ModelId};
pub use session::{ChatSession, ConversationHistory};
pub use types::{Message, MessageContent, MessageRole, NormalizedResult};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, TransportError};

//! 类型系统模块：消息、多模态内容与标准化结果的核心数据类型。
//!
//! # Types Module
//!
//! This module defines the core type system shared by the gateway and the
//! feature functions: chat messages in the OpenAI-compatible wire shape and
//! the guaranteed-shape result contract.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and content |
//! | [`MessageRole`] | Message role (system, user, assistant) |
//! | [`MessageContent`] | Plain text or an array of typed parts |
//! | [`ContentPart`] | One segment of a multimodal message |
//! | [`NormalizedResult`] | Typed report or `{"error": ...}`, never a panic |
//!
//! ## Example
//!
//! ```rust
//! use writekit::types::{Message, NormalizedResult};
//!
//! let system = Message::system("You are a helpful assistant");
//! let user = Message::user_with_image("What is this?", "https://example.com/cat.png");
//! assert!(user.contains_image());
//!
//! let failed: NormalizedResult<String> = NormalizedResult::failed("timed out");
//! assert_eq!(failed.error(), Some("timed out"));
//! ```

pub mod message;
pub mod result;

pub use message::{data_url_from_file, ContentPart, ImageUrl, Message, MessageContent, MessageRole};
pub use result::NormalizedResult;

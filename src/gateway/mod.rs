//! 模型网关模块：所有远程补全调用的唯一通道。
//!
//! # Model Gateway
//!
//! The gateway is the only place in the crate that talks to the remote
//! completion service. It owns model routing (text vs. vision), the
//! fully-specified completion parameter defaults, request construction and
//! response parsing. Feature functions borrow a gateway and never touch HTTP
//! themselves, which keeps them trivial to exercise against a mock server.
//!
//! ## Key Pieces
//!
//! | Piece | Description |
//! |-------|-------------|
//! | [`ModelGateway`] | [`dispatch`](ModelGateway::dispatch) for text, [`dispatch_vision`](ModelGateway::dispatch_vision) for images |
//! | [`GatewayBuilder`] | explicit construction with credential, base URL, routing and timeout overrides |
//! | [`CompletionParameters`] | the complete parameter set every request carries |
//! | [`models`] | model identifiers, the reasoning family marker and the catalog |
//!
//! ## Example
//!
//! ```rust,no_run
//! use writekit::gateway::ModelGateway;
//! use writekit::types::Message;
//!
//! # async fn demo() -> writekit::Result<()> {
//! let gateway = ModelGateway::from_env()?;
//! let reply = gateway
//!     .dispatch(vec![Message::user("Say hello in French.")])
//!     .send()
//!     .await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod models;

pub use builder::GatewayBuilder;
pub use client::{
    CompletionParameters, DispatchRequest, ModelGateway, VisionRequest, DEFAULT_MAX_TOKENS,
    DEFAULT_TEMPERATURE, VISION_MAX_TOKENS,
};
pub use models::ModelId;

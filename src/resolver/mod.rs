//! URL resolution pipeline for turning Civitai share URLs into direct
//! download URLs.
//!
//! # Architecture
//!
//! - [`classify`] / [`UrlClass`] - pure classification of the input URL
//!   (pass-through rules, version-id and model-id extraction)
//! - [`CivitaiResolver`] - API lookups and the two-tier resolution algorithm
//! - [`ResolveError`] - internal failure taxonomy, collapsed to fallback
//!   URLs at the public boundary
//! - [`resolve_to_direct`] - one-shot convenience entry point
//!
//! # Example
//!
//! ```no_run
//! use civitai_resolver::resolver::resolve_to_direct;
//!
//! # async fn example() {
//! let direct = resolve_to_direct("https://civitai.com/models/999").await;
//! println!("Direct URL: {direct}");
//! # }
//! ```

mod civitai;
mod classify;
mod error;
mod http_client;

pub use civitai::{CIVITAI_ORIGIN, CivitaiResolver, resolve_to_direct};
pub use classify::{UrlClass, classify};
pub use error::ResolveError;

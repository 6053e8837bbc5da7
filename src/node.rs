//! Node surface for host node-graph runtimes.
//!
//! The host application loads nodes by class registration and owns the
//! invocation lifecycle; this module only describes the nodes (ports,
//! display names, categories) and wraps the resolver behind the [`Node`]
//! trait. Node execution shares the resolver's total contract: a node run
//! always produces a string output.

use async_trait::async_trait;
use tracing::warn;

use crate::resolver::CivitaiResolver;

/// Value kind carried by a node port. String is the only kind this crate
/// exposes today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortKind {
    /// A plain string value.
    String,
}

/// An input port on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPort {
    /// Port name as seen by the host runtime.
    pub name: &'static str,
    /// Value kind accepted by the port.
    pub kind: PortKind,
    /// Whether the host must wire or fill this input.
    pub required: bool,
    /// Whether a text widget for this input should be multiline.
    pub multiline: bool,
    /// Default widget value.
    pub default: &'static str,
}

/// An output port on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPort {
    /// Port name as seen by the host runtime.
    pub name: &'static str,
    /// Value kind produced by the port.
    pub kind: PortKind,
}

/// Registration metadata for one node class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    /// Class name the host registers the node under.
    pub class_name: &'static str,
    /// Human-facing name shown in the host UI.
    pub display_name: &'static str,
    /// Menu category the host files the node under.
    pub category: &'static str,
    /// Input ports, in declaration order.
    pub inputs: Vec<InputPort>,
    /// Output ports, in declaration order.
    pub outputs: Vec<OutputPort>,
}

/// Trait all nodes implement.
///
/// Uses `async_trait` to support dynamic dispatch via `Box<dyn Node>`
/// (Rust 2024 native async traits are not object-safe).
#[async_trait]
pub trait Node: Send + Sync {
    /// Returns the node's registration metadata.
    fn descriptor(&self) -> NodeDescriptor;

    /// Executes the node with its single string input, producing its single
    /// string output. Never errors; failures degrade inside the resolver.
    async fn run(&self, civitai_share_url: &str) -> String;
}

/// The share-URL-to-direct-URL node.
pub struct CivitaiShareToDirectUrl {
    resolver: CivitaiResolver,
}

impl CivitaiShareToDirectUrl {
    /// Creates the node with a default resolver.
    ///
    /// # Errors
    ///
    /// Returns [`crate::resolver::ResolveError`] if HTTP client construction
    /// fails.
    pub fn new() -> Result<Self, crate::resolver::ResolveError> {
        Ok(Self {
            resolver: CivitaiResolver::new()?,
        })
    }

    /// Creates the node around an existing resolver (custom API base or
    /// config path).
    #[must_use]
    pub fn with_resolver(resolver: CivitaiResolver) -> Self {
        Self { resolver }
    }
}

impl std::fmt::Debug for CivitaiShareToDirectUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CivitaiShareToDirectUrl")
            .field("resolver", &self.resolver)
            .finish()
    }
}

#[async_trait]
impl Node for CivitaiShareToDirectUrl {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            class_name: "CivitaiShareToDirectURL",
            display_name: "Civitai Share → Direct URL",
            category: "utils/url",
            inputs: vec![InputPort {
                name: "civitai_share_url",
                kind: PortKind::String,
                required: true,
                multiline: false,
                default: "",
            }],
            outputs: vec![OutputPort {
                name: "direct_url",
                kind: PortKind::String,
            }],
        }
    }

    async fn run(&self, civitai_share_url: &str) -> String {
        self.resolver.resolve(civitai_share_url).await
    }
}

/// Builds the default node registry offered to host runtimes.
///
/// A node that cannot be constructed is logged and skipped so the remaining
/// nodes stay available.
#[must_use]
pub fn build_default_node_registry() -> Vec<Box<dyn Node>> {
    let mut registry: Vec<Box<dyn Node>> = Vec::new();

    match CivitaiShareToDirectUrl::new() {
        Ok(node) => registry.push(Box::new(node)),
        Err(error) => warn!(
            error = %error,
            "Civitai share-URL node unavailable; registry built without it"
        ),
    }

    registry
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn offline_node() -> CivitaiShareToDirectUrl {
        let resolver = CivitaiResolver::with_api_base("http://127.0.0.1:1", None).unwrap();
        CivitaiShareToDirectUrl::with_resolver(resolver)
    }

    #[test]
    fn test_descriptor_class_and_display_names() {
        let node = offline_node();
        let descriptor = node.descriptor();
        assert_eq!(descriptor.class_name, "CivitaiShareToDirectURL");
        assert_eq!(descriptor.display_name, "Civitai Share → Direct URL");
        assert_eq!(descriptor.category, "utils/url");
    }

    #[test]
    fn test_descriptor_single_required_string_input() {
        let node = offline_node();
        let descriptor = node.descriptor();
        assert_eq!(descriptor.inputs.len(), 1);
        let input = &descriptor.inputs[0];
        assert_eq!(input.name, "civitai_share_url");
        assert_eq!(input.kind, PortKind::String);
        assert!(input.required);
        assert!(!input.multiline);
        assert_eq!(input.default, "");
    }

    #[test]
    fn test_descriptor_single_string_output() {
        let node = offline_node();
        let descriptor = node.descriptor();
        assert_eq!(descriptor.outputs.len(), 1);
        assert_eq!(descriptor.outputs[0].name, "direct_url");
        assert_eq!(descriptor.outputs[0].kind, PortKind::String);
    }

    #[test]
    fn test_default_registry_contains_share_node() {
        let registry = build_default_node_registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry[0].descriptor().class_name,
            "CivitaiShareToDirectURL"
        );
    }

    #[tokio::test]
    async fn test_node_run_passes_foreign_url_through() {
        let node = offline_node();
        let url = "https://example.com/file.bin";
        assert_eq!(node.run(url).await, url);
    }

    #[tokio::test]
    async fn test_node_run_empty_input_returns_empty_output() {
        let node = offline_node();
        assert_eq!(node.run("").await, "");
    }
}

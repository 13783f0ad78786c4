//! Override hooks for the extraction strategies.

use crate::infer::Shape;
use crate::parse::operation::Operation;

use super::registry::NameRegistry;

/// Context handed to the body/response transform hooks.
pub struct BodyContext<'a> {
    pub path_str: &'a str,
    pub operation: &'a Operation,
}

/// Context handed to the method name extractor hook.
pub struct NameContext<'a> {
    pub path_str: &'a str,
    pub operation: &'a Operation,
    /// Names already claimed elsewhere in the same run.
    pub in_use: &'a NameRegistry,
}

pub type BodyTransform = Box<dyn Fn(&BodyContext<'_>) -> Option<Shape>>;
pub type MethodNameExtractor = Box<dyn Fn(&NameContext<'_>) -> Option<String>>;

/// Pure override hooks, each replacing one default strategy per call.
///
/// A body hook returning `None` means "this operation has no such body";
/// the name hook returning `None` falls back to the default chain. Hook
/// results still pass through the run's name registry, so collisions are
/// broken the usual way.
#[derive(Default)]
pub struct TransformerOptions {
    pub request_body_transform: Option<BodyTransform>,
    pub response_body_transform: Option<BodyTransform>,
    pub method_name_extractor: Option<MethodNameExtractor>,
}

impl std::fmt::Debug for TransformerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformerOptions")
            .field(
                "request_body_transform",
                &self.request_body_transform.is_some(),
            )
            .field(
                "response_body_transform",
                &self.response_body_transform.is_some(),
            )
            .field("method_name_extractor", &self.method_name_extractor.is_some())
            .finish()
    }
}

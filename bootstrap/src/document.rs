use crate::{MountTarget, Result};

/// A document the application can be mounted into.
pub trait HostDocument {
    type Element;

    /// Looks up the element addressed by `target`.
    ///
    /// `Ok(None)` means the selector is fine but nothing matches it. Selectors
    /// the document cannot evaluate are an error.
    fn resolve(&self, target: &MountTarget) -> Result<Option<Self::Element>>;
}

/// A root component that knows how to render itself under an element of `D`.
///
/// The returned handle keeps the rendered tree alive; what dropping it does
/// is up to the rendering framework.
pub trait Attach<D: HostDocument + ?Sized> {
    type Handle;

    fn attach(self, document: &D, parent: D::Element) -> Result<Self::Handle>;
}

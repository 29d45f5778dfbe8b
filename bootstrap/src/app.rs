use tracing::{debug, info, warn};

use crate::Result;
use crate::document::{Attach, HostDocument};
use crate::error::{AlreadyMountedSnafu, MountTargetNotFoundSnafu};
use crate::guard::{MountGuard, PROCESS_GUARD};
use crate::target::MountTarget;

/// Root component bound to the location it will be mounted at.
#[derive(Debug, Clone)]
pub struct App<R> {
    root: R,
    target: MountTarget,
}

/// A mounted application. Owns the rendering framework's handle.
#[derive(Debug)]
pub struct Mounted<H> {
    handle: H,
    target: MountTarget,
}

impl<R> App<R> {
    pub fn new(root: R, target: MountTarget) -> Self {
        Self { root, target }
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn target(&self) -> &MountTarget {
        &self.target
    }

    /// Mounts into `document`, claiming the process-wide guard.
    pub fn mount<D>(self, document: &D) -> Result<Mounted<R::Handle>>
    where
        D: HostDocument,
        R: Attach<D>,
    {
        self.mount_with(&PROCESS_GUARD, document)
    }

    /// Resolves the target, claims `guard` and attaches the root.
    ///
    /// The document is left untouched when the target is missing or the guard
    /// has already been claimed.
    pub fn mount_with<D>(self, guard: &MountGuard, document: &D) -> Result<Mounted<R::Handle>>
    where
        D: HostDocument,
        R: Attach<D>,
    {
        if guard.is_mounted() {
            warn!(selector = %self.target, "application already mounted");
            return AlreadyMountedSnafu.fail();
        }

        info!(selector = %self.target, "mounting application");

        let Some(parent) = document.resolve(&self.target)? else {
            warn!(selector = %self.target, "mount target not found");
            return MountTargetNotFoundSnafu {
                selector: self.target.to_string(),
            }
            .fail();
        };

        guard.claim()?;

        let handle = self.root.attach(document, parent)?;
        debug!(selector = %self.target, "root component attached");

        Ok(Mounted {
            handle,
            target: self.target,
        })
    }
}

impl<H> Mounted<H> {
    pub fn target(&self) -> &MountTarget {
        &self.target
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn into_handle(self) -> H {
        self.handle
    }
}

/// Parses `target`, then mounts `root` into `document` once per process.
pub fn initialize<R, D>(root: R, target: &str, document: &D) -> Result<Mounted<R::Handle>>
where
    D: HostDocument,
    R: Attach<D>,
{
    let target = MountTarget::parse(target)?;
    App::new(root, target).mount(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::guard::MountState;
    use crate::memory::{MemoryDocument, View};

    // Host whose selector engine rejects everything.
    struct BrokenDocument;

    impl HostDocument for BrokenDocument {
        type Element = ();

        fn resolve(&self, target: &MountTarget) -> Result<Option<()>> {
            Err(Error::InvalidMountTarget {
                msg: format!("Unsupported selector: {}", target),
            })
        }
    }

    impl Attach<BrokenDocument> for View {
        type Handle = ();

        fn attach(self, _document: &BrokenDocument, _parent: ()) -> Result<()> {
            Ok(())
        }
    }

    fn hello() -> View {
        View::element("p").child(View::text("Hello"))
    }

    fn app_document() -> MemoryDocument {
        let doc = MemoryDocument::new();
        doc.append_element(doc.body(), "div", Some("app")).unwrap();
        doc
    }

    #[test]
    fn test_mount_into_app() {
        let guard = MountGuard::new();
        let doc = app_document();
        let app = App::new(hello(), MountTarget::default());

        let mounted = app.mount_with(&guard, &doc).unwrap();
        let target = doc.element_by_id("app").unwrap();

        assert!(doc.is_descendant(*mounted.handle(), target));
        assert_eq!(mounted.target().to_string(), "#app");
        assert_eq!(doc.to_html(), "<div id=\"app\"><p>Hello</p></div>");
        assert_eq!(guard.state(), MountState::Mounted);
    }

    #[test]
    fn test_mount_target_not_found() {
        let guard = MountGuard::new();
        let doc = MemoryDocument::new();
        doc.append_element(doc.body(), "div", Some("other")).unwrap();
        let before = doc.to_html();

        let res = App::new(hello(), MountTarget::default()).mount_with(&guard, &doc);
        assert!(res.is_err());
        if let Err(e) = res {
            assert!(matches!(e, Error::MountTargetNotFound { .. }));
            assert_eq!(e.to_string(), "Mount target not found: #app");
        }

        assert_eq!(doc.to_html(), before);
        assert_eq!(doc.to_html(), "<div id=\"other\"></div>");
        assert_eq!(guard.state(), MountState::Unmounted);
    }

    #[test]
    fn test_failed_mount_does_not_use_up_guard() {
        let guard = MountGuard::new();
        let doc = MemoryDocument::new();

        let res = App::new(hello(), MountTarget::default()).mount_with(&guard, &doc);
        assert!(res.is_err());

        doc.append_element(doc.body(), "div", Some("app")).unwrap();
        let res = App::new(hello(), MountTarget::default()).mount_with(&guard, &doc);
        assert!(res.is_ok());
    }

    #[test]
    fn test_second_mount_rejected() {
        let guard = MountGuard::new();
        let doc = app_document();

        let first = App::new(hello(), MountTarget::default()).mount_with(&guard, &doc);
        assert!(first.is_ok());
        let after_first = doc.to_html();
        let count = doc.node_count();

        let second = App::new(View::text("again"), MountTarget::default()).mount_with(&guard, &doc);
        assert!(matches!(second, Err(Error::AlreadyMounted)));
        assert_eq!(doc.to_html(), after_first);
        assert_eq!(doc.node_count(), count);
    }

    #[test]
    fn test_mount_by_tag_query() {
        let guard = MountGuard::new();
        let doc = MemoryDocument::new();
        let main = doc.append_element(doc.body(), "main", None).unwrap();

        let target = MountTarget::parse("main").unwrap();
        let mounted = App::new(hello(), target).mount_with(&guard, &doc).unwrap();
        assert_eq!(doc.parent(mounted.into_handle()), Some(main));
    }

    #[test]
    fn test_resolve_error_propagates() {
        let guard = MountGuard::new();
        let target = MountTarget::parse("#app[").unwrap();

        let res = App::new(hello(), target).mount_with(&guard, &BrokenDocument);
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(e.to_string(), "Invalid mount target: Unsupported selector: #app[");
        }
        assert!(!guard.is_mounted());
    }

    #[test]
    fn test_app_accessors() {
        let app = App::new(hello(), MountTarget::default());
        assert_eq!(app.root(), &hello());
        assert_eq!(app.target(), &MountTarget::default());
    }
}

use bootstrap::{Attach, HostDocument, MountTarget};
use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::IntoView;
use snafu::OptionExt;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, window};

use crate::Result;
use crate::error::DomSnafu;

/// The page's DOM as a mount host.
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn current() -> Result<Self> {
        let document = window()
            .context(DomSnafu {
                msg: "Unable to read global window var",
            })?
            .document()
            .context(DomSnafu {
                msg: "Unable to read window document",
            })?;

        Ok(Self { document })
    }
}

impl HostDocument for BrowserDocument {
    type Element = HtmlElement;

    fn resolve(&self, target: &MountTarget) -> bootstrap::Result<Option<HtmlElement>> {
        let element = match target {
            MountTarget::Id(id) => self.document.get_element_by_id(id),
            MountTarget::Query(query) => self.document.query_selector(query).map_err(|_| {
                bootstrap::Error::InvalidMountTarget {
                    msg: format!("Unable to evaluate selector: {}", query),
                }
            })?,
        };
        Ok(element.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
    }
}

/// Leptos component function used as the application root.
pub struct LeptosRoot<F>(pub F);

impl<F, N> Attach<BrowserDocument> for LeptosRoot<F>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    type Handle = UnmountHandle<N::State>;

    fn attach(
        self,
        _document: &BrowserDocument,
        parent: HtmlElement,
    ) -> bootstrap::Result<Self::Handle> {
        Ok(mount_to(parent, self.0))
    }
}

//! Banner View
//!
//! Builds the banner element, inserts it into the host page's body and
//! wires the two gestures. The element overlays an arbitrary host page, so
//! it is assembled imperatively against the document rather than rendered
//! inside a component tree. Visibility is toggled with a class on the
//! document element; the element itself stays in the DOM until the view is
//! dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::services::config::InsertPosition;
use crate::services::errors::{BannerError, BannerResult};

const SHOW_CLASS: &str = "smartbanner-show";

/// Everything the markup needs, resolved by the caller.
pub struct BannerContent<'a> {
    /// Theme key appended to the `smartbanner-` class.
    pub theme: &'a str,
    pub icon: Option<&'a str>,
    pub title: &'a str,
    pub author: &'a str,
    /// The "price - store name" line.
    pub in_store: &'a str,
    pub button: &'a str,
}

/// Banner markup as a single fragment.
pub fn banner_markup(content: &BannerContent<'_>) -> String {
    format!(
        concat!(
            r#"<div class="smartbanner-container">"#,
            r#"<a href="javascript:void(0);" class="smartbanner-close">&times;</a>"#,
            r#"<span class="smartbanner-icon" style="background-image: url({icon})"></span>"#,
            r#"<div class="smartbanner-info">"#,
            r#"<div class="smartbanner-title">{title}</div>"#,
            r#"<div>{author}</div>"#,
            r#"<span>{in_store}</span>"#,
            r#"</div>"#,
            r#"<a class="smartbanner-button">"#,
            r#"<span class="smartbanner-button-text">{button}</span>"#,
            r#"</a>"#,
            r#"</div>"#
        ),
        icon = content.icon.unwrap_or(""),
        title = content.title,
        author = content.author,
        in_store = content.in_store,
        button = content.button,
    )
}

type GestureClosure = Closure<dyn FnMut(web_sys::Event)>;

/// The mounted banner element. Dropping the view removes the element and
/// the show class from the page.
pub struct BannerView {
    document: Document,
    root: Element,
    _on_install: GestureClosure,
    _on_close: GestureClosure,
}

impl BannerView {
    /// Build the banner element, insert it into the body and wire the
    /// install/close gestures.
    pub fn create(
        content: &BannerContent<'_>,
        position: InsertPosition,
        on_install: Box<dyn FnMut()>,
        on_close: Box<dyn FnMut()>,
    ) -> BannerResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| BannerError::DocumentUnavailable {
                context: "banner creation".to_owned(),
            })?;
        let body = document.body().ok_or_else(|| BannerError::Markup {
            message: "document has no body".to_owned(),
        })?;

        let root = document
            .create_element("div")
            .map_err(|err| BannerError::Markup {
                message: format!("create_element failed: {err:?}"),
            })?;
        root.set_class_name(&format!("smartbanner smartbanner-{}", content.theme));
        root.set_inner_html(&banner_markup(content));

        match position {
            InsertPosition::Append => body.append_with_node_1(&root),
            InsertPosition::Prepend => body.prepend_with_node_1(&root),
        }
        .map_err(|err| BannerError::Markup {
            message: format!("body insertion failed: {err:?}"),
        })?;

        let on_install = wire_click(&root, ".smartbanner-button", on_install)?;
        let on_close = wire_click(&root, ".smartbanner-close", on_close)?;

        let view = Self {
            document,
            root,
            _on_install: on_install,
            _on_close: on_close,
        };
        view.show();
        Ok(view)
    }

    pub fn show(&self) {
        if let Some(root) = self.document.document_element() {
            let _ = root.class_list().add_1(SHOW_CLASS);
        }
    }

    pub fn hide(&self) {
        if let Some(root) = self.document.document_element() {
            let _ = root.class_list().remove_1(SHOW_CLASS);
        }
    }
}

impl Drop for BannerView {
    fn drop(&mut self) {
        self.hide();
        self.root.remove();
    }
}

fn wire_click(
    root: &Element,
    selector: &str,
    mut handler: Box<dyn FnMut()>,
) -> BannerResult<GestureClosure> {
    let target = root
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| BannerError::Markup {
            message: format!("missing {selector} in banner markup"),
        })?;
    let closure = Closure::wrap(
        Box::new(move |_event: web_sys::Event| handler()) as Box<dyn FnMut(web_sys::Event)>
    );
    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|err| BannerError::Markup {
            message: format!("listener wiring failed: {err:?}"),
        })?;
    Ok(closure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_carries_every_content_field() {
        let markup = banner_markup(&BannerContent {
            theme: "android",
            icon: Some("/icon.png"),
            title: "Example App",
            author: "Example Inc.",
            in_store: "FREE - In Google Play",
            button: "VIEW",
        });
        assert!(markup.contains(r#"background-image: url(/icon.png)"#));
        assert!(markup.contains(r#"<div class="smartbanner-title">Example App</div>"#));
        assert!(markup.contains("<div>Example Inc.</div>"));
        assert!(markup.contains("<span>FREE - In Google Play</span>"));
        assert!(markup.contains(r#"<span class="smartbanner-button-text">VIEW</span>"#));
    }

    #[test]
    fn markup_tolerates_a_missing_icon() {
        let markup = banner_markup(&BannerContent {
            theme: "ios",
            icon: None,
            title: "",
            author: "",
            in_store: "",
            button: "OPEN",
        });
        assert!(markup.contains("background-image: url()"));
    }
}

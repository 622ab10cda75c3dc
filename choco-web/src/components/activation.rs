use choco_catalog::SectionKind;
use yew::prelude::*;

/// A user activating a rendered catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Section that rendered the item; lookup runs against its list.
    pub kind: SectionKind,
    pub id: AttrValue,
}

/// Attributes and handlers that make a rendered item activatable
///
/// Every field is `None` for an item without an id, so it renders as a
/// plain element with no `data-id`, no button role and no handlers.
#[derive(Default)]
pub struct ItemBinding {
    pub data_id: Option<AttrValue>,
    pub role: Option<AttrValue>,
    pub tabindex: Option<AttrValue>,
    pub onclick: Option<Callback<MouseEvent>>,
    pub onkeydown: Option<Callback<KeyboardEvent>>,
}

impl ItemBinding {
    /// Enter and Space activate a focused item the same way a click does.
    #[must_use]
    pub fn new(kind: SectionKind, id: &str, on_activate: &Callback<Activation>) -> Self {
        if id.is_empty() {
            return Self::default();
        }
        let activation = Activation {
            kind,
            id: AttrValue::from(id.to_string()),
        };
        let onclick = {
            let on_activate = on_activate.clone();
            let activation = activation.clone();
            Callback::from(move |_: MouseEvent| on_activate.emit(activation.clone()))
        };
        let onkeydown = {
            let on_activate = on_activate.clone();
            let activation = activation.clone();
            Callback::from(move |e: KeyboardEvent| {
                if matches!(e.key().as_str(), "Enter" | " ") {
                    e.prevent_default();
                    on_activate.emit(activation.clone());
                }
            })
        };
        Self {
            data_id: Some(activation.id),
            role: Some(AttrValue::Static("button")),
            tabindex: Some(AttrValue::Static("0")),
            onclick: Some(onclick),
            onkeydown: Some(onkeydown),
        }
    }
}

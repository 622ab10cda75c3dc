use choco_catalog::display::DEFAULT_DESCRIPTION;
use choco_catalog::{ComicEntry, StarRow};
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

use crate::components::cover::Cover;
use crate::components::stars::StarRating;
use crate::dom::EscapeListener;

static OVERLAY_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub comic: ComicEntry,
    pub on_dismiss: Callback<()>,
}

/// Full-review overlay for a single comic.
///
/// Closes through the close button, a click on the backdrop, or Escape. The
/// Escape listener lives exactly as long as the overlay is mounted.
#[function_component(DetailOverlay)]
pub fn detail_overlay(props: &Props) -> Html {
    let overlay_id = use_state(|| OVERLAY_IDS.fetch_add(1, Ordering::Relaxed));
    let title_id = format!("review-title-{}", *overlay_id);

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((), move |()| {
            let listener = EscapeListener::register(move || on_dismiss.emit(()));
            move || drop(listener)
        });
    }

    let on_close = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let comic = &props.comic;
    html! {
        <div class="review-modal" role="dialog" aria-modal="true" aria-labelledby={title_id.clone()}>
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div class="modal-content">
                <button type="button" class="modal-close" aria-label="Close review" onclick={on_close}>
                    { "×" }
                </button>
                <div class="modal-header">
                    <Cover
                        src={comic.cover().map(|src| AttrValue::from(src.to_string()))}
                        alt={comic.title.clone()}
                        class_prefix="modal"
                    />
                    <div class="modal-info">
                        <h2 id={title_id}>{ comic.title.clone() }</h2>
                        { comic.publisher().map(|p| html! { <p class="modal-publisher">{ p.to_string() }</p> }).unwrap_or_default() }
                        { comic.writer().map(|w| html! { <p class="modal-writer">{ format!("by {w}") }</p> }).unwrap_or_default() }
                        <div class="modal-rating">
                            <StarRating row={StarRow::perfect()} class="modal-stars" />
                            <span class="modal-rating-text">{ "5.0" }</span>
                        </div>
                    </div>
                </div>
                <div class="modal-body">
                    <h3>{ "Full Review" }</h3>
                    <p class="modal-description">{ comic.description().unwrap_or(DEFAULT_DESCRIPTION).to_string() }</p>
                </div>
            </div>
        </div>
    }
}

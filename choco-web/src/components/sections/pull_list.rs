use choco_catalog::{SectionKind, StarRow};
use yew::prelude::*;

use super::ItemProps;
use crate::components::activation::ItemBinding;
use crate::components::cover::Cover;
use crate::components::stars::StarRating;

#[function_component(PullListItem)]
pub fn pull_list_item(props: &ItemProps) -> Html {
    let comic = &props.comic;
    let ItemBinding {
        data_id,
        role,
        tabindex,
        onclick,
        onkeydown,
    } = ItemBinding::new(SectionKind::PullList, &comic.id, &props.on_activate);

    html! {
        <div class="pull-comic-item" data-id={data_id} {role} {tabindex} {onclick} {onkeydown}>
            <Cover
                src={comic.cover().map(|src| AttrValue::from(src.to_string()))}
                alt={comic.title.clone()}
                class_prefix="pull-comic"
            />
            <div class="pull-comic-content">
                <h4 class="pull-comic-title">{ comic.title.clone() }</h4>
                // Whole stars only; the fraction is dropped.
                { comic.rating.map(|rating| html! {
                    <StarRating row={StarRow::from_rating(rating.trunc())} class="pull-comic-rating" />
                }).unwrap_or_default() }
                <div class="pull-comic-meta">
                    { comic.release_date.clone().map(|d| html! { <span class="pull-comic-date">{ d }</span> }).unwrap_or_default() }
                    { comic.price.clone().map(|p| html! { <span class="pull-comic-price">{ p }</span> }).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}

/// Trailing tile of the pull list; not backed by an entry.
#[function_component(AddComicTile)]
pub fn add_comic_tile() -> Html {
    html! {
        <div class="pull-comic-item add-comic-item">
            <div class="add-comic-content">
                <div class="add-comic-plus">{ "+" }</div>
                <div class="add-comic-text">{ "Add Comic" }</div>
            </div>
        </div>
    }
}

use choco_catalog::display::DEFAULT_DESCRIPTION;
use choco_catalog::{SectionKind, StarRow};
use yew::prelude::*;

use super::{ItemProps, optional_line};
use crate::components::activation::ItemBinding;
use crate::components::cover::Cover;
use crate::components::stars::StarRating;

#[function_component(StaffPickCard)]
pub fn staff_pick_card(props: &ItemProps) -> Html {
    let comic = &props.comic;
    let ItemBinding {
        data_id,
        role,
        tabindex,
        onclick,
        onkeydown,
    } = ItemBinding::new(SectionKind::StaffPicks, &comic.id, &props.on_activate);

    let price_line = [comic.price.as_deref(), comic.release_date.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" • ");
    let price_line = (!price_line.is_empty()).then_some(price_line);

    html! {
        <div class="staff-pick-card" data-id={data_id} {role} {tabindex} {onclick} {onkeydown}>
            <Cover
                src={comic.cover().map(|src| AttrValue::from(src.to_string()))}
                alt={comic.title.clone()}
                class_prefix="staff-pick"
            />
            <div class="staff-pick-content">
                <h3>{ comic.title.clone() }</h3>
                { optional_line("staff-pick-publisher", comic.publisher().map(str::to_string)) }
                { comic.rating.map(|rating| html! {
                    <div class="staff-pick-rating">
                        <span class="staff-rating">{ format!("{rating:.1}") }</span>
                        <StarRating row={StarRow::from_rating(rating)} class="staff-stars" />
                    </div>
                }).unwrap_or_default() }
                { optional_line("staff-pick-price", price_line) }
                <div class="staff-description">
                    <p>{ comic.description().unwrap_or(DEFAULT_DESCRIPTION).to_string() }</p>
                </div>
            </div>
        </div>
    }
}

use choco_catalog::SectionKind;
use yew::prelude::*;

use super::{ItemProps, optional_line};
use crate::components::activation::ItemBinding;
use crate::components::cover::Cover;

#[function_component(ComicCard)]
pub fn comic_card(props: &ItemProps) -> Html {
    let comic = &props.comic;
    let ItemBinding {
        data_id,
        role,
        tabindex,
        onclick,
        onkeydown,
    } = ItemBinding::new(SectionKind::NewReleases, &comic.id, &props.on_activate);

    let tags = if comic.tags.is_empty() {
        Html::default()
    } else {
        html! {
            <ul class="comic-tags">
                { for comic.tags.iter().map(|tag| html! { <li class="tag">{ tag.clone() }</li> }) }
            </ul>
        }
    };

    html! {
        <div class="comic-card" data-id={data_id} {role} {tabindex} {onclick} {onkeydown}>
            <Cover
                src={comic.cover().map(|src| AttrValue::from(src.to_string()))}
                alt={comic.title.clone()}
                class_prefix="comic"
            />
            <div class="comic-info">
                <h3>{ comic.title.clone() }</h3>
                { optional_line("comic-publisher", comic.publisher().map(str::to_string)) }
                { optional_line("comic-writer", comic.writer().map(|w| format!("by {w}"))) }
                { tags }
                <div class="comic-meta">
                    { comic.price.clone().map(|p| html! { <span class="price">{ p }</span> }).unwrap_or_default() }
                    { comic.release_date.clone().map(|d| html! { <span class="release-date">{ d }</span> }).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}

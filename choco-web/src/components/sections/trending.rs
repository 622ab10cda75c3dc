use choco_catalog::{ComicEntry, SectionKind, TrendingStats, review_excerpt};
use yew::prelude::*;

use crate::components::Activation;
use crate::components::activation::ItemBinding;
use crate::components::cover::Cover;
use crate::components::stars::StarRating;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub comic: ComicEntry,
    /// Rolled by the section for this render only.
    pub stats: TrendingStats,
    #[prop_or_default]
    pub on_activate: Callback<Activation>,
}

#[function_component(TrendingItem)]
pub fn trending_item(props: &Props) -> Html {
    let comic = &props.comic;
    let ItemBinding {
        data_id,
        role,
        tabindex,
        onclick,
        onkeydown,
    } = ItemBinding::new(SectionKind::Trending, &comic.id, &props.on_activate);
    let review = format!("\"{}\"", review_excerpt(comic.description()));

    html! {
        <div class="trending-item" data-id={data_id} {role} {tabindex} {onclick} {onkeydown}>
            <Cover
                src={comic.cover().map(|src| AttrValue::from(src.to_string()))}
                alt={comic.title.clone()}
                class_prefix="trending"
            />
            <div class="trending-info">
                <h3 class="comic-title">{ comic.title.clone() }</h3>
                <div class="rating-section">
                    <StarRating row={props.stats.stars()} class="stars" />
                    <span class="rating">{ props.stats.rating_label() }</span>
                </div>
                <p class="review-text">{ review }</p>
                <div class="engagement">
                    <span class="likes">{ props.stats.likes_label() }</span>
                </div>
            </div>
        </div>
    }
}

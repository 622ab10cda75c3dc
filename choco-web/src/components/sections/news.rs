use choco_catalog::NewsEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entry: NewsEntry,
}

/// News headline card. Headlines carry no comic detail, so they are not activatable.
#[function_component(NewsCard)]
pub fn news_card(props: &Props) -> Html {
    let entry = &props.entry;
    html! {
        <article class="news-card" data-id={(!entry.id.is_empty()).then(|| entry.id.clone())}>
            { entry.category.clone().map(|c| html! { <span class="news-category">{ c }</span> }).unwrap_or_default() }
            <h3 class="news-title">{ entry.title.clone() }</h3>
            { entry.summary.clone().map(|s| html! { <p class="news-summary">{ s }</p> }).unwrap_or_default() }
            { entry.date.clone().map(|d| html! { <time class="news-date">{ d }</time> }).unwrap_or_default() }
        </article>
    }
}

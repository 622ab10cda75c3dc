//! One component per page section, plus the dispatcher mounted into each
//! section container.

pub mod new_releases;
pub mod news;
pub mod pull_list;
pub mod staff_picks;
pub mod trending;

use choco_catalog::{ComicEntry, SectionContent, SectionKind, TrendingStats};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

use crate::components::Activation;
use new_releases::ComicCard;
use news::NewsCard;
use pull_list::{AddComicTile, PullListItem};
use staff_picks::StaffPickCard;
use trending::TrendingItem;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: SectionKind,
    pub content: SectionContent,
    /// Seeds the display-only trending figures for this render.
    #[prop_or_default]
    pub seed: u64,
    #[prop_or_default]
    pub on_activate: Callback<Activation>,
}

/// Everything a section container shows.
#[function_component(SectionView)]
pub fn section_view(props: &Props) -> Html {
    match &props.content {
        SectionContent::Empty(message) => html! {
            <p class="section-message">{ *message }</p>
        },
        SectionContent::Failed(message) => html! {
            <p class="section-message section-error" role="alert">{ *message }</p>
        },
        SectionContent::News(news) => html! {
            <>
                { for news.iter().map(|entry| html! { <NewsCard entry={entry.clone()} /> }) }
            </>
        },
        SectionContent::Comics(comics) => {
            comic_items(props.kind, comics, props.seed, &props.on_activate)
        }
    }
}

fn comic_items(
    kind: SectionKind,
    comics: &[ComicEntry],
    seed: u64,
    on_activate: &Callback<Activation>,
) -> Html {
    match kind {
        SectionKind::NewReleases => html! {
            <>
                { for comics.iter().map(|comic| html! {
                    <ComicCard comic={comic.clone()} on_activate={on_activate.clone()} />
                }) }
            </>
        },
        SectionKind::Trending => {
            let mut rng = SmallRng::seed_from_u64(seed);
            html! {
                <>
                    { for comics.iter().map(|comic| html! {
                        <TrendingItem
                            comic={comic.clone()}
                            stats={TrendingStats::roll(&mut rng)}
                            on_activate={on_activate.clone()}
                        />
                    }) }
                </>
            }
        }
        SectionKind::PullList => html! {
            <>
                { for comics.iter().map(|comic| html! {
                    <PullListItem comic={comic.clone()} on_activate={on_activate.clone()} />
                }) }
                <AddComicTile />
            </>
        },
        SectionKind::StaffPicks => html! {
            <>
                { for comics.iter().map(|comic| html! {
                    <StaffPickCard comic={comic.clone()} on_activate={on_activate.clone()} />
                }) }
            </>
        },
        SectionKind::News => {
            log::warn!("comic entries routed to the news section were ignored");
            Html::default()
        }
    }
}

/// Props shared by every activatable comic item.
#[derive(Properties, PartialEq, Clone)]
pub struct ItemProps {
    pub comic: ComicEntry,
    #[prop_or_default]
    pub on_activate: Callback<Activation>,
}

fn optional_line(class: &'static str, text: Option<String>) -> Html {
    text.map(|text| html! { <p {class}>{ text }</p> })
        .unwrap_or_default()
}

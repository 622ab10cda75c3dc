use choco_catalog::StarRow;
use choco_catalog::stars::{EMPTY_GLYPH, FULL_GLYPH, HALF_GLYPH};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub row: StarRow,
    pub class: &'static str,
}

#[function_component(StarRating)]
pub fn star_rating(props: &Props) -> Html {
    let glyphs = std::iter::repeat_n(("star star--full", FULL_GLYPH), usize::from(props.row.full))
        .chain(std::iter::repeat_n(
            ("star star--half", HALF_GLYPH),
            usize::from(props.row.half),
        ))
        .chain(std::iter::repeat_n(
            ("star star--empty", EMPTY_GLYPH),
            usize::from(props.row.empty),
        ));

    html! {
        <div class={props.class} aria-hidden="true">
            { for glyphs.map(|(class, glyph)| html! { <span {class}>{ glyph.to_string() }</span> }) }
        </div>
    }
}

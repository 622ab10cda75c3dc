use yew::prelude::*;

/// Shown in place of a cover that is missing or failed to load.
pub const FALLBACK_GLYPH: &str = "📚";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub src: Option<AttrValue>,
    pub alt: AttrValue,
    /// `comic` yields `comic-cover` and `comic-cover-fallback` classes.
    pub class_prefix: &'static str,
}

/// Cover image that swaps itself for the fallback glyph on load error.
#[function_component(Cover)]
pub fn cover(props: &Props) -> Html {
    let failed = use_state(|| false);
    let frame_class = format!("{}-cover", props.class_prefix);

    match props.src.as_ref().filter(|_| !*failed) {
        Some(src) => {
            let onerror = {
                let failed = failed.clone();
                Callback::from(move |_: Event| failed.set(true))
            };
            html! {
                <div class={frame_class}>
                    <img src={src.clone()} alt={props.alt.clone()} loading="lazy" {onerror} />
                </div>
            }
        }
        None => {
            let fallback_class = format!("{}-cover-fallback", props.class_prefix);
            html! {
                <div class={frame_class}>
                    <div class={fallback_class} role="img" aria-label={props.alt.clone()}>
                        { FALLBACK_GLYPH }
                    </div>
                </div>
            }
        }
    }
}

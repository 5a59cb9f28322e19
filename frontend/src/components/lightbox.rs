use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, PartialEq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: AttrValue,
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub images: Vec<LightboxImage>,
    /// Index of the image on screen; `None` keeps the lightbox closed.
    pub open: Option<usize>,
    pub on_change: Callback<Option<usize>>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let len = props.images.len();

    {
        let open = props.open;
        let on_change = props.on_change.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let Some(current) = open else {
                return;
            };
            match e.key().as_str() {
                "Escape" => on_change.emit(None),
                "ArrowRight" => on_change.emit(Some(next_index(current, len))),
                "ArrowLeft" => on_change.emit(Some(previous_index(current, len))),
                _ => {}
            }
        });
    }

    let Some(current) = props.open.filter(|i| *i < len) else {
        return html! {};
    };
    let image = &props.images[current];

    let close = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(None))
    };
    let next = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_change.emit(Some(next_index(current, len)));
        })
    };
    let previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_change.emit(Some(previous_index(current, len)));
        })
    };

    html! {
        <div class="lightbox" role="dialog" aria-modal="true" onclick={close.clone()}>
            <button class="lightbox-close" aria-label="Close" onclick={close}>{"✕"}</button>
            if len > 1 {
                <button class="lightbox-nav lightbox-prev" aria-label="Previous image" onclick={previous}>{"‹"}</button>
            }
            <figure class="lightbox-figure" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <img src={image.src.clone()} alt={image.alt.clone()} />
                <figcaption>
                    {image.alt.to_string()}
                    <span class="lightbox-count">{format!("{} / {}", current + 1, len)}</span>
                </figcaption>
            </figure>
            if len > 1 {
                <button class="lightbox-nav lightbox-next" aria-label="Next image" onclick={next}>{"›"}</button>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(next_index(0, 6), 1);
        assert_eq!(next_index(5, 6), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        assert_eq!(previous_index(3, 6), 2);
        assert_eq!(previous_index(0, 6), 5);
    }

    #[test]
    fn empty_gallery_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(0, 0), 0);
    }
}

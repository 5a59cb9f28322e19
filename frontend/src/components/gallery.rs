use yew::prelude::*;

use crate::components::lightbox::{Lightbox, LightboxImage};

#[derive(Clone, PartialEq)]
pub struct Screenshot {
    pub src: String,
    pub title: AttrValue,
    pub description: AttrValue,
    pub icon: Option<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub items: Vec<Screenshot>,
    #[prop_or(AttrValue::Static("gallery-grid"))]
    pub grid_class: AttrValue,
}

fn grid_classes(grid_class: &str) -> Classes {
    classes!(grid_class.to_string())
}

/// Grid of screenshot cards; clicking one opens it in the lightbox.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let open = use_state(|| None::<usize>);

    let images: Vec<LightboxImage> = props
        .items
        .iter()
        .map(|item| LightboxImage {
            src: item.src.clone(),
            alt: item.title.clone(),
        })
        .collect();

    let on_change = {
        let open = open.clone();
        Callback::from(move |index: Option<usize>| open.set(index))
    };

    html! {
        <>
            <div class={grid_classes(&props.grid_class)}>
                { for props.items.iter().enumerate().map(|(index, item)| {
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| open.set(Some(index)))
                    };
                    html! {
                        <article class="card screenshot-card">
                            <div class="screenshot-frame" onclick={onclick}>
                                <img src={item.src.clone()} alt={item.title.clone()} loading="lazy" />
                                <span class="expand-hint">{"Click to expand"}</span>
                            </div>
                            <div class="screenshot-text">
                                <h3>
                                    if let Some(icon) = item.icon {
                                        <span class="screenshot-icon">{icon}</span>
                                    }
                                    {item.title.to_string()}
                                </h3>
                                <p>{item.description.to_string()}</p>
                            </div>
                        </article>
                    }
                }) }
            </div>
            <Lightbox images={images} open={*open} on_change={on_change} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // yew 0.20's `Classes` has no `len()`; count via its `IntoIterator` impl.
    trait ClassesLen {
        fn len(&self) -> usize;
    }

    impl ClassesLen for Classes {
        fn len(&self) -> usize {
            self.clone().into_iter().count()
        }
    }

    #[test]
    fn grid_class_splits_into_classes() {
        let classes = grid_classes("gallery-grid two-up");
        assert!(classes.contains("gallery-grid"));
        assert!(classes.contains("two-up"));
        assert_eq!(classes.len(), 2);
    }
}

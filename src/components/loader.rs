use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or_else(|| AttrValue::from("Chargement..."))]
    pub label: AttrValue,
}

/// Spinner with a short label, shown while a view is fetching.
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    html! {
        <div class="loader" role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span>{&props.label}</span>
        </div>
    }
}

use leptos::*;

use crate::links::ShareTarget;

const SHARE_ICON_PATH: &str = "M18 16.08c-.76 0-1.44.3-1.96.77L8.91 12.7c.05-.23.09-.46.09-.7s-.04-.47-.09-.7l7.05-4.11c.54.5 1.25.81 2.04.81 1.66 0 3-1.34 3-3s-1.34-3-3-3-3 1.34-3 3c0 .24.04.47.09.7L8.04 9.81C7.5 9.31 6.79 9 6 9c-1.66 0-3 1.34-3 3s1.34 3 3 3c.79 0 1.5-.31 2.04-.81l7.12 4.16c-.05.21-.08.43-.08.65 0 1.61 1.31 2.92 2.92 2.92 1.61 0 2.92-1.31 2.92-2.92s-1.31-2.92-2.92-2.92z";
const COPY_ICON_PATH: &str = "M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm0 16H8V7h11v14z";
const CHECK_ICON_PATH: &str = "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z";

#[component]
pub(crate) fn ShareGlyph(class: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d=SHARE_ICON_PATH></path>
        </svg>
    }
}

#[component]
pub(crate) fn CopyGlyph(class: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d=COPY_ICON_PATH></path>
        </svg>
    }
}

#[component]
pub(crate) fn CheckGlyph(class: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path fill-rule="evenodd" clip-rule="evenodd" d=CHECK_ICON_PATH></path>
        </svg>
    }
}

/// Brand image for a social target; renders nothing for the copy action.
#[component]
pub(crate) fn TargetImage(target: ShareTarget, class: &'static str) -> impl IntoView {
    target.icon_src().map(|src| {
        view! { <img src=src alt=target.label() class=class /> }
    })
}

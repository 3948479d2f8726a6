use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay dialog. Clicking the backdrop or the close button closes it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-panel" role="dialog" aria-modal="true">
                <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </>
    }
}

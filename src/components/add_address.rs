use std::fmt;
use yew::prelude::*;

/// How the address dialog was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogResult {
    Dismissed,
    Added,
}

impl fmt::Display for DialogResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogResult::Dismissed => f.write_str("dismissed"),
            DialogResult::Added => f.write_str("added"),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AddressDialogProps {
    pub show: bool,
    pub on_close: Callback<DialogResult>,
}

#[function_component]
pub fn AddressDialog(props: &AddressDialogProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(DialogResult::Dismissed))
    };
    let add_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| {
            log::info!("adding address");
            cb.emit(DialogResult::Added)
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; color:#c9d1d9; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Add address"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="font-size:12px; line-height:1.4; opacity:0.7;">{"Address entry is not available yet."}</div>
            <div style="display:flex; gap:8px; justify-content:flex-end;">
                <button onclick={close_cb}>{"Cancel"}</button>
                <button onclick={add_cb} style="background:#238636; border:1px solid #2ea043; color:#fff;">{"Add"}</button>
            </div>
        </div>
    </div>}
}

#[function_component(AddAddress)]
pub fn add_address() -> Html {
    let open = use_state(|| false);

    let open_dialog = {
        let open = open.clone();
        Callback::from(move |_| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |result: DialogResult| {
            open.set(false);
            log::info!("Dialog result: {result}");
        })
    };

    html! {
        <>
            <button onclick={open_dialog}>{"Add address"}</button>
            <AddressDialog show={*open} {on_close} />
        </>
    }
}

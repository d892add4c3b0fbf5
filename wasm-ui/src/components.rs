//! UI Components for the transformation form.

use composizioni_rs::Supplier;
use yew::prelude::*;

/// Supplier selector.
#[derive(Properties, PartialEq)]
pub struct SupplierSelectProps {
    pub selected: String,
    pub on_change: Callback<String>,
}

#[function_component(SupplierSelect)]
pub fn supplier_select(props: &SupplierSelectProps) -> Html {
    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="field">
            <label for="fornitore">{ "Seleziona Fornitore:" }</label>
            <select id="fornitore" onchange={on_select}>
                <option value="" selected={props.selected.is_empty()}>{ "Seleziona un fornitore" }</option>
                { for Supplier::ALL.iter().map(|s| html! {
                    <option value={s.id()} selected={props.selected == s.id()}>
                        { s.display_name() }
                    </option>
                })}
            </select>
        </div>
    }
}

/// Single code and value inputs.
#[derive(Properties, PartialEq)]
pub struct SinglePanelProps {
    pub text: String,
    pub value: String,
    pub on_text_change: Callback<String>,
    pub on_value_change: Callback<String>,
    pub on_transform: Callback<()>,
}

#[function_component(SinglePanel)]
pub fn single_panel(props: &SinglePanelProps) -> Html {
    let on_text = {
        let on_change = props.on_text_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let on_value = {
        let on_change = props.on_value_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let on_transform_click = {
        let on_transform = props.on_transform.clone();
        Callback::from(move |_| {
            on_transform.emit(());
        })
    };

    html! {
        <div class="panel single-panel">
            <div class="field">
                <label for="input">{ "Testo da trasformare:" }</label>
                <input
                    id="input"
                    type="text"
                    value={props.text.clone()}
                    oninput={on_text}
                    placeholder={r"Es. KBFFFK22222EB, B/KFT/222, o KMT\242\B"}
                />
            </div>
            <div class="field">
                <label for="numericInput">{ "Campo numerico:" }</label>
                <input
                    id="numericInput"
                    type="text"
                    value={props.value.clone()}
                    oninput={on_value}
                    placeholder="Inserisci il valore numerico"
                />
            </div>
            <button class="run-button" onclick={on_transform_click}>
                { "Trasforma Singolo" }
            </button>
        </div>
    }
}

/// CSV upload and batch actions.
#[derive(Properties, PartialEq)]
pub struct BatchPanelProps {
    pub file_input: NodeRef,
    pub on_load: Callback<web_sys::Event>,
    pub on_transform: Callback<()>,
    pub on_download: Callback<()>,
    pub on_preview: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(BatchPanel)]
pub fn batch_panel(props: &BatchPanelProps) -> Html {
    let on_load_change = {
        let on_load = props.on_load.clone();
        Callback::from(move |e: web_sys::Event| {
            on_load.emit(e);
        })
    };

    let button = |class: &'static str, label: &'static str, cb: &Callback<()>| {
        let cb = cb.clone();
        html! {
            <button class={class} onclick={Callback::from(move |_| cb.emit(()))}>
                { label }
            </button>
        }
    };

    html! {
        <div class="panel batch-panel">
            <div class="field">
                <label for="csvFile">{ "Carica file CSV:" }</label>
                <input
                    id="csvFile"
                    type="file"
                    accept=".csv"
                    ref={props.file_input.clone()}
                    onchange={on_load_change}
                />
            </div>
            <div class="button-group">
                { button("run-button", "Trasforma CSV", &props.on_transform) }
                { button("save-button", "Scarica CSV Trasformato", &props.on_download) }
                { button("preview-button", "Visualizza CSV", &props.on_preview) }
                { button("clear-button", "Pulisci", &props.on_clear) }
            </div>
        </div>
    }
}

/// Error, result and preview display.
#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub output: String,
    pub error: Option<String>,
    pub preview: String,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    html! {
        <div class="panel output-panel">
            if let Some(error) = &props.error {
                <div class="error" role="alert">
                    { error }
                </div>
            }
            if !props.output.is_empty() {
                <div class="result">
                    <strong>{ "Risultato:" }</strong>
                    <p>{ &props.output }</p>
                </div>
            }
            if !props.preview.is_empty() {
                <div class="preview">
                    <strong>{ "Contenuto CSV Trasformato:" }</strong>
                    <pre class="record-output">{ &props.preview }</pre>
                </div>
            }
        </div>
    }
}

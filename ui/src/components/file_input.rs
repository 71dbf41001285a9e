//! Retrieve a user selected file.
use crate::{Error, Result};
use alumni_core::api::FilePart;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileInputProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,

    /// Accepted file types, e.g. `image/*`.
    #[prop_or_default]
    pub accept: Option<AttrValue>,

    #[prop_or_default]
    pub required: bool,

    #[prop_or_default]
    pub disabled: bool,

    /// Called with the selected file once read,
    /// or `None` if the selection was cleared.
    pub onchange: Callback<Option<FilePart>>,

    #[prop_or_default]
    pub onerror: Callback<Error>,
}

/// Allow the user to select a file.
/// The file's contents are read before `onchange` is called.
#[function_component(FileInput)]
pub fn file_input(props: &FileInputProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        let onerror = props.onerror.clone();

        Callback::from(move |e: Event| {
            let Some(input) = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };

            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                onchange.emit(None);
                return;
            };

            let onchange = onchange.clone();
            let onerror = onerror.clone();
            spawn_local(async move {
                match read_file(file).await {
                    Ok(file) => onchange.emit(Some(file)),
                    Err(err) => {
                        tracing::error!(?err);
                        onerror.emit(err);
                    }
                }
            });
        })
    };

    html! {
        <input
            type={"file"}
            id={props.id.clone()}
            accept={props.accept.clone()}
            required={props.required}
            disabled={props.disabled}
            {onchange} />
    }
}

/// Reads a browser file into a [`FilePart`].
pub async fn read_file(file: web_sys::File) -> Result<FilePart> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    if bytes.is_empty() && file.name().is_empty() {
        return Err(Error::NoFile);
    }

    Ok(FilePart {
        file_name: file.name(),
        mime: file.type_(),
        bytes,
    })
}

use web_sys::{DragEvent, FileList, HtmlInputElement};
use yew::prelude::*;

use crate::form::files::{FileDescriptor, FileSelection};

fn describe(list: Option<FileList>) -> Vec<FileDescriptor> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| FileDescriptor::new(file.name(), file.size() as u64, file.type_()))
        .collect()
}

fn count_caption(files: &FileSelection) -> String {
    format!("{} of {} file(s) selected:", files.len(), files.max())
}

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub files: FileSelection,
    pub accept: &'static str,
    #[prop_or("Upload Files")]
    pub label: &'static str,
    pub on_add: Callback<Vec<FileDescriptor>>,
    pub on_remove: Callback<usize>,
}

#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let dragging = use_state(|| false);

    let onchange = {
        let on_add = props.on_add.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let incoming = describe(input.files());
            // Clear so picking the same file again still fires a change.
            input.set_value("");
            if !incoming.is_empty() {
                on_add.emit(incoming);
            }
        })
    };

    let ondragenter = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            dragging.set(true);
        })
    };

    let ondragleave = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            dragging.set(false);
        })
    };

    let ondragover = Callback::from(|e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
    });

    let ondrop = {
        let dragging = dragging.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            dragging.set(false);
            let incoming = describe(e.data_transfer().and_then(|transfer| transfer.files()));
            if !incoming.is_empty() {
                on_add.emit(incoming);
            }
        })
    };

    html! {
        <div class="file-upload">
            <div
                class={classes!("file-drop", (*dragging).then_some("dragging"))}
                {ondragenter}
                {ondragleave}
                {ondragover}
                {ondrop}
            >
                <input type="file" multiple={true} accept={props.accept} class="file-input" {onchange} />
                <div class="file-drop-text">
                    <span class="file-drop-icon">{"⇪"}</span>
                    <p class="file-drop-label">{props.label}</p>
                    <p class="file-drop-hint">{"Drag & drop files here or click to browse"}</p>
                    <p class="file-drop-hint">
                        {format!("Supported formats: PDF, DOC, DOCX, PPT, PPTX, XLS, XLSX, JPG, PNG (max {} files)", props.files.max())}
                    </p>
                </div>
            </div>
            if !props.files.is_empty() {
                <div class="file-list">
                    <p class="file-count">{count_caption(&props.files)}</p>
                    <ul>
                        { for props.files.as_slice().iter().enumerate().map(|(index, file)| {
                            let on_remove = props.on_remove.clone();
                            html! {
                                <li key={format!("{}-{}", file.name, index)} class="file-item">
                                    <span>
                                        <span class="file-icon">{file.kind().icon()}</span>
                                        <span class="file-name">{&file.name}</span>
                                        <span class="file-size">{file.size_label()}</span>
                                    </span>
                                    <button
                                        type="button"
                                        class="file-remove"
                                        aria-label="Remove file"
                                        onclick={Callback::from(move |_: MouseEvent| on_remove.emit(index))}
                                    >
                                        {"✕"}
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_counts_against_the_limit() {
        let mut files = FileSelection::new(5);
        files
            .add(vec![FileDescriptor::new("brief.pdf", 10, "application/pdf"); 2])
            .expect("fits");
        assert_eq!(count_caption(&files), "2 of 5 file(s) selected:");
    }
}

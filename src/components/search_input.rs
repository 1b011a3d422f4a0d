use dioxus::prelude::*;

/// Text input whose value is read from the enclosing form on submit
#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    name: &'static str,
    placeholder: &'static str,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        input {
            class: "search-input",
            r#type: "text",
            name: props.name,
            placeholder: props.placeholder,
        }
    }
}

use crate::{ContainerTag, ContentData, ContentTag};

/// Shape of the container spawned by a drag, and its placeholder child
#[derive(Debug, Clone, PartialEq)]
pub struct BlockTemplate {
    pub tag: ContainerTag,
    pub class_list: Vec<String>,
    pub child_tag: ContentTag,
    pub child_class_list: Vec<String>,
    pub placeholder: ContentData,
}

impl Default for BlockTemplate {
    fn default() -> Self {
        Self {
            tag: ContainerTag::Div,
            class_list: classes(&[
                "bg-pink-500",
                "w-full",
                "flex",
                "items-center",
                "justify-center",
                "h-24",
            ]),
            child_tag: ContentTag::P,
            child_class_list: classes(&["w-1/2", "h-1/2", "bg-green-500"]),
            placeholder: ContentData::component("ExampleComponent"),
        }
    }
}

impl BlockTemplate {
    pub fn with_placeholder(mut self, placeholder: ContentData) -> Self {
        self.placeholder = placeholder;
        self
    }
}

fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

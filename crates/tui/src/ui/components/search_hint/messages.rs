//! Catalog entries for the panel's fixed strings.

use murmur_types::{MessageDescriptor, SearchType};

pub fn search_type_question() -> MessageDescriptor {
    MessageDescriptor::new("search_bar.usage.search_type_question", "What are you searching for?")
}

pub fn search_type_label(search_type: SearchType) -> MessageDescriptor {
    match search_type {
        SearchType::Messages => MessageDescriptor::new("search_bar.usage.search_type_messages", "Messages"),
        SearchType::Files => MessageDescriptor::new("search_bar.usage.search_type_files", "Files"),
    }
}

pub fn title(search_type: Option<SearchType>) -> MessageDescriptor {
    match search_type {
        None => MessageDescriptor::new("search_bar.usage.title", "Search options"),
        Some(SearchType::Files) => MessageDescriptor::new("search_bar.usage.title_files", "File search options"),
        Some(SearchType::Messages) => MessageDescriptor::new("search_bar.usage.title_messages", "Message search options"),
    }
}

pub fn recent_searches() -> MessageDescriptor {
    MessageDescriptor::new("search_bar.usage.recent_searches", "Recent searches")
}

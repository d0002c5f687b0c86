pub const DEMO_INDEX_HTML: &str = include_str!("../templates/demo_index.html");

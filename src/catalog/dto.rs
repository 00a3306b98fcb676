use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SessionFilter {
    pub category: Option<String>,
}

impl SessionFilter {
    /// `?category=` with an empty value filters nothing.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

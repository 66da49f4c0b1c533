#[derive(Debug, Clone, PartialEq)]
pub struct Storyboard {
    pub description: String,
    pub palette: Option<Vec<String>>,
}

impl Storyboard {
    pub fn new(description: impl Into<String>, palette: Option<Vec<String>>) -> Self {
        Self {
            description: description.into(),
            palette,
        }
    }

    pub fn prompt_for(pet_name: &str) -> String {
        format!("Create a storyboard for {pet_name} adoption video with CTA.")
    }
}

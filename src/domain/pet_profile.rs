#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetProfile {
    pub pet_name: String,
    pub bio: String,
    pub traits: Vec<String>,
    pub image_url: Option<String>,
}

impl PetProfile {
    pub fn new(pet_name: impl Into<String>, bio: impl Into<String>, traits: Vec<String>) -> Self {
        Self {
            pet_name: pet_name.into(),
            bio: bio.into(),
            traits,
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn trait_text(&self) -> String {
        if self.traits.is_empty() {
            "loving".to_string()
        } else {
            self.traits.join(", ")
        }
    }
}

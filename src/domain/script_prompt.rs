use super::PetProfile;

const SYSTEM_PROMPT: &str =
    "You are Adoptify, an adoption marketing expert writing short heartfelt scripts.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPrompt {
    pub system: String,
    pub user: String,
}

impl ScriptPrompt {
    pub fn for_pet(profile: &PetProfile) -> Self {
        let user = format!(
            "Write a 45-60 second video script for a shelter adoption reel.\n\
             Pet name: {}. Traits: {}.\n\
             Bio: {}.\n\
             Sections: Hook (0-3s), Meet + micro-backstory, 2 heart moments, CTA with shelter location.\
             Include 3 IG caption ideas and 6 hashtags inline.",
            profile.pet_name,
            profile.trait_text(),
            profile.bio,
        );

        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }
}

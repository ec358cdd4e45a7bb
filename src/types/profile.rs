use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Landscape the traveller gravitates towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Beaches,
    Mountains,
    Cities,
    Countryside,
    Desert,
    Islands,
}

impl DestinationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationType::Beaches => "beaches",
            DestinationType::Mountains => "mountains",
            DestinationType::Cities => "cities",
            DestinationType::Countryside => "countryside",
            DestinationType::Desert => "desert",
            DestinationType::Islands => "islands",
        }
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traveller archetype from the fixed catalog in [`crate::catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub traits: Vec<String>,
}

/// Answers collected on the profile step.
///
/// `age == 0` means the age has not been entered yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: i32,
    pub gender: Option<Gender>,
    pub preferred_destination_type: Option<DestinationType>,
    persona: Option<Persona>,
}

impl UserProfile {
    pub fn new(age: i32, gender: Gender, destination_type: DestinationType) -> Self {
        Self {
            age,
            gender: Some(gender),
            preferred_destination_type: Some(destination_type),
            persona: None,
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = Some(persona);
        self
    }

    pub fn persona(&self) -> Option<&Persona> {
        self.persona.as_ref()
    }

    pub(crate) fn set_persona(&mut self, persona: Persona) {
        self.persona = Some(persona);
    }

    pub fn is_beach_lover(&self) -> bool {
        self.preferred_destination_type == Some(DestinationType::Beaches)
    }
}

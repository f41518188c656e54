use super::ConstructionError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorType {
    Person,
    Organization,
    Tool,
}

impl ActorType {
    pub fn prefix(&self) -> &'static str {
        match self {
            ActorType::Person => "Person",
            ActorType::Organization => "Organization",
            ActorType::Tool => "Tool",
        }
    }
}

/// The party credited with creating, supplying or annotating something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub actor_type: ActorType,
    pub name: String,
    pub email: Option<String>,
}

impl Actor {
    /// A blank email is stored as `None`.
    pub fn new(actor_type: ActorType, name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            actor_type,
            name: name.into(),
            email: email.filter(|email| !email.trim().is_empty()),
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{}: {} ({})", self.actor_type.prefix(), self.name, email),
            None => write!(f, "{}: {}", self.actor_type.prefix(), self.name),
        }
    }
}

impl FromStr for Actor {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConstructionError::InvalidActor(s.to_string());

        let (prefix, rest) = s.split_once(':').ok_or_else(invalid)?;
        let actor_type = match prefix.trim() {
            "Person" => ActorType::Person,
            "Organization" => ActorType::Organization,
            "Tool" => ActorType::Tool,
            _ => return Err(invalid()),
        };

        let rest = rest.trim();
        let (name, email) = match rest.strip_suffix(')').and_then(|r| r.rsplit_once('(')) {
            Some((name, email)) => {
                let email = email.trim();
                (name.trim(), (!email.is_empty()).then(|| email.to_string()))
            }
            None => (rest, None),
        };

        if name.is_empty() {
            return Err(invalid());
        }
        Ok(Actor::new(actor_type, name, email))
    }
}

//! Structs, nesting, and composition in place of embedding.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    pub radius: u32,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub model: String,
    pub height: String,
    pub width: String,
    pub front_wheel: Wheel,
    pub back_wheel: Wheel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub number: u64,
}

impl User {
    fn is_identified(&self) -> bool {
        !self.name.is_empty() || self.number != 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageToSend {
    pub message: String,
    pub sender: User,
    pub recipient: User,
}

/// A message can go out if either party has a name or a number.
pub fn can_send_message(message: &MessageToSend) -> bool {
    message.recipient.is_identified() || message.sender.is_identified()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub colour: String,
}

/// A dog is an animal that barks.
///
/// The animal is an ordinary field; the accessors below forward to it so
/// callers never reach through `animal` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    animal: Animal,
    bark_sound: String,
}

impl Dog {
    pub fn new(animal: Animal, bark_sound: impl Into<String>) -> Self {
        Self {
            animal,
            bark_sound: bark_sound.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.animal.name
    }

    pub fn colour(&self) -> &str {
        &self.animal.colour
    }

    pub fn bark_sound(&self) -> &str {
        &self.bark_sound
    }

    pub fn animal(&self) -> &Animal {
        &self.animal
    }

    pub fn describe(&self) -> String {
        format!(
            "The dog has a {} colour and its bark sounds like this: {}",
            self.colour(),
            self.bark_sound
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationInfo {
    pub username: String,
    pub password: String,
}

impl AuthenticationInfo {
    pub fn basic_auth(&self) -> String {
        format!("Authorization: Basic {}:{}", self.username, self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(name: &str, number: u64) -> User {
        User {
            name: name.to_string(),
            number,
        }
    }

    #[test]
    fn test_can_send_message() {
        assert!(!can_send_message(&MessageToSend::default()));

        let by_name = MessageToSend {
            recipient: user("Kaladin", 0),
            ..Default::default()
        };
        assert!(can_send_message(&by_name));

        let by_number = MessageToSend {
            sender: user("", 148_255_510),
            ..Default::default()
        };
        assert!(can_send_message(&by_number));
    }

    #[test]
    fn test_car_holds_wheels() {
        let wheel = Wheel {
            radius: 17,
            material: "alloy".to_string(),
        };
        let car = Car {
            model: "model 3".to_string(),
            height: "1443mm".to_string(),
            width: "1849mm".to_string(),
            front_wheel: wheel.clone(),
            back_wheel: wheel,
        };
        assert_eq!(car.front_wheel, car.back_wheel);
    }

    #[test]
    fn test_dog_forwards_to_animal() {
        let dog = Dog::new(
            Animal {
                name: "Doggy".to_string(),
                colour: "brown".to_string(),
            },
            "wooof",
        );
        assert_eq!(dog.name(), "Doggy");
        assert_eq!(dog.colour(), "brown");
        assert_eq!(dog.bark_sound(), "wooof");
        assert_eq!(dog.animal().name, "Doggy");
        assert_eq!(
            dog.describe(),
            "The dog has a brown colour and its bark sounds like this: wooof"
        );
    }

    #[test]
    fn test_basic_auth() {
        let auth = AuthenticationInfo {
            username: "Google".to_string(),
            password: "12345".to_string(),
        };
        assert_eq!(auth.basic_auth(), "Authorization: Basic Google:12345");
    }
}
